//! Init command: write the reference config.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::DEFAULT_CONFIG;
use crate::log;

/// Write the built-in city config to `path`.
///
/// Refuses to overwrite an existing file. With `dry_run` the config is
/// printed to stdout instead.
pub fn init_city(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{DEFAULT_CONFIG}");
        return Ok(());
    }

    if path.exists() {
        bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("init"; "wrote {}, run `folder-city build` next", path.display());
    Ok(())
}
