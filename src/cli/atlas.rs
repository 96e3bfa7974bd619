//! Atlas command: export the map data as JSON.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::city::atlas::Atlas;
use crate::cli::AtlasArgs;
use crate::config::CityConfig;
use crate::log;
use crate::utils::plural_count;

/// Serialize the atlas of `config` to stdout or `--output`.
///
/// Stdout carries nothing but the JSON document.
pub fn run_atlas(args: &AtlasArgs, config: &CityConfig) -> Result<()> {
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        let count = write_atlas(&mut file, config, args.pretty)?;
        log!(
            "atlas";
            "wrote {} to {}",
            plural_count(count, "location"),
            output_path.display()
        );
    } else {
        write_atlas(&mut io::stdout().lock(), config, args.pretty)?;
    }

    Ok(())
}

/// Write the atlas document to `out`, returning the number of locations.
fn write_atlas(out: &mut impl Write, config: &CityConfig, pretty: bool) -> Result<usize> {
    let atlas = Atlas::new(config);

    for record in atlas.unplaced() {
        log!("warning"; "cannot place `{}` ({})", record.name, record.address);
    }

    writeln!(out, "{}", render(&atlas, pretty)?)?;
    out.flush()?;
    Ok(atlas.locations.len())
}

fn render(atlas: &Atlas<'_>, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(atlas)?
    } else {
        serde_json::to_string(atlas)?
    };
    Ok(formatted)
}
