//! City configuration management for `city.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── grid       # [grid]
//! │   ├── hub        # [hub]
//! │   ├── location   # [[locations]]
//! │   └── world      # [world]
//! ├── error          # ConfigError
//! ├── util           # Config lookup, root resolution
//! └── mod.rs         # CityConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                          |
//! |-----------------|--------------------------------------------------|
//! | `[world]`       | Output root, map location, seed                  |
//! | `[grid]`        | Streets, avenues, block ranges                   |
//! | `[hub]`         | The welcome center (optional)                    |
//! | `[[locations]]` | Buildings anchored on blocks and intersections   |

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{
    Anchor, BlockRange, GridConfig, HubConfig, LocationTemplate, ObjectSpec, Orientation,
    WorldConfig,
};

use crate::{
    city::{atlas, layout},
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::clean_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, resolve_root};

/// Built-in reference city, written by `folder-city init`.
pub const DEFAULT_CONFIG: &str = include_str!("../embed/city.toml");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing city.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Output location and seed
    #[serde(default)]
    pub world: WorldConfig,

    /// Grid topology
    #[serde(default)]
    pub grid: GridConfig,

    /// The welcome center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<HubConfig>,

    /// Buildings
    #[serde(default)]
    pub locations: Vec<LocationTemplate>,
}

impl CityConfig {
    /// Load configuration for the current command.
    ///
    /// Searches upward from cwd for the config file. Without one, the
    /// built-in city is used and rooted at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, base) = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                (config, base)
            }
            None => {
                log!(
                    "config";
                    "'{}' not found, using the built-in city",
                    cli.config.display()
                );
                (Self::builtin()?, cwd)
            }
        };

        config.apply_command_options(cli);
        config.finalize(&base);
        config.validate()?;
        Ok(config)
    }

    /// The embedded reference city.
    pub fn builtin() -> Result<Self> {
        Self::from_str(DEFAULT_CONFIG).context("built-in city config is invalid")
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Output root directory.
    pub fn root(&self) -> &Path {
        &self.world.root
    }

    /// Directory holding `horizontals/`, `verticals/` and `intersections/`.
    ///
    /// May equal the output root (`map = "."`), in which case reset only
    /// touches the three generated children.
    pub fn map_root(&self) -> PathBuf {
        self.world.map_root()
    }

    /// Hub directory, if a hub is configured.
    pub fn hub_root(&self) -> Option<PathBuf> {
        self.hub
            .as_ref()
            .map(|hub| clean_path(&self.world.root.join(&hub.name)))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.world.root, args.root.as_ref());
        if args.seed.is_some() {
            self.world.seed = args.seed;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the output root against the config file's directory.
    fn finalize(&mut self, base: &Path) {
        self.world.root = clean_path(&resolve_root(&self.world.root, base));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check what generation depends on.
    ///
    /// Anchors must name roads and ranges of the grid. Addresses the atlas
    /// cannot place only produce a warning.
    pub fn validate(&self) -> Result<()> {
        if let Some(hub) = &self.hub {
            if !is_plain_name(&hub.name) {
                return Err(ConfigError::HubName(hub.name.clone()).into());
            }
            layout::resolve_anchor(&self.grid, &hub.name, &hub.anchor)?;
            self.warn_unplaceable(&hub.name, &hub.address);
        }

        for location in &self.locations {
            layout::resolve_anchor(&self.grid, &location.name, &location.anchor)?;
            self.warn_unplaceable(&location.name, &location.address);
        }

        Ok(())
    }

    fn warn_unplaceable(&self, name: &str, address: &str) {
        if atlas::parse_address(address).is_none() {
            log!(
                "warning";
                "address of `{}` is not `<number> <road> - <name>`: {}",
                name,
                address
            );
        }
    }
}

/// A single directory name: not empty, no separators, not `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CityConfig {
    let (parsed, ignored) = CityConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A small two-by-two city rooted at `root`.
#[cfg(test)]
pub fn test_small_city(root: &Path) -> CityConfig {
    let mut config = test_parse_config(
        r#"
[world]
map = "map"

[grid]
streets = ["Oak St", "Pine St"]
avenues = ["Ocean Ave", "Mission Ave"]
street_ranges = ["100-199"]
avenue_ranges = ["100-199"]
"#,
    );
    config.world.root = root.to_path_buf();
    config
}

// ============================================================================
// tests
// ============================================================================
