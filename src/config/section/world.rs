//! `[world]` section configuration.
//!
//! Where the city is written and how it is seeded.
//!
//! # Example
//!
//! ```toml
//! [world]
//! root = "."                  # Output root, relative to the config file
//! map = "the welcome center/basement/.../map contents"
//! seed = 42                   # Omit for a fresh random city each run
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::path::clean_path;

/// Default map location, tucked away inside the hub's basement.
pub const DEFAULT_MAP_PATH: &str = "the welcome center/basement/unmarked box/flash drive/users/home/library/application support/folder city/map contents";

/// Output location and randomness settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Output root directory.
    pub root: PathBuf,

    /// Map root (holds `horizontals/`, `verticals/`, `intersections/`),
    /// relative to `root`.
    pub map: PathBuf,

    /// Seed for object population. `None` draws one per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            map: PathBuf::from(DEFAULT_MAP_PATH),
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Absolute map root (valid once `root` has been normalized).
    ///
    /// `.` and `..` are folded lexically, so `map = "."` yields `root`.
    pub fn map_root(&self) -> PathBuf {
        clean_path(&self.root.join(&self.map))
    }
}
