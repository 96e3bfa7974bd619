//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// An anchor names a road or range that is not part of the grid.
    #[error("`{location}` is anchored on unknown {what} `{name}`")]
    Anchor {
        location: String,
        what: &'static str,
        name: String,
    },

    /// The hub must be a single directory directly under the output root.
    #[error("hub name `{0}` must be a single directory name")]
    HubName(String),
}

impl ConfigError {
    pub fn unknown(location: &str, what: &'static str, name: &str) -> Self {
        Self::Anchor {
            location: location.to_string(),
            what,
            name: name.to_string(),
        }
    }
}
