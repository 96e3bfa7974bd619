//! `[[locations]]` configuration.
//!
//! Each location is a building anchored on one grid cell. Its interior is
//! described by a list of object specs that are expanded at generation time.
//!
//! # Example
//!
//! ```toml
//! [[locations]]
//! name = "the observatory"
//! anchor = { street = "Oak St", range = "2200-2299" }
//! address = "2222 Oak St - the observatory"
//! exit = "exit to 2200-2299 Oak St"
//!
//! [[locations.objects]]
//! path = "dome/telescope"
//!
//! [[locations.objects]]
//! path = "archive/star chart"
//! min = 10
//! max = 30
//! chance = 0.25
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Anchor
// ============================================================================

/// The grid cell a building is attached to.
///
/// Written as an inline table: `{ street, range }` or `{ avenue, range }`
/// for a block, `{ street, avenue }` for an intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Anchor {
    Intersection { street: String, avenue: String },
    StreetBlock { street: String, range: String },
    AvenueBlock { avenue: String, range: String },
}

// ============================================================================
// ObjectSpec
// ============================================================================

/// Template for zero or more generated files inside a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// File path relative to the building, without numeric suffix.
    pub path: String,

    /// First index (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Last index. Falls back to `count`, then 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Shorthand for `max` when `min` is left at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Probability in `[0, 1]` that each index is placed (default 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,

    /// Text written into each created file.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,

    /// Where an item goes when its draw fails. Skipped if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl ObjectSpec {
    /// A single, always-present object.
    #[cfg(test)]
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            min: None,
            max: None,
            count: None,
            chance: None,
            contents: String::new(),
            fallback: None,
        }
    }

    pub fn effective_min(&self) -> u32 {
        self.min.unwrap_or(1)
    }

    pub fn effective_max(&self) -> u32 {
        self.max.or(self.count).unwrap_or(1)
    }

    pub fn effective_chance(&self) -> f64 {
        self.chance.unwrap_or(1.0)
    }

    /// Multi-item specs get a `_NNN` suffix on every file.
    pub fn is_numbered(&self) -> bool {
        self.effective_max() > 1
    }
}

// ============================================================================
// LocationTemplate
// ============================================================================

/// A named building tied to exactly one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTemplate {
    pub name: String,

    pub anchor: Anchor,

    /// `"<number> <road> - <name>"`; also the building's directory name.
    pub address: String,

    /// Name of the link inside the building leading back to the cell.
    pub exit: String,

    /// Marker file name. Defaults to `[ {name} ]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Optional link inside the cell leading into the building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,

    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

impl LocationTemplate {
    pub fn marker_name(&self) -> String {
        self.marker
            .clone()
            .unwrap_or_else(|| crate::city::naming::marker_name(&self.name))
    }
}
