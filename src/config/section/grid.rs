//! `[grid]` section configuration.
//!
//! Road names and numeric block ranges for both axes.
//!
//! # Example
//!
//! ```toml
//! [grid]
//! streets = ["Oak St", "Pine St"]
//! avenues = ["Ocean Ave", "Mission Ave"]
//! street_ranges = ["1600-1699", "1700-1799"]
//! avenue_ranges = ["100-199", "200-299"]
//! ```
//!
//! Range `i` of an axis is the i-th block along every road of that axis.
//! Ranges are expected to be increasing and non-overlapping; this is not checked.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Orientation
// ============================================================================

/// The two road axes of the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs horizontally (east-west).
    Street,
    /// Runs vertically (north-south).
    Avenue,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Street, Orientation::Avenue];

    /// Directory holding every road of this axis.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Street => "horizontals",
            Self::Avenue => "verticals",
        }
    }

    /// The crossing axis.
    pub const fn other(self) -> Self {
        match self {
            Self::Street => Self::Avenue,
            Self::Avenue => Self::Street,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Street => "street",
            Self::Avenue => "avenue",
        })
    }
}

// ============================================================================
// BlockRange
// ============================================================================

/// A numeric address range such as `1600-1699`.
///
/// The label is kept verbatim because it becomes part of directory names.
/// Bounds are parsed on demand and only matter for address placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRange(String);

impl BlockRange {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Parse `low-high`. Returns `None` for anything else.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        let (low, high) = self.0.split_once('-')?;
        let low = low.trim().parse().ok()?;
        let high = high.trim().parse().ok()?;
        Some((low, high))
    }

    /// Whether `number` falls inside the (inclusive) bounds.
    pub fn contains(&self, number: u32) -> bool {
        self.bounds()
            .is_some_and(|(low, high)| low <= number && number <= high)
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockRange {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

// ============================================================================
// GridConfig
// ============================================================================

const STREETS: [&str; 7] = [
    "Birch St",
    "Chestnut St",
    "Oak St",
    "Juniper St",
    "Pine St",
    "Maple St",
    "Willow St",
];

const AVENUES: [&str; 7] = [
    "Ocean Ave",
    "California Dr",
    "Mission Ave",
    "Hollow Dr",
    "Sunset Ln",
    "Broad Way",
    "Market Ave",
];

const STREET_RANGES: [&str; 7] = [
    "1600-1699",
    "1700-1799",
    "1800-1899",
    "1900-1999",
    "2000-2099",
    "2100-2199",
    "2200-2299",
];

const AVENUE_RANGES: [&str; 7] = [
    "100-199", "200-299", "300-399", "400-499", "500-599", "600-699", "700-799",
];

/// Grid topology: ordered road names and block ranges per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub streets: Vec<String>,
    pub avenues: Vec<String>,
    pub street_ranges: Vec<BlockRange>,
    pub avenue_ranges: Vec<BlockRange>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            streets: STREETS.iter().map(|s| s.to_string()).collect(),
            avenues: AVENUES.iter().map(|s| s.to_string()).collect(),
            street_ranges: STREET_RANGES.iter().copied().map(BlockRange::from).collect(),
            avenue_ranges: AVENUE_RANGES.iter().copied().map(BlockRange::from).collect(),
        }
    }
}

impl GridConfig {
    /// Road names of one axis, in order.
    pub fn roads(&self, orientation: Orientation) -> &[String] {
        match orientation {
            Orientation::Street => &self.streets,
            Orientation::Avenue => &self.avenues,
        }
    }

    /// Block ranges of one axis, in order.
    pub fn ranges(&self, orientation: Orientation) -> &[BlockRange] {
        match orientation {
            Orientation::Street => &self.street_ranges,
            Orientation::Avenue => &self.avenue_ranges,
        }
    }

    /// Which axis a road belongs to. Streets win if a name is on both lists.
    pub fn orientation_of(&self, road: &str) -> Option<Orientation> {
        Orientation::ALL
            .into_iter()
            .find(|&o| self.roads(o).iter().any(|r| r == road))
    }

    /// Look up a range of one axis by its label.
    pub fn find_range(&self, orientation: Orientation, label: &str) -> Option<&BlockRange> {
        self.ranges(orientation).iter().find(|r| r.label() == label)
    }
}
