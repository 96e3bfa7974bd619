//! Names of everything the generator puts on disk.
//!
//! These strings are the city's public layout; renaming anything here
//! breaks links inside previously generated trees.

use crate::config::Orientation;

/// Directory holding every intersection.
pub const INTERSECTIONS_DIR: &str = "intersections";

/// Signpost marker file: `[ {subject} ]`.
pub fn marker_name(subject: &str) -> String {
    format!("[ {subject} ]")
}

/// Per-road directory: `{road} blocks`.
pub fn road_dir_name(road: &str) -> String {
    format!("{road} blocks")
}

/// Block directory: `{range} {road}`.
pub fn block_name(range: &str, road: &str) -> String {
    format!("{range} {road}")
}

/// Intersection directory: `{street} & {avenue}`.
pub fn intersection_name(street: &str, avenue: &str) -> String {
    format!("{street} & {avenue}")
}

// ============================================================================
// Heading
// ============================================================================

/// Compass direction of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    pub const fn glyph(self) -> char {
        match self {
            Self::North => '⏶',
            Self::South => '⏷',
            Self::East => '⏵',
            Self::West => '⏴',
        }
    }

    pub const fn word(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Direction toward the next range index along a road.
    pub const fn forward(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Street => Self::East,
            Orientation::Avenue => Self::South,
        }
    }

    /// Link label, e.g. `⏴ west to 1600-1699 Oak St`.
    pub fn label(self, destination: &str) -> String {
        format!("{} {} to {}", self.glyph(), self.word(), destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_names() {
        assert_eq!(marker_name("1600-1699 Oak St"), "[ 1600-1699 Oak St ]");
        assert_eq!(road_dir_name("Oak St"), "Oak St blocks");
        assert_eq!(block_name("1600-1699", "Oak St"), "1600-1699 Oak St");
        assert_eq!(intersection_name("Oak St", "Ocean Ave"), "Oak St & Ocean Ave");
    }

    #[test]
    fn test_heading_labels() {
        assert_eq!(
            Heading::West.label("1600-1699 Oak St"),
            "⏴ west to 1600-1699 Oak St"
        );
        assert_eq!(
            Heading::East.label("Oak St & Ocean Ave"),
            "⏵ east to Oak St & Ocean Ave"
        );
        assert_eq!(Heading::North.label("x"), "⏶ north to x");
        assert_eq!(Heading::South.label("x"), "⏷ south to x");
    }

    #[test]
    fn test_heading_forward_and_reverse() {
        assert_eq!(Heading::forward(Orientation::Street), Heading::East);
        assert_eq!(Heading::forward(Orientation::Avenue), Heading::South);
        assert_eq!(Heading::East.reverse(), Heading::West);
        assert_eq!(Heading::North.reverse(), Heading::South);
    }
}
