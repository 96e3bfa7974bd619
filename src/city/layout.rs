//! Mapping from grid cells to paths under the map root.
//!
//! ```text
//! map contents/
//! ├── horizontals/{street} blocks/{range} {street}/
//! ├── verticals/{avenue} blocks/{range} {avenue}/
//! └── intersections/{street} & {avenue}/
//! ```

use std::path::{Path, PathBuf};

use super::naming::{INTERSECTIONS_DIR, block_name, intersection_name, road_dir_name};
use crate::config::{Anchor, ConfigError, GridConfig, Orientation};

/// A resolved grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Block {
        orientation: Orientation,
        road: &'a str,
        range: &'a str,
    },
    Intersection {
        street: &'a str,
        avenue: &'a str,
    },
}

impl Cell<'_> {
    /// Directory name of the cell, also used for its marker.
    pub fn name(&self) -> String {
        match *self {
            Cell::Block { road, range, .. } => block_name(range, road),
            Cell::Intersection { street, avenue } => intersection_name(street, avenue),
        }
    }
}

/// Paths of every cell, relative to a fixed map root.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    root: &'a Path,
}

impl<'a> Layout<'a> {
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// `horizontals/`, `verticals/` and `intersections/`.
    pub fn top_level_dirs(&self) -> [PathBuf; 3] {
        [
            self.root.join(Orientation::Street.dir_name()),
            self.root.join(Orientation::Avenue.dir_name()),
            self.root.join(INTERSECTIONS_DIR),
        ]
    }

    /// `horizontals/{road} blocks` or `verticals/{road} blocks`.
    pub fn road_dir(&self, orientation: Orientation, road: &str) -> PathBuf {
        self.root
            .join(orientation.dir_name())
            .join(road_dir_name(road))
    }

    pub fn block(&self, orientation: Orientation, road: &str, range: &str) -> PathBuf {
        self.road_dir(orientation, road).join(block_name(range, road))
    }

    pub fn intersection(&self, street: &str, avenue: &str) -> PathBuf {
        self.root
            .join(INTERSECTIONS_DIR)
            .join(intersection_name(street, avenue))
    }

    pub fn cell(&self, cell: &Cell<'_>) -> PathBuf {
        match *cell {
            Cell::Block {
                orientation,
                road,
                range,
            } => self.block(orientation, road, range),
            Cell::Intersection { street, avenue } => self.intersection(street, avenue),
        }
    }
}

/// Check an anchor against the grid and turn it into a cell.
///
/// `owner` names the building in error messages.
pub fn resolve_anchor<'a>(
    grid: &GridConfig,
    owner: &str,
    anchor: &'a Anchor,
) -> Result<Cell<'a>, ConfigError> {
    let require_road = |orientation: Orientation, road: &str| {
        if grid.roads(orientation).iter().any(|r| r == road) {
            Ok(())
        } else {
            Err(ConfigError::unknown(owner, road_kind(orientation), road))
        }
    };
    let require_range = |orientation: Orientation, range: &str| {
        grid.find_range(orientation, range)
            .map(|_| ())
            .ok_or_else(|| ConfigError::unknown(owner, range_kind(orientation), range))
    };

    match anchor {
        Anchor::Intersection { street, avenue } => {
            require_road(Orientation::Street, street.as_str())?;
            require_road(Orientation::Avenue, avenue.as_str())?;
            Ok(Cell::Intersection {
                street: street.as_str(),
                avenue: avenue.as_str(),
            })
        }
        Anchor::StreetBlock { street, range } => {
            require_road(Orientation::Street, street.as_str())?;
            require_range(Orientation::Street, range.as_str())?;
            Ok(Cell::Block {
                orientation: Orientation::Street,
                road: street.as_str(),
                range: range.as_str(),
            })
        }
        Anchor::AvenueBlock { avenue, range } => {
            require_road(Orientation::Avenue, avenue.as_str())?;
            require_range(Orientation::Avenue, range.as_str())?;
            Ok(Cell::Block {
                orientation: Orientation::Avenue,
                road: avenue.as_str(),
                range: range.as_str(),
            })
        }
    }
}

const fn road_kind(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Street => "street",
        Orientation::Avenue => "avenue",
    }
}

const fn range_kind(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Street => "street range",
        Orientation::Avenue => "avenue range",
    }
}
