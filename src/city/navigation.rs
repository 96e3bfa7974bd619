//! Navigation links between blocks and intersections.
//!
//! Block `i` of a road sits between the crossing roads `i-1` and `i` of the
//! other axis. Every block therefore links forward to the intersection with
//! crossing road `i` and backward to crossing road `i-1`, and each of those
//! intersections links back. Links only exist when the crossing index is
//! within the other axis's road list, so the first block has no backward
//! link and blocks past the last crossing road have no forward link.
//!
//! | Axis    | forward (block → intersection) | backward        |
//! |---------|--------------------------------|-----------------|
//! | street  | `⏵ east to …`                  | `⏴ west to …`   |
//! | avenue  | `⏷ south to …`                 | `⏶ north to …`  |

use std::path::Path;

use super::fs::{Result, TreeWriter};
use super::layout::Layout;
use super::naming::{Heading, block_name, intersection_name};
use crate::config::{GridConfig, Orientation};

/// Link every block with its neighbouring intersections.
pub fn link_navigation(
    grid: &GridConfig,
    layout: &Layout<'_>,
    writer: &mut TreeWriter,
) -> Result<()> {
    for orientation in Orientation::ALL {
        link_axis(grid, orientation, layout, writer)?;
    }
    Ok(())
}

fn link_axis(
    grid: &GridConfig,
    orientation: Orientation,
    layout: &Layout<'_>,
    writer: &mut TreeWriter,
) -> Result<()> {
    let crossing = grid.roads(orientation.other());
    let forward = Heading::forward(orientation);

    for road in grid.roads(orientation) {
        for (index, range) in grid.ranges(orientation).iter().enumerate() {
            let block = Block {
                path: &layout.block(orientation, road, range.label()),
                name: &block_name(range.label(), road),
            };

            if let Some(other) = crossing.get(index) {
                let (street, avenue) = street_first(orientation, road, other);
                link_pair(&block, layout, street, avenue, forward, writer)?;
            }

            if index > 0
                && let Some(other) = crossing.get(index - 1)
            {
                let (street, avenue) = street_first(orientation, road, other);
                link_pair(&block, layout, street, avenue, forward.reverse(), writer)?;
            }
        }
    }
    Ok(())
}

struct Block<'a> {
    path: &'a Path,
    name: &'a str,
}

/// Link `block` toward an intersection and the intersection back.
///
/// `heading` is the direction of travel from the block.
fn link_pair(
    block: &Block<'_>,
    layout: &Layout<'_>,
    street: &str,
    avenue: &str,
    heading: Heading,
    writer: &mut TreeWriter,
) -> Result<()> {
    let intersection = layout.intersection(street, avenue);
    let intersection_label = heading.label(&intersection_name(street, avenue));
    let block_label = heading.reverse().label(block.name);

    writer.ensure_symlink(block.path, &intersection.join(block_label))?;
    writer.ensure_symlink(&intersection, &block.path.join(intersection_label))?;
    Ok(())
}

/// Order a road and its crossing road as `(street, avenue)`.
fn street_first<'a>(
    orientation: Orientation,
    road: &'a str,
    crossing: &'a str,
) -> (&'a str, &'a str) {
    match orientation {
        Orientation::Street => (road, crossing),
        Orientation::Avenue => (crossing, road),
    }
}
