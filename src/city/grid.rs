//! Grid topology: block and intersection directories.
//!
//! Each axis is paved in its own pass, then every street is crossed with
//! every avenue. For S streets, A avenues, R street ranges and Q avenue
//! ranges this yields S×R + A×Q blocks and S×A intersections, each holding
//! a single signpost marker.

use std::path::Path;

use super::fs::{Result, TreeWriter};
use super::layout::Layout;
use super::naming::{block_name, intersection_name, marker_name};
use crate::config::{GridConfig, Orientation};
use crate::debug;

/// Create every block and intersection of the grid.
pub fn build_grid(grid: &GridConfig, layout: &Layout<'_>, writer: &mut TreeWriter) -> Result<()> {
    for orientation in Orientation::ALL {
        pave_axis(grid, orientation, layout, writer)?;
    }
    build_intersections(grid, layout, writer)
}

/// Blocks of every road on one axis.
fn pave_axis(
    grid: &GridConfig,
    orientation: Orientation,
    layout: &Layout<'_>,
    writer: &mut TreeWriter,
) -> Result<()> {
    for road in grid.roads(orientation) {
        writer.ensure_directory(&layout.road_dir(orientation, road))?;

        for range in grid.ranges(orientation) {
            let block = layout.block(orientation, road, range.label());
            build_cell(&block, &block_name(range.label(), road), writer)?;
        }
        debug!("grid"; "paved {} ({})", road, orientation);
    }
    Ok(())
}

/// One intersection per street × avenue pair.
fn build_intersections(
    grid: &GridConfig,
    layout: &Layout<'_>,
    writer: &mut TreeWriter,
) -> Result<()> {
    for street in &grid.streets {
        for avenue in &grid.avenues {
            let path = layout.intersection(street, avenue);
            build_cell(&path, &intersection_name(street, avenue), writer)?;
        }
    }
    Ok(())
}

/// Directory plus its signpost marker.
fn build_cell(path: &Path, name: &str, writer: &mut TreeWriter) -> Result<()> {
    writer.ensure_directory(path)?;
    writer.ensure_file(&path.join(marker_name(name)), "")?;
    Ok(())
}
