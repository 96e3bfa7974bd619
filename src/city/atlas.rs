//! The city atlas: what a map renderer needs to know.
//!
//! Addresses have the form `"<number> <road> - <name>"`. The number picks a
//! block range on the road's axis and the road picks a grid line, which
//! together place a building on a plot where streets run along `y = index`
//! and avenues along `x = index`.

use serde::Serialize;

use crate::config::{BlockRange, CityConfig, GridConfig, Orientation};

/// A named building and its address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord<'a> {
    pub name: &'a str,
    pub address: &'a str,
    /// Plot position, absent when the address cannot be placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<MapPoint>,
}

/// Plot position of an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    pub axis: Orientation,
}

/// Road and range lists plus every building, hub last.
#[derive(Debug, Clone, Serialize)]
pub struct Atlas<'a> {
    pub streets: &'a [String],
    pub avenues: &'a [String],
    pub street_ranges: &'a [BlockRange],
    pub avenue_ranges: &'a [BlockRange],
    pub locations: Vec<LocationRecord<'a>>,
}

impl<'a> Atlas<'a> {
    pub fn new(config: &'a CityConfig) -> Self {
        let grid = &config.grid;
        let hub = config
            .hub
            .iter()
            .map(|hub| (hub.name.as_str(), hub.address.as_str()));
        let locations = config
            .locations
            .iter()
            .map(|loc| (loc.name.as_str(), loc.address.as_str()))
            .chain(hub)
            .map(|(name, address)| LocationRecord {
                name,
                address,
                point: parse_address(address).and_then(|(n, road)| place(grid, n, road)),
            })
            .collect();

        Self {
            streets: &grid.streets,
            avenues: &grid.avenues,
            street_ranges: &grid.street_ranges,
            avenue_ranges: &grid.avenue_ranges,
            locations,
        }
    }

    /// Records without a plot position.
    pub fn unplaced(&self) -> impl Iterator<Item = &LocationRecord<'a>> {
        self.locations.iter().filter(|r| r.point.is_none())
    }
}

/// Split `"2222 Oak St - the observatory"` into `(2222, "Oak St")`.
pub fn parse_address(address: &str) -> Option<(u32, &str)> {
    let main = address.split(" - ").next()?.trim();
    let (number, road) = main.split_once(char::is_whitespace)?;
    let number = number.parse().ok()?;
    let road = road.trim();
    (!road.is_empty()).then_some((number, road))
}

/// Index of the first range containing `number`.
pub fn range_index(number: u32, ranges: &[BlockRange]) -> Option<usize> {
    ranges.iter().position(|range| range.contains(number))
}

/// Plot position of `number` on `road`.
///
/// The block index is shifted down by one (except for the first block) so
/// that block `i` lands between crossing roads `i-1` and `i`.
pub fn place(grid: &GridConfig, number: u32, road: &str) -> Option<MapPoint> {
    let axis = grid.orientation_of(road)?;
    let line = grid.roads(axis).iter().position(|r| r == road)?;
    let ranges = grid.ranges(axis);
    let block = range_index(number, ranges)?;
    let (low, high) = ranges[block].bounds()?;

    let relative = if high > low {
        f64::from(number - low) / f64::from(high - low)
    } else {
        0.0
    };
    let along = block.saturating_sub(1) as f64 + relative;
    let line = line as f64;

    let (x, y) = match axis {
        Orientation::Street => (along, line),
        Orientation::Avenue => (line, along),
    };
    Some(MapPoint { x, y, axis })
}
