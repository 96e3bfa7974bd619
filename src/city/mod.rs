//! The generation engine.
//!
//! # Module Structure
//!
//! ```text
//! city/
//! ├── fs          # TreeWriter: create-if-absent primitives, WriteStats
//! ├── naming      # Every on-disk name
//! ├── layout      # Cell -> path mapping, anchor resolution
//! ├── grid        # Blocks and intersections
//! ├── navigation  # Block <-> intersection links
//! ├── objects     # Probabilistic object population
//! ├── location    # Buildings and the hub
//! └── atlas       # Address parsing and plot placement
//! ```
//!
//! Stages run in order: grid, navigation, hub, locations. Each stage only
//! creates what is missing, so running the pipeline twice is harmless.

pub mod atlas;
pub mod fs;
pub mod grid;
pub mod layout;
pub mod location;
pub mod naming;
pub mod navigation;
pub mod objects;

use anyhow::{Context, Result, bail};
use rand::Rng;

use crate::config::CityConfig;
use crate::{debug, log};
use crate::utils::plural_count;
use fs::{TreeWriter, WriteStats};
use layout::{Layout, resolve_anchor};

/// What one generation run created, stage by stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub grid: WriteStats,
    pub navigation: WriteStats,
    pub hub: WriteStats,
    pub locations: WriteStats,
    /// Items placed by object specs, including ones already on disk.
    pub objects: usize,
}

impl GenerationReport {
    pub fn total(&self) -> WriteStats {
        let mut total = self.grid;
        total += self.navigation;
        total += self.hub;
        total += self.locations;
        total
    }
}

/// Materialize the whole city described by `config`.
pub fn generate<R: Rng>(
    config: &CityConfig,
    writer: &mut TreeWriter,
    rng: &mut R,
) -> Result<GenerationReport> {
    let map_root = config.map_root();
    let layout = Layout::new(&map_root);
    let mut report = GenerationReport::default();

    grid::build_grid(&config.grid, &layout, writer).context("failed to build the grid")?;
    report.grid = writer.take_stats();
    log_stage("grid", report.grid);

    navigation::link_navigation(&config.grid, &layout, writer)
        .context("failed to link the grid")?;
    report.navigation = writer.take_stats();
    log_stage("navigation", report.navigation);

    if let (Some(hub), Some(hub_root)) = (&config.hub, config.hub_root()) {
        let cell = resolve_anchor(&config.grid, &hub.name, &hub.anchor)?;
        report.objects += location::assemble_hub(hub, &hub_root, &layout.cell(&cell), writer, rng)
            .with_context(|| format!("failed to build `{}`", hub.name))?;
        report.hub = writer.take_stats();
        log_stage("hub", report.hub);
    }

    for template in &config.locations {
        let cell = resolve_anchor(&config.grid, &template.name, &template.anchor)?;
        debug!("location"; "{} on {}", template.name, cell.name());
        report.objects += location::assemble(template, &layout.cell(&cell), writer, rng)
            .with_context(|| format!("failed to build `{}`", template.name))?;
    }
    report.locations = writer.take_stats();
    log_stage("location", report.locations);

    Ok(report)
}

/// Delete everything the generator writes: the hub and the map root.
///
/// A map root that is, or contains, the output root is never removed
/// wholesale; only its generated children go.
///
/// Returns how many targets were present.
pub fn reset_world(config: &CityConfig, writer: &mut TreeWriter) -> Result<usize> {
    let root = config.root();
    let mut targets = Vec::with_capacity(4);
    if let Some(hub_root) = config.hub_root() {
        if root.starts_with(&hub_root) {
            bail!(
                "refusing to remove `{}`: it holds the output root",
                hub_root.display()
            );
        }
        targets.push(hub_root);
    }

    let map_root = config.map_root();
    if root.starts_with(&map_root) {
        targets.extend(Layout::new(&map_root).top_level_dirs());
    } else if !targets.iter().any(|hub| map_root.starts_with(hub)) {
        // The default map lives inside the hub.
        targets.push(map_root);
    }

    let mut removed = 0;
    for target in &targets {
        if writer.reset(target)? {
            log!("reset"; "removed {}", target.display());
            removed += 1;
        }
    }
    Ok(removed)
}

fn log_stage(stage: &str, stats: WriteStats) {
    if stats.is_empty() {
        log!(stage; "nothing new");
    } else {
        log!(
            stage;
            "{}, {}, {}",
            plural_count(stats.directories, "directory"),
            plural_count(stats.files, "file"),
            plural_count(stats.links, "link")
        );
    }
}
