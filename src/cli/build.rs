//! Build command: generate the city.

use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

use crate::city::{GenerationReport, fs::TreeWriter, generate, reset_world};
use crate::cli::BuildArgs;
use crate::config::CityConfig;
use crate::log;
use crate::utils::plural_count;

/// Build the city, optionally wiping it first.
///
/// Without a configured seed a fresh one is drawn and logged, so any run
/// can be reproduced with `--seed`.
pub fn build_city(config: &CityConfig, args: &BuildArgs) -> Result<GenerationReport> {
    let mut writer = if args.dry_run {
        log!("dry-run"; "nothing will be written");
        TreeWriter::dry_run()
    } else {
        TreeWriter::new()
    };

    if args.clean {
        reset_world(config, &mut writer)?;
        writer.take_stats();
    }

    let seed = config.world.seed.unwrap_or_else(rand::random);
    log!("city"; "building in {} (seed {})", config.root().display(), seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let report = generate(config, &mut writer, &mut rng)?;

    let created = plural_count(report.total().total(), "entry");
    let placed = plural_count(report.objects, "object");
    if writer.is_dry_run() {
        log!("done"; "would create {}, {} drawn", created, placed);
    } else {
        log!("done"; "{} created, {} placed", created, placed);
    }
    Ok(report)
}
