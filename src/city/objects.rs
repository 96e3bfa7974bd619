//! Probabilistic object population.
//!
//! An [`ObjectSpec`] expands into at most `max - min + 1` files. Each index
//! in `min..=max` gets one independent draw against `chance`; a hit places
//! the file at `path`, a miss places it at `fallback` if one is set and
//! skips it otherwise. Multi-item specs number their files `_001`, `_002`,
//! and so on, using the index itself.

use std::path::Path;

use rand::Rng;

use super::fs::{Result, TreeWriter};
use crate::config::ObjectSpec;
use crate::debug;

/// Expand every spec under `base`. Returns the number of items placed.
pub fn populate<R: Rng>(
    base: &Path,
    specs: &[ObjectSpec],
    rng: &mut R,
    writer: &mut TreeWriter,
) -> Result<usize> {
    let mut placed = 0;
    for spec in specs {
        placed += populate_one(base, spec, rng, writer)?;
    }
    Ok(placed)
}

fn populate_one<R: Rng>(
    base: &Path,
    spec: &ObjectSpec,
    rng: &mut R,
    writer: &mut TreeWriter,
) -> Result<usize> {
    let chance = spec.effective_chance();
    let mut placed = 0;

    for index in spec.effective_min()..=spec.effective_max() {
        let roll: f64 = rng.random();
        let path = if roll < chance {
            &spec.path
        } else if let Some(fallback) = &spec.fallback {
            fallback
        } else {
            continue;
        };

        writer.ensure_file(&base.join(item_name(path, spec, index)), &spec.contents)?;
        placed += 1;
    }

    debug!("objects"; "{}: {} placed", spec.path, placed);
    Ok(placed)
}

/// File name for one index of a spec.
pub fn item_name(path: &str, spec: &ObjectSpec, index: u32) -> String {
    if spec.is_numbered() {
        format!("{path}_{index:03}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn spec(path: &str, min: Option<u32>, max: Option<u32>, chance: Option<f64>) -> ObjectSpec {
        ObjectSpec {
            min,
            max,
            chance,
            ..ObjectSpec::single(path)
        }
    }

    fn names_in(path: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(path)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_single_item_has_no_suffix() {
        let dir = TempDir::new().unwrap();
        let specs = [ObjectSpec {
            count: Some(1),
            ..ObjectSpec::single("kitchen/sink")
        }];
        let mut rng = StdRng::seed_from_u64(1);

        let placed = populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(placed, 1);
        assert_eq!(names_in(&dir.path().join("kitchen")), vec!["sink".to_string()]);
    }

    #[test]
    fn test_multi_item_suffix() {
        let dir = TempDir::new().unwrap();
        let specs = [spec("shelf/cup", None, Some(5), None)];
        let mut rng = StdRng::seed_from_u64(1);

        populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(
            names_in(&dir.path().join("shelf")),
            vec!["cup_001", "cup_002", "cup_003", "cup_004", "cup_005"]
        );
    }

    #[test]
    fn test_suffix_uses_index() {
        let single = ObjectSpec::single("bed");
        assert_eq!(item_name("bed", &single, 1), "bed");

        let many = spec("fork", Some(12), Some(20), None);
        assert_eq!(item_name("fork", &many, 12), "fork_012");
        assert_eq!(item_name("fork", &many, 20), "fork_020");
    }

    #[test]
    fn test_count_bounds_and_mean() {
        let specs = [spec("chart", Some(10), Some(30), Some(0.25))];
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 400;
        let mut total = 0;

        for _ in 0..trials {
            let mut writer = TreeWriter::dry_run();
            let placed = populate(Path::new("/nonexistent/city"), &specs, &mut rng, &mut writer)
                .unwrap();
            assert!(placed <= 21);
            total += placed;
        }

        let mean = total as f64 / trials as f64;
        assert!((4.5..6.0).contains(&mean), "mean {mean}");
    }

    #[test]
    fn test_zero_chance_places_nothing() {
        let dir = TempDir::new().unwrap();
        let specs = [spec("ghost", None, Some(10), Some(0.0))];
        let mut rng = StdRng::seed_from_u64(3);

        let placed = populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(placed, 0);
        assert!(names_in(dir.path()).is_empty());
    }

    #[test]
    fn test_fallback_catches_misses() {
        let dir = TempDir::new().unwrap();
        let specs = [ObjectSpec {
            fallback: Some("dishwasher/cup".into()),
            ..spec("shelf/cup", Some(1), Some(8), Some(0.5))
        }];
        let mut rng = StdRng::seed_from_u64(9);

        let placed = populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(placed, 8);

        let list = |sub: &str| {
            let path = dir.path().join(sub);
            if path.exists() { names_in(&path) } else { Vec::new() }
        };
        let mut all: Vec<_> = list("shelf").into_iter().chain(list("dishwasher")).collect();
        assert_eq!(all.len(), 8);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_contents_written() {
        let dir = TempDir::new().unwrap();
        let specs = [ObjectSpec {
            contents: "clear skies".into(),
            ..ObjectSpec::single("dome/logbook")
        }];
        let mut rng = StdRng::seed_from_u64(0);

        populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("dome/logbook")).unwrap(),
            "clear skies"
        );
    }

    #[test]
    fn test_seeded_runs_match() {
        let specs = [spec("coin", None, Some(50), Some(0.35))];
        let run = |seed| {
            let dir = TempDir::new().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
            names_in(dir.path())
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_empty_range() {
        let dir = TempDir::new().unwrap();
        let specs = [spec("nothing", Some(5), Some(3), None)];
        let mut rng = StdRng::seed_from_u64(0);

        let placed = populate(dir.path(), &specs, &mut rng, &mut TreeWriter::new()).unwrap();
        assert_eq!(placed, 0);
    }
}
