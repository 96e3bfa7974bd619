//! Buildings: locations anchored inside grid cells, and the hub.

use std::path::Path;

use rand::Rng;

use super::fs::{Result, TreeWriter};
use super::objects::populate;
use crate::config::{HubConfig, LocationTemplate};
use crate::debug;

/// Build one location inside its anchor cell.
///
/// The building directory is `{anchor}/{address}`. It gets a marker, an
/// exit link back to the cell and, if configured, an entrance link in the
/// cell. Returns the number of objects placed.
pub fn assemble<R: Rng>(
    template: &LocationTemplate,
    anchor: &Path,
    writer: &mut TreeWriter,
    rng: &mut R,
) -> Result<usize> {
    let building = anchor.join(&template.address);

    writer.ensure_directory(&building)?;
    writer.ensure_file(&building.join(template.marker_name()), "")?;
    writer.ensure_symlink(anchor, &building.join(&template.exit))?;
    if let Some(entrance) = &template.entrance {
        writer.ensure_symlink(&building, &anchor.join(entrance))?;
    }

    let placed = populate(&building, &template.objects, rng, writer)?;
    debug!("location"; "{} ({} objects)", template.name, placed);
    Ok(placed)
}

/// Build the hub at `root` and connect it with its anchor cell.
///
/// Unlike a location, the hub always has an entrance: the link named after
/// its address inside the anchor cell.
pub fn assemble_hub<R: Rng>(
    hub: &HubConfig,
    root: &Path,
    anchor: &Path,
    writer: &mut TreeWriter,
    rng: &mut R,
) -> Result<usize> {
    writer.ensure_directory(root)?;
    writer.ensure_file(&root.join(hub.marker_name()), "")?;
    writer.ensure_symlink(anchor, &root.join(&hub.exit))?;
    writer.ensure_symlink(root, &anchor.join(&hub.address))?;

    for dir in &hub.directories {
        writer.ensure_directory(&root.join(dir))?;
    }

    for shortcut in &hub.shortcuts {
        let link = root.join(shortcut);
        if let Some(parent) = link.parent() {
            writer.ensure_directory(parent)?;
        }
        writer.ensure_symlink(root, &link)?;
    }

    let placed = populate(root, &hub.objects, rng, writer)?;
    debug!("hub"; "{} ({} objects)", hub.name, placed);
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Anchor, ObjectSpec};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn template() -> LocationTemplate {
        LocationTemplate {
            name: "the observatory".into(),
            anchor: Anchor::StreetBlock {
                street: "Oak St".into(),
                range: "2200-2299".into(),
            },
            address: "2222 Oak St - the observatory".into(),
            exit: "exit to 2200-2299 Oak St".into(),
            marker: None,
            entrance: None,
            objects: vec![ObjectSpec::single("dome/telescope")],
        }
    }

    fn hub() -> HubConfig {
        HubConfig {
            name: "the welcome center".into(),
            anchor: Anchor::StreetBlock {
                street: "Juniper St".into(),
                range: "1900-1999".into(),
            },
            address: "1995 Juniper St - the welcome center".into(),
            exit: "front door".into(),
            marker: None,
            directories: vec!["upstairs/balcony".into()],
            shortcuts: vec!["basement/box/the welcome center".into()],
            objects: vec![ObjectSpec::single("kitchen/table")],
        }
    }

    #[test]
    fn test_assemble_location() {
        let dir = TempDir::new().unwrap();
        let anchor = dir.path().join("2200-2299 Oak St");
        fs::create_dir(&anchor).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let placed = assemble(&template(), &anchor, &mut TreeWriter::new(), &mut rng).unwrap();
        assert_eq!(placed, 1);

        let building = anchor.join("2222 Oak St - the observatory");
        assert!(building.join("[ the observatory ]").is_file());
        assert!(building.join("dome/telescope").is_file());
        assert_eq!(
            fs::read_link(building.join("exit to 2200-2299 Oak St")).unwrap(),
            anchor
        );
    }

    #[test]
    fn test_exit_is_one_way_without_entrance() {
        let dir = TempDir::new().unwrap();
        let anchor = dir.path().join("cell");
        let mut rng = StdRng::seed_from_u64(0);

        assemble(&template(), &anchor, &mut TreeWriter::new(), &mut rng).unwrap();
        let links = fs::read_dir(&anchor)
            .unwrap()
            .filter(|e| e.as_ref().unwrap().file_type().unwrap().is_symlink())
            .count();
        assert_eq!(links, 0);
    }

    #[test]
    fn test_entrance_link() {
        let dir = TempDir::new().unwrap();
        let anchor = dir.path().join("Pine St & Sunset Ln");
        let template = LocationTemplate {
            entrance: Some("⛲ the fountain".into()),
            marker: Some("[ fountain ]".into()),
            ..template()
        };
        let mut rng = StdRng::seed_from_u64(0);

        assemble(&template, &anchor, &mut TreeWriter::new(), &mut rng).unwrap();
        let building = anchor.join(&template.address);
        assert_eq!(fs::read_link(anchor.join("⛲ the fountain")).unwrap(), building);
        assert!(building.join("[ fountain ]").is_file());
    }

    #[test]
    fn test_reassemble_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let anchor = dir.path().join("cell");
        let mut writer = TreeWriter::new();
        let mut rng = StdRng::seed_from_u64(0);

        assemble(&template(), &anchor, &mut writer, &mut rng).unwrap();
        writer.take_stats();
        assemble(&template(), &anchor, &mut writer, &mut rng).unwrap();
        assert!(writer.stats().is_empty());
    }

    #[test]
    fn test_assemble_hub() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("the welcome center");
        let anchor = dir.path().join("1900-1999 Juniper St");
        fs::create_dir(&anchor).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let placed = assemble_hub(&hub(), &root, &anchor, &mut TreeWriter::new(), &mut rng).unwrap();
        assert_eq!(placed, 1);

        assert!(root.join("[ the welcome center ]").is_file());
        assert!(root.join("upstairs/balcony").is_dir());
        assert!(root.join("kitchen/table").is_file());
        assert_eq!(fs::read_link(root.join("front door")).unwrap(), anchor);
        assert_eq!(
            fs::read_link(anchor.join("1995 Juniper St - the welcome center")).unwrap(),
            root
        );
        assert_eq!(
            fs::read_link(root.join("basement/box/the welcome center")).unwrap(),
            root
        );
    }
}
