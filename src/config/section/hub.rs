//! `[hub]` section configuration.
//!
//! The hub is the city's entry point: a building that lives at the world
//! root instead of inside a block, is connected both ways with its anchor
//! cell, and by default contains the map itself somewhere in its basement.
//!
//! # Example
//!
//! ```toml
//! [hub]
//! name = "the welcome center"
//! anchor = { street = "Juniper St", range = "1900-1999" }
//! address = "1995 Juniper St - the welcome center"
//! exit = "front door"
//! directories = ["upstairs/balcony"]
//! shortcuts = ["basement/unmarked box/flash drive/users/home/applications/folder city/the welcome center"]
//!
//! [[hub.objects]]
//! path = "kitchen/table"
//! ```

use serde::{Deserialize, Serialize};

use super::{Anchor, ObjectSpec};

/// The welcome center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Directory name at the world root.
    pub name: String,

    pub anchor: Anchor,

    /// Address record; also the name of the entrance link in the anchor cell.
    pub address: String,

    /// Link inside the hub leading out to the anchor cell.
    pub exit: String,

    /// Marker file name. Defaults to `[ {name} ]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Empty directories to create, relative to the hub.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Links (relative to the hub) that lead back to the hub itself.
    #[serde(default)]
    pub shortcuts: Vec<String>,

    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

impl HubConfig {
    pub fn marker_name(&self) -> String {
        self.marker
            .clone()
            .unwrap_or_else(|| crate::city::naming::marker_name(&self.name))
    }
}
