//! Configuration section definitions.
//!
//! Each module corresponds to a section in `city.toml`:
//!
//! | Module     | TOML Section    | Purpose                              |
//! |------------|-----------------|--------------------------------------|
//! | `world`    | `[world]`       | Output root, map location, seed      |
//! | `grid`     | `[grid]`        | Road names and block ranges          |
//! | `hub`      | `[hub]`         | The welcome center                   |
//! | `location` | `[[locations]]` | Buildings and their object specs     |

mod grid;
mod hub;
mod location;
mod world;

pub use grid::{BlockRange, GridConfig, Orientation};
pub use hub::HubConfig;
pub use location::{Anchor, LocationTemplate, ObjectSpec};
pub use world::WorldConfig;
