//! Small helpers shared by the CLI and the engine.

pub mod path;
mod plural;

pub use plural::plural_count;
