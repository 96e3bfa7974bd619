//! Command-line interface module.

mod args;
pub mod atlas;
pub mod build;
pub mod init;
pub mod reset;

pub use args::{AtlasArgs, BuildArgs, Cli, Commands};
