//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folder City: a city you explore with your file manager
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: city.toml)
    #[arg(short = 'C', long, global = true, default_value = "city.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the reference city config to the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Generate the city (only fills in what is missing)
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Delete the generated city
    #[command(visible_alias = "r")]
    Reset,

    /// Export road lists and building positions as JSON
    #[command(visible_alias = "a")]
    Atlas {
        #[command(flatten)]
        args: AtlasArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Delete the existing city before building
    #[arg(short, long)]
    pub clean: bool,

    /// Seed for object population (overrides `world.seed`)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Report what would be created without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output root (overrides `world.root`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,
}

/// Atlas command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AtlasArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
