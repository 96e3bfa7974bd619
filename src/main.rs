//! Folder City - a city built out of directories, files and symlinks.

mod city;
mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::CityConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry } => cli::init::init_city(&cli.config, *dry),
        Commands::Build { build_args } => {
            cli::build::build_city(&CityConfig::load(&cli)?, build_args).map(|_| ())
        }
        Commands::Reset => cli::reset::reset_city(&CityConfig::load(&cli)?),
        Commands::Atlas { args } => cli::atlas::run_atlas(args, &CityConfig::load(&cli)?),
    }
}
