//! docroute - route table generator for documentation sites.

mod cli;
mod config;
mod content;
mod generator;
mod logger;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
    }
}
