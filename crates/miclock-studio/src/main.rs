mod cli;
mod commands;
mod config;
mod driver;
mod fonts;

use anyhow::Result;
use clap::Parser;
use miclock_engine::logging::{LoggingConfig, init_logging};

use crate::cli::{Cli, Command};
use crate::config::StudioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let config = match &cli.config {
        Some(path) => StudioConfig::load(path)?,
        None => StudioConfig::default(),
    };

    match &cli.command {
        Command::Snapshot(args) => commands::snapshot(&config, args),
        Command::Frames(args) => commands::frames(&config, args),
        Command::Live(args) => commands::live(&config, args),
    }
}
