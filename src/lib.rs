//! rtasklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Write { .. } => cli::commands::write::handle(cli, cfg),
        Commands::Read => cli::commands::read::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load the config ONCE
    let mut cfg = Config::load();

    // 3. apply the sheet directory override from the command line, if any
    if let Some(custom_dir) = &cli.dir {
        cfg.data_dir = custom_dir.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
