//! coretime library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg).await,
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg).await,
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg).await,
        Commands::Violations => cli::commands::violations::handle(cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging before anything can fail
    logging::init_logging(cli.quiet);

    // 3️⃣ load config once
    let path = Config::resolve_path(cli.config.as_deref());
    let mut cfg = Config::load_from(&path)?;

    // 4️⃣ command-line overrides
    if let Some(api) = &cli.api {
        cfg.api_base_url = api.clone();
    }

    dispatch(&cli, &cfg).await
}
