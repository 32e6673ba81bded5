//! rolo-rs - Contact Book TUI
//!
//! A terminal application for managing a contact book.
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.
//!
//! Available as the `rolo` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rolo_rs::cli::commands::{Cli, Commands};
use rolo_rs::cli::config;
use rolo_rs::core::Config;
use rolo_rs::error::Result;
use rolo_rs::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui().await,

        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the TUI application
async fn run_tui() -> Result<()> {
    let config = Config::load()?;
    tracing::debug!(seeds = config.seeds.len(), "loaded configuration");

    let mut app = App::new(&config);
    app.run().await
}
