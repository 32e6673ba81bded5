//! CLI command definitions using clap
//!
//! Defines the command structure for the `rolo` CLI tool.

use clap::{Parser, Subcommand};

/// rolo-rs - Contact book TUI
///
/// A terminal application for managing a contact book.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "rolo", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config(ConfigArgs),
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Print the configuration file path
    Path,
}
