//! Configuration CLI command handlers

use crate::cli::commands::ConfigCommand;
use crate::core::config::Config;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => handle_show(),
        ConfigCommand::Path => handle_path(),
    }
}

/// Print the resolved configuration as TOML
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the configuration file path
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
