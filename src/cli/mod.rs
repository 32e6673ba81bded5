//! Command-line interface module

pub mod commands;
pub mod config;
