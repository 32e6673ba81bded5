//! rolo-rs - A TUI application for managing a contact book
//!
//! This library provides a terminal interface for listing, searching,
//! adding, editing, and deleting contacts. The book lives in memory for
//! the duration of a session; nothing is persisted.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{Result, RoloError};
