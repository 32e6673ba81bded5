//! Core functionality for rolo-rs
//!
//! This module contains shared business logic including:
//! - The contact record type
//! - Contact book state and transitions
//! - Application configuration

pub mod book;
pub mod config;
pub mod contact;

pub use book::{ContactBook, FormMode};
pub use config::Config;
pub use contact::{Contact, ContactField};
