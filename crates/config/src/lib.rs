//! Environment-sourced configuration shared by all commands.

mod config;

pub use config::{Config, CONFIG};
