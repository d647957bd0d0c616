//! # Launch Miner CLI
//!
//! Thin command-line adapter over the launch analytics engine. Each command
//! maps onto one engine query and prints its result as JSON (or Markdown for
//! reports).

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;

pub use commands::{run, Command, ReportFormat};
pub use config::{Config, LogFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
