//! # Launch Persistence Library
//!
//! Data source layer for the launch analytics engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Analytics Engine                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LaunchSource trait                        │
//! │        (load_all_launches, load_all_providers)               │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                   │
//!                    ▼                   ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │  InMemoryLaunchSource   │   │     JsonFileLaunchSource     │
//! │   (tests, embedding)    │   │     (snapshot documents)     │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! Every load is blocking and returns a fully materialized snapshot.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use launch_persistence::{JsonFileLaunchSource, LaunchSource};
//!
//! let source = JsonFileLaunchSource::new("launches.json");
//! let launches = source.load_all_launches()?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod repository;

// Re-export commonly used types
pub use error::{PersistenceError, Result};
pub use repository::{InMemoryLaunchSource, JsonFileLaunchSource, LaunchSource, SnapshotDocument};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
