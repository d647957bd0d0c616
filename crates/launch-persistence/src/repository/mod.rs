//! # Repository Module
//!
//! Data source implementations feeding launch snapshots to the analytics
//! engine.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::{JsonFileLaunchSource, SnapshotDocument};
pub use memory::InMemoryLaunchSource;
pub use traits::LaunchSource;
