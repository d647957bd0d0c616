//! # Launch Analytics
//!
//! Ranking and aggregation engine answering analytical queries over rocket
//! launch snapshots.
//!
//! ## Features
//!
//! - Most launched rockets
//! - Most reliable / unreliable launch service providers
//! - Most recent and most expensive launches
//! - Dominant manufacturing country per orbit
//! - Highest revenue providers per calendar year
//!
//! Every query is a pure function of the snapshot and its parameters. Ties
//! are broken by explicit secondary keys, and a k larger than the number of
//! candidates is reported as an error instead of being truncated.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod engine;
pub mod error;
pub mod grouping;
pub mod queries;
pub mod ranking;
pub mod reports;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::LaunchAnalytics;
pub use error::AnalyticsError;
pub use queries::ProviderStats;
pub use ranking::Ratio;
pub use reports::{AnalyticsReport, ReportParams};
