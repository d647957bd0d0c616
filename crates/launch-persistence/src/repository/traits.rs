//! # Repository Traits
//!
//! Abstract data source interface for launch snapshots.
//! Implementations can be swapped for different backends (file, in-memory, mock).

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::Result;
use launch_domain::{Launch, LaunchServiceProvider};

// =============================================================================
// LAUNCH SOURCE
// =============================================================================

/// Blocking source of fully materialized launch snapshots.
///
/// Every call returns a fresh, finite collection. Failures are reported to
/// the caller as-is; sources do not retry.
pub trait LaunchSource: Send + Sync {
    /// Load every launch record
    fn load_all_launches(&self) -> Result<Vec<Launch>>;

    /// Load every known launch service provider.
    ///
    /// The default derives the distinct operators and rocket manufacturers
    /// referenced by `load_all_launches`, in provider order.
    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        let launches = self.load_all_launches()?;
        Ok(distinct_providers(&launches))
    }
}

impl<T: LaunchSource + ?Sized> LaunchSource for Arc<T> {
    fn load_all_launches(&self) -> Result<Vec<Launch>> {
        (**self).load_all_launches()
    }

    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        (**self).load_all_providers()
    }
}

/// Distinct operators and manufacturers referenced by `launches`, sorted.
pub fn distinct_providers(launches: &[Launch]) -> Vec<LaunchServiceProvider> {
    launches
        .iter()
        .flat_map(|launch| [&launch.provider, &launch.rocket.manufacturer])
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
