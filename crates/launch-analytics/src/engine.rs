//! Analytics engine bound to a launch data source.

use std::sync::Arc;

use launch_domain::{Launch, LaunchServiceProvider, Rocket};
use launch_persistence::LaunchSource;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::queries::{self, ProviderStats, LAUNCHES, PROVIDERS, ROCKETS};
use crate::ranking::validate_k;

/// Stateless ranking engine over launch snapshots.
///
/// Each query performs exactly one blocking load from the source and then
/// works on that local copy. Nothing is cached between calls, so the engine
/// can be shared across threads freely.
#[derive(Clone)]
pub struct LaunchAnalytics {
    source: Arc<dyn LaunchSource>,
}

impl LaunchAnalytics {
    /// Create an engine owning `source`.
    pub fn new<S: LaunchSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Create an engine over a shared source.
    pub fn from_shared(source: Arc<dyn LaunchSource>) -> Self {
        Self { source }
    }

    /// Load a fresh snapshot from the source.
    pub fn snapshot(&self) -> Result<Vec<Launch>> {
        let launches = self.source.load_all_launches()?;
        debug!(launches = launches.len(), "Loaded snapshot");
        Ok(launches)
    }

    /// Load every known provider from the source.
    pub fn providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        Ok(self.source.load_all_providers()?)
    }

    /// Top-k most launched rockets.
    #[instrument(skip(self))]
    pub fn most_launched_rockets(&self, k: usize) -> Result<Vec<Rocket>> {
        validate_k(k, ROCKETS)?;
        let launches = self.snapshot()?;
        let rockets = queries::most_launched_rockets(&launches, k)?;
        debug!(returned = rockets.len(), "Ranked rockets by launch count");
        Ok(rockets)
    }

    /// Top-k providers by success percentage.
    #[instrument(skip(self))]
    pub fn most_reliable_launch_service_providers(
        &self,
        k: usize,
    ) -> Result<Vec<LaunchServiceProvider>> {
        validate_k(k, PROVIDERS)?;
        let launches = self.snapshot()?;
        queries::most_reliable_launch_service_providers(&launches, k)
    }

    /// Top-k providers by failure percentage.
    #[instrument(skip(self))]
    pub fn most_unreliable_launch_service_providers(
        &self,
        k: usize,
    ) -> Result<Vec<LaunchServiceProvider>> {
        validate_k(k, PROVIDERS)?;
        let launches = self.snapshot()?;
        queries::most_unreliable_launch_service_providers(&launches, k)
    }

    /// Top-k most recent launches.
    #[instrument(skip(self))]
    pub fn most_recent_launches(&self, k: usize) -> Result<Vec<Launch>> {
        validate_k(k, LAUNCHES)?;
        let launches = self.snapshot()?;
        queries::most_recent_launches(&launches, k)
    }

    /// Top-k most expensive launches.
    #[instrument(skip(self))]
    pub fn most_expensive_launches(&self, k: usize) -> Result<Vec<Launch>> {
        validate_k(k, LAUNCHES)?;
        let launches = self.snapshot()?;
        queries::most_expensive_launches(&launches, k)
    }

    /// Country building the rockets of the most launches to `orbit`.
    #[instrument(skip(self))]
    pub fn dominant_country(&self, orbit: &str) -> Result<String> {
        let launches = self.snapshot()?;
        let country = queries::dominant_country(&launches, orbit)?;
        debug!(%country, "Resolved dominant country");
        Ok(country)
    }

    /// Top-k providers by launch revenue in `year`.
    #[instrument(skip(self))]
    pub fn highest_revenue_launch_service_providers(
        &self,
        k: usize,
        year: i32,
    ) -> Result<Vec<LaunchServiceProvider>> {
        validate_k(k, PROVIDERS)?;
        let launches = self.snapshot()?;
        queries::highest_revenue_launch_service_providers(&launches, k, year)
    }

    /// Launch counters for every operating provider.
    #[instrument(skip(self))]
    pub fn provider_stats(&self) -> Result<Vec<ProviderStats>> {
        let launches = self.snapshot()?;
        Ok(queries::provider_stats(&launches))
    }
}

impl std::fmt::Debug for LaunchAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchAnalytics").finish_non_exhaustive()
    }
}
