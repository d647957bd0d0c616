//! In-memory launch source.

use tracing::debug;

use crate::error::Result;
use crate::repository::traits::{distinct_providers, LaunchSource};
use launch_domain::{Launch, LaunchServiceProvider};

/// Launch source backed by an owned vector.
///
/// Each load hands out a clone, so callers never observe each other's
/// snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLaunchSource {
    launches: Vec<Launch>,
    providers: Option<Vec<LaunchServiceProvider>>,
}

impl InMemoryLaunchSource {
    pub fn new(launches: Vec<Launch>) -> Self {
        Self {
            launches,
            providers: None,
        }
    }

    /// Register providers explicitly, including ones with no launches.
    #[must_use]
    pub fn with_providers(mut self, providers: Vec<LaunchServiceProvider>) -> Self {
        self.providers = Some(providers);
        self
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }
}

impl From<Vec<Launch>> for InMemoryLaunchSource {
    fn from(launches: Vec<Launch>) -> Self {
        Self::new(launches)
    }
}

impl LaunchSource for InMemoryLaunchSource {
    fn load_all_launches(&self) -> Result<Vec<Launch>> {
        debug!(count = self.launches.len(), "Loading launches from memory");
        Ok(self.launches.clone())
    }

    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        Ok(self
            .providers
            .clone()
            .unwrap_or_else(|| distinct_providers(&self.launches)))
    }
}
