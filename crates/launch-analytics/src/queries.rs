//! Predefined analytical queries over a launch snapshot.
//!
//! Every function here is a pure reducer of `(snapshot, parameters)`. Equal
//! scores are broken by an explicit secondary ordering so results never depend
//! on hash-map iteration order.

use launch_domain::{Launch, LaunchServiceProvider, Rocket};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::grouping::{count_by, sum_by, tally_outcomes, OutcomeTally};
use crate::ranking::{top_k, top_k_by, validate_k, Ratio};

pub(crate) const ROCKETS: &str = "rockets";
pub(crate) const PROVIDERS: &str = "providers";
pub(crate) const LAUNCHES: &str = "launches";
const COUNTRIES: &str = "countries";

/// Per-provider launch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    pub provider: LaunchServiceProvider,
    pub total_launches: u64,
    pub successful: u64,
    pub failed: u64,
}

impl ProviderStats {
    fn from_tally(provider: &LaunchServiceProvider, tally: OutcomeTally) -> Self {
        Self {
            provider: provider.clone(),
            total_launches: tally.total,
            successful: tally.successful,
            failed: tally.failed,
        }
    }

    /// `None` for a provider without launches
    #[must_use]
    pub const fn success_rate(&self) -> Option<Ratio> {
        Ratio::new(self.successful, self.total_launches)
    }

    /// `None` for a provider without launches
    #[must_use]
    pub const fn failure_rate(&self) -> Option<Ratio> {
        Ratio::new(self.failed, self.total_launches)
    }
}

/// Launch counts per operating provider, in provider order.
pub fn provider_stats(launches: &[Launch]) -> Vec<ProviderStats> {
    let mut stats: Vec<ProviderStats> = tally_outcomes(launches)
        .into_iter()
        .map(|(provider, tally)| ProviderStats::from_tally(provider, tally))
        .collect();
    stats.sort_by(|a, b| a.provider.cmp(&b.provider));
    stats
}

/// Top-k rockets by number of launches; ties by rocket name, country,
/// then manufacturer.
pub fn most_launched_rockets(launches: &[Launch], k: usize) -> Result<Vec<Rocket>> {
    validate_k(k, ROCKETS)?;

    let counts = count_by(launches, |launch| Some(&launch.rocket));
    let ranked = top_k(counts.into_iter().collect(), k, ROCKETS, |a, b| a.cmp(b))?;

    Ok(ranked.into_iter().cloned().collect())
}

/// Top-k providers by percentage of successful launches.
pub fn most_reliable_launch_service_providers(
    launches: &[Launch],
    k: usize,
) -> Result<Vec<LaunchServiceProvider>> {
    rank_providers_by_rate(launches, k, |tally| Ratio::new(tally.successful, tally.total))
}

/// Top-k providers by percentage of failed launches.
pub fn most_unreliable_launch_service_providers(
    launches: &[Launch],
    k: usize,
) -> Result<Vec<LaunchServiceProvider>> {
    rank_providers_by_rate(launches, k, |tally| Ratio::new(tally.failed, tally.total))
}

fn rank_providers_by_rate<F>(
    launches: &[Launch],
    k: usize,
    rate: F,
) -> Result<Vec<LaunchServiceProvider>>
where
    F: Fn(&OutcomeTally) -> Option<Ratio>,
{
    validate_k(k, PROVIDERS)?;

    // Providers without launches have no rate and are not candidates.
    let scored: Vec<(&LaunchServiceProvider, Ratio)> = tally_outcomes(launches)
        .into_iter()
        .filter_map(|(provider, tally)| rate(&tally).map(|r| (provider, r)))
        .collect();
    let ranked = top_k(scored, k, PROVIDERS, |a, b| a.cmp(b))?;

    Ok(ranked.into_iter().cloned().collect())
}

/// Top-k launches by date, latest first; ties by operator name, then rocket
/// name.
pub fn most_recent_launches(launches: &[Launch], k: usize) -> Result<Vec<Launch>> {
    top_k_by(launches, k, LAUNCHES, |a, b| {
        b.launch_date
            .cmp(&a.launch_date)
            .then_with(|| a.provider.name.cmp(&b.provider.name))
            .then_with(|| a.rocket.name.cmp(&b.rocket.name))
    })
}

/// Top-k launches by price; ties by date (latest first), then operator name.
pub fn most_expensive_launches(launches: &[Launch], k: usize) -> Result<Vec<Launch>> {
    top_k_by(launches, k, LAUNCHES, |a, b| {
        b.price
            .cmp(&a.price)
            .then_with(|| b.launch_date.cmp(&a.launch_date))
            .then_with(|| a.provider.name.cmp(&b.provider.name))
    })
}

/// Country whose manufacturers built the rockets of the most launches to
/// `orbit`. The orbit match is exact and case-sensitive; ties go to the
/// alphabetically first country.
pub fn dominant_country(launches: &[Launch], orbit: &str) -> Result<String> {
    let counts = count_by(launches, |launch| {
        (launch.orbit == orbit).then_some(launch.rocket.manufacturer.country.as_str())
    });
    if counts.is_empty() {
        return Err(AnalyticsError::NotFound {
            orbit: orbit.to_owned(),
        });
    }

    let winner = top_k(counts.into_iter().collect(), 1, COUNTRIES, |a, b| a.cmp(b))?;
    winner
        .first()
        .map(|country| (*country).to_owned())
        .ok_or_else(|| AnalyticsError::NotFound {
            orbit: orbit.to_owned(),
        })
}

/// Top-k operators by summed launch price within calendar `year`.
/// Providers without launches that year are not candidates.
pub fn highest_revenue_launch_service_providers(
    launches: &[Launch],
    k: usize,
    year: i32,
) -> Result<Vec<LaunchServiceProvider>> {
    validate_k(k, PROVIDERS)?;

    let revenue = sum_by(launches, |launch| {
        (launch.year() == year).then_some((&launch.provider, launch.price))
    });
    let ranked = top_k(revenue.into_iter().collect(), k, PROVIDERS, |a, b| a.cmp(b))?;

    Ok(ranked.into_iter().cloned().collect())
}
