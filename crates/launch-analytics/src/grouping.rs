//! Single-pass reducers grouping a launch snapshot by a derived key.
//!
//! Keys are compared by value, so launches whose rockets or providers were
//! constructed separately but carry the same identifying fields land in the
//! same bucket.

use std::collections::HashMap;
use std::hash::Hash;

use launch_domain::{Launch, LaunchOutcome, LaunchServiceProvider};
use rust_decimal::Decimal;

/// Count launches per key. Launches mapped to `None` are skipped.
pub fn count_by<'a, K, F>(launches: &'a [Launch], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&'a Launch) -> Option<K>,
{
    let mut counts = HashMap::new();
    for launch in launches {
        if let Some(k) = key(launch) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Sum a decimal amount per key. Launches mapped to `None` are skipped.
pub fn sum_by<'a, K, F>(launches: &'a [Launch], entry: F) -> HashMap<K, Decimal>
where
    K: Eq + Hash,
    F: Fn(&'a Launch) -> Option<(K, Decimal)>,
{
    let mut sums = HashMap::new();
    for launch in launches {
        if let Some((k, amount)) = entry(launch) {
            *sums.entry(k).or_insert(Decimal::ZERO) += amount;
        }
    }
    sums
}

/// Launch outcome counters for one provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
}

impl OutcomeTally {
    fn record(&mut self, outcome: LaunchOutcome) {
        self.total += 1;
        match outcome {
            LaunchOutcome::Successful => self.successful += 1,
            LaunchOutcome::Failed => self.failed += 1,
        }
    }
}

/// Tally outcomes per operating provider.
pub fn tally_outcomes(launches: &[Launch]) -> HashMap<&LaunchServiceProvider, OutcomeTally> {
    let mut tallies: HashMap<&LaunchServiceProvider, OutcomeTally> = HashMap::new();
    for launch in launches {
        tallies
            .entry(&launch.provider)
            .or_default()
            .record(launch.outcome);
    }
    tallies
}
