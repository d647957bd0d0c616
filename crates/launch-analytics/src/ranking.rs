//! Top-k selection with deterministic tie-breaking.
//!
//! Results are ordered by score descending; equal scores fall back to a
//! caller-supplied secondary ordering. Requests for more items than exist are
//! rejected rather than truncated.

use std::cmp::Ordering;

use crate::error::{AnalyticsError, Result};

/// Reject a non-positive k.
pub fn validate_k(k: usize, subject: &'static str) -> Result<()> {
    if k == 0 {
        return Err(AnalyticsError::InvalidK { k, subject });
    }
    Ok(())
}

fn check_available(k: usize, available: usize, subject: &'static str) -> Result<()> {
    validate_k(k, subject)?;
    if k > available {
        return Err(AnalyticsError::OutOfRange {
            requested: k,
            available,
            subject,
        });
    }
    Ok(())
}

/// Select the `k` highest-scoring keys.
///
/// `tie_break` orders keys with equal scores; it should be a total order
/// over the keys for the output to be independent of input order.
pub fn top_k<T, S, F>(
    scored: Vec<(T, S)>,
    k: usize,
    subject: &'static str,
    tie_break: F,
) -> Result<Vec<T>>
where
    S: Ord,
    F: Fn(&T, &T) -> Ordering,
{
    check_available(k, scored.len(), subject)?;

    let mut ranked = scored;
    ranked.sort_by(|(a, score_a), (b, score_b)| {
        score_b.cmp(score_a).then_with(|| tie_break(a, b))
    });
    ranked.truncate(k);

    Ok(ranked.into_iter().map(|(key, _)| key).collect())
}

/// Select the first `k` items of `items` under `order`, leaving `items`
/// untouched.
pub fn top_k_by<T, F>(items: &[T], k: usize, subject: &'static str, order: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    check_available(k, items.len(), subject)?;

    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|a, b| order(*a, *b));

    Ok(refs.into_iter().take(k).cloned().collect())
}

// =============================================================================
// RATIO SCORE
// =============================================================================

/// Exact `count / total` fraction used to rank success and failure rates.
///
/// Ordering cross-multiplies, so `1/3` and `2/6` compare equal and no
/// floating-point rounding can reorder providers.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    count: u64,
    total: u64,
}

impl Ratio {
    /// `None` when `total` is zero or `count` exceeds it.
    #[must_use]
    pub const fn new(count: u64, total: u64) -> Option<Self> {
        if total == 0 || count > total {
            return None;
        }
        Some(Self { count, total })
    }

    /// Numerator.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Denominator, always positive.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Percentage in `[0, 100]`, for display only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        self.count as f64 * 100.0 / self.total as f64
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.count) * u128::from(other.total);
        let rhs = u128::from(other.count) * u128::from(self.total);
        lhs.cmp(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_orders_by_score_then_tie_break() {
        let scored = vec![("c", 2), ("a", 4), ("b", 2), ("d", 3)];
        let top = top_k(scored, 3, "keys", |a, b| a.cmp(b)).unwrap();
        assert_eq!(top, vec!["a", "d", "b"]);
    }

    #[test]
    fn test_top_k_is_independent_of_input_order() {
        let forward = vec![("x", 1), ("y", 1), ("z", 1)];
        let mut backward = forward.clone();
        backward.reverse();

        let a = top_k(forward, 3, "keys", |a, b| a.cmp(b)).unwrap();
        let b = top_k(backward, 3, "keys", |a, b| a.cmp(b)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_top_k_rejects_zero() {
        let err = top_k(vec![("a", 1)], 0, "keys", |a, b| a.cmp(b)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidK { k: 0, .. }));
    }

    #[test]
    fn test_top_k_rejects_more_than_available() {
        let err = top_k(vec![("a", 1), ("b", 2)], 3, "keys", |a, b| a.cmp(b)).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::OutOfRange {
                requested: 3,
                available: 2,
                subject: "keys"
            }
        ));
    }

    #[test]
    fn test_top_k_by_leaves_input_untouched() {
        let items = vec![3, 1, 2];
        let top = top_k_by(&items, 2, "numbers", |a, b| b.cmp(a)).unwrap();
        assert_eq!(top, vec![3, 2]);
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn test_ratio_compares_exactly() {
        let third = Ratio::new(1, 3).unwrap();
        assert_eq!(third, Ratio::new(2, 6).unwrap());
        assert!(Ratio::new(3, 4).unwrap() > Ratio::new(2, 3).unwrap());
        assert!(Ratio::new(0, 5).unwrap() < third);
        assert!((Ratio::new(3, 4).unwrap().percentage() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_rejects_empty_total() {
        assert!(Ratio::new(0, 0).is_none());
        assert!(Ratio::new(3, 2).is_none());

        let empty_rate = Ratio::new(0, 1).unwrap();
        assert_eq!((empty_rate.count(), empty_rate.total()), (0, 1));
        assert!(empty_rate.percentage().abs() < f64::EPSILON);
    }
}
