//! Analytics error types.

use launch_persistence::PersistenceError;
use thiserror::Error;

/// Analytics errors.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// k must be a positive integer
    #[error("Invalid parameter: k={k} requested for {subject}, k must be positive")]
    InvalidK { k: usize, subject: &'static str },

    /// k exceeds the number of distinct candidates
    #[error("Invalid parameter: k={requested} requested but only {available} {subject} present")]
    OutOfRange {
        requested: usize,
        available: usize,
        subject: &'static str,
    },

    /// Single-winner query had nothing to choose from
    #[error("No data found: no launches recorded for orbit '{orbit}'")]
    NotFound { orbit: String },

    /// Data source failure, propagated unchanged
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] PersistenceError),

    /// Report rendering error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnalyticsError {
    /// Stable error code for adapters
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidK { .. } | Self::OutOfRange { .. } => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::Serialization(_) => "SERIALIZATION",
        }
    }

    /// True for the k violations `InvalidK` and `OutOfRange`.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidK { .. } | Self::OutOfRange { .. })
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_parameter() {
        let err = AnalyticsError::OutOfRange {
            requested: 10,
            available: 4,
            subject: "rockets",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter: k=10 requested but only 4 rockets present"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_error_codes() {
        let not_found = AnalyticsError::NotFound { orbit: "GTO".into() };
        assert_eq!(not_found.error_code(), "NOT_FOUND");
        assert!(!not_found.is_invalid_argument());

        let zero_k = AnalyticsError::InvalidK { k: 0, subject: "launches" };
        assert_eq!(zero_k.error_code(), "INVALID_ARGUMENT");
        assert!(zero_k.is_invalid_argument());

        let unavailable: AnalyticsError = PersistenceError::Unavailable("down".into()).into();
        assert_eq!(unavailable.error_code(), "DATA_UNAVAILABLE");
        assert!(!unavailable.is_invalid_argument());
    }
}
