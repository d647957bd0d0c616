//! Persistence layer error types

use launch_domain::DomainError;
use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid launch record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("Invalid provider record at index {index}: {source}")]
    InvalidProvider {
        index: usize,
        #[source]
        source: DomainError,
    },
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
