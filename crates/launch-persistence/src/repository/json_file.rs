//! JSON snapshot file source.
//!
//! The file is re-read on every load so each query sees the file as it is at
//! call time.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PersistenceError, Result};
use crate::repository::traits::{distinct_providers, LaunchSource};
use launch_domain::{Launch, LaunchServiceProvider};

/// On-disk snapshot layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub providers: Vec<LaunchServiceProvider>,
    pub launches: Vec<Launch>,
}

impl SnapshotDocument {
    /// Validate every provider and launch, reporting the first bad record by
    /// index.
    pub fn validate(&self) -> Result<()> {
        for (index, provider) in self.providers.iter().enumerate() {
            provider
                .validate()
                .map_err(|source| PersistenceError::InvalidProvider { index, source })?;
        }
        for (index, launch) in self.launches.iter().enumerate() {
            launch
                .validate()
                .map_err(|source| PersistenceError::InvalidRecord { index, source })?;
        }
        Ok(())
    }
}

/// Launch source reading a [`SnapshotDocument`] from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileLaunchSource {
    path: PathBuf,
}

impl JsonFileLaunchSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the whole document.
    pub fn read_document(&self) -> Result<SnapshotDocument> {
        let file = File::open(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Snapshot file unavailable");
            PersistenceError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;

        let document: SnapshotDocument = serde_json::from_reader(BufReader::new(file))?;
        document.validate()?;

        debug!(
            path = %self.path.display(),
            launches = document.launches.len(),
            providers = document.providers.len(),
            "Loaded launch snapshot"
        );
        Ok(document)
    }

    /// Write a document, replacing any existing file.
    pub fn write_document(&self, document: &SnapshotDocument) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, document)?;
        Ok(())
    }
}

impl LaunchSource for JsonFileLaunchSource {
    fn load_all_launches(&self) -> Result<Vec<Launch>> {
        Ok(self.read_document()?.launches)
    }

    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        let document = self.read_document()?;
        if document.providers.is_empty() {
            return Ok(distinct_providers(&document.launches));
        }
        Ok(document.providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use launch_domain::{DomainError, LaunchOutcome, Rocket};
    use rust_decimal::Decimal;
    use std::io::Write;

    fn sample_document() -> SnapshotDocument {
        let spacex = LaunchServiceProvider::new("SpaceX", 2002, "USA").unwrap();
        let rocket = Rocket::new("Falcon 9", "USA", spacex.clone()).unwrap();
        let launch = Launch::new(
            NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
            rocket,
            spacex.clone(),
            Decimal::new(6_200, 2),
            LaunchOutcome::Successful,
            "LEO",
        )
        .unwrap()
        .with_launch_site("VAFB");

        SnapshotDocument {
            providers: vec![spacex],
            launches: vec![launch],
        }
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileLaunchSource::new(dir.path().join("launches.json"));
        let document = sample_document();

        source.write_document(&document).unwrap();

        assert_eq!(source.load_all_launches().unwrap(), document.launches);
        assert_eq!(source.load_all_providers().unwrap(), document.providers);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileLaunchSource::new(dir.path().join("absent.json"));

        let err = source.load_all_launches().unwrap_err();
        assert!(matches!(err, PersistenceError::Unavailable(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"launches\": [ 42 ] }}").unwrap();

        let source = JsonFileLaunchSource::new(file.path());
        let err = source.load_all_launches().unwrap_err();
        assert!(matches!(err, PersistenceError::Serialization(_)));
    }

    #[test]
    fn test_negative_price_is_rejected_with_index() {
        let mut document = sample_document();
        let mut bad = document.launches[0].clone();
        bad.price = Decimal::new(-5, 0);
        document.launches.push(bad);

        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileLaunchSource::new(dir.path().join("launches.json"));
        source.write_document(&document).unwrap();

        let err = source.load_all_launches().unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_unnamed_provider_is_rejected_with_index() {
        let mut document = sample_document();
        let mut unnamed = document.providers[0].clone();
        unnamed.name = String::new();
        document.providers.push(unnamed);

        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileLaunchSource::new(dir.path().join("launches.json"));
        source.write_document(&document).unwrap();

        let err = source.load_all_providers().unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::InvalidProvider {
                index: 1,
                source: DomainError::MissingField { field: "name", .. }
            }
        ));
        assert!(source.load_all_launches().is_err());
    }

    #[test]
    fn test_providers_fall_back_to_launches() {
        let mut document = sample_document();
        document.providers.clear();

        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileLaunchSource::new(dir.path().join("launches.json"));
        source.write_document(&document).unwrap();

        let providers = source.load_all_providers().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name, "SpaceX");
    }
}
