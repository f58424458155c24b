//! Snapshot exported to a JSON file.
//!
//! Expected layout: `{ "rounds": [...], "holes": [...] }` with rows shaped
//! like the `rounds` and `hole_stats` tables.

use super::RoundSource;
use crate::model::Snapshot;
use crate::utils::error::DataFetchError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Reads rounds from a JSON snapshot on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RoundSource for FileSource {
    fn fetch_snapshot(&self, user_id: &str) -> Result<Snapshot, DataFetchError> {
        info!("Reading snapshot: {}", self.path.display());

        let file = File::open(&self.path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;

        debug!(
            "Snapshot holds {} rounds and {} holes",
            snapshot.rounds.len(),
            snapshot.holes.len()
        );

        Ok(snapshot.for_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_fetch_error() {
        let source = FileSource::new("/definitely/not/here.json");
        let result = source.fetch_snapshot("u1");
        assert!(matches!(result, Err(DataFetchError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_fetch_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = FileSource::new(file.path());
        let result = source.fetch_snapshot("u1");
        assert!(matches!(result, Err(DataFetchError::Json(_))));
    }
}
