//! Readers for the persisted rounds and holes.
//!
//! The engine never talks to storage itself. A `RoundSource` hands over one
//! immutable snapshot per computation; any failure comes back as a
//! `DataFetchError` and is passed up untouched, with no retries.

pub mod file;
pub mod rest;
pub mod types;

pub use file::FileSource;
pub use rest::RestSource;

use crate::model::Snapshot;
use crate::utils::error::DataFetchError;

/// Anything that can produce a player's rounds and holes
pub trait RoundSource {
    /// Read every round owned by `user_id` and the holes belonging to them
    fn fetch_snapshot(&self, user_id: &str) -> Result<Snapshot, DataFetchError>;
}

impl RoundSource for Snapshot {
    fn fetch_snapshot(&self, user_id: &str) -> Result<Snapshot, DataFetchError> {
        Ok(self.clone().for_user(user_id))
    }
}
