//! Configuration and constants for the engine and CLI.

use crate::aggregator::filters::TimeRange;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for backend requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Over-par totals are expressed per 18 holes regardless of how many holes were played
pub const HOLES_PER_ROUND: f64 = 18.0;

/// Number of most recent rounds the handicap looks at
pub const HANDICAP_ROUND_WINDOW: usize = 20;

/// Fewer differentials than this and there is no handicap
pub const MIN_DIFFERENTIALS: usize = 3;

/// Environment variable consulted for the backend API key
pub const DEFAULT_API_KEY_ENV: &str = "TRACKD_API_KEY";

/// Bag order used when the settings file does not provide one
pub const DEFAULT_BAG_ORDER: &[&str] = &[
    "Driver", "3W", "5W", "7W", "Hybrid", "3i", "4i", "5i", "6i", "7i", "8i", "9i", "PW", "GW",
    "SW", "LW", "Putter",
];

/// Settings file contents
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Where rounds come from
    #[serde(default)]
    pub source: SourceSettings,

    /// Default filters applied when the CLI does not override them
    #[serde(default)]
    pub filters: FilterSettings,

    /// The player's bag
    #[serde(default)]
    pub bag: BagSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceSettings {
    /// JSON snapshot file
    pub snapshot: Option<PathBuf>,

    /// Backend base URL
    pub url: Option<String>,

    /// Name of the environment variable holding the API key
    pub api_key_env: Option<String>,

    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterSettings {
    pub time_range: Option<String>,
    pub course: Option<String>,
    pub tee_club: Option<String>,
    pub approach_club: Option<String>,
    pub shot_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BagSettings {
    /// Clubs in the order they sit in the bag
    #[serde(default = "default_bag_order")]
    pub order: Vec<String>,
}

impl Default for BagSettings {
    fn default() -> Self {
        Self {
            order: default_bag_order(),
        }
    }
}

fn default_bag_order() -> Vec<String> {
    DEFAULT_BAG_ORDER.iter().map(|c| c.to_string()).collect()
}

impl Settings {
    /// Reject settings that would only fail later, once rounds are loaded
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.snapshot.is_some() && self.source.url.is_some() {
            return Err(ConfigError::Invalid(
                "source.snapshot and source.url are mutually exclusive".to_string(),
            ));
        }

        if let Some(range) = &self.filters.time_range {
            range
                .parse::<TimeRange>()
                .map_err(|e| ConfigError::Invalid(format!("filters.time_range: {}", e)))?;
        }

        if let Some(shot_type) = &self.filters.shot_type {
            crate::aggregator::filters::parse_shot_type_filter(shot_type)
                .map_err(|e| ConfigError::Invalid(format!("filters.shot_type: {}", e)))?;
        }

        Ok(())
    }
}

/// Load settings from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If values are inconsistent
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    debug!("Loading settings from: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;
    settings.validate()?;

    Ok(settings)
}
