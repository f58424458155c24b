use crate::utils::config::{Settings, DEFAULT_API_KEY_ENV};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Arguments for the report command
///
/// Filters stay as raw strings until `validate_args` parses them, so a bad
/// value from either the CLI or the settings file is reported the same way.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Player whose rounds are analysed
    pub user_id: String,

    /// JSON snapshot file (file source)
    pub snapshot: Option<PathBuf>,

    /// Backend base URL (REST source)
    pub url: Option<String>,

    /// Backend API key
    pub api_key: Option<String>,

    /// 3m, 6m, 12m or all
    pub time_range: String,

    /// Course name or "all"
    pub course: String,

    /// Tee club or "all"
    pub tee_club: String,

    /// Approach club or "all"
    pub approach_club: String,

    /// pitch, chip, bunker or "all"
    pub shot_type: String,

    /// Clubs in bag order, for sorting the club lists
    pub bag_order: Vec<String>,

    /// Reference time for range cutoffs (None = now)
    pub now: Option<DateTime<Utc>>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            snapshot: None,
            url: None,
            api_key: None,
            time_range: "12m".to_string(),
            course: "all".to_string(),
            tee_club: "all".to_string(),
            approach_club: "all".to_string(),
            shot_type: "all".to_string(),
            bag_order: Settings::default().bag.order,
            now: None,
            output_json: Some(PathBuf::from("report.json")),
            print_summary: false,
        }
    }
}

impl ReportArgs {
    /// Defaults taken from a settings file; CLI flags are applied on top
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        let filters = &settings.filters;
        let api_key_env = settings
            .source
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV);

        Self {
            user_id: settings.source.user_id.clone().unwrap_or_default(),
            snapshot: settings.source.snapshot.clone(),
            url: settings.source.url.clone(),
            api_key: std::env::var(api_key_env).ok(),
            time_range: filters.time_range.clone().unwrap_or(defaults.time_range),
            course: filters.course.clone().unwrap_or(defaults.course),
            tee_club: filters.tee_club.clone().unwrap_or(defaults.tee_club),
            approach_club: filters.approach_club.clone().unwrap_or(defaults.approach_club),
            shot_type: filters.shot_type.clone().unwrap_or(defaults.shot_type),
            bag_order: settings.bag.order.clone(),
            ..defaults
        }
    }
}
