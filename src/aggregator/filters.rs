//! Time-range and value filters selected in the stats screens.

use crate::model::ShotType;
use chrono::{DateTime, Months, Utc};
use std::fmt;
use std::str::FromStr;

/// Period the round aggregator looks back over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Last3Months,
    Last6Months,
    #[default]
    Last12Months,
    AllTime,
}

impl TimeRange {
    pub fn months(self) -> Option<u32> {
        match self {
            TimeRange::Last3Months => Some(3),
            TimeRange::Last6Months => Some(6),
            TimeRange::Last12Months => Some(12),
            TimeRange::AllTime => None,
        }
    }

    /// Earliest `played_at` still inside the range, or `None` for all-time
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.months().map(|months| {
            now.checked_sub_months(Months::new(months))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Last3Months => "3m",
            TimeRange::Last6Months => "6m",
            TimeRange::Last12Months => "12m",
            TimeRange::AllTime => "all",
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "3m" => Ok(TimeRange::Last3Months),
            "6m" => Ok(TimeRange::Last6Months),
            "12m" => Ok(TimeRange::Last12Months),
            "all" | "all-time" => Ok(TimeRange::AllTime),
            other => Err(format!(
                "unknown time range '{}' (expected 3m, 6m, 12m or all)",
                other
            )),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either every value, or exactly one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// A missing value only passes the `All` filter
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => value == Some(wanted),
        }
    }
}

impl Filter<String> {
    pub fn matches_name(&self, value: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

pub type CourseFilter = Filter<String>;
pub type ClubFilter = Filter<String>;
pub type ShotTypeFilter = Filter<ShotType>;

/// Parse "all", "pitch", "chip" or "bunker"
pub fn parse_shot_type_filter(s: &str) -> Result<ShotTypeFilter, String> {
    s.parse()
}
