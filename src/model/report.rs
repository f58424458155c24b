//! Derived statistics handed to the presentation layer.
//!
//! Nothing here is persisted. Field names serialize in camelCase to match
//! what the app screens consume, and `None` always serializes as `null`:
//! an absent metric is never reported as zero.

use serde::{Deserialize, Serialize};

/// Period summary produced by the round aggregator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub total_rounds: usize,
    pub best_score: Option<i32>,
    pub avg_score: Option<f64>,
    /// Strokes over par per 18 holes
    pub avg_over_par: Option<f64>,
    pub avg_putts: Option<f64>,
    pub fir_percent: Option<u32>,
    pub gir_percent: Option<u32>,
    pub scramble_percent: Option<u32>,
    /// Every course the player has a round at, ignoring filters
    pub courses: Vec<String>,
}

/// One month in a metric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Short month and year, e.g. "Jan 24"
    pub label: String,
    pub value: f64,
}

/// Metrics that get a monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    AvgScore,
    AvgOverPar,
    AvgPutts,
    FirPercent,
    GirPercent,
    ScramblePercent,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::AvgScore,
        Metric::AvgOverPar,
        Metric::AvgPutts,
        Metric::FirPercent,
        Metric::GirPercent,
        Metric::ScramblePercent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::AvgScore => "Avg Score",
            Metric::AvgOverPar => "Avg +/- Par",
            Metric::AvgPutts => "Avg Putts",
            Metric::FirPercent => "FIR %",
            Metric::GirPercent => "GIR %",
            Metric::ScramblePercent => "Scramble %",
        }
    }
}

/// Per-metric monthly series. Months without data for a metric are absent
/// from that metric's list rather than present with a null value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub avg_score: Vec<SeriesPoint>,
    pub avg_over_par: Vec<SeriesPoint>,
    pub avg_putts: Vec<SeriesPoint>,
    pub fir_percent: Vec<SeriesPoint>,
    pub gir_percent: Vec<SeriesPoint>,
    pub scramble_percent: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn get(&self, metric: Metric) -> &[SeriesPoint] {
        match metric {
            Metric::AvgScore => &self.avg_score,
            Metric::AvgOverPar => &self.avg_over_par,
            Metric::AvgPutts => &self.avg_putts,
            Metric::FirPercent => &self.fir_percent,
            Metric::GirPercent => &self.gir_percent,
            Metric::ScramblePercent => &self.scramble_percent,
        }
    }

    fn get_mut(&mut self, metric: Metric) -> &mut Vec<SeriesPoint> {
        match metric {
            Metric::AvgScore => &mut self.avg_score,
            Metric::AvgOverPar => &mut self.avg_over_par,
            Metric::AvgPutts => &mut self.avg_putts,
            Metric::FirPercent => &mut self.fir_percent,
            Metric::GirPercent => &mut self.gir_percent,
            Metric::ScramblePercent => &mut self.scramble_percent,
        }
    }

    /// Append a point, skipping it entirely when there is no value
    pub fn push(&mut self, metric: Metric, label: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.get_mut(metric).push(SeriesPoint {
                label: label.to_string(),
                value,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.get(*m).is_empty())
    }
}

/// Round aggregator output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundStatsReport {
    pub stats: RoundStats,
    pub series: TimeSeries,
}

/// Tee shot direction split, as whole percentages of `total`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeShotStats {
    pub total: usize,
    pub fw_hit: u32,
    pub left: u32,
    pub right: u32,
    pub short: u32,
}

/// Approach direction split, as whole percentages of `total`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachStats {
    pub total: usize,
    pub on_green: u32,
    pub long: u32,
    pub left: u32,
    pub right: u32,
    pub short: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubScramble {
    pub club: String,
    pub attempts: usize,
    pub successes: usize,
    pub success_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrambleStats {
    /// Scramble attempts matching the shot-type filter, with or without a club
    pub total: usize,
    /// Ranked best success rate first
    pub clubs: Vec<ClubScramble>,
}

/// Dispersion analyzer output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionStats {
    pub tee_shots: TeeShotStats,
    pub approach: ApproachStats,
    pub scramble: ScrambleStats,
    pub tee_clubs: Vec<String>,
    pub approach_clubs: Vec<String>,
}

/// Handicap engine output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandicapResult {
    pub handicap: Option<f64>,
    pub rounds_used: usize,
    pub rounds_available: usize,
}

/// Filters a report was computed with, echoed for readers of the JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub time_range: String,
    pub course: String,
    pub tee_club: String,
    pub approach_club: String,
    pub shot_type: String,
}

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,
    pub user_id: String,
    /// RFC 3339 time the cutoffs were computed against
    pub generated_at: String,
    pub filters: AppliedFilters,
    pub rounds: RoundStatsReport,
    pub dispersion: DispersionStats,
    pub handicap: HandicapResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_missing_values() {
        let mut series = TimeSeries::default();
        series.push(Metric::AvgPutts, "Jan 24", None);
        series.push(Metric::AvgPutts, "Feb 24", Some(1.8));

        assert_eq!(series.get(Metric::AvgPutts).len(), 1);
        assert_eq!(series.get(Metric::AvgPutts)[0].label, "Feb 24");
        assert!(series.get(Metric::AvgScore).is_empty());
    }

    #[test]
    fn test_round_stats_serialize_nulls() {
        let json = serde_json::to_value(RoundStats::default()).unwrap();
        assert_eq!(json["totalRounds"], 0);
        assert!(json["avgOverPar"].is_null());
        assert!(json["firPercent"].is_null());
    }
}
