//! Fetch-then-compute entry points.
//!
//! Each call does a single read from the source and recomputes from scratch.
//! Fetch failures are returned as-is; there is no fallback value.

use crate::aggregator::{
    compute_dispersion, compute_handicap, compute_round_stats, DispersionQuery, RoundQuery,
};
use crate::model::{
    AppliedFilters, DispersionStats, HandicapResult, RoundStatsReport, Snapshot, StatsReport,
};
use crate::source::RoundSource;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::DataFetchError;
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

/// Everything needed for a combined report
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub rounds: RoundQuery,
    pub dispersion: DispersionQuery,
    pub bag_order: Vec<String>,
}

fn fetch<S: RoundSource + ?Sized>(source: &S, user_id: &str) -> Result<Snapshot, DataFetchError> {
    let snapshot = source.fetch_snapshot(user_id)?;
    info!(
        "Loaded {} rounds / {} holes for user {}",
        snapshot.rounds.len(),
        snapshot.holes.len(),
        user_id
    );
    Ok(snapshot)
}

fn round_stats_from(snapshot: &Snapshot, query: &RoundQuery, now: DateTime<Utc>) -> RoundStatsReport {
    compute_round_stats(&snapshot.rounds_by_play_date(), query, now)
}

fn handicap_from(snapshot: &Snapshot) -> HandicapResult {
    compute_handicap(&snapshot.rounds_with_holes())
}

/// Period summary and monthly series for one player
pub fn load_round_stats<S: RoundSource + ?Sized>(
    source: &S,
    user_id: &str,
    query: &RoundQuery,
    now: DateTime<Utc>,
) -> Result<RoundStatsReport, DataFetchError> {
    let snapshot = fetch(source, user_id)?;
    Ok(round_stats_from(&snapshot, query, now))
}

/// Dispersion breakdown for one player, club lists sorted by `bag_order`
pub fn load_dispersion<S: RoundSource + ?Sized>(
    source: &S,
    user_id: &str,
    query: &DispersionQuery,
    bag_order: &[String],
) -> Result<DispersionStats, DataFetchError> {
    let snapshot = fetch(source, user_id)?;
    Ok(compute_dispersion(&snapshot.holes, query, bag_order))
}

/// Current Trackd Handicap for one player
pub fn load_handicap<S: RoundSource + ?Sized>(
    source: &S,
    user_id: &str,
) -> Result<HandicapResult, DataFetchError> {
    let snapshot = fetch(source, user_id)?;
    Ok(handicap_from(&snapshot))
}

/// All three computations over one snapshot read
pub fn load_report<S: RoundSource + ?Sized>(
    source: &S,
    user_id: &str,
    request: &ReportRequest,
    now: DateTime<Utc>,
) -> Result<StatsReport, DataFetchError> {
    let snapshot = fetch(source, user_id)?;

    Ok(StatsReport {
        version: SCHEMA_VERSION.to_string(),
        user_id: user_id.to_string(),
        generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        filters: AppliedFilters {
            time_range: request.rounds.time_range.to_string(),
            course: request.rounds.course.to_string(),
            tee_club: request.dispersion.tee_club.to_string(),
            approach_club: request.dispersion.approach_club.to_string(),
            shot_type: request.dispersion.shot_type.to_string(),
        },
        rounds: round_stats_from(&snapshot, &request.rounds, now),
        dispersion: compute_dispersion(&snapshot.holes, &request.dispersion, &request.bag_order),
        handicap: handicap_from(&snapshot),
    })
}
