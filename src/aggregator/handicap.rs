//! Trackd Handicap: a rolling skill index over recent rounds.
//!
//! Each recent round yields a differential (total score minus the par of the
//! holes recorded for it). The index is the mean of the best few
//! differentials, with "few" growing as more rounds become available.

use super::math::round_to_tenth;
use crate::model::{HandicapResult, RoundWithHoles};
use crate::utils::config::{HANDICAP_ROUND_WINDOW, MIN_DIFFERENTIALS};
use log::debug;
use std::cmp::Reverse;

/// Up to `limit` rounds, most recently played first
///
/// Rounds without `played_at` sort after all dated rounds.
pub fn most_recent_rounds(rounds: &[RoundWithHoles], limit: usize) -> Vec<&RoundWithHoles> {
    let mut recent: Vec<&RoundWithHoles> = rounds.iter().collect();
    recent.sort_by_key(|r| (r.round.played_at.is_none(), Reverse(r.round.played_at)));
    recent.truncate(limit);
    recent
}

/// Total score minus course par, when both are known
pub fn differential(round: &RoundWithHoles) -> Option<i32> {
    let total = round.round.total_score?;
    let par = round.course_par()?;
    Some(total - par)
}

/// How many of the best differentials count towards the index
pub fn best_count(available: usize) -> usize {
    match available {
        n if n >= 20 => 8,
        n if n >= 13 => 6,
        n if n >= 7 => 5,
        _ => 3,
    }
}

/// Index from a set of differentials, in any order
pub fn handicap_from_differentials(differentials: &[i32]) -> HandicapResult {
    let available = differentials.len();

    if available < MIN_DIFFERENTIALS {
        return HandicapResult {
            handicap: None,
            rounds_used: available,
            rounds_available: available,
        };
    }

    let mut sorted = differentials.to_vec();
    sorted.sort_unstable();

    let used = best_count(available);
    let best: i64 = sorted.iter().take(used).map(|d| i64::from(*d)).sum();

    HandicapResult {
        handicap: Some(round_to_tenth(best as f64 / used as f64)),
        rounds_used: used,
        rounds_available: available,
    }
}

/// Compute the handicap from a player's rounds
///
/// Only the most recent rounds are considered; see `HANDICAP_ROUND_WINDOW`.
pub fn compute_handicap(rounds: &[RoundWithHoles]) -> HandicapResult {
    let recent = most_recent_rounds(rounds, HANDICAP_ROUND_WINDOW);
    let differentials: Vec<i32> = recent.iter().filter_map(|r| differential(r)).collect();

    debug!(
        "Handicap: {} recent rounds, {} with a differential",
        recent.len(),
        differentials.len()
    );

    handicap_from_differentials(&differentials)
}

/// Display form of a handicap: better-than-scratch values read "+2.3"
pub fn format_handicap(handicap: Option<f64>) -> String {
    match handicap {
        None => "N/A".to_string(),
        Some(value) if value < 0.0 => format!("+{:.1}", value.abs()),
        Some(value) => format!("{:.1}", value.abs()),
    }
}
