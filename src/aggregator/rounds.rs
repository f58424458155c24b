//! Period summary of a player's rounds.
//!
//! Selects rounds by time range and course, then reduces their holes into
//! the headline numbers shown on the stats screen plus a monthly series for
//! each of them.

use super::filters::{CourseFilter, TimeRange};
use super::series::build_time_series;
use super::tally::Tally;
use crate::model::{RoundStats, RoundStatsReport, RoundWithHoles, TimeSeries};
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashSet;

/// Filters for the round aggregator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundQuery {
    pub time_range: TimeRange,
    pub course: CourseFilter,
}

/// Distinct course names across all rounds, first occurrence first
pub fn course_names(rounds: &[RoundWithHoles]) -> Vec<String> {
    let mut seen = HashSet::new();
    rounds
        .iter()
        .map(|r| r.round.course_name.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Rounds inside the query's time range and course, in input order
///
/// With a cutoff in force, rounds without `played_at` are left out.
pub fn filter_rounds<'a>(
    rounds: &'a [RoundWithHoles],
    query: &RoundQuery,
    now: DateTime<Utc>,
) -> Vec<&'a RoundWithHoles> {
    let cutoff = query.time_range.cutoff(now);

    rounds
        .iter()
        .filter(|r| match cutoff {
            Some(cutoff) => r.round.played_at.is_some_and(|played| played >= cutoff),
            None => true,
        })
        .filter(|r| query.course.matches_name(Some(&r.round.course_name)))
        .collect()
}

/// Compute the period summary and its monthly series
///
/// `rounds` is the player's whole history; `now` anchors the time range.
/// When nothing matches, every metric is `None` but `courses` is still
/// filled so the course picker keeps its options.
pub fn compute_round_stats(
    rounds: &[RoundWithHoles],
    query: &RoundQuery,
    now: DateTime<Utc>,
) -> RoundStatsReport {
    let courses = course_names(rounds);
    let selected = filter_rounds(rounds, query, now);

    debug!(
        "Round aggregator: {} of {} rounds match range={} course={}",
        selected.len(),
        rounds.len(),
        query.time_range,
        query.course
    );

    if selected.is_empty() {
        return RoundStatsReport {
            stats: RoundStats {
                courses,
                ..Default::default()
            },
            series: TimeSeries::default(),
        };
    }

    let mut tally = Tally::default();
    for round in &selected {
        tally.add_round(round);
    }

    RoundStatsReport {
        stats: tally.to_stats(courses),
        series: build_time_series(&selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::filters::Filter;
    use crate::model::{HoleStat, Round};
    use chrono::{Duration, TimeZone};

    fn round(id: &str, course: &str, month: u32) -> RoundWithHoles {
        RoundWithHoles::new(
            Round {
                id: id.to_string(),
                course_name: course.to_string(),
                total_score: Some(80 + month as i32),
                played_at: Some(Utc.with_ymd_and_hms(2024, month, 1, 12, 0, 0).unwrap()),
                ..Default::default()
            },
            vec![HoleStat {
                round_id: id.to_string(),
                hole_number: 1,
                par: Some(4),
                score: Some(5),
                ..Default::default()
            }],
        )
    }

    #[test]
    fn test_course_names_distinct() {
        let rounds = vec![round("a", "Links", 1), round("b", "Park", 2), round("c", "Links", 3)];
        assert_eq!(course_names(&rounds), vec!["Links", "Park"]);
    }

    #[test]
    fn test_filter_by_range_and_course() {
        let rounds = vec![round("a", "Links", 1), round("b", "Park", 5), round("c", "Links", 6)];
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();

        let query = RoundQuery {
            time_range: TimeRange::Last3Months,
            course: Filter::All,
        };
        let ids: Vec<&str> = filter_rounds(&rounds, &query, now)
            .iter()
            .map(|r| r.round.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);

        let query = RoundQuery {
            time_range: TimeRange::AllTime,
            course: Filter::Only("Links".to_string()),
        };
        assert_eq!(filter_rounds(&rounds, &query, now).len(), 2);
    }

    #[test]
    fn test_undated_round_only_in_all_time() {
        let mut undated = round("u", "Links", 1);
        undated.round.played_at = None;
        let rounds = vec![undated];
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();

        let recent = RoundQuery {
            time_range: TimeRange::Last12Months,
            course: Filter::All,
        };
        assert!(filter_rounds(&rounds, &recent, now).is_empty());

        let all = RoundQuery {
            time_range: TimeRange::AllTime,
            course: Filter::All,
        };
        assert_eq!(filter_rounds(&rounds, &all, now).len(), 1);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 30, 0).unwrap();
        let cutoff = TimeRange::Last3Months.cutoff(now).unwrap();

        let mut on_cutoff = round("on", "Links", 4);
        on_cutoff.round.played_at = Some(cutoff);
        let mut just_before = round("before", "Links", 4);
        just_before.round.played_at = Some(cutoff - Duration::seconds(1));
        let rounds = vec![on_cutoff, just_before];

        let query = RoundQuery {
            time_range: TimeRange::Last3Months,
            course: Filter::All,
        };
        let ids: Vec<&str> = filter_rounds(&rounds, &query, now)
            .iter()
            .map(|r| r.round.id.as_str())
            .collect();
        assert_eq!(ids, vec!["on"]);
    }
}
