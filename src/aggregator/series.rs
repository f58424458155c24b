//! Monthly metric series.
//!
//! Buckets appear in the order their first round is seen, not in calendar
//! order. Callers are expected to hand rounds over oldest first; unsorted
//! input yields out-of-order months, and that is left alone here.

use super::tally::Tally;
use crate::model::{Metric, RoundWithHoles, TimeSeries};
use chrono::{DateTime, Datelike, Utc};
use log::debug;
use std::collections::HashMap;

/// Short month label, e.g. "Jan 24"
pub fn month_label(date: DateTime<Utc>) -> String {
    date.format("%b %y").to_string()
}

struct MonthBucket {
    label: String,
    tally: Tally,
}

/// Build one series per metric from rounds grouped by calendar month (UTC)
///
/// Rounds with neither `played_at` nor `created_at` join no bucket.
pub fn build_time_series(rounds: &[&RoundWithHoles]) -> TimeSeries {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut slots: HashMap<(i32, u32), usize> = HashMap::new();

    for round in rounds {
        let Some(date) = round.round.bucket_date() else {
            debug!("Round {} has no date, left out of the series", round.round.id);
            continue;
        };

        let slot = *slots.entry((date.year(), date.month())).or_insert_with(|| {
            buckets.push(MonthBucket {
                label: month_label(date),
                tally: Tally::default(),
            });
            buckets.len() - 1
        });

        buckets[slot].tally.add_round(round);
    }

    debug!("Grouped {} rounds into {} months", rounds.len(), buckets.len());

    let mut series = TimeSeries::default();
    for bucket in &buckets {
        for metric in Metric::ALL {
            series.push(metric, &bucket.label, bucket.tally.value(metric));
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HoleStat, Round};
    use chrono::TimeZone;

    fn round_on(id: &str, year: i32, month: u32, total: i32) -> RoundWithHoles {
        RoundWithHoles::new(
            Round {
                id: id.to_string(),
                total_score: Some(total),
                played_at: Some(Utc.with_ymd_and_hms(year, month, 10, 8, 0, 0).unwrap()),
                ..Default::default()
            },
            vec![],
        )
    }

    #[test]
    fn test_month_label() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(month_label(date), "Jan 24");
    }

    #[test]
    fn test_buckets_follow_input_order() {
        let march = round_on("a", 2024, 3, 80);
        let january = round_on("b", 2024, 1, 90);
        let march_again = round_on("c", 2024, 3, 84);

        let series = build_time_series(&[&march, &january, &march_again]);

        let labels: Vec<&str> = series.avg_score.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mar 24", "Jan 24"]);
        assert_eq!(series.avg_score[0].value, 82.0);
        assert_eq!(series.avg_score[1].value, 90.0);
    }

    #[test]
    fn test_metric_without_data_is_omitted() {
        let mut with_putts = round_on("a", 2024, 5, 88);
        with_putts.holes.push(HoleStat {
            hole_number: 1,
            putts: Some(2),
            ..Default::default()
        });
        let without_putts = round_on("b", 2024, 6, 86);

        let series = build_time_series(&[&with_putts, &without_putts]);

        assert_eq!(series.avg_score.len(), 2);
        assert_eq!(series.avg_putts.len(), 1);
        assert_eq!(series.avg_putts[0].label, "May 24");
        assert!(series.fir_percent.is_empty());
    }

    #[test]
    fn test_created_at_fallback() {
        let round = RoundWithHoles::new(
            Round {
                id: "x".to_string(),
                total_score: Some(79),
                created_at: Some(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()),
                ..Default::default()
            },
            vec![],
        );

        let series = build_time_series(&[&round]);
        assert_eq!(series.avg_score[0].label, "Dec 23");
    }
}
