//! Shot dispersion and scramble club breakdowns.
//!
//! Works on every hole the player has recorded, independent of the round
//! filters. Direction splits are whole percentages rounded one by one, so a
//! split may add up to 99 or 101.

use super::filters::{ClubFilter, ShotTypeFilter};
use super::math::percent;
use crate::model::{
    ApproachStats, ClubScramble, DispersionStats, FairwayDirection, GreenDirection, HoleStat,
    ScrambleOutcome, ScrambleStats, TeeShotStats,
};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Filters for the dispersion analyzer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispersionQuery {
    pub tee_club: ClubFilter,
    pub approach_club: ClubFilter,
    pub shot_type: ShotTypeFilter,
}

/// Tee shot direction split for one club or all of them
pub fn tee_dispersion(holes: &[HoleStat], club: &ClubFilter) -> TeeShotStats {
    let directions: Vec<FairwayDirection> = holes
        .iter()
        .filter(|h| club.matches_name(h.tee_club.as_deref()))
        .filter_map(|h| h.fir_direction)
        .collect();

    let total = directions.len();
    let share = |wanted: FairwayDirection| {
        let count = directions.iter().filter(|d| **d == wanted).count();
        percent(count, total).unwrap_or(0)
    };

    TeeShotStats {
        total,
        fw_hit: share(FairwayDirection::Hit),
        left: share(FairwayDirection::Left),
        right: share(FairwayDirection::Right),
        short: share(FairwayDirection::Short),
    }
}

/// Approach direction split for one club or all of them
pub fn approach_dispersion(holes: &[HoleStat], club: &ClubFilter) -> ApproachStats {
    let directions: Vec<GreenDirection> = holes
        .iter()
        .filter(|h| club.matches_name(h.approach_club.as_deref()))
        .filter_map(|h| h.gir_direction)
        .collect();

    let total = directions.len();
    let share = |wanted: GreenDirection| {
        let count = directions.iter().filter(|d| **d == wanted).count();
        percent(count, total).unwrap_or(0)
    };

    ApproachStats {
        total,
        on_green: share(GreenDirection::Hit),
        long: share(GreenDirection::Long),
        left: share(GreenDirection::Left),
        right: share(GreenDirection::Right),
        short: share(GreenDirection::Short),
    }
}

/// Scramble success per recovery club, best rate first
///
/// Ties on rate go to the club with more attempts, then alphabetically.
/// Attempts without a recorded club (missing or blank) count towards `total` only.
pub fn scramble_ranking(holes: &[HoleStat], shot_type: &ShotTypeFilter) -> ScrambleStats {
    let attempts: Vec<&HoleStat> = holes
        .iter()
        .filter(|h| h.scramble.is_some_and(ScrambleOutcome::is_attempt))
        .filter(|h| shot_type.matches(h.scramble_shot_type.as_ref()))
        .collect();

    let mut clubs: Vec<ClubScramble> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for hole in &attempts {
        let Some(club) = hole.scramble_club.as_deref().filter(|c| !is_blank(c)) else {
            continue;
        };

        let slot = *slots.entry(club).or_insert_with(|| {
            clubs.push(ClubScramble {
                club: club.to_string(),
                attempts: 0,
                successes: 0,
                success_rate: 0,
            });
            clubs.len() - 1
        });

        let entry = &mut clubs[slot];
        entry.attempts += 1;
        if hole.scramble == Some(ScrambleOutcome::Yes) {
            entry.successes += 1;
        }
    }

    for entry in &mut clubs {
        entry.success_rate = percent(entry.successes, entry.attempts).unwrap_or(0);
    }

    clubs.sort_by(|a, b| {
        b.success_rate
            .cmp(&a.success_rate)
            .then_with(|| b.attempts.cmp(&a.attempts))
            .then_with(|| a.club.cmp(&b.club))
    });

    ScrambleStats {
        total: attempts.len(),
        clubs,
    }
}

/// Distinct non-empty club names, first occurrence first
pub fn distinct_clubs<'a>(clubs: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    clubs
        .flatten()
        .filter(|club| !is_blank(club))
        .filter(|club| seen.insert(*club))
        .map(str::to_string)
        .collect()
}

fn is_blank(club: &str) -> bool {
    club.trim().is_empty()
}

/// Order clubs as they sit in the bag; clubs missing from the bag go last
/// and keep their relative order
pub fn sort_by_bag_order(clubs: &mut [String], bag_order: &[String]) {
    clubs.sort_by_key(|club| {
        bag_order
            .iter()
            .position(|c| c == club)
            .unwrap_or(usize::MAX)
    });
}

/// Run the full dispersion analysis over a player's holes
pub fn compute_dispersion(
    holes: &[HoleStat],
    query: &DispersionQuery,
    bag_order: &[String],
) -> DispersionStats {
    debug!(
        "Dispersion analyzer: {} holes, tee={} approach={} shot={}",
        holes.len(),
        query.tee_club,
        query.approach_club,
        query.shot_type
    );

    let mut tee_clubs = distinct_clubs(holes.iter().map(|h| h.tee_club.as_deref()));
    let mut approach_clubs = distinct_clubs(holes.iter().map(|h| h.approach_club.as_deref()));
    sort_by_bag_order(&mut tee_clubs, bag_order);
    sort_by_bag_order(&mut approach_clubs, bag_order);

    DispersionStats {
        tee_shots: tee_dispersion(holes, &query.tee_club),
        approach: approach_dispersion(holes, &query.approach_club),
        scramble: scramble_ranking(holes, &query.shot_type),
        tee_clubs,
        approach_clubs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::filters::Filter;
    use crate::model::ShotType;

    fn tee(direction: FairwayDirection, club: &str) -> HoleStat {
        HoleStat {
            fir_direction: Some(direction),
            tee_club: Some(club.to_string()),
            ..Default::default()
        }
    }

    fn scramble(outcome: ScrambleOutcome, club: Option<&str>, shot: ShotType) -> HoleStat {
        HoleStat {
            gir: Some(false),
            scramble: Some(outcome),
            scramble_club: club.map(str::to_string),
            scramble_shot_type: Some(shot),
            ..Default::default()
        }
    }

    #[test]
    fn test_tee_dispersion_club_filter() {
        let holes = vec![
            tee(FairwayDirection::Hit, "Driver"),
            tee(FairwayDirection::Left, "Driver"),
            tee(FairwayDirection::Right, "3W"),
        ];

        let driver = tee_dispersion(&holes, &Filter::Only("Driver".to_string()));
        assert_eq!(driver.total, 2);
        assert_eq!(driver.fw_hit, 50);
        assert_eq!(driver.right, 0);
    }

    #[test]
    fn test_empty_dispersion_is_zero() {
        let stats = approach_dispersion(&[], &Filter::All);
        assert_eq!(stats, ApproachStats::default());
    }

    #[test]
    fn test_independent_rounding() {
        let holes = vec![
            tee(FairwayDirection::Hit, "Driver"),
            tee(FairwayDirection::Left, "Driver"),
            tee(FairwayDirection::Right, "Driver"),
        ];
        let stats = tee_dispersion(&holes, &Filter::All);
        // 33 + 33 + 33 is left at 99
        assert_eq!(stats.fw_hit + stats.left + stats.right + stats.short, 99);
    }

    #[test]
    fn test_scramble_ranking_tie_break() {
        let holes = vec![
            scramble(ScrambleOutcome::Yes, Some("SW"), ShotType::Chip),
            scramble(ScrambleOutcome::Yes, Some("LW"), ShotType::Chip),
            scramble(ScrambleOutcome::No, Some("LW"), ShotType::Chip),
            scramble(ScrambleOutcome::Yes, Some("GW"), ShotType::Chip),
            scramble(ScrambleOutcome::No, Some("GW"), ShotType::Chip),
            scramble(ScrambleOutcome::Yes, Some("GW"), ShotType::Chip),
            scramble(ScrambleOutcome::No, Some("GW"), ShotType::Chip),
            scramble(ScrambleOutcome::NotApplicable, Some("PW"), ShotType::Chip),
            scramble(ScrambleOutcome::No, None, ShotType::Chip),
        ];

        let stats = scramble_ranking(&holes, &Filter::All);
        let order: Vec<&str> = stats.clubs.iter().map(|c| c.club.as_str()).collect();

        assert_eq!(order, vec!["SW", "GW", "LW"]);
        assert_eq!(stats.total, 8);
    }

    #[test]
    fn test_scramble_shot_type_filter() {
        let holes = vec![
            scramble(ScrambleOutcome::Yes, Some("SW"), ShotType::Bunker),
            scramble(ScrambleOutcome::No, Some("SW"), ShotType::Chip),
        ];

        let bunker = scramble_ranking(&holes, &Filter::Only(ShotType::Bunker));
        assert_eq!(bunker.total, 1);
        assert_eq!(bunker.clubs[0].success_rate, 100);
    }

    #[test]
    fn test_sort_by_bag_order() {
        let bag: Vec<String> = ["Driver", "3W", "PW"].iter().map(|c| c.to_string()).collect();
        let mut clubs: Vec<String> = ["Mystery", "PW", "Driver", "Oddity"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        sort_by_bag_order(&mut clubs, &bag);
        assert_eq!(clubs, vec!["Driver", "PW", "Mystery", "Oddity"]);
    }

    #[test]
    fn test_club_options_ignore_filters() {
        let holes = vec![
            tee(FairwayDirection::Hit, "3W"),
            tee(FairwayDirection::Hit, "Driver"),
            HoleStat {
                approach_club: Some("7i".to_string()),
                ..Default::default()
            },
        ];
        let query = DispersionQuery {
            tee_club: Filter::Only("Driver".to_string()),
            ..Default::default()
        };
        let bag: Vec<String> = vec!["Driver".to_string(), "3W".to_string()];

        let stats = compute_dispersion(&holes, &query, &bag);
        assert_eq!(stats.tee_clubs, vec!["Driver", "3W"]);
        assert_eq!(stats.approach_clubs, vec!["7i"]);
        assert_eq!(stats.tee_shots.total, 1);
    }

    #[test]
    fn test_blank_club_names_dropped() {
        let holes = vec![
            tee(FairwayDirection::Left, ""),
            tee(FairwayDirection::Hit, "Driver"),
            HoleStat {
                approach_club: Some("  ".to_string()),
                ..Default::default()
            },
        ];

        let stats = compute_dispersion(&holes, &DispersionQuery::default(), &[]);
        assert_eq!(stats.tee_clubs, vec!["Driver"]);
        assert!(stats.approach_clubs.is_empty());
        assert_eq!(stats.tee_shots.total, 2);
    }

    #[test]
    fn test_blank_scramble_club_not_ranked() {
        let holes = vec![
            scramble(ScrambleOutcome::Yes, Some(""), ShotType::Chip),
            scramble(ScrambleOutcome::No, Some(" "), ShotType::Chip),
            scramble(ScrambleOutcome::Yes, Some("SW"), ShotType::Chip),
        ];

        let stats = scramble_ranking(&holes, &Filter::All);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.clubs.len(), 1);
        assert_eq!(stats.clubs[0].club, "SW");
    }
}
