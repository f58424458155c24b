//! Row types read from the persistence layer.
//!
//! These mirror the `rounds` and `hole_stats` tables. Every statistic on a
//! hole is optional: players skip fields, par-3s have no fairway, and older
//! rounds predate some columns.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// One played round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,

    pub course_name: String,

    #[serde(default)]
    pub course_id: Option<String>,

    /// Null while a round is incomplete
    #[serde(default)]
    pub total_score: Option<i32>,

    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    pub user_id: String,
}

impl Round {
    /// Timestamp used to place the round in a month bucket
    pub fn bucket_date(&self) -> Option<DateTime<Utc>> {
        self.played_at.or(self.created_at)
    }
}

/// Where a tee shot finished relative to the fairway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FairwayDirection {
    Hit,
    Left,
    Right,
    Short,
}

/// Where an approach finished relative to the green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreenDirection {
    Hit,
    Left,
    Right,
    Long,
    Short,
}

/// Up-and-down result after a missed green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrambleOutcome {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl ScrambleOutcome {
    /// Only yes/no outcomes count as a scramble attempt
    pub fn is_attempt(self) -> bool {
        matches!(self, Self::Yes | Self::No)
    }
}

/// Recovery shot played when scrambling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    Pitch,
    Chip,
    Bunker,
}

impl FromStr for ShotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pitch" => Ok(Self::Pitch),
            "chip" => Ok(Self::Chip),
            "bunker" => Ok(Self::Bunker),
            other => Err(format!("unknown shot type '{}'", other)),
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pitch => "pitch",
            Self::Chip => "chip",
            Self::Bunker => "bunker",
        };
        f.write_str(name)
    }
}

/// Statistics recorded for a single hole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoleStat {
    pub round_id: String,

    pub hole_number: u32,

    #[serde(default)]
    pub par: Option<i32>,

    #[serde(default)]
    pub score: Option<i32>,

    /// Null on par-3s
    #[serde(default)]
    pub fir: Option<bool>,

    #[serde(default)]
    pub fir_direction: Option<FairwayDirection>,

    #[serde(default)]
    pub gir: Option<bool>,

    #[serde(default)]
    pub gir_direction: Option<GreenDirection>,

    #[serde(default)]
    pub scramble: Option<ScrambleOutcome>,

    #[serde(default)]
    pub putts: Option<i32>,

    #[serde(default)]
    pub tee_club: Option<String>,

    #[serde(default)]
    pub approach_club: Option<String>,

    #[serde(default)]
    pub scramble_club: Option<String>,

    #[serde(default)]
    pub scramble_shot_type: Option<ShotType>,
}

/// A round together with its holes, ordered by hole number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundWithHoles {
    pub round: Round,
    pub holes: Vec<HoleStat>,
}

impl RoundWithHoles {
    pub fn new(round: Round, mut holes: Vec<HoleStat>) -> Self {
        holes.sort_by_key(|h| h.hole_number);
        Self { round, holes }
    }

    /// Sum of the recorded pars, or `None` if no hole has one
    pub fn course_par(&self) -> Option<i32> {
        self.holes
            .iter()
            .filter_map(|h| h.par)
            .fold(None, |acc, par| Some(acc.unwrap_or(0) + par))
    }
}

/// Flat rows as returned by one read of the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub rounds: Vec<Round>,

    #[serde(default)]
    pub holes: Vec<HoleStat>,
}

impl Snapshot {
    /// Keep only one user's rounds and the holes that belong to them
    pub fn for_user(self, user_id: &str) -> Snapshot {
        let rounds: Vec<Round> = self
            .rounds
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();

        let ids: HashSet<&str> = rounds.iter().map(|r| r.id.as_str()).collect();
        let total_holes = self.holes.len();
        let holes: Vec<HoleStat> = self
            .holes
            .into_iter()
            .filter(|h| ids.contains(h.round_id.as_str()))
            .collect();

        if holes.len() < total_holes {
            warn!(
                "Dropped {} hole rows not belonging to user {}",
                total_holes - holes.len(),
                user_id
            );
        }

        Snapshot { rounds, holes }
    }

    /// Join holes onto their rounds, preserving round order
    pub fn rounds_with_holes(&self) -> Vec<RoundWithHoles> {
        let mut by_round: HashMap<&str, Vec<HoleStat>> = HashMap::new();
        for hole in &self.holes {
            by_round
                .entry(hole.round_id.as_str())
                .or_default()
                .push(hole.clone());
        }

        self.rounds
            .iter()
            .map(|round| {
                let holes = by_round.remove(round.id.as_str()).unwrap_or_default();
                RoundWithHoles::new(round.clone(), holes)
            })
            .collect()
    }

    /// Joined rounds, oldest first; undated rounds go last
    pub fn rounds_by_play_date(&self) -> Vec<RoundWithHoles> {
        let mut rounds = self.rounds_with_holes();
        rounds.sort_by_key(|r| (r.round.bucket_date().is_none(), r.round.bucket_date()));
        rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn round(id: &str, user: &str, day: Option<u32>) -> Round {
        Round {
            id: id.to_string(),
            course_name: "Pebble".to_string(),
            user_id: user.to_string(),
            played_at: day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    fn hole(round_id: &str, number: u32, par: Option<i32>) -> HoleStat {
        HoleStat {
            round_id: round_id.to_string(),
            hole_number: number,
            par,
            ..Default::default()
        }
    }

    #[test]
    fn test_hole_deserialize_enums() {
        let hole: HoleStat = serde_json::from_str(
            r#"{
                "round_id": "r1",
                "hole_number": 3,
                "par": 4,
                "fir": false,
                "fir_direction": "left",
                "gir_direction": "long",
                "scramble": "n/a",
                "scramble_shot_type": "bunker"
            }"#,
        )
        .unwrap();

        assert_eq!(hole.fir_direction, Some(FairwayDirection::Left));
        assert_eq!(hole.gir_direction, Some(GreenDirection::Long));
        assert_eq!(hole.scramble, Some(ScrambleOutcome::NotApplicable));
        assert_eq!(hole.scramble_shot_type, Some(ShotType::Bunker));
        assert!(hole.putts.is_none());
    }

    #[test]
    fn test_course_par() {
        let joined = RoundWithHoles::new(
            round("r1", "u1", Some(1)),
            vec![hole("r1", 2, Some(3)), hole("r1", 1, Some(4)), hole("r1", 3, None)],
        );
        assert_eq!(joined.course_par(), Some(7));
        assert_eq!(joined.holes[0].hole_number, 1);

        let no_par = RoundWithHoles::new(round("r2", "u1", Some(1)), vec![hole("r2", 1, None)]);
        assert_eq!(no_par.course_par(), None);
    }

    #[test]
    fn test_for_user_drops_foreign_rows() {
        let snapshot = Snapshot {
            rounds: vec![round("r1", "u1", Some(1)), round("r2", "u2", Some(2))],
            holes: vec![hole("r1", 1, Some(4)), hole("r2", 1, Some(4)), hole("zz", 1, None)],
        };

        let mine = snapshot.for_user("u1");
        assert_eq!(mine.rounds.len(), 1);
        assert_eq!(mine.holes.len(), 1);
        assert_eq!(mine.holes[0].round_id, "r1");
    }

    #[test]
    fn test_rounds_by_play_date() {
        let snapshot = Snapshot {
            rounds: vec![
                round("late", "u1", Some(20)),
                round("undated", "u1", None),
                round("early", "u1", Some(3)),
            ],
            holes: vec![],
        };

        let ids: Vec<String> = snapshot
            .rounds_by_play_date()
            .into_iter()
            .map(|r| r.round.id)
            .collect();
        assert_eq!(ids, vec!["early", "late", "undated"]);
    }
}
