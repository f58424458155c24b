//! Running totals behind every round metric.
//!
//! The same accumulator backs the period summary and each month bucket, so
//! the null rules cannot drift between the two: a metric with an empty
//! denominator is `None`, never zero.

use super::math::{mean_to_tenth, percent, round_to_tenth};
use crate::model::{HoleStat, Metric, RoundStats, RoundWithHoles, ScrambleOutcome};
use crate::utils::config::HOLES_PER_ROUND;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    rounds: usize,
    best_score: Option<i32>,
    score_sum: i64,
    scored_rounds: usize,
    over_par_sum: i64,
    par_holes: usize,
    putts_sum: i64,
    putt_holes: usize,
    fairways_hit: usize,
    fairway_holes: usize,
    greens_hit: usize,
    green_holes: usize,
    scrambles_saved: usize,
    scramble_attempts: usize,
}

impl Tally {
    pub fn add_round(&mut self, round: &RoundWithHoles) {
        self.rounds += 1;

        if let Some(score) = round.round.total_score {
            self.score_sum += i64::from(score);
            self.scored_rounds += 1;
            self.best_score = Some(self.best_score.map_or(score, |best| best.min(score)));
        }

        for hole in &round.holes {
            self.add_hole(hole);
        }
    }

    fn add_hole(&mut self, hole: &HoleStat) {
        if let (Some(score), Some(par)) = (hole.score, hole.par) {
            self.over_par_sum += i64::from(score - par);
            self.par_holes += 1;
        }

        if let Some(putts) = hole.putts {
            self.putts_sum += i64::from(putts);
            self.putt_holes += 1;
        }

        // par-3s carry no fairway value and stay out of both counts
        if let Some(fir) = hole.fir {
            self.fairway_holes += 1;
            if fir {
                self.fairways_hit += 1;
            }
        }

        if let Some(gir) = hole.gir {
            self.green_holes += 1;
            if gir {
                self.greens_hit += 1;
            }
        }

        match hole.scramble {
            Some(ScrambleOutcome::Yes) => {
                self.scramble_attempts += 1;
                self.scrambles_saved += 1;
            }
            Some(ScrambleOutcome::No) => self.scramble_attempts += 1,
            Some(ScrambleOutcome::NotApplicable) | None => {}
        }
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds
    }

    pub fn best_score(&self) -> Option<i32> {
        self.best_score
    }

    pub fn avg_score(&self) -> Option<f64> {
        mean_to_tenth(self.score_sum, self.scored_rounds)
    }

    /// Over-par total scaled to an 18-hole rate, so partial rounds compare
    /// with full ones
    pub fn avg_over_par(&self) -> Option<f64> {
        if self.par_holes == 0 {
            return None;
        }
        let rounds_equivalent = self.par_holes as f64 / HOLES_PER_ROUND;
        Some(round_to_tenth(self.over_par_sum as f64 / rounds_equivalent))
    }

    pub fn avg_putts(&self) -> Option<f64> {
        mean_to_tenth(self.putts_sum, self.putt_holes)
    }

    pub fn fir_percent(&self) -> Option<u32> {
        percent(self.fairways_hit, self.fairway_holes)
    }

    pub fn gir_percent(&self) -> Option<u32> {
        percent(self.greens_hit, self.green_holes)
    }

    pub fn scramble_percent(&self) -> Option<u32> {
        percent(self.scrambles_saved, self.scramble_attempts)
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::AvgScore => self.avg_score(),
            Metric::AvgOverPar => self.avg_over_par(),
            Metric::AvgPutts => self.avg_putts(),
            Metric::FirPercent => self.fir_percent().map(f64::from),
            Metric::GirPercent => self.gir_percent().map(f64::from),
            Metric::ScramblePercent => self.scramble_percent().map(f64::from),
        }
    }

    pub fn to_stats(&self, courses: Vec<String>) -> RoundStats {
        RoundStats {
            total_rounds: self.total_rounds(),
            best_score: self.best_score(),
            avg_score: self.avg_score(),
            avg_over_par: self.avg_over_par(),
            avg_putts: self.avg_putts(),
            fir_percent: self.fir_percent(),
            gir_percent: self.gir_percent(),
            scramble_percent: self.scramble_percent(),
            courses,
        }
    }
}
