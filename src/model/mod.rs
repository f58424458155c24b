//! Input rows and derived report types.

pub mod records;
pub mod report;

pub use records::{
    FairwayDirection, GreenDirection, HoleStat, Round, RoundWithHoles, ScrambleOutcome, ShotType,
    Snapshot,
};
pub use report::{
    AppliedFilters, ApproachStats, ClubScramble, DispersionStats, HandicapResult, Metric,
    RoundStats, RoundStatsReport, ScrambleStats, SeriesPoint, StatsReport, TeeShotStats,
    TimeSeries,
};
