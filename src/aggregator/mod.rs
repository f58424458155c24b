//! Aggregation of round and hole rows into derived statistics.
//!
//! This module turns a player's recorded holes into:
//! - Period summaries and monthly series (round aggregator)
//! - Tee/approach direction splits and scramble club rankings (dispersion)
//! - The rolling Trackd Handicap
//!
//! Everything here is a pure function of its inputs. The current time is
//! always passed in, never read from the clock.

pub mod dispersion;
pub mod filters;
pub mod handicap;
pub mod math;
pub mod rounds;
pub mod series;
pub mod tally;

// Re-export main types and functions
pub use dispersion::{compute_dispersion, sort_by_bag_order, DispersionQuery};
pub use filters::{ClubFilter, CourseFilter, Filter, ShotTypeFilter, TimeRange};
pub use handicap::{compute_handicap, format_handicap, handicap_from_differentials};
pub use rounds::{compute_round_stats, RoundQuery};
pub use series::build_time_series;
