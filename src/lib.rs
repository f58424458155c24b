//! Trackd Stats
//!
//! Statistics aggregation and handicap scoring for the Trackd golf
//! round tracker.
//!
//! The engine turns a player's per-hole log into:
//! - period summaries and monthly series (`aggregator::rounds`)
//! - tee/approach dispersion and scramble rankings (`aggregator::dispersion`)
//! - the rolling Trackd Handicap (`aggregator::handicap`)
//!
//! Rounds are read through a `source::RoundSource`; `engine` wires a source
//! to the aggregators. The `trackd-stats` binary wraps it all in a CLI.

pub mod aggregator;
pub mod commands;
pub mod engine;
pub mod model;
pub mod output;
pub mod source;
pub mod utils;
