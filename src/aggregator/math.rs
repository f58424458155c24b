//! Rounding and ratio helpers shared by the aggregators.
//!
//! Halves always round towards positive infinity, so -2.25 becomes -2.2 and
//! 12.5% becomes 13%. Keep every aggregator on these helpers; mixing in
//! `f64::round` (half away from zero) changes negative averages.

/// Round to the nearest integer, halves upward
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves upward
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Whole-number percentage of `part` in `whole`, or `None` when `whole` is zero
pub fn percent(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some(round_half_up(part as f64 / whole as f64 * 100.0) as u32)
}

/// Arithmetic mean rounded to one decimal, or `None` for an empty sample
pub fn mean_to_tenth(sum: i64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(round_to_tenth(sum as f64 / count as f64))
}
