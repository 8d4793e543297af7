//! Rounding and counting helpers shared by the rule stages.

/// Round to the nearest integer, halves toward positive infinity.
///
/// `1.5 -> 2`, `-1.5 -> -1`. NaN stays NaN.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert an already-rounded, non-negative float into a count.
///
/// NaN maps to 0 and values beyond `u32::MAX` saturate.
pub fn to_count(value: f64) -> u32 {
    value as u32
}
