/// Largest supported number of decimal digits.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `digits` decimal places, ties to even.
///
/// The tie rule applies to the decimally scaled value, so `round_to(2.5, 0)`
/// is `2.0` and `round_to(0.125, 2)` is `0.12`. Values whose binary form
/// is not an exact tie (e.g. `1.0005`) round to the nearer neighbour of
/// that binary value. Negative zero is normalized to `0.0`; non-finite
/// input is returned unchanged. `digits` above [`MAX_PRECISION`] is
/// clamped.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/round.rs"]
mod tests;
