use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Round to a fixed number of decimal places.
///
/// The exact binary value is rounded, ties going to the even neighbour. So
/// `round_to(0.125, 2)` is `0.12`, while `round_to(0.025, 2)` is `0.03`
/// because 0.025 is stored slightly above the tie.
#[inline]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if decimals == 0 || !value.is_finite() {
        return value.round_ties_even();
    }
    // Formatting rounds the exact stored value
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}
