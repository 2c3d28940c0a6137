use std::f64::consts::PI;

use crate::utils::constants::SMALL_NUMBER;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// `sign(x) * x²`: quadratic scaling that keeps the sign of the input.
#[inline]
pub fn signed_square(x: f64) -> f64 {
    if x < 0.0 {
        -(x * x)
    } else {
        x * x
    }
}

#[inline]
pub fn is_nearly_zero(x: f64) -> bool {
    x.abs() <= SMALL_NUMBER
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
