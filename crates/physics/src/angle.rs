//! Angle normalisation and small range-mapping helpers.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// `3π/2`, the heading pointing toward negative y.
pub const FRAC_3PI_2: f64 = PI + FRAC_PI_2;

/// Normalize a value into `[min, max)` by wrapping around.
fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let width = max - min;
    let shifted = value - min;
    let wrapped = shifted - (shifted / width).floor() * width;
    // `floor` can leave us exactly on the upper bound when `shifted` is a tiny negative number.
    if wrapped >= width {
        min
    } else {
        wrapped + min
    }
}

/// Normalize an angle in radians onto `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    wrap(angle, 0.0, TAU)
}

/// Normalize an angle in degrees onto `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    wrap(angle, 0.0, 360.0)
}

pub fn degrees_to_radians(angle: f64) -> f64 {
    angle.to_radians()
}

pub fn radians_to_degrees(angle: f64) -> f64 {
    angle.to_degrees()
}

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate; pair with [clamp_value_to_range] when that isn't wanted.
pub fn map_value_to_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Clamp to `[min, max]`.  Unlike [f64::clamp] this never panics when the bounds are inverted; `min` wins.
pub fn clamp_value_to_range(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
