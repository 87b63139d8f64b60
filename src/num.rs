//! Float helpers that behave the same with and without `std`.

use palette::num::{Round, Sqrt};

/// Rounds to the nearest integer, halves away from zero.
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    Round::round(x)
}

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    Sqrt::sqrt(x)
}

/// Rounds, then clamps into `[min, max]`. NaN maps to `min`.
#[inline]
pub(crate) fn round_clamped(x: f64, min: f64, max: f64) -> f64 {
    if x.is_nan() {
        return min;
    }
    round(x).clamp(min, max)
}

/// Rounds an angle and wraps it into `[0, 360)`. Non-finite input maps to 0.
#[inline]
pub(crate) fn round_degrees(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let wrapped = round(x) % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_goes_half_away_from_zero() {
        assert_eq!(round(0.5), 1.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(2.4999), 2.0);
    }

    #[test]
    fn round_clamped_handles_out_of_range_and_nan() {
        assert_eq!(round_clamped(-12.0, 0.0, 255.0), 0.0);
        assert_eq!(round_clamped(300.7, 0.0, 255.0), 255.0);
        assert_eq!(round_clamped(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(round_clamped(99.5, 0.0, 100.0), 100.0);
    }

    #[test]
    fn round_degrees_wraps() {
        assert_eq!(round_degrees(360.0), 0.0);
        assert_eq!(round_degrees(359.6), 0.0);
        assert_eq!(round_degrees(-30.0), 330.0);
        assert_eq!(round_degrees(725.0), 5.0);
        assert_eq!(round_degrees(f64::INFINITY), 0.0);
    }
}
