//! Angle arithmetic on headings and bearings (radians).

use std::f64::consts::{PI, TAU};

/// Signed angular difference `to - from`, wrapped into `[-π, π)`.
///
/// Zero when `from == to`. Used both for the view-cone test and for
/// turning toward a desired heading.
///
/// # Examples
///
/// ```
/// use flock_core::angle_diff;
/// use std::f64::consts::PI;
///
/// assert_eq!(angle_diff(1.0, 1.0), 0.0);
/// assert!((angle_diff(0.1, 2.0 * PI - 0.1) + 0.2).abs() < 1e-12);
/// ```
pub fn angle_diff(from: f64, to: f64) -> f64 {
    let mut d = (to - from) % TAU;
    if d < -PI {
        d += TAU;
    } else if d >= PI {
        d -= TAU;
    }
    d
}

/// Normalize a heading into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let mut w = angle % TAU;
    if w <= -PI {
        w += TAU;
    } else if w > PI {
        w -= TAU;
    }
    w
}

/// Convert radians to degrees, as SVG `rotate()` expects.
pub fn to_degrees(rad: f64) -> f64 {
    180.0 * rad / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn diff_crosses_zero_the_short_way() {
        let d = angle_diff(TAU - 0.1, 0.1);
        assert!((d - 0.2).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn diff_of_opposite_headings_is_minus_pi() {
        assert!((angle_diff(0.0, PI) + PI).abs() < 1e-12);
    }

    #[test]
    fn wrap_keeps_pi_and_maps_minus_pi() {
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), PI);
        assert!((wrap_angle(-0.5 - 2.0 * TAU) + 0.5).abs() < 1e-12);
        assert!((wrap_angle(2.5 + TAU) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn degrees_of_half_turn() {
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn diff_is_in_half_open_range(a in 0.0..TAU, b in 0.0..TAU) {
            let d = angle_diff(a, b);
            prop_assert!((-PI..PI).contains(&d), "angle_diff({a}, {b}) = {d}");
        }

        #[test]
        fn diff_is_zero_on_equal_inputs(a in 0.0..TAU) {
            prop_assert_eq!(angle_diff(a, a), 0.0);
        }

        #[test]
        fn wrap_lands_in_range_and_preserves_direction(a in -1.0e4..1.0e4f64) {
            let w = wrap_angle(a);
            prop_assert!(w > -PI && w <= PI, "wrap_angle({a}) = {w}");
            prop_assert!((w.cos() - a.cos()).abs() < 1e-9);
            prop_assert!((w.sin() - a.sin()).abs() < 1e-9);
        }
    }
}
