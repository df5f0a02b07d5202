use serde::{Deserialize, Serialize};

use crate::{
    types::bearing::Bearing,
    vector::{Components, cartesian_to_polar, polar_to_cartesian},
};

/// A resultant at or below this fraction of the summed input speeds is
/// rounding residue from motions that cancel out.
pub const CANCELLATION_TOLERANCE: f64 = 1e-12;

/// True current over ground, in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CurrentResult {
    pub speed_ms: f64,
    /// Meaningless when `has_direction` is false.
    pub bearing: Bearing,
    pub components: Components,
    pub has_direction: bool,
}

/// Adds the fish's apparent motion to the vessel's motion over ground.
///
/// Speeds are in meters per second, bearings in degrees true and need not be
/// normalized. Non-finite input propagates into the result.
pub fn solve(
    fish_speed_ms: f64,
    fish_bearing: f64,
    ship_speed_ms: f64,
    ship_bearing: f64,
) -> CurrentResult {
    let fish = polar_to_cartesian(fish_speed_ms, fish_bearing);
    let ship = polar_to_cartesian(ship_speed_ms, ship_bearing);
    let components = fish + ship;
    let motion = cartesian_to_polar(components.east, components.north);
    let scale_ms = fish_speed_ms.abs() + ship_speed_ms.abs();
    CurrentResult {
        speed_ms: motion.speed_ms,
        bearing: motion.bearing,
        components,
        has_direction: motion.has_direction()
            && motion.speed_ms > scale_ms * CANCELLATION_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::*;
    use crate::vector::MotionVector;

    #[test]
    fn test_perpendicular_motions() {
        let result = solve(3.0, 90.0, 4.0, 0.0);
        assert_relative_eq!(result.speed_ms, 5.0, max_relative = 1e-12);
        assert!(result.bearing == 36.86989764584402);
        assert_abs_diff_eq!(result.components.east, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.components.north, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_opposing_motions_cancel() {
        let result = solve(5.0, 0.0, 5.0, 180.0);
        assert_abs_diff_eq!(result.speed_ms, 0.0, epsilon = 1e-9);
        assert!(!result.has_direction);
    }

    #[test]
    fn test_cancellation_scales_with_input() {
        let result = solve(1e8, 0.0, 1e8, 180.0);
        assert!(result.speed_ms > 0.0);
        assert!(!result.has_direction);

        let result = solve(1e-10, 45.0, 0.0, 0.0);
        assert_relative_eq!(result.speed_ms, 1e-10, max_relative = 1e-12);
        assert!(result.has_direction);
        assert!(result.bearing == 45.0);
    }

    #[test]
    fn test_still_fish_reports_vessel_motion() {
        let result = solve(0.0, 0.0, 2.5, 225.0);
        assert_relative_eq!(result.speed_ms, 2.5, max_relative = 1e-12);
        assert!(result.bearing == 225.0);
    }

    #[test]
    fn test_unnormalized_bearings() {
        let raw = solve(1.0, -270.0, 1.0, 720.0);
        let wrapped = solve(1.0, 90.0, 1.0, 0.0);
        assert_relative_eq!(raw.speed_ms, wrapped.speed_ms, max_relative = 1e-12);
        assert!(raw.bearing == 45.0);
    }

    #[test]
    fn test_nan_propagates() {
        let result = solve(f64::NAN, 0.0, 1.0, 0.0);
        assert!(result.speed_ms.is_nan());
        assert!(!result.has_direction);
    }

    proptest! {
        #[test]
        fn prop_solve_commutative(
            a_speed in 0.0..100.0f64,
            a_bearing in -720.0..720.0f64,
            b_speed in 0.0..100.0f64,
            b_bearing in -720.0..720.0f64,
        ) {
            prop_assert_eq!(
                solve(a_speed, a_bearing, b_speed, b_bearing),
                solve(b_speed, b_bearing, a_speed, a_bearing)
            );
        }

        #[test]
        fn prop_solve_matches_motion_vector_sum(
            a_speed in 0.1..100.0f64,
            a_bearing in 0.0..360.0f64,
            b_speed in 0.1..100.0f64,
            b_bearing in 0.0..360.0f64,
        ) {
            let result = solve(a_speed, a_bearing, b_speed, b_bearing);
            let sum = MotionVector::new(a_speed, a_bearing) + MotionVector::new(b_speed, b_bearing);
            assert_abs_diff_eq!(result.speed_ms, sum.speed_ms, epsilon = 1e-9);
        }
    }
}
