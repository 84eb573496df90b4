//! Property tests for the kinematics helpers
//!
//! Covers the invariants scroll surfaces rely on:
//! - rubber banding is zero at rest, grows with the overshoot, and stays
//!   inside the viewport dimension
//! - clamping is idempotent
//! - release simulations always terminate

use proptest::prelude::*;
use stickytab_animation::{
    clamp_to_bounds, decay_simulation, rubber_band_distance, spring_to_anchor, SpringConfig,
};
use stickytab_core::Point;

proptest! {
    #[test]
    fn rubber_band_is_zero_at_rest(dimension in 1.0f32..5_000.0) {
        prop_assert_eq!(rubber_band_distance(0.0, dimension), 0.0);
    }

    #[test]
    fn rubber_band_is_bounded_by_dimension(
        offset in -1.0e6f32..1.0e6,
        dimension in 1.0f32..5_000.0,
    ) {
        let banded = rubber_band_distance(offset, dimension);
        prop_assert!(banded.abs() < dimension);
        // Sign preserved
        prop_assert!(banded == 0.0 || banded.signum() == offset.signum());
    }

    #[test]
    fn rubber_band_grows_with_overshoot(
        a in 0.0f32..1.0e5,
        extra in 1.0f32..1.0e5,
        dimension in 1.0f32..5_000.0,
        negative in any::<bool>(),
    ) {
        let sign = if negative { -1.0 } else { 1.0 };
        let near = rubber_band_distance(sign * a, dimension).abs();
        let far = rubber_band_distance(sign * (a + extra), dimension).abs();
        // Far out the curve is nearly flat; allow f32 rounding
        prop_assert!(far >= near - near * 1e-5);
    }

    #[test]
    fn clamp_is_idempotent(
        x in -1.0e6f32..1.0e6,
        lo in -1.0e4f32..1.0e4,
        span in 0.0f32..1.0e4,
    ) {
        let hi = lo + span;
        let once = clamp_to_bounds(x, lo, hi);
        prop_assert_eq!(clamp_to_bounds(once, lo, hi), once);
        prop_assert!(once >= lo && once <= hi);
    }

    #[test]
    fn decay_always_settles(
        vy in -5_000.0f32..5_000.0,
        resistance in 0.5f32..10.0,
    ) {
        let frames = decay_simulation(Point::ZERO, Point::new(0.0, vy), resistance)
            .frames(1.0 / 60.0)
            .take(100_000)
            .count();
        prop_assert!(frames < 100_000);
    }

    #[test]
    fn spring_ends_exactly_at_anchor(
        start in -2_000.0f32..2_000.0,
        anchor in -500.0f32..500.0,
    ) {
        let last = spring_to_anchor(
            Point::new(0.0, start),
            Point::new(0.0, anchor),
            SpringConfig::default(),
        )
        .frames(1.0 / 60.0)
        .take(10_000)
        .last();

        if let Some(last) = last {
            prop_assert_eq!(last, Point::new(0.0, anchor));
        }
    }
}
