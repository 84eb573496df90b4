//! Spring attachment
//!
//! Pulls an offset toward an anchor with a zero-length damped spring,
//! parameterized the way attachment behaviors are: a damping ratio and an
//! oscillation frequency in Hz.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};
use stickytab_core::Point;

/// Largest integration step; bigger frame deltas are split into sub-steps
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame a single `step` integrates; larger deltas (a stalled host,
/// an infinite dt) are treated as this long
const MAX_FRAME: f32 = 0.1;

/// Configuration for a spring attachment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping ratio (1.0 = critically damped)
    pub damping: f32,
    /// Oscillation frequency in Hz
    pub frequency: f32,
    /// Distance and speed under which the spring snaps to its anchor
    pub epsilon: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 1.0,
            frequency: 2.0,
            epsilon: 0.5,
        }
    }
}

impl SpringConfig {
    pub fn new(damping: f32, frequency: f32) -> Self {
        Self {
            damping,
            frequency,
            ..Default::default()
        }
    }

    /// Angular frequency ω = 2πf
    pub fn angular_frequency(&self) -> f32 {
        TAU * self.frequency.max(0.0)
    }

    /// Stiffness per unit mass (ω²)
    pub fn stiffness(&self) -> f32 {
        let omega = self.angular_frequency();
        omega * omega
    }

    /// Damping coefficient per unit mass (2ζω)
    pub fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping.max(0.0) * self.angular_frequency()
    }
}

/// An offset attached to an anchor by a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAttachment {
    offset: Point,
    velocity: Point,
    anchor: Point,
    config: SpringConfig,
    settled: bool,
}

/// Start pulling `current_offset` back toward `anchor`
pub fn spring_to_anchor(current_offset: Point, anchor: Point, config: SpringConfig) -> SpringAttachment {
    SpringAttachment::new(current_offset, Point::ZERO, anchor, config)
}

impl SpringAttachment {
    pub fn new(offset: Point, velocity: Point, anchor: Point, config: SpringConfig) -> Self {
        let mut spring = Self {
            offset,
            velocity,
            anchor,
            config,
            settled: false,
        };
        spring.check_converged();
        spring
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` seconds and return the new offset
    pub fn step(&mut self, dt: f32) -> Point {
        if self.settled || dt <= 0.0 {
            return self.offset;
        }

        // A zero-frequency spring has no pull; nothing would ever converge
        if self.config.frequency <= 0.0 {
            self.snap();
            return self.offset;
        }

        let k = self.config.stiffness();
        let c = self.config.damping_coefficient();

        let dt = dt.min(MAX_FRAME);
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;

        for _ in 0..substeps {
            let displacement = self.offset - self.anchor;
            let acceleration = Point::new(
                -k * displacement.x - c * self.velocity.x,
                -k * displacement.y - c * self.velocity.y,
            );
            // Semi-implicit Euler: velocity first, then position
            self.velocity += acceleration.scale(h);
            self.offset += self.velocity.scale(h);
        }

        self.check_converged();
        self.offset
    }

    /// Lazy sequence of offsets at a fixed frame interval, ending at the anchor
    pub fn frames(self, dt: f32) -> SpringFrames {
        SpringFrames { spring: self, dt }
    }

    fn check_converged(&mut self) {
        let eps = self.config.epsilon.max(f32::EPSILON);
        if (self.offset - self.anchor).length() < eps && self.velocity.length() < eps {
            self.snap();
        }
    }

    fn snap(&mut self) {
        self.offset = self.anchor;
        self.velocity = Point::ZERO;
        self.settled = true;
    }
}

/// Iterator over spring offsets, one item per frame
#[derive(Debug, Clone)]
pub struct SpringFrames {
    spring: SpringAttachment,
    dt: f32,
}

impl Iterator for SpringFrames {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.spring.is_settled() || self.dt <= 0.0 {
            return None;
        }
        Some(self.spring.step(self.dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges_to_anchor() {
        let spring = spring_to_anchor(Point::new(0.0, -80.0), Point::ZERO, SpringConfig::default());
        let frames: Vec<Point> = spring.frames(1.0 / 60.0).take(600).collect();

        let last = frames.last().copied().unwrap_or_default();
        assert_eq!(last, Point::ZERO);
        // Critically damped from rest: about a second at 2 Hz
        assert!(frames.len() < 120, "took {} frames", frames.len());
    }

    #[test]
    fn test_critically_damped_does_not_overshoot() {
        let mut spring =
            spring_to_anchor(Point::new(0.0, 900.0), Point::new(0.0, 600.0), SpringConfig::default());

        while !spring.is_settled() {
            let y = spring.step(1.0 / 60.0).y;
            assert!(y >= 600.0 - 0.5, "overshot anchor: {y}");
        }
    }

    #[test]
    fn test_spring_at_anchor_is_settled() {
        let spring = spring_to_anchor(Point::new(5.0, 5.0), Point::new(5.0, 5.0), SpringConfig::default());
        assert!(spring.is_settled());
    }

    #[test]
    fn test_huge_frame_delta_is_capped() {
        let mut spring = SpringAttachment::new(
            Point::new(0.0, -80.0),
            Point::ZERO,
            Point::ZERO,
            SpringConfig::default(),
        );
        let mut capped = spring;

        let offset = spring.step(f32::INFINITY);
        assert!(offset.y.is_finite());
        assert_eq!(offset, capped.step(0.1));

        // Still converges when the host keeps sending huge deltas
        for _ in 0..100 {
            spring.step(1.0e9);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.offset(), Point::ZERO);
    }

    #[test]
    fn test_spring_carries_velocity() {
        // Released moving away from the anchor: travels further before returning
        let mut spring = SpringAttachment::new(
            Point::new(0.0, -10.0),
            Point::new(0.0, -400.0),
            Point::ZERO,
            SpringConfig::default(),
        );
        spring.step(1.0 / 60.0);
        assert!(spring.offset().y < -10.0);
    }

    #[test]
    fn test_config_derived_coefficients() {
        let config = SpringConfig::new(1.0, 2.0);
        let omega = 4.0 * std::f32::consts::PI;
        assert!((config.stiffness() - omega * omega).abs() < 1e-3);
        assert!((config.damping_coefficient() - 2.0 * omega).abs() < 1e-3);
    }
}
