//! Momentum decay
//!
//! Linear-drag deceleration: each tick the velocity shrinks by
//! `exp(-resistance * dt)` and the offset advances by `velocity * dt`. The
//! simulation settles once the speed drops under `velocity_threshold`.

use serde::{Deserialize, Serialize};
use stickytab_core::Point;

/// Lower bound for resistance so a decay always terminates
const MIN_RESISTANCE: f32 = 0.1;

/// Longest frame a single `step` integrates
const MAX_FRAME: f32 = 0.1;

/// Configuration for momentum decay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Linear resistance (1/s); larger values stop sooner
    pub resistance: f32,
    /// Speed (points/second) below which the surface is considered at rest
    pub velocity_threshold: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            resistance: 2.0,
            velocity_threshold: 5.0,
        }
    }
}

/// Incremental momentum decay of an offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    offset: Point,
    velocity: Point,
    resistance: f32,
    velocity_threshold: f32,
    settled: bool,
}

/// Start a decay from an offset and release velocity
pub fn decay_simulation(initial_offset: Point, initial_velocity: Point, resistance: f32) -> Decay {
    Decay::new(
        initial_offset,
        initial_velocity,
        DecayConfig {
            resistance,
            ..DecayConfig::default()
        },
    )
}

impl Decay {
    pub fn new(offset: Point, velocity: Point, config: DecayConfig) -> Self {
        let velocity_threshold = config.velocity_threshold.max(0.0);
        Self {
            offset,
            velocity,
            resistance: config.resistance.max(MIN_RESISTANCE),
            velocity_threshold,
            settled: velocity.length() < velocity_threshold,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` seconds and return the new offset
    pub fn step(&mut self, dt: f32) -> Point {
        if self.settled || dt <= 0.0 {
            return self.offset;
        }

        let dt = dt.min(MAX_FRAME);
        self.offset += self.velocity.scale(dt);
        self.velocity = self.velocity.scale((-self.resistance * dt).exp());

        if self.velocity.length() < self.velocity_threshold {
            self.velocity = Point::ZERO;
            self.settled = true;
        }

        self.offset
    }

    /// Lazy sequence of offsets at a fixed frame interval, ending when settled
    pub fn frames(self, dt: f32) -> DecayFrames {
        DecayFrames { decay: self, dt }
    }
}

/// Iterator over decay offsets, one item per frame
#[derive(Debug, Clone)]
pub struct DecayFrames {
    decay: Decay,
    dt: f32,
}

impl Iterator for DecayFrames {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.decay.is_settled() || self.dt <= 0.0 {
            return None;
        }
        Some(self.decay.step(self.dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_slows_and_settles() {
        let mut decay = decay_simulation(Point::ZERO, Point::new(0.0, 1_000.0), 2.0);
        let mut last_speed = decay.velocity().length();
        let mut frames = 0;

        while !decay.is_settled() {
            decay.step(1.0 / 60.0);
            let speed = decay.velocity().length();
            assert!(speed <= last_speed);
            last_speed = speed;
            frames += 1;
            assert!(frames < 10_000, "decay never settled");
        }

        // Total travel approaches v0 / resistance = 500
        let travel = decay.offset().y;
        assert!(travel > 450.0 && travel < 510.0, "travel = {travel}");
        assert_eq!(decay.velocity(), Point::ZERO);
    }

    #[test]
    fn test_decay_below_threshold_is_settled() {
        let decay = decay_simulation(Point::new(0.0, 42.0), Point::new(0.0, 1.0), 2.0);
        assert!(decay.is_settled());
        assert_eq!(decay.frames(1.0 / 60.0).count(), 0);
    }

    #[test]
    fn test_decay_frames_monotonic() {
        let frames: Vec<Point> = decay_simulation(Point::ZERO, Point::new(0.0, -800.0), 2.0)
            .frames(1.0 / 120.0)
            .collect();

        assert!(!frames.is_empty());
        assert!(frames.windows(2).all(|w| w[1].y <= w[0].y));
    }

    #[test]
    fn test_decay_zero_dt_is_inert() {
        let mut decay = decay_simulation(Point::ZERO, Point::new(300.0, 0.0), 2.0);
        assert_eq!(decay.step(0.0), Point::ZERO);
        assert!(!decay.is_settled());
    }
}
