//! Per-surface gesture kinematics
//!
//! A surface is `Idle`, being `Dragging` by a finger, `Decaying` with
//! momentum after release, or `SpringingBack` toward its bounds. At most
//! one of the two release behaviors exists at a time: spring-back replaces
//! decay instead of running alongside it.

use stickytab_core::event_types::{OUT_OF_BOUNDS, PAN_BEGIN, PAN_CANCEL, PAN_END, SETTLED};
use stickytab_core::{EventType, Point, StateTransitions};

use crate::decay::{Decay, DecayConfig};
use crate::spring::{SpringAttachment, SpringConfig};

/// Kinematic state of a scroll surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KinematicState {
    #[default]
    Idle,
    Dragging,
    Decaying,
    SpringingBack,
}

impl KinematicState {
    /// Whether a release behavior is running
    pub fn is_animating(&self) -> bool {
        matches!(self, KinematicState::Decaying | KinematicState::SpringingBack)
    }
}

impl StateTransitions for KinematicState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use KinematicState::*;
        match (self, event) {
            // A new touch always takes over, whatever was animating
            (_, PAN_BEGIN) => Some(Dragging),
            (Dragging, PAN_END | PAN_CANCEL) => Some(Decaying),
            (Decaying, OUT_OF_BOUNDS) => Some(SpringingBack),
            (Decaying | SpringingBack, SETTLED) => Some(Idle),
            _ => None,
        }
    }
}

/// The release behavior currently driving a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kinematic {
    Decaying(Decay),
    SpringingBack(SpringAttachment),
}

/// Outcome of advancing a behavior by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicStep {
    /// Offset after the tick
    pub offset: Point,
    /// Whether the behavior came to rest on this tick
    pub settled: bool,
}

impl Kinematic {
    /// Momentum decay from a release
    pub fn decay(offset: Point, velocity: Point, config: DecayConfig) -> Self {
        Kinematic::Decaying(Decay::new(offset, velocity, config))
    }

    /// Spring toward `anchor`, inheriting the current velocity
    pub fn spring(offset: Point, velocity: Point, anchor: Point, config: SpringConfig) -> Self {
        Kinematic::SpringingBack(SpringAttachment::new(offset, velocity, anchor, config))
    }

    pub fn state(&self) -> KinematicState {
        match self {
            Kinematic::Decaying(_) => KinematicState::Decaying,
            Kinematic::SpringingBack(_) => KinematicState::SpringingBack,
        }
    }

    pub fn offset(&self) -> Point {
        match self {
            Kinematic::Decaying(d) => d.offset(),
            Kinematic::SpringingBack(s) => s.offset(),
        }
    }

    pub fn velocity(&self) -> Point {
        match self {
            Kinematic::Decaying(d) => d.velocity(),
            Kinematic::SpringingBack(s) => s.velocity(),
        }
    }

    pub fn is_settled(&self) -> bool {
        match self {
            Kinematic::Decaying(d) => d.is_settled(),
            Kinematic::SpringingBack(s) => s.is_settled(),
        }
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) -> KinematicStep {
        let offset = match self {
            Kinematic::Decaying(d) => d.step(dt),
            Kinematic::SpringingBack(s) => s.step(dt),
        };
        let settled = self.is_settled();
        if settled {
            tracing::trace!(
                "{:?} settled at ({:.1}, {:.1})",
                self.state(),
                offset.x,
                offset.y
            );
        }
        KinematicStep { offset, settled }
    }
}
