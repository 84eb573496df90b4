//! Gesture and scroll events
//!
//! The event ids drive [`StateTransitions`](crate::StateTransitions)
//! implementations; [`PanGesture`] is what hosts forward from their single
//! pan recognizer.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Gesture and scroll event types
pub mod event_types {
    use super::EventType;

    /// Pan recognizer began tracking a touch
    pub const PAN_BEGIN: EventType = 1;
    /// Pan translation changed
    pub const PAN_CHANGE: EventType = 2;
    /// Touch lifted (release velocity available)
    pub const PAN_END: EventType = 3;
    /// Gesture cancelled by the system or by the owner
    pub const PAN_CANCEL: EventType = 4;

    /// Offset left the valid range while decelerating
    pub const OUT_OF_BOUNDS: EventType = 31;
    /// Momentum or spring-back came to rest
    pub const SETTLED: EventType = 32;
}

/// Phase of a pan gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Event id for this phase
    pub fn event_type(&self) -> EventType {
        match self {
            GesturePhase::Began => event_types::PAN_BEGIN,
            GesturePhase::Changed => event_types::PAN_CHANGE,
            GesturePhase::Ended => event_types::PAN_END,
            GesturePhase::Cancelled => event_types::PAN_CANCEL,
        }
    }
}

/// A single pan recognizer callback
///
/// `translation` is cumulative since the gesture began, `velocity` is in
/// points per second in the recognizer's coordinate space (finger motion,
/// not content motion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pub phase: GesturePhase,
    pub translation: Point,
    pub velocity: Point,
}

impl PanGesture {
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: Point::ZERO,
            velocity: Point::ZERO,
        }
    }

    pub fn changed(translation: Point) -> Self {
        Self {
            phase: GesturePhase::Changed,
            translation,
            velocity: Point::ZERO,
        }
    }

    pub fn ended(translation: Point, velocity: Point) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation,
            velocity,
        }
    }

    pub fn cancelled(translation: Point) -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            translation,
            velocity: Point::ZERO,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.phase.event_type()
    }
}
