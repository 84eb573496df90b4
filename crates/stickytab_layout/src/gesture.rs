//! Vertical pan recognizer
//!
//! Filters raw pan callbacks before they reach a scroll surface. After
//! [`PanRecognizer::cancel_current_gesture`] every remaining event of that
//! gesture is dropped until the next `Began`.

use stickytab_core::event_types::{PAN_BEGIN, PAN_CANCEL, PAN_END};
use stickytab_core::{EventType, GesturePhase, PanGesture, StateTransitions};

use crate::config::GestureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanState {
    #[default]
    Possible,
    Tracking,
}

impl StateTransitions for PanState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use PanState::*;
        match (self, event) {
            (_, PAN_BEGIN) => Some(Tracking),
            (Tracking, PAN_END | PAN_CANCEL) => Some(Possible),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanRecognizer {
    enabled: bool,
    state: PanState,
    config: GestureConfig,
}

impl PanRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            enabled: true,
            state: PanState::Possible,
            config,
        }
    }

    pub fn state(&self) -> PanState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == PanState::Tracking
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling a recognizer cancels the gesture it is tracking
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.cancel_current_gesture();
        }
        self.enabled = enabled;
    }

    /// Whether this recognizer may run alongside others
    pub fn recognizes_simultaneously(&self) -> bool {
        self.config.recognize_simultaneously
    }

    /// Stop tracking the current gesture. Returns whether one was in flight.
    pub fn cancel_current_gesture(&mut self) -> bool {
        let cancelled = self.state.apply(PAN_CANCEL);
        if cancelled {
            tracing::debug!("pan gesture cancelled");
        }
        cancelled
    }

    /// Pass `pan` through if it belongs to a live gesture
    pub fn filter(&mut self, pan: PanGesture) -> Option<PanGesture> {
        if !self.enabled {
            return None;
        }

        match pan.phase {
            GesturePhase::Began => {
                self.state.apply(PAN_BEGIN);
                Some(pan)
            }
            GesturePhase::Changed if self.is_tracking() => Some(pan),
            GesturePhase::Ended | GesturePhase::Cancelled if self.is_tracking() => {
                self.state.apply(pan.event_type());
                Some(pan)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickytab_core::Point;

    #[test]
    fn test_full_gesture_passes() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        assert!(pan.filter(PanGesture::began()).is_some());
        assert!(pan.is_tracking());
        assert!(pan.filter(PanGesture::changed(Point::new(0.0, -5.0))).is_some());
        assert!(pan
            .filter(PanGesture::ended(Point::new(0.0, -5.0), Point::ZERO))
            .is_some());
        assert_eq!(pan.state(), PanState::Possible);
    }

    #[test]
    fn test_events_without_begin_are_dropped() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        assert!(pan.filter(PanGesture::changed(Point::ZERO)).is_none());
        assert!(pan.filter(PanGesture::cancelled(Point::ZERO)).is_none());
    }

    #[test]
    fn test_cancel_drops_rest_of_gesture() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        pan.filter(PanGesture::began());
        assert!(pan.cancel_current_gesture());
        assert!(!pan.cancel_current_gesture());

        assert!(pan.filter(PanGesture::changed(Point::new(0.0, 10.0))).is_none());
        assert!(pan
            .filter(PanGesture::ended(Point::ZERO, Point::ZERO))
            .is_none());

        // The next gesture is tracked again
        assert!(pan.filter(PanGesture::began()).is_some());
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        pan.filter(PanGesture::began());
        pan.set_enabled(false);
        assert!(!pan.is_tracking());
        assert!(pan.filter(PanGesture::began()).is_none());

        pan.set_enabled(true);
        assert!(pan.filter(PanGesture::began()).is_some());
    }

    #[test]
    fn test_simultaneous_recognition_is_opt_in() {
        assert!(!PanRecognizer::new(GestureConfig::default()).recognizes_simultaneously());
        let config = GestureConfig {
            recognize_simultaneously: true,
        };
        assert!(PanRecognizer::new(config).recognizes_simultaneously());
    }
}
