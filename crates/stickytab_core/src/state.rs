//! Event-driven state transitions
//!
//! Implement [`StateTransitions`] on a state enum to define how event ids
//! move it between states:
//!
//! ```rust
//! use stickytab_core::event_types::*;
//! use stickytab_core::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Recognizer {
//!     Possible,
//!     Tracking,
//! }
//!
//! impl StateTransitions for Recognizer {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Recognizer::Possible, PAN_BEGIN) => Some(Recognizer::Tracking),
//!             (Recognizer::Tracking, PAN_END | PAN_CANCEL) => Some(Recognizer::Possible),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Recognizer::Possible;
//! assert!(state.apply(PAN_BEGIN));
//! assert_eq!(state, Recognizer::Tracking);
//! assert!(!state.apply(PAN_BEGIN));
//! ```

use std::hash::Hash;

use crate::events::EventType;

/// Trait for state types that handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply an event in place, returning whether a transition happened
    fn apply(&mut self, event: EventType) -> bool {
        match self.on_event(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}
