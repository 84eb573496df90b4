//! Stickytab Core
//!
//! Foundational primitives shared by the stickytab crates:
//!
//! - **Geometry**: points, sizes, rects, and edge insets in layout points
//! - **Events**: the pan gesture and scroll event vocabulary
//! - **State Transitions**: event-driven state enums for gesture lifecycles
//!
//! # Example
//!
//! ```rust
//! use stickytab_core::{EdgeInsets, Point, Rect};
//!
//! let frame = Rect::new(0.0, -40.0, 320.0, 170.0);
//! assert_eq!(frame.max_y(), 130.0);
//!
//! let inset = EdgeInsets::top(230.0) + EdgeInsets::new(10.0, 0.0, 10.0, 0.0);
//! assert_eq!(inset.top, 240.0);
//!
//! let offset = Point::new(0.0, 120.0) - Point::new(0.0, 20.0);
//! assert_eq!(offset.y, 100.0);
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod state;

pub use error::{Result, StickyError};
pub use events::{event_types, EventType, GesturePhase, PanGesture};
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size};
pub use state::StateTransitions;
