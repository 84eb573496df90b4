//! Stickytab Kinematics
//!
//! Stateless helpers and per-tick simulations used to settle a scroll
//! surface after the user lets go.
//!
//! # Features
//!
//! - **Rubber banding**: damped overscroll while a drag is past the bounds
//! - **Decay**: velocity-driven linear-drag deceleration
//! - **Spring-back**: critically damped attachment to the nearest in-bounds anchor
//! - **Lazy frames**: every simulation can be driven tick by tick or iterated
//!   at a fixed frame interval

pub mod decay;
pub mod kinematic;
pub mod rubber_band;
pub mod spring;

pub use decay::{decay_simulation, Decay, DecayConfig, DecayFrames};
pub use kinematic::{Kinematic, KinematicState, KinematicStep};
pub use rubber_band::{clamp_to_bounds, rubber_band_distance, RUBBER_BAND_CONSTANT};
pub use spring::{spring_to_anchor, SpringAttachment, SpringConfig, SpringFrames};
