//! Scroll surface with hand-rolled drag, momentum, and spring-back
//!
//! Replaces native scroll momentum for content panes. The owner forwards pan
//! gesture phases and frame ticks; the surface keeps its own offset, content
//! size, and insets, and reports whether each call moved the offset so the
//! owner can propagate synchronously.
//!
//! # Example
//!
//! ```rust
//! use stickytab_core::{EdgeInsets, Point, Size};
//! use stickytab_layout::scroll_surface::ScrollSurface;
//!
//! let mut surface = ScrollSurface::default();
//! surface.set_bounds_size(Size::new(320.0, 480.0));
//! surface.set_content_size(Size::new(320.0, 1200.0));
//!
//! surface.begin_drag();
//! surface.update_drag(Point::new(0.0, -100.0)); // finger moves up
//! assert_eq!(surface.content_offset().y, 100.0);
//!
//! surface.end_drag(Point::ZERO);
//! while surface.tick(1.0 / 60.0) {}
//! assert!(!surface.is_animating());
//! ```
//!
//! # States
//!
//! - **Idle**: at rest
//! - **Dragging**: offset follows the finger, rubber-banded past the bounds
//! - **Decaying**: momentum after release
//! - **SpringingBack**: returning to the nearest in-bounds offset

use stickytab_animation::rubber_band::rubber_band_distance_with;
use stickytab_animation::{clamp_to_bounds, Kinematic, KinematicState};
use stickytab_core::event_types::{OUT_OF_BOUNDS, PAN_BEGIN, PAN_END, SETTLED};
use stickytab_core::{Axis, EdgeInsets, Point, Size, StateTransitions};

use crate::config::ScrollConfig;

// ============================================================================
// Scroll Surface
// ============================================================================

/// One scrollable surface and its gesture kinematics
#[derive(Debug, Clone)]
pub struct ScrollSurface {
    /// Visible window origin relative to the content origin
    offset: Point,
    content_size: Size,
    bounds_size: Size,
    content_inset: EdgeInsets,
    /// Native scrolling; panes inside the composite keep this off
    pub scroll_enabled: bool,
    state: KinematicState,
    /// Release behavior; only present while Decaying or SpringingBack
    behavior: Option<Kinematic>,
    /// Offset when the current drag began
    starting_offset: Option<Point>,
    /// Per-axis scrollability latched at drag start, indexed like `Axis::BOTH`
    drag_axes: [bool; 2],
    last_point_in_bounds: Option<Point>,
    config: ScrollConfig,
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollSurface {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            offset: Point::ZERO,
            content_size: Size::ZERO,
            bounds_size: Size::ZERO,
            content_inset: EdgeInsets::ZERO,
            scroll_enabled: true,
            state: KinematicState::Idle,
            behavior: None,
            starting_offset: None,
            drag_axes: [false; 2],
            last_point_in_bounds: None,
            config,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn content_offset(&self) -> Point {
        self.offset
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub fn state(&self) -> KinematicState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == KinematicState::Dragging
    }

    /// Whether a release behavior is still running
    pub fn is_animating(&self) -> bool {
        self.behavior.is_some()
    }

    /// Last offset observed inside the valid range
    pub fn last_point_in_bounds(&self) -> Option<Point> {
        self.last_point_in_bounds
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Set the offset programmatically. Returns whether it changed.
    pub fn set_content_offset(&mut self, offset: Point) -> bool {
        let changed = offset != self.offset;
        self.offset = offset;
        if !self.is_out_of_bounds() {
            self.last_point_in_bounds = Some(offset);
        }
        changed
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    pub fn set_bounds_size(&mut self, size: Size) {
        self.bounds_size = size;
    }

    /// Smallest valid offset (content edge pulled to the leading inset)
    pub fn min_offset(&self) -> Point {
        Point::new(-self.content_inset.left, -self.content_inset.top)
    }

    /// Largest valid offset (content end pulled to the trailing inset)
    pub fn max_offset(&self) -> Point {
        Point::new(
            self.content_size.width - self.bounds_size.width + self.content_inset.right,
            self.content_size.height - self.bounds_size.height + self.content_inset.bottom,
        )
    }

    /// Whether content plus insets overflows the bounds on `axis`
    pub fn can_scroll(&self, axis: Axis) -> bool {
        self.content_size.along(axis)
            + self.content_inset.leading(axis)
            + self.content_inset.trailing(axis)
            > self.bounds_size.along(axis)
    }

    /// Nearest valid offset to the current one
    pub fn anchor(&self) -> Point {
        self.clamp_offset(self.offset)
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.anchor() != self.offset
    }

    fn clamp_offset(&self, offset: Point) -> Point {
        let (min, max) = (self.min_offset(), self.max_offset());
        Point::new(
            clamp_to_bounds(offset.x, min.x, max.x),
            clamp_to_bounds(offset.y, min.y, max.y),
        )
    }

    // =========================================================================
    // Drag Handling
    // =========================================================================

    /// Start a drag: drop any running behavior, then record the start offset
    pub fn begin_drag(&mut self) {
        self.behavior = None;
        self.state.apply(PAN_BEGIN);
        self.starting_offset = Some(self.offset);
        self.drag_axes = Axis::BOTH.map(|axis| self.can_scroll(axis));

        tracing::trace!(
            "begin_drag at ({:.1}, {:.1})",
            self.offset.x,
            self.offset.y
        );
    }

    /// Follow a cumulative finger translation. Returns whether the offset moved.
    ///
    /// Axes whose content fit inside the bounds when the drag began never
    /// move, even if the owner grows the insets mid-drag. Past the bounds the
    /// residual is rubber-banded against the viewport dimension.
    pub fn update_drag(&mut self, translation: Point) -> bool {
        let Some(start) = self.starting_offset else {
            return false;
        };
        if !self.is_dragging() {
            return false;
        }

        let (min, max) = (self.min_offset(), self.max_offset());
        let mut offset = start;

        for (axis, scrollable) in Axis::BOTH.into_iter().zip(self.drag_axes) {
            let translation = if scrollable {
                translation.along(axis)
            } else {
                0.0
            };

            let candidate = start.along(axis) - translation;
            let constrained = clamp_to_bounds(candidate, min.along(axis), max.along(axis));
            let banded = if self.config.bounce_enabled {
                rubber_band_distance_with(
                    candidate - constrained,
                    self.bounds_size.along(axis),
                    self.config.rubber_band_constant,
                )
            } else {
                0.0
            };

            offset.set_along(axis, constrained + banded);
        }

        let old_y = self.offset.y;
        let changed = self.set_content_offset(offset);

        tracing::trace!(
            "update_drag dy={:.1} offset: {:.1} -> {:.1}, bounds=({:.0}, {:.0})",
            translation.y,
            old_y,
            self.offset.y,
            min.y,
            max.y
        );

        changed
    }

    /// Release with a finger velocity (points/second). Starts momentum decay.
    pub fn end_drag(&mut self, velocity: Point) {
        if !self.is_dragging() {
            return;
        }

        // Finger motion and content motion run in opposite directions
        let mut velocity = -velocity;
        for (axis, scrollable) in Axis::BOTH.into_iter().zip(self.drag_axes) {
            if !scrollable {
                velocity.set_along(axis, 0.0);
            }
        }

        self.starting_offset = None;
        self.state.apply(PAN_END);
        self.behavior = Some(Kinematic::decay(self.offset, velocity, self.config.decay));

        tracing::trace!(
            "end_drag velocity=({:.1}, {:.1}) at ({:.1}, {:.1})",
            velocity.x,
            velocity.y,
            self.offset.x,
            self.offset.y
        );

        // A release with no momentum may already need to spring back
        self.resolve_behavior();
    }

    /// Cancelled gestures settle like a release without momentum
    pub fn cancel_drag(&mut self) {
        self.end_drag(Point::ZERO);
    }

    /// Drop any running behavior, leaving the offset where it is
    pub fn stop_animation(&mut self) {
        if self.behavior.take().is_some() {
            self.state.apply(SETTLED);
        }
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Advance the release behavior by `dt` seconds.
    ///
    /// Returns whether a behavior is still running afterwards. Callers that
    /// need to know whether the offset moved compare `content_offset()`.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(behavior) = self.behavior.as_mut() else {
            return false;
        };

        let step = behavior.step(dt);
        self.set_content_offset(step.offset);
        self.resolve_behavior();
        self.is_animating()
    }

    /// Swap decay for spring-back when out of bounds, and retire settled behaviors
    fn resolve_behavior(&mut self) {
        let Some(behavior) = self.behavior else {
            return;
        };

        match behavior {
            Kinematic::Decaying(decay) => {
                if self.is_out_of_bounds() {
                    if self.config.bounce_enabled {
                        let anchor = self.anchor();
                        self.state.apply(OUT_OF_BOUNDS);
                        self.behavior = Some(Kinematic::spring(
                            self.offset,
                            decay.velocity(),
                            anchor,
                            self.config.spring,
                        ));
                        tracing::trace!(
                            "spring back from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                            self.offset.x,
                            self.offset.y,
                            anchor.x,
                            anchor.y
                        );
                        // Already at the anchor within epsilon
                        self.retire_if_settled();
                    } else {
                        let anchor = self.anchor();
                        self.set_content_offset(anchor);
                        self.behavior = None;
                        self.state.apply(SETTLED);
                    }
                } else {
                    self.retire_if_settled();
                }
            }
            Kinematic::SpringingBack(_) => self.retire_if_settled(),
        }
    }

    fn retire_if_settled(&mut self) {
        if let Some(behavior) = self.behavior {
            if behavior.is_settled() {
                self.set_content_offset(behavior.offset());
                self.behavior = None;
                self.state.apply(SETTLED);
            }
        }
    }
}
