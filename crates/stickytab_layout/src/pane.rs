//! Content pane adapter
//!
//! The composite positions every pane in an "opaque" coordinate space that
//! knows nothing about a pane's own chrome. The adapter translates that space
//! to the raw offset and inset of the pane's scroll surface, adding the
//! pane's fixed top and bottom insets plus a supplemental bottom inset that
//! keeps short content scrollable far enough to pin the header.
//!
//! ```text
//! raw inset  = opaque inset + (top_inset, 0, bottom_inset + supplemental, 0)
//! raw offset = opaque offset - top_inset      (vertical only)
//! ```

use std::fmt;

use stickytab_core::{EdgeInsets, Point, Rect, Size};

use crate::config::{PaneConfig, ScrollConfig};
use crate::scroll_surface::ScrollSurface;

/// One tab of scrollable content supplied by the host
pub trait ContentPane: fmt::Debug {
    /// Title shown in the tab bar
    fn title(&self) -> Option<String>;

    /// Total size of the scrollable content
    fn content_size(&self) -> Size;

    /// Fixed chrome inset above the content
    fn top_inset(&self) -> f32 {
        PaneConfig::default().top_inset
    }

    /// Fixed chrome inset below the content
    fn bottom_inset(&self) -> f32 {
        PaneConfig::default().bottom_inset
    }
}

/// Pane with a fixed title and content size
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPane {
    title: Option<String>,
    content_size: Size,
    insets: PaneConfig,
}

impl StaticPane {
    pub fn new(title: impl Into<String>, content_size: Size) -> Self {
        Self {
            title: Some(title.into()),
            content_size,
            insets: PaneConfig::default(),
        }
    }

    /// Override the chrome insets
    pub fn with_insets(mut self, insets: PaneConfig) -> Self {
        self.insets = insets;
        self
    }

    /// Change the content size; the owning [`Pane`] picks it up on
    /// [`Pane::refresh_content_size`]
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }
}

impl ContentPane for StaticPane {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn top_inset(&self) -> f32 {
        self.insets.top_inset
    }

    fn bottom_inset(&self) -> f32 {
        self.insets.bottom_inset
    }
}

// ============================================================================
// Pane
// ============================================================================

/// A hosted content pane and its scroll surface
#[derive(Debug)]
pub struct Pane {
    content: Box<dyn ContentPane>,
    surface: ScrollSurface,
    opaque_inset: EdgeInsets,
    supplemental_bottom_inset: f32,
    frame: Rect,
}

impl Pane {
    pub fn new(content: Box<dyn ContentPane>, scroll: ScrollConfig) -> Self {
        let mut surface = ScrollSurface::new(scroll);
        surface.set_content_size(content.content_size());

        let mut pane = Self {
            content,
            surface,
            opaque_inset: EdgeInsets::ZERO,
            supplemental_bottom_inset: 0.0,
            frame: Rect::ZERO,
        };
        pane.apply_raw_inset();
        pane
    }

    pub fn content(&self) -> &dyn ContentPane {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn ContentPane {
        self.content.as_mut()
    }

    /// Give the hosted content back once the pane is detached
    pub fn into_content(self) -> Box<dyn ContentPane> {
        self.content
    }

    pub fn title(&self) -> Option<String> {
        self.content.title()
    }

    pub fn surface(&self) -> &ScrollSurface {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut ScrollSurface {
        &mut self.surface
    }

    /// Frame on the horizontal paging surface
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Place the pane; its surface viewport follows the frame size
    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.surface.set_bounds_size(frame.size);
        self.recompute_supplemental_inset(self.surface.content_offset().y);
    }

    pub fn supplemental_bottom_inset(&self) -> f32 {
        self.supplemental_bottom_inset
    }

    // =========================================================================
    // Opaque space
    // =========================================================================

    pub fn opaque_content_inset(&self) -> EdgeInsets {
        self.opaque_inset
    }

    pub fn set_opaque_content_inset(&mut self, inset: EdgeInsets) {
        self.opaque_inset = inset;
        self.apply_raw_inset();
    }

    pub fn opaque_content_offset(&self) -> Point {
        let raw = self.surface.content_offset();
        Point::new(raw.x, raw.y + self.content.top_inset())
    }

    /// Set the vertical offset in opaque space. Returns whether the raw
    /// offset changed.
    pub fn set_opaque_content_offset(&mut self, offset: Point) -> bool {
        let raw_y = offset.y - self.content.top_inset();
        let raw = Point::new(self.surface.content_offset().x, raw_y);
        let changed = self.surface.set_content_offset(raw);
        self.recompute_supplemental_inset(raw_y);
        changed
    }

    /// Offset measured from the top of the raw inset (header-independent)
    pub fn true_scroll_offset(&self) -> f32 {
        self.surface.content_offset().y + self.surface.content_inset().top
    }

    // =========================================================================
    // Insets
    // =========================================================================

    /// Grow the bottom inset so the content end can reach the viewport bottom
    /// even when the content is shorter than the viewport.
    ///
    /// Returns whether the supplemental inset changed.
    pub fn recompute_supplemental_inset(&mut self, raw_offset_y: f32) -> bool {
        let content_bottom =
            self.surface.content_size().height - raw_offset_y + self.content.bottom_inset();
        let supplemental = (self.surface.bounds_size().height - content_bottom).max(0.0);

        if supplemental == self.supplemental_bottom_inset {
            return false;
        }
        self.supplemental_bottom_inset = supplemental;
        self.apply_raw_inset();
        true
    }

    /// Scroll callback from the surface. Only recomputes while the content
    /// bottom still extends past the viewport, so the supplemental inset
    /// never shrinks under a rubber-banding drag at the end.
    pub fn surface_did_scroll(&mut self) {
        let raw_offset_y = self.surface.content_offset().y;
        let content_bottom = self.surface.content_size().height
            + self.surface.content_inset().bottom
            - raw_offset_y;
        if content_bottom > self.surface.bounds_size().height {
            self.recompute_supplemental_inset(raw_offset_y);
        }
    }

    /// Re-read the content size after the host reloaded its data
    pub fn refresh_content_size(&mut self) {
        self.surface.set_content_size(self.content.content_size());
        self.recompute_supplemental_inset(self.surface.content_offset().y);
    }

    fn apply_raw_inset(&mut self) {
        let chrome = EdgeInsets::new(
            self.content.top_inset(),
            0.0,
            self.content.bottom_inset() + self.supplemental_bottom_inset,
            0.0,
        );
        self.surface.set_content_inset(self.opaque_inset + chrome);
    }
}
