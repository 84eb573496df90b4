//! Horizontal paging surface
//!
//! Panes sit side by side, one page per pane. The host drives the
//! horizontal offset with its own momentum; programmatic page changes
//! animate with a spring.

use stickytab_animation::{clamp_to_bounds, SpringAttachment, SpringConfig};
use stickytab_core::Point;

/// Page index a horizontal offset settles on.
///
/// An offset past the midpoint of a page rounds up to the next page. Returns
/// `None` when there are no pages or the page width is not positive.
pub fn settle_page_index(offset_x: f32, page_width: f32, page_count: usize) -> Option<usize> {
    if page_count == 0 || page_width <= 0.0 || !offset_x.is_finite() {
        return None;
    }
    let raw = ((offset_x - page_width / 2.0) / page_width).floor() + 1.0;
    let last = (page_count - 1) as f32;
    Some(raw.clamp(0.0, last) as usize)
}

#[derive(Debug, Clone, Default)]
pub struct PagingSurface {
    offset_x: f32,
    page_width: f32,
    page_count: usize,
    animation: Option<SpringAttachment>,
}

impl PagingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Total width of all pages
    pub fn content_width(&self) -> f32 {
        self.page_count as f32 * self.page_width
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = width.max(0.0);
        self.offset_x = self.clamp(self.offset_x);
    }

    pub fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
        self.offset_x = self.clamp(self.offset_x);
    }

    /// Host-driven scroll. Paging does not bounce, so the offset is clamped.
    pub fn set_offset_x(&mut self, offset_x: f32) {
        self.animation = None;
        self.offset_x = self.clamp(offset_x);
    }

    /// Move to `offset_x`, with a spring when `animated`
    pub fn scroll_to(&mut self, offset_x: f32, animated: bool) {
        let target = self.clamp(offset_x);
        if !animated || target == self.offset_x {
            self.set_offset_x(target);
            return;
        }

        self.animation = Some(SpringAttachment::new(
            Point::new(self.offset_x, 0.0),
            Point::ZERO,
            Point::new(target, 0.0),
            SpringConfig::default(),
        ));
    }

    /// Advance the page animation. Returns whether it is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(spring) = self.animation.as_mut() else {
            return false;
        };

        self.offset_x = spring.step(dt).x;
        if spring.is_settled() {
            self.animation = None;
        }
        self.animation.is_some()
    }

    /// Page the current offset settles on
    pub fn current_page(&self) -> Option<usize> {
        settle_page_index(self.offset_x, self.page_width, self.page_count)
    }

    fn clamp(&self, offset_x: f32) -> f32 {
        let max = (self.content_width() - self.page_width).max(0.0);
        clamp_to_bounds(offset_x, 0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_rounding() {
        assert_eq!(settle_page_index(170.0, 320.0, 3), Some(1));
        assert_eq!(settle_page_index(150.0, 320.0, 3), Some(0));
        // Midpoint rounds up
        assert_eq!(settle_page_index(160.0, 320.0, 3), Some(1));
        assert_eq!(settle_page_index(640.0, 320.0, 3), Some(2));
    }

    #[test]
    fn test_settle_clamps_and_degenerates() {
        assert_eq!(settle_page_index(5000.0, 320.0, 3), Some(2));
        assert_eq!(settle_page_index(-400.0, 320.0, 3), Some(0));
        assert_eq!(settle_page_index(100.0, 320.0, 0), None);
        assert_eq!(settle_page_index(100.0, 0.0, 3), None);
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut paging = PagingSurface::new();
        paging.set_page_width(320.0);
        paging.set_page_count(3);
        assert_eq!(paging.content_width(), 960.0);

        paging.set_offset_x(2000.0);
        assert_eq!(paging.offset_x(), 640.0);
        paging.set_offset_x(-20.0);
        assert_eq!(paging.offset_x(), 0.0);

        paging.set_offset_x(640.0);
        paging.set_page_count(1);
        assert_eq!(paging.offset_x(), 0.0);
    }

    #[test]
    fn test_animated_scroll_reaches_target() {
        let mut paging = PagingSurface::new();
        paging.set_page_width(320.0);
        paging.set_page_count(3);

        paging.scroll_to(640.0, true);
        assert!(paging.is_animating());
        assert_eq!(paging.offset_x(), 0.0);

        let mut frames = 0;
        while paging.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(paging.offset_x(), 640.0);
        assert_eq!(paging.current_page(), Some(2));
    }

    #[test]
    fn test_host_scroll_cancels_animation() {
        let mut paging = PagingSurface::new();
        paging.set_page_width(320.0);
        paging.set_page_count(2);
        paging.scroll_to(320.0, true);
        paging.tick(1.0 / 60.0);

        paging.set_offset_x(10.0);
        assert!(!paging.is_animating());
        assert!(!paging.tick(1.0 / 60.0));
        assert_eq!(paging.offset_x(), 10.0);
    }
}
