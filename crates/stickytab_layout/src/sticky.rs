//! Sticky geometry
//!
//! Pure frame computation for the header, hero, and tab bar from the true
//! scroll offset, plus the layer stack that keeps the header and hero in the
//! right z-order.
//!
//! ```text
//! t < 0          t = 0           0 < t < collapse      t >= collapse
//! (stretched)    (at rest)       (collapsing)          (pinned)
//! ┌────────┐     ┌────────┐
//! │ header │     │ header │      ┌────────┐            ┌────────┐
//! │  +|t|  │     ├────────┤      │ header │            │ pinned │
//! ├────────┤     │  hero  │      ├────────┤            ├────────┤
//! │  hero  │     ├────────┤      │  hero  │            │ tabbar │
//! ```

use serde::Serialize;
use smallvec::SmallVec;
use stickytab_core::Rect;

/// Intrinsic heights feeding the geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickyMetrics {
    pub width: f32,
    pub header_height: f32,
    pub pinned_height: f32,
    pub hero_height: f32,
    pub tab_bar_height: f32,
}

impl StickyMetrics {
    /// Header + hero + tab bar
    pub fn compound_height(&self) -> f32 {
        self.header_height + self.hero_height + self.tab_bar_height
    }
}

/// Frames of the sticky views for one true scroll offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StickyFrames {
    pub header: Rect,
    pub hero: Rect,
    pub tab_bar: Rect,
    /// Header collapsed down to its pinned height
    pub pinned: bool,
    /// Extra header height while pulled down past the top
    pub stretch: f32,
    /// Fraction of the collapsible header height scrolled away, in `[0, 1]`
    pub collapse_progress: f32,
}

/// Compute sticky frames for `true_offset`
pub fn sticky_frames(true_offset: f32, m: &StickyMetrics) -> StickyFrames {
    let guide_top = -true_offset;

    let min_top = m.pinned_height - m.header_height;
    let unpinned_top = guide_top.min(0.0);
    let pinned = unpinned_top < min_top;
    let header_top = unpinned_top.max(min_top);

    let stretch = guide_top.max(0.0);
    let header = Rect::new(0.0, header_top, m.width, m.header_height + stretch);

    // Hero follows the header's unstretched bottom edge
    let hero = Rect::new(0.0, guide_top + m.header_height, m.width, m.hero_height);

    let tab_bar_top = hero.max_y().max(header.max_y());
    let tab_bar = Rect::new(0.0, tab_bar_top, m.width, m.tab_bar_height);

    let collapsible = m.header_height - m.pinned_height;
    let collapse_progress = if collapsible > 0.0 {
        (true_offset.max(0.0) / collapsible).min(1.0)
    } else if pinned {
        1.0
    } else {
        0.0
    };

    StickyFrames {
        header,
        hero,
        tab_bar,
        pinned,
        stretch,
        collapse_progress,
    }
}

// ============================================================================
// Layer Stack
// ============================================================================

/// A view the composite stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StickyLayer {
    /// Horizontal paging surface holding the panes
    Panes,
    Header,
    Hero,
    TabBar,
}

/// Bottom-to-top stacking order
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: SmallVec<[StickyLayer; 4]>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self {
            layers: SmallVec::from_slice(&[StickyLayer::Panes]),
        }
    }
}

impl LayerStack {
    pub fn order(&self) -> &[StickyLayer] {
        &self.layers
    }

    pub fn index_of(&self, layer: StickyLayer) -> Option<usize> {
        self.layers.iter().position(|l| *l == layer)
    }

    /// Place `layer` on top, moving it if already stacked
    pub fn attach(&mut self, layer: StickyLayer) {
        self.detach(layer);
        self.layers.push(layer);
    }

    pub fn detach(&mut self, layer: StickyLayer) {
        self.layers.retain(|l| *l != layer);
    }

    /// Header above hero while pinned, hero above header otherwise.
    ///
    /// Exchanges the two entries only when they are out of order. Returns
    /// whether a swap happened.
    pub fn fix_header_hero(&mut self, pinned: bool) -> bool {
        let (Some(header), Some(hero)) = (
            self.index_of(StickyLayer::Header),
            self.index_of(StickyLayer::Hero),
        ) else {
            return false;
        };

        if (pinned && header < hero) || (!pinned && header > hero) {
            self.layers.swap(header, hero);
            tracing::debug!(
                "layer swap: {} on top",
                if pinned { "header" } else { "hero" }
            );
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> StickyMetrics {
        StickyMetrics {
            width: 320.0,
            header_height: 170.0,
            pinned_height: 60.0,
            hero_height: 0.0,
            tab_bar_height: 60.0,
        }
    }

    #[test]
    fn test_at_rest() {
        let f = sticky_frames(0.0, &metrics());
        assert_eq!(f.header, Rect::new(0.0, 0.0, 320.0, 170.0));
        assert_eq!(f.tab_bar.y(), 170.0);
        assert!(!f.pinned);
        assert_eq!(f.collapse_progress, 0.0);
    }

    #[test]
    fn test_pin_threshold() {
        let f = sticky_frames(150.0, &metrics());
        assert!(f.pinned);
        assert_eq!(f.header.y(), -110.0);
        assert_eq!(f.header.max_y(), 60.0);
        assert_eq!(f.tab_bar.y(), 60.0);
        assert_eq!(f.collapse_progress, 1.0);

        let f = sticky_frames(50.0, &metrics());
        assert!(!f.pinned);
        assert_eq!(f.header.y(), -50.0);
        assert_eq!(f.tab_bar.y(), 120.0);
        assert_eq!(f.collapse_progress, 50.0 / 110.0);

        // Exactly at the threshold is not yet pinned
        assert!(!sticky_frames(110.0, &metrics()).pinned);
    }

    #[test]
    fn test_stretch_when_pulled_down() {
        let f = sticky_frames(-40.0, &metrics());
        assert_eq!(f.header.y(), 0.0);
        assert_eq!(f.header.height(), 210.0);
        assert_eq!(f.stretch, 40.0);
        assert_eq!(f.tab_bar.y(), 210.0);
    }

    #[test]
    fn test_hero_tracks_unstretched_header() {
        let mut m = metrics();
        m.hero_height = 80.0;

        let f = sticky_frames(30.0, &m);
        assert_eq!(f.hero.y(), 140.0);
        assert_eq!(f.tab_bar.y(), 220.0);

        // Hero scrolls out under the pinned header; tab bar sticks to the header
        let f = sticky_frames(300.0, &m);
        assert_eq!(f.hero.y(), -130.0);
        assert_eq!(f.tab_bar.y(), 60.0);
    }

    #[test]
    fn test_layer_swap_only_when_out_of_order() {
        let mut stack = LayerStack::default();
        for layer in [StickyLayer::Header, StickyLayer::Hero, StickyLayer::TabBar] {
            stack.attach(layer);
        }

        // Attach order already puts the hero above the header
        assert!(!stack.fix_header_hero(false));

        assert!(stack.fix_header_hero(true));
        assert_eq!(
            stack.order(),
            &[
                StickyLayer::Panes,
                StickyLayer::Hero,
                StickyLayer::Header,
                StickyLayer::TabBar
            ]
        );
        assert!(!stack.fix_header_hero(true));

        assert!(stack.fix_header_hero(false));
        assert_eq!(stack.index_of(StickyLayer::Hero), Some(2));
    }

    #[test]
    fn test_attach_moves_to_top() {
        let mut stack = LayerStack::default();
        stack.attach(StickyLayer::Header);
        stack.attach(StickyLayer::TabBar);
        stack.attach(StickyLayer::Header);
        assert_eq!(
            stack.order(),
            &[StickyLayer::Panes, StickyLayer::TabBar, StickyLayer::Header]
        );

        stack.detach(StickyLayer::Header);
        assert!(!stack.fix_header_hero(true));
    }
}
