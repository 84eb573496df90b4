//! Sticky header tabs composite
//!
//! Stacks a collapsible header, an optional hero, and a tab bar over a set
//! of horizontally paged content panes. One vertical pan recognizer drives
//! the selected pane's scroll surface; every offset that surface reports is
//! turned into a single "true" scroll offset, which positions the sticky
//! views and is written back into every other pane so switching tabs never
//! shows a jump.
//!
//! # Example
//!
//! ```rust
//! use stickytab_core::{PanGesture, Point, Size};
//! use stickytab_layout::{FixedHeader, StaticPane, StickyConfig, StickyHeaderTabs};
//!
//! let mut tabs = StickyHeaderTabs::new(StickyConfig::default());
//! tabs.set_header(Some(Box::new(FixedHeader::new(170.0, 60.0).unwrap())));
//! tabs.set_panes(vec![
//!     Box::new(StaticPane::new("Posts", Size::new(320.0, 3000.0))),
//!     Box::new(StaticPane::new("Likes", Size::new(320.0, 3000.0))),
//! ]);
//! tabs.set_bounds(Size::new(320.0, 640.0));
//!
//! tabs.handle_pan(PanGesture::began());
//! tabs.handle_pan(PanGesture::changed(Point::new(0.0, -150.0)));
//!
//! assert_eq!(tabs.true_scroll_offset(), 150.0);
//! assert!(tabs.is_pinned());
//! assert_eq!(tabs.frames().header.y(), -110.0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};
use stickytab_core::{EdgeInsets, GesturePhase, PanGesture, Point, Rect, Size};

use crate::collaborators::{HeightProvider, PinnableHeader, StickyHeaderTabsDelegate};
use crate::config::StickyConfig;
use crate::gesture::PanRecognizer;
use crate::pane::{ContentPane, Pane};
use crate::paging::{settle_page_index, PagingSurface};
use crate::sticky::{sticky_frames, LayerStack, StickyFrames, StickyLayer, StickyMetrics};
use crate::tab_bar::{TabBar, TabBarDataSource};

new_key_type! {
    /// Generational handle to a hosted pane
    pub struct PaneId;
}

/// Panes as the tab bar's title source
struct PaneTitles<'a> {
    panes: &'a SlotMap<PaneId, Pane>,
    order: &'a [PaneId],
}

impl TabBarDataSource for PaneTitles<'_> {
    fn number_of_tabs(&self) -> usize {
        self.order.len()
    }

    fn title_at(&self, index: usize) -> Option<String> {
        let id = self.order.get(index)?;
        self.panes.get(*id)?.title()
    }
}

pub struct StickyHeaderTabs {
    config: StickyConfig,
    header: Option<Box<dyn PinnableHeader>>,
    hero: Option<Box<dyn HeightProvider>>,
    tab_bar: TabBar,
    panes: SlotMap<PaneId, Pane>,
    order: Vec<PaneId>,
    selected_index: Option<usize>,
    /// Pane the current vertical gesture (and its momentum) belongs to
    active_pane: Option<PaneId>,
    /// Offset measured from the bottom of the tab bar
    true_scroll_offset: f32,
    compound_header_height: f32,
    frames: StickyFrames,
    layers: LayerStack,
    pan: PanRecognizer,
    paging: PagingSurface,
    bounds: Size,
    delegate: Option<Weak<RefCell<dyn StickyHeaderTabsDelegate>>>,
}

impl std::fmt::Debug for StickyHeaderTabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyHeaderTabs")
            .field("panes", &self.order.len())
            .field("selected_index", &self.selected_index)
            .field("active_pane", &self.active_pane)
            .field("true_scroll_offset", &self.true_scroll_offset)
            .field("compound_header_height", &self.compound_header_height)
            .field("pinned", &self.frames.pinned)
            .finish()
    }
}

impl Default for StickyHeaderTabs {
    fn default() -> Self {
        Self::new(StickyConfig::default())
    }
}

impl StickyHeaderTabs {
    pub fn new(config: StickyConfig) -> Self {
        let mut layers = LayerStack::default();
        layers.attach(StickyLayer::TabBar);

        let mut tabs = Self {
            tab_bar: TabBar::new(config.tab_bar),
            pan: PanRecognizer::new(config.gesture),
            config,
            header: None,
            hero: None,
            panes: SlotMap::with_key(),
            order: Vec::new(),
            selected_index: None,
            active_pane: None,
            true_scroll_offset: 0.0,
            compound_header_height: 0.0,
            frames: StickyFrames::default(),
            layers,
            paging: PagingSurface::new(),
            bounds: Size::ZERO,
            delegate: None,
        };
        tabs.recompute_compound_header_height();
        tabs.recompute_sticky_geometry();
        tabs
    }

    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    pub fn set_delegate<D: StickyHeaderTabsDelegate + 'static>(
        &mut self,
        delegate: &Rc<RefCell<D>>,
    ) {
        let weak: Weak<RefCell<D>> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn frames(&self) -> &StickyFrames {
        &self.frames
    }

    /// Bottom-to-top stacking order of the composite's views
    pub fn layer_order(&self) -> &[StickyLayer] {
        self.layers.order()
    }

    pub fn true_scroll_offset(&self) -> f32 {
        self.true_scroll_offset
    }

    pub fn compound_header_height(&self) -> f32 {
        self.compound_header_height
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_pane_id(&self) -> Option<PaneId> {
        self.selected_index.and_then(|i| self.order.get(i).copied())
    }

    pub fn selected_pane(&self) -> Option<&Pane> {
        self.selected_pane_id().and_then(|id| self.panes.get(id))
    }

    /// Pane bound to the in-flight vertical gesture, if it still exists
    pub fn active_pane_id(&self) -> Option<PaneId> {
        self.active_pane.filter(|id| self.panes.contains_key(*id))
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(id)
    }

    /// Pane ids in tab order
    pub fn pane_ids(&self) -> &[PaneId] {
        &self.order
    }

    pub fn is_pinned(&self) -> bool {
        self.frames.pinned
    }

    pub fn header(&self) -> Option<&dyn PinnableHeader> {
        self.header.as_deref()
    }

    pub fn hero(&self) -> Option<&dyn HeightProvider> {
        self.hero.as_deref()
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    /// Follow a height change made here with [`Self::tab_bar_height_changed`]
    pub fn tab_bar_mut(&mut self) -> &mut TabBar {
        &mut self.tab_bar
    }

    pub fn paging(&self) -> &PagingSurface {
        &self.paging
    }

    pub fn pan_recognizer(&self) -> &PanRecognizer {
        &self.pan
    }

    pub fn set_pan_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.cancel_gesture();
        }
        self.pan.set_enabled(enabled);
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Replace the header. Returns the previous one.
    pub fn set_header(
        &mut self,
        header: Option<Box<dyn PinnableHeader>>,
    ) -> Option<Box<dyn PinnableHeader>> {
        self.cancel_gesture();

        let old = std::mem::replace(&mut self.header, header);
        self.layers.detach(StickyLayer::Header);
        if self.header.is_some() {
            self.layers.attach(StickyLayer::Header);
        }
        tracing::debug!("header replaced: {:?}", self.header);

        self.recompute_compound_header_height();
        self.recompute_sticky_geometry();
        old
    }

    /// Replace the hero. Returns the previous one.
    pub fn set_hero(
        &mut self,
        hero: Option<Box<dyn HeightProvider>>,
    ) -> Option<Box<dyn HeightProvider>> {
        self.cancel_gesture();

        let old = std::mem::replace(&mut self.hero, hero);
        self.layers.detach(StickyLayer::Hero);
        if self.hero.is_some() {
            self.layers.attach(StickyLayer::Hero);
        }
        tracing::debug!("hero replaced: {:?}", self.hero);

        self.recompute_compound_header_height();
        self.recompute_sticky_geometry();
        old
    }

    /// Replace the tab bar. Titles and selection carry over. Returns the
    /// previous bar.
    pub fn set_tab_bar(&mut self, tab_bar: TabBar) -> TabBar {
        let old = std::mem::replace(&mut self.tab_bar, tab_bar);
        self.layers.attach(StickyLayer::TabBar);

        self.tab_bar.set_width(self.bounds.width);
        self.reload_tab_bar();
        if let Some(index) = self.selected_index {
            self.tab_bar.select_tab(index, false);
        }

        self.recompute_compound_header_height();
        self.recompute_sticky_geometry();
        old
    }

    pub fn header_height_changed(&mut self) -> bool {
        self.recompute_compound_header_height()
    }

    pub fn hero_height_changed(&mut self) -> bool {
        self.recompute_compound_header_height()
    }

    pub fn tab_bar_height_changed(&mut self) -> bool {
        self.recompute_compound_header_height()
    }

    // =========================================================================
    // Panes
    // =========================================================================

    /// Replace every pane. The in-flight gesture is cancelled, the first
    /// pane is selected, and the scroll position starts over at the top.
    /// Returns the new panes' ids in tab order.
    pub fn set_panes(&mut self, contents: Vec<Box<dyn ContentPane>>) -> Vec<PaneId> {
        self.cancel_gesture();

        for id in self.order.drain(..) {
            self.panes.remove(id);
        }

        let inset = EdgeInsets::top(self.compound_header_height);
        for content in contents {
            let mut pane = Pane::new(content, self.config.scroll);
            pane.surface_mut().scroll_enabled = false;
            pane.set_opaque_content_inset(inset);
            self.order.push(self.panes.insert(pane));
        }

        self.selected_index = if self.order.is_empty() { None } else { Some(0) };
        self.layout_panes();
        self.paging.set_offset_x(0.0);

        self.reload_tab_bar();
        if self.selected_index.is_some() {
            self.tab_bar.select_tab(0, false);
        }

        tracing::debug!("panes replaced: {} panes", self.order.len());

        self.apply_true_offset(0.0);
        self.order.clone()
    }

    /// Remove a single pane without disturbing the gesture on the others.
    /// The selected pane stays selected if it survives.
    pub fn remove_pane(&mut self, id: PaneId) -> Option<Box<dyn ContentPane>> {
        let position = self.order.iter().position(|p| *p == id)?;
        let pane = self.panes.remove(id)?;
        self.order.remove(position);

        if self.active_pane == Some(id) {
            self.active_pane = None;
        }

        self.selected_index = match self.selected_index {
            _ if self.order.is_empty() => None,
            Some(selected) if position < selected => Some(selected - 1),
            Some(selected) => Some(selected.min(self.order.len() - 1)),
            None => Some(0),
        };

        self.layout_panes();
        self.reload_tab_bar();
        if let Some(index) = self.selected_index {
            self.paging
                .set_offset_x(index as f32 * self.paging.page_width());
            self.tab_bar.select_tab(index, false);
        }

        tracing::debug!("pane removed at {}", position);
        Some(pane.into_content())
    }

    /// Re-read a pane's content size after its data changed
    pub fn refresh_content_size(&mut self, id: PaneId) {
        if let Some(pane) = self.panes.get_mut(id) {
            pane.refresh_content_size();
        }
    }

    fn reload_tab_bar(&mut self) {
        let titles = PaneTitles {
            panes: &self.panes,
            order: &self.order,
        };
        self.tab_bar.reload_data(Some(&titles));
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Viewport size changed: lay out pages, panes, and the tab bar
    pub fn set_bounds(&mut self, size: Size) {
        self.bounds = size;
        self.tab_bar.set_width(size.width);
        self.layout_panes();
        self.recompute_sticky_geometry();
    }

    fn layout_panes(&mut self) {
        let Size { width, height } = self.bounds;
        self.paging.set_page_width(width);
        self.paging.set_page_count(self.order.len());

        for (index, id) in self.order.iter().enumerate() {
            if let Some(pane) = self.panes.get_mut(*id) {
                pane.set_frame(Rect::new(index as f32 * width, 0.0, width, height));
            }
        }
    }

    fn metrics(&self) -> StickyMetrics {
        StickyMetrics {
            width: self.bounds.width,
            header_height: self.header.as_ref().map_or(0.0, |h| h.height()),
            pinned_height: self.header.as_ref().map_or(0.0, |h| h.pinned_height()),
            hero_height: self.hero.as_ref().map_or(0.0, |h| h.height()),
            tab_bar_height: self.tab_bar.height(),
        }
    }

    /// Re-sum header, hero, and tab bar heights. When the sum changed, every
    /// pane gets it as its top inset and the panes are realigned.
    ///
    /// Returns whether the compound height changed.
    pub fn recompute_compound_header_height(&mut self) -> bool {
        let height = self.metrics().compound_height();
        if height == self.compound_header_height {
            return false;
        }

        tracing::debug!(
            "compound header height {:.1} -> {:.1}",
            self.compound_header_height,
            height
        );
        self.compound_header_height = height;

        let inset = EdgeInsets::top(height);
        for pane in self.panes.values_mut() {
            pane.set_opaque_content_inset(inset);
        }

        // The active pane keeps its raw offset, so its true offset moves
        let t = match self.active_pane_id().and_then(|id| self.panes.get(id)) {
            Some(pane) => pane.true_scroll_offset(),
            None => self.true_scroll_offset,
        };
        self.apply_true_offset(t);
        true
    }

    /// Position the sticky views for the current true offset and fix the
    /// header/hero stacking
    pub fn recompute_sticky_geometry(&mut self) {
        self.frames = sticky_frames(self.true_scroll_offset, &self.metrics());
        self.layers.fix_header_hero(self.frames.pinned);

        tracing::trace!(
            "sticky geometry t={:.1} header_y={:.1} tab_bar_y={:.1} pinned={}",
            self.true_scroll_offset,
            self.frames.header.y(),
            self.frames.tab_bar.y(),
            self.frames.pinned
        );
    }

    // =========================================================================
    // Vertical Scrolling
    // =========================================================================

    /// Take `true_offset` as the new vertical position, propagate it to
    /// every inactive pane, and notify the delegate
    pub fn handle_vertical_scroll(&mut self, true_offset: f32) {
        self.apply_true_offset(true_offset);
        self.notify_delegate();
    }

    fn apply_true_offset(&mut self, true_offset: f32) {
        self.true_scroll_offset = true_offset;
        self.recompute_sticky_geometry();

        let active = self.active_pane_id();
        let offset = Point::new(0.0, true_offset - self.compound_header_height);
        for (id, pane) in self.panes.iter_mut() {
            if Some(id) != active {
                pane.set_opaque_content_offset(offset);
            }
        }
    }

    fn notify_delegate(&self) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match delegate.try_borrow_mut() {
            Ok(mut delegate) => delegate.did_scroll_vertically(self),
            Err(_) => tracing::warn!("delegate busy; skipped scroll notification"),
        };
    }

    /// The active surface moved: fix its supplemental inset and propagate
    fn active_surface_scrolled(&mut self, id: PaneId) {
        let Some(pane) = self.panes.get_mut(id) else {
            return;
        };
        pane.surface_did_scroll();
        let t = pane.true_scroll_offset();
        self.handle_vertical_scroll(t);
    }

    /// Route a vertical pan callback to the selected pane's surface
    pub fn handle_pan(&mut self, pan: PanGesture) {
        let Some(pan) = self.pan.filter(pan) else {
            return;
        };

        match pan.phase {
            GesturePhase::Began => {
                let selected = self.selected_pane_id();
                if let Some(previous) = self.active_pane.take() {
                    if Some(previous) != selected {
                        if let Some(pane) = self.panes.get_mut(previous) {
                            pane.surface_mut().stop_animation();
                        }
                    }
                }

                self.active_pane = selected;
                if let Some(pane) = selected.and_then(|id| self.panes.get_mut(id)) {
                    pane.surface_mut().begin_drag();
                }
            }
            GesturePhase::Changed => {
                let Some(id) = self.active_pane_id() else {
                    return;
                };
                let moved = self
                    .panes
                    .get_mut(id)
                    .is_some_and(|pane| pane.surface_mut().update_drag(pan.translation));
                if moved {
                    self.active_surface_scrolled(id);
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                let Some(id) = self.active_pane_id() else {
                    self.active_pane = None;
                    return;
                };
                let Some(pane) = self.panes.get_mut(id) else {
                    return;
                };

                let before = pane.surface().content_offset();
                pane.surface_mut().end_drag(pan.velocity);
                let moved = pane.surface().content_offset() != before;
                let animating = pane.surface().is_animating();

                if moved {
                    self.active_surface_scrolled(id);
                }
                if !animating {
                    self.active_pane = None;
                }
            }
        }
    }

    /// Cancel the in-flight vertical gesture. The active surface settles in
    /// place at its nearest in-bounds offset and the binding is released.
    fn cancel_gesture(&mut self) {
        self.pan.cancel_current_gesture();

        let Some(id) = self.active_pane.take() else {
            return;
        };
        let Some(pane) = self.panes.get_mut(id) else {
            return;
        };

        let surface = pane.surface_mut();
        if surface.is_dragging() {
            surface.cancel_drag();
        }
        surface.stop_animation();
        let anchor = surface.anchor();
        if surface.set_content_offset(anchor) || surface.is_out_of_bounds() {
            pane.surface_did_scroll();
        }

        let t = pane.true_scroll_offset();
        self.apply_true_offset(t);
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Advance every running animation by `dt` seconds. Returns whether
    /// anything is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;

        if let Some(id) = self.active_pane_id() {
            if let Some(pane) = self.panes.get_mut(id) {
                let before = pane.surface().content_offset();
                let running = pane.surface_mut().tick(dt);
                let moved = pane.surface().content_offset() != before;
                let dragging = pane.surface().is_dragging();

                if moved {
                    self.active_surface_scrolled(id);
                }
                if !running && !dragging {
                    tracing::trace!("active pane settled at t={:.1}", self.true_scroll_offset);
                    self.active_pane = None;
                }
                animating |= running;
            }
        } else {
            self.active_pane = None;
        }

        let active = self.active_pane;
        for (id, pane) in self.panes.iter_mut() {
            if Some(id) != active {
                animating |= pane.surface_mut().tick(dt);
            }
        }

        animating |= self.paging.tick(dt);
        animating
    }

    // =========================================================================
    // Tabs & Paging
    // =========================================================================

    /// Page to `index` and select it. Out-of-range indices are ignored.
    pub fn scroll_to_tab(&mut self, index: usize, animated: bool) -> bool {
        if index >= self.order.len() {
            tracing::warn!(
                "scroll_to_tab({}) ignored: only {} panes",
                index,
                self.order.len()
            );
            return false;
        }

        let target = index as f32 * self.paging.page_width();
        self.paging.scroll_to(target, animated);
        self.selected_index = Some(index);
        self.tab_bar.select_tab(index, animated);
        true
    }

    /// A tab bar cell was tapped
    pub fn handle_tab_tapped(&mut self, index: usize) -> bool {
        match self.tab_bar.tap(index) {
            Some(tapped) => self.scroll_to_tab(tapped.index, true),
            None => false,
        }
    }

    /// Host-driven horizontal scroll of the paging surface
    pub fn handle_horizontal_scroll(&mut self, offset_x: f32) {
        self.paging.set_offset_x(offset_x);
    }

    /// Horizontal momentum ended: select the page it settled on.
    ///
    /// Returns the settled index, or `None` when there is nothing to page.
    pub fn did_end_horizontal_deceleration(&mut self) -> Option<usize> {
        let index = settle_page_index(
            self.paging.offset_x(),
            self.paging.page_width(),
            self.order.len(),
        )?;

        if self.selected_index != Some(index) {
            tracing::debug!("horizontal settle selected tab {}", index);
            self.selected_index = Some(index);
        }
        self.tab_bar.select_tab(index, true);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{FixedHeader, FixedHero};
    use crate::pane::StaticPane;

    fn composite(panes: &[(&str, f32)]) -> StickyHeaderTabs {
        let mut tabs = StickyHeaderTabs::default();
        tabs.set_header(Some(Box::new(FixedHeader::new(170.0, 60.0).unwrap())));
        tabs.set_panes(
            panes
                .iter()
                .map(|(title, h)| {
                    Box::new(StaticPane::new(*title, Size::new(320.0, *h))) as Box<dyn ContentPane>
                })
                .collect(),
        );
        tabs.set_bounds(Size::new(320.0, 640.0));
        tabs
    }

    fn drag(tabs: &mut StickyHeaderTabs, dy: f32) {
        tabs.handle_pan(PanGesture::began());
        tabs.handle_pan(PanGesture::changed(Point::new(0.0, dy)));
    }

    #[test]
    fn test_compound_height() {
        let mut tabs = StickyHeaderTabs::default();
        assert_eq!(tabs.compound_header_height(), 60.0);

        tabs.set_header(Some(Box::new(FixedHeader::new(170.0, 60.0).unwrap())));
        tabs.set_hero(Some(Box::new(FixedHero::new(80.0).unwrap())));
        assert_eq!(tabs.compound_header_height(), 310.0);

        assert!(!tabs.header_height_changed());
    }

    #[test]
    fn test_new_panes_start_at_top() {
        let tabs = composite(&[("Posts", 2000.0), ("Likes", 2000.0)]);
        assert_eq!(tabs.selected_index(), Some(0));
        assert_eq!(tabs.true_scroll_offset(), 0.0);

        for id in tabs.pane_ids() {
            let pane = tabs.pane(*id).unwrap();
            assert_eq!(pane.true_scroll_offset(), 0.0);
            assert_eq!(pane.opaque_content_inset().top, 230.0);
            assert!(!pane.surface().scroll_enabled);
        }
    }

    #[test]
    fn test_drag_pins_header() {
        let mut tabs = composite(&[("Posts", 2000.0)]);
        drag(&mut tabs, -150.0);
        assert_eq!(tabs.true_scroll_offset(), 150.0);
        assert!(tabs.is_pinned());
        assert_eq!(tabs.frames().header.y(), -110.0);

        tabs.handle_pan(PanGesture::changed(Point::new(0.0, -50.0)));
        assert!(!tabs.is_pinned());
        assert_eq!(tabs.frames().header.y(), -50.0);
    }

    #[test]
    fn test_layering_follows_pin_state() {
        let mut tabs = composite(&[("Posts", 2000.0)]);
        tabs.set_hero(Some(Box::new(FixedHero::new(80.0).unwrap())));
        let hero_above = |t: &StickyHeaderTabs| {
            t.layer_order().iter().position(|l| *l == StickyLayer::Hero)
                > t.layer_order().iter().position(|l| *l == StickyLayer::Header)
        };
        assert!(hero_above(&tabs));

        drag(&mut tabs, -200.0);
        assert!(tabs.is_pinned());
        assert!(!hero_above(&tabs));

        tabs.handle_pan(PanGesture::changed(Point::new(0.0, -10.0)));
        assert!(hero_above(&tabs));
    }

    #[test]
    fn test_release_settles_and_releases_binding() {
        let mut tabs = composite(&[("Posts", 2000.0), ("Likes", 2000.0)]);
        drag(&mut tabs, 80.0); // pull down past the top
        assert!(tabs.true_scroll_offset() < 0.0);
        assert!(tabs.frames().stretch > 0.0);

        tabs.handle_pan(PanGesture::ended(Point::new(0.0, 80.0), Point::ZERO));
        assert!(tabs.active_pane_id().is_some());

        let mut frames = 0;
        while tabs.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(tabs.true_scroll_offset(), 0.0);
        assert_eq!(tabs.active_pane_id(), None);
    }

    #[test]
    fn test_scroll_to_tab() {
        let mut tabs = composite(&[("Posts", 2000.0), ("Likes", 2000.0)]);
        assert!(tabs.scroll_to_tab(1, false));
        assert_eq!(tabs.selected_index(), Some(1));
        assert_eq!(tabs.paging().offset_x(), 320.0);
        assert_eq!(tabs.tab_bar().selected_index(), Some(1));

        assert!(!tabs.scroll_to_tab(2, false));
        assert_eq!(tabs.selected_index(), Some(1));
    }

    #[test]
    fn test_tab_tap_pages_with_animation() {
        let mut tabs = composite(&[("Posts", 2000.0), ("Likes", 2000.0)]);
        assert!(tabs.handle_tab_tapped(1));
        assert_eq!(tabs.selected_index(), Some(1));
        assert!(tabs.paging().is_animating());
        while tabs.tick(1.0 / 60.0) {}
        assert_eq!(tabs.paging().offset_x(), 320.0);

        assert!(!tabs.handle_tab_tapped(7));
    }

    #[test]
    fn test_horizontal_settle() {
        let mut tabs = composite(&[("A", 2000.0), ("B", 2000.0), ("C", 2000.0)]);
        tabs.handle_horizontal_scroll(170.0);
        assert_eq!(tabs.did_end_horizontal_deceleration(), Some(1));
        assert_eq!(tabs.selected_index(), Some(1));
        assert_eq!(tabs.tab_bar().selected_index(), Some(1));

        tabs.handle_horizontal_scroll(150.0);
        assert_eq!(tabs.did_end_horizontal_deceleration(), Some(0));
        assert_eq!(tabs.selected_index(), Some(0));
    }

    #[test]
    fn test_pane_frames_follow_bounds() {
        let tabs = composite(&[("A", 2000.0), ("B", 2000.0)]);
        let ids = tabs.pane_ids();
        assert_eq!(
            tabs.pane(ids[1]).unwrap().frame(),
            Rect::new(320.0, 0.0, 320.0, 640.0)
        );
        assert_eq!(tabs.paging().content_width(), 640.0);
        assert_eq!(tabs.tab_bar().width(), 320.0);
    }

    #[test]
    fn test_remove_pane_keeps_selection() {
        let mut tabs = composite(&[("A", 2000.0), ("B", 2000.0), ("C", 2000.0)]);
        tabs.scroll_to_tab(2, false);
        let first = tabs.pane_ids()[0];

        let removed = tabs.remove_pane(first).unwrap();
        assert_eq!(removed.title().as_deref(), Some("A"));
        assert_eq!(tabs.pane_ids().len(), 2);
        assert_eq!(tabs.selected_index(), Some(1));
        assert_eq!(tabs.selected_pane().unwrap().title().as_deref(), Some("C"));
        assert_eq!(tabs.paging().offset_x(), 320.0);
        assert_eq!(tabs.tab_bar().tab_count(), 2);

        assert!(tabs.remove_pane(first).is_none());
    }

    #[test]
    fn test_remove_last_pane_clears_selection() {
        let mut tabs = composite(&[("A", 2000.0)]);
        let id = tabs.pane_ids()[0];
        tabs.remove_pane(id);
        assert_eq!(tabs.selected_index(), None);
        assert!(tabs.selected_pane().is_none());
    }

    #[test]
    fn test_disabled_recognizer_ignores_pans() {
        let mut tabs = composite(&[("A", 2000.0)]);
        tabs.set_pan_enabled(false);
        drag(&mut tabs, -100.0);
        assert_eq!(tabs.true_scroll_offset(), 0.0);
    }

    #[test]
    fn test_header_change_mid_drag_cancels_gesture() {
        let mut tabs = composite(&[("A", 2000.0)]);
        drag(&mut tabs, -100.0);
        assert_eq!(tabs.true_scroll_offset(), 100.0);

        tabs.set_header(Some(Box::new(FixedHeader::new(120.0, 40.0).unwrap())));
        assert_eq!(tabs.active_pane_id(), None);
        assert_eq!(tabs.compound_header_height(), 180.0);

        // Rest of the old gesture is dropped
        let t = tabs.true_scroll_offset();
        tabs.handle_pan(PanGesture::changed(Point::new(0.0, -300.0)));
        tabs.handle_pan(PanGesture::ended(Point::ZERO, Point::new(0.0, -900.0)));
        assert_eq!(tabs.true_scroll_offset(), t);
        assert!(!tabs.tick(1.0 / 60.0));
    }
}
