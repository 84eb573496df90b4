//! Tab bar
//!
//! A horizontal strip of title cells. Each cell is at least as wide as its
//! title and at least an equal share of the bar, so a few short titles fill
//! the bar while many long ones overflow and scroll.
//!
//! ```text
//! |sp| cell 0 |sp| cell 1 |sp| cell 2 |sp|
//! ```

use rustc_hash::FxHashMap;
use stickytab_core::{Rect, Size};

use crate::collaborators::HeightProvider;
use crate::config::{Rgba, TabBarConfig};

/// Supplies tab titles
pub trait TabBarDataSource {
    fn number_of_tabs(&self) -> usize;
    fn title_at(&self, index: usize) -> Option<String>;
}

/// Measures the natural (unconstrained) width of a title
pub trait TitleMeasurer: std::fmt::Debug {
    fn natural_width(&self, title: &str) -> f32;
}

/// Measurer that gives every character the same horizontal advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(TabBarConfig::default().char_advance)
    }
}

impl TitleMeasurer for FixedAdvanceMeasurer {
    fn natural_width(&self, title: &str) -> f32 {
        title.chars().count() as f32 * self.advance
    }
}

/// A tap on a cell, reported to the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTapped {
    pub index: usize,
}

/// Visual style of a single cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabCellStyle {
    pub font_size: f32,
    pub bold: bool,
    pub text_color: Rgba,
    /// Indicator under the cell; only the selected cell has one
    pub border_color: Option<Rgba>,
}

/// A laid-out cell
#[derive(Debug, Clone, PartialEq)]
pub struct TabCell {
    pub index: usize,
    pub title: Option<String>,
    pub frame: Rect,
    pub selected: bool,
    pub style: TabCellStyle,
    /// Selection indicator at the cell bottom
    pub border_frame: Option<Rect>,
}

// ============================================================================
// Tab Bar
// ============================================================================

#[derive(Debug)]
pub struct TabBar {
    config: TabBarConfig,
    measurer: Box<dyn TitleMeasurer>,
    titles: Vec<Option<String>>,
    /// Natural widths keyed by title
    natural_widths: FxHashMap<String, f32>,
    selected: Option<usize>,
    width: f32,
    /// Horizontal scroll of the cell strip
    content_offset_x: f32,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(TabBarConfig::default())
    }
}

impl TabBar {
    pub fn new(config: TabBarConfig) -> Self {
        Self::with_measurer(config, Box::new(FixedAdvanceMeasurer::new(config.char_advance)))
    }

    pub fn with_measurer(config: TabBarConfig, measurer: Box<dyn TitleMeasurer>) -> Self {
        Self {
            config,
            measurer,
            titles: Vec::new(),
            natural_widths: FxHashMap::default(),
            selected: None,
            width: 0.0,
            content_offset_x: 0.0,
        }
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    /// Change the bar height. The owner must follow up with
    /// `StickyHeaderTabs::tab_bar_height_changed`.
    pub fn set_height(&mut self, height: f32) {
        self.config.height = height.max(0.0);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
        self.clamp_content_offset();
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.config.height)
    }

    pub fn tab_count(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[Option<String>] {
        &self.titles
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn content_offset_x(&self) -> f32 {
        self.content_offset_x
    }

    /// Pull titles from the data source. A missing source means zero tabs.
    pub fn reload_data(&mut self, source: Option<&dyn TabBarDataSource>) {
        let count = source.map_or(0, |s| s.number_of_tabs());
        self.titles = match source {
            Some(source) => (0..count).map(|i| source.title_at(i)).collect(),
            None => Vec::new(),
        };

        for title in self.titles.iter().flatten() {
            if !self.natural_widths.contains_key(title) {
                let width = self.measurer.natural_width(title);
                self.natural_widths.insert(title.clone(), width);
            }
        }

        if self.selected.is_some_and(|i| i >= count) {
            self.selected = None;
        }
        self.clamp_content_offset();

        tracing::debug!("tab bar reloaded with {} tabs", count);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn natural_width(&self, title: &str) -> f32 {
        self.natural_widths
            .get(title)
            .copied()
            .unwrap_or_else(|| self.measurer.natural_width(title))
    }

    /// Width of the cell at `index`
    pub fn cell_width(&self, index: usize) -> f32 {
        let count = self.titles.len();
        if count == 0 || index >= count {
            return 0.0;
        }

        let natural = self.titles[index]
            .as_deref()
            .map_or(0.0, |t| self.natural_width(t));
        let share = (self.width - 2.0 * self.config.cell_spacing) / count as f32;
        natural.max(share)
    }

    /// Frames of every cell in bar coordinates (before horizontal scroll)
    pub fn cell_frames(&self) -> Vec<Rect> {
        let spacing = self.config.cell_spacing;
        let mut x = spacing;
        (0..self.titles.len())
            .map(|index| {
                let width = self.cell_width(index);
                let frame = Rect::new(x, 0.0, width, self.config.height);
                x += width + spacing;
                frame
            })
            .collect()
    }

    /// Total width of the cell strip including the edge spacing
    pub fn content_width(&self) -> f32 {
        match self.cell_frames().last() {
            Some(last) => last.max_x() + self.config.cell_spacing,
            None => 0.0,
        }
    }

    pub fn background_color(&self) -> Rgba {
        self.config.background_color
    }

    pub fn bottom_border_color(&self) -> Rgba {
        self.config.bottom_border_color
    }

    /// The bar's own bottom border
    pub fn bottom_border_frame(&self) -> Rect {
        let border = self.config.bottom_border_width;
        Rect::new(0.0, self.config.height - border, self.width, border)
    }

    /// Laid-out, styled cells
    pub fn cells(&self) -> Vec<TabCell> {
        self.cell_frames()
            .into_iter()
            .enumerate()
            .map(|(index, frame)| {
                let selected = self.selected == Some(index);
                let border = self.config.bottom_border_width;
                TabCell {
                    index,
                    title: self.titles[index].clone(),
                    frame,
                    selected,
                    style: self.cell_style(selected),
                    border_frame: selected.then(|| {
                        Rect::new(frame.x(), frame.max_y() - border, frame.width(), border)
                    }),
                }
            })
            .collect()
    }

    pub fn cell_style(&self, selected: bool) -> TabCellStyle {
        let c = &self.config;
        TabCellStyle {
            font_size: c.font_size,
            bold: selected,
            text_color: if selected {
                c.selected_text_color
            } else {
                c.text_color
            },
            border_color: selected.then_some(c.selected_border_color),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a cell and scroll it to the horizontal center. Does not page
    /// the content; that is the owner's job. Returns false for an
    /// out-of-range index.
    pub fn select_tab(&mut self, index: usize, animated: bool) -> bool {
        let Some(frame) = self.cell_frames().get(index).copied() else {
            tracing::warn!(
                "select_tab({}) ignored: only {} tabs",
                index,
                self.titles.len()
            );
            return false;
        };

        self.selected = Some(index);
        self.content_offset_x = frame.center().x - self.width / 2.0;
        self.clamp_content_offset();

        tracing::trace!(
            "tab bar selected {} (animated={}) strip offset {:.1}",
            index,
            animated,
            self.content_offset_x
        );
        true
    }

    /// Handle a tap on a cell
    pub fn tap(&mut self, index: usize) -> Option<TabTapped> {
        if index >= self.titles.len() {
            return None;
        }
        self.selected = Some(index);
        Some(TabTapped { index })
    }

    fn clamp_content_offset(&mut self) {
        let max = (self.content_width() - self.width).max(0.0);
        self.content_offset_x = self.content_offset_x.clamp(0.0, max);
    }
}

impl HeightProvider for TabBar {
    fn height(&self) -> f32 {
        self.config.height
    }
}
