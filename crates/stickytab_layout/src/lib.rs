//! Stickytab Layout
//!
//! Headless scroll coordination for a sticky header with tabs: a header
//! that stretches, collapses, and pins; an optional hero panel; a tab bar;
//! and horizontally paged content panes that all share one vertical scroll
//! position.
//!
//! # Modules
//!
//! - [`scroll_surface`]: drag, momentum, rubber band, and spring-back for one pane
//! - [`pane`]: opaque/raw offset and inset translation around a surface
//! - [`sticky`]: frame geometry and z-order of the sticky views
//! - [`tab_bar`]: title cell layout and selection
//! - [`paging`]: horizontal pages and settle rounding
//! - [`composite`]: [`StickyHeaderTabs`], which ties it all together
//! - [`config`]: TOML configuration

pub mod collaborators;
pub mod composite;
pub mod config;
pub mod gesture;
pub mod pane;
pub mod paging;
pub mod scroll_surface;
pub mod sticky;
pub mod tab_bar;

pub use collaborators::{
    FixedHeader, FixedHero, HeightProvider, PinnableHeader, StickyHeaderTabsDelegate,
};
pub use composite::{PaneId, StickyHeaderTabs};
pub use config::{
    ConfigError, GestureConfig, PaneConfig, Rgba, ScrollConfig, StickyConfig, TabBarConfig,
};
pub use gesture::{PanRecognizer, PanState};
pub use pane::{ContentPane, Pane, StaticPane};
pub use paging::{settle_page_index, PagingSurface};
pub use scroll_surface::ScrollSurface;
pub use sticky::{sticky_frames, LayerStack, StickyFrames, StickyLayer, StickyMetrics};
pub use tab_bar::{
    FixedAdvanceMeasurer, TabBar, TabBarDataSource, TabCell, TabCellStyle, TabTapped,
    TitleMeasurer,
};
