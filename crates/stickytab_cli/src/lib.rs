//! Stickytab CLI library
//!
//! Headless scenarios for the sticky header coordinator: a TOML file that
//! describes the viewport, header, hero, and tabs plus a list of steps, a
//! runner that replays the steps against [`stickytab_layout::StickyHeaderTabs`],
//! and a per-step frame report.

pub mod report;
pub mod runner;
pub mod scenario;

pub use report::{ScenarioReport, StepReport};
pub use runner::ScenarioRunner;
pub use scenario::{HeaderSpec, HeroSpec, Scenario, ScenarioStep, TabSpec, Viewport};
