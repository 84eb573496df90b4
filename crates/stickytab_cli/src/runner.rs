//! Replays a [`Scenario`] against a headless [`StickyHeaderTabs`].

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use stickytab_core::{PanGesture, Point, Size};
use stickytab_layout::{
    ContentPane, FixedHeader, FixedHero, HeightProvider, PaneConfig, PinnableHeader, StaticPane,
    StickyConfig, StickyHeaderTabs,
};

use crate::report::{ScenarioReport, StepReport};
use crate::scenario::{Scenario, ScenarioStep, TabSpec};

/// Upper bound for `tick` steps that run until rest
const MAX_SETTLE_FRAMES: u32 = 10_000;

/// Header whose height the runner can change after handing it to the
/// composite
#[derive(Debug, Clone)]
struct ScenarioHeader {
    height: Rc<Cell<f32>>,
    pinned_height: f32,
}

impl HeightProvider for ScenarioHeader {
    fn height(&self) -> f32 {
        self.height.get()
    }
}

impl PinnableHeader for ScenarioHeader {
    fn pinned_height(&self) -> f32 {
        self.pinned_height
    }
}

#[derive(Debug)]
pub struct ScenarioRunner {
    tabs: StickyHeaderTabs,
    header: Option<ScenarioHeader>,
    frame_interval: f32,
}

impl ScenarioRunner {
    /// Build the view hierarchy the scenario describes
    pub fn new(scenario: &Scenario, config: StickyConfig) -> Result<Self> {
        let pane_defaults = config.pane;
        let mut tabs = StickyHeaderTabs::new(config);

        let header = match scenario.header {
            Some(spec) => {
                let fixed = FixedHeader::new(spec.height, spec.pinned_height)
                    .context("invalid scenario header")?;
                let header = ScenarioHeader {
                    height: Rc::new(Cell::new(fixed.height())),
                    pinned_height: fixed.pinned_height(),
                };
                tabs.set_header(Some(Box::new(header.clone())));
                Some(header)
            }
            None => None,
        };

        if let Some(spec) = scenario.hero {
            let hero = FixedHero::new(spec.height).context("invalid scenario hero")?;
            tabs.set_hero(Some(Box::new(hero)));
        }

        let panes = scenario
            .tabs
            .iter()
            .map(|spec| build_pane(spec, scenario.viewport.width, pane_defaults))
            .collect();
        tabs.set_panes(panes);
        tabs.set_bounds(Size::new(scenario.viewport.width, scenario.viewport.height));

        tracing::info!(
            "scenario: {} tabs, compound header {:.1}",
            scenario.tabs.len(),
            tabs.compound_header_height()
        );

        Ok(Self {
            tabs,
            header,
            frame_interval: scenario.frame_interval(),
        })
    }

    pub fn tabs(&self) -> &StickyHeaderTabs {
        &self.tabs
    }

    /// Run every step and collect the report
    pub fn run(mut self, scenario: &Scenario) -> Result<ScenarioReport> {
        let initial = StepReport::capture(0, "initial", 0, false, &self.tabs);
        let mut steps = Vec::with_capacity(scenario.steps.len());

        for (index, step) in scenario.steps.iter().enumerate() {
            let frames = self
                .apply(step)
                .with_context(|| format!("step {} ({}) failed", index + 1, step.kind()))?;
            let animating = self.is_animating();
            steps.push(StepReport::capture(
                index + 1,
                step.kind(),
                frames,
                animating,
                &self.tabs,
            ));
        }

        Ok(ScenarioReport {
            viewport: self.tabs.bounds(),
            initial,
            steps,
        })
    }

    /// Apply one step. Returns the number of frames ticked.
    pub fn apply(&mut self, step: &ScenarioStep) -> Result<u32> {
        tracing::debug!("step {:?}", step);
        match *step {
            ScenarioStep::Drag {
                dy,
                dx,
                moves,
                release,
                velocity,
            } => Ok(self.drag(Point::new(dx, dy), moves, release, velocity)),
            ScenarioStep::Tick { frames: Some(n) } => {
                for _ in 0..n {
                    self.tabs.tick(self.frame_interval);
                }
                Ok(n)
            }
            ScenarioStep::Tick { frames: None } => Ok(self.settle()),
            ScenarioStep::SelectTab { index, animated } => {
                self.tabs.scroll_to_tab(index, animated);
                Ok(0)
            }
            ScenarioStep::Page { offset_x } => {
                self.tabs.handle_horizontal_scroll(offset_x);
                self.tabs.did_end_horizontal_deceleration();
                Ok(0)
            }
            ScenarioStep::SetHeaderHeight { height } => {
                self.set_header_height(height)?;
                Ok(0)
            }
            ScenarioStep::RemoveTab { index } => {
                match self.tabs.pane_ids().get(index).copied() {
                    Some(id) => {
                        self.tabs.remove_pane(id);
                    }
                    None => tracing::warn!("remove_tab({}) ignored: no such tab", index),
                }
                Ok(0)
            }
        }
    }

    fn drag(&mut self, translation: Point, moves: u32, release: bool, velocity: f32) -> u32 {
        let moves = moves.max(1);
        self.tabs.handle_pan(PanGesture::began());

        for i in 1..=moves {
            let fraction = i as f32 / moves as f32;
            self.tabs.handle_pan(PanGesture::changed(translation.scale(fraction)));
            self.tabs.tick(self.frame_interval);
        }

        if release {
            self.tabs
                .handle_pan(PanGesture::ended(translation, Point::new(0.0, velocity)));
        }
        moves
    }

    fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while self.tabs.tick(self.frame_interval) {
            frames += 1;
            if frames >= MAX_SETTLE_FRAMES {
                tracing::warn!("still animating after {} frames", frames);
                break;
            }
        }
        frames
    }

    fn set_header_height(&mut self, height: f32) -> Result<()> {
        let header = self
            .header
            .as_ref()
            .context("set_header_height needs a [header] in the scenario")?;
        FixedHeader::new(height, header.pinned_height).context("invalid header height")?;

        header.height.set(height);
        self.tabs.header_height_changed();
        Ok(())
    }

    fn is_animating(&self) -> bool {
        self.tabs.paging().is_animating()
            || self
                .tabs
                .active_pane_id()
                .and_then(|id| self.tabs.pane(id))
                .is_some_and(|pane| pane.surface().is_animating())
    }
}

fn build_pane(spec: &TabSpec, width: f32, defaults: PaneConfig) -> Box<dyn ContentPane> {
    let insets = PaneConfig {
        top_inset: spec.top_inset.unwrap_or(defaults.top_inset),
        bottom_inset: spec.bottom_inset.unwrap_or(defaults.bottom_inset),
    };
    Box::new(
        StaticPane::new(spec.title.clone(), Size::new(width, spec.content_height))
            .with_insets(insets),
    )
}
