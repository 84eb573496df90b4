//! Frame report produced by a scenario run.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use stickytab_core::Size;
use stickytab_layout::{StickyFrames, StickyHeaderTabs, StickyLayer};

/// State of the composite after one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: &'static str,
    /// Animation frames advanced while running the step
    pub frames_ticked: u32,
    pub true_offset: f32,
    pub compound_height: f32,
    pub selected_index: Option<usize>,
    pub frames: StickyFrames,
    /// Bottom-to-top
    pub layers: Vec<StickyLayer>,
    pub paging_offset: f32,
    pub tab_count: usize,
    pub animating: bool,
}

impl StepReport {
    pub fn capture(
        index: usize,
        step: &'static str,
        frames_ticked: u32,
        animating: bool,
        tabs: &StickyHeaderTabs,
    ) -> Self {
        Self {
            index,
            step,
            frames_ticked,
            true_offset: tabs.true_scroll_offset(),
            compound_height: tabs.compound_header_height(),
            selected_index: tabs.selected_index(),
            frames: *tabs.frames(),
            layers: tabs.layer_order().to_vec(),
            paging_offset: tabs.paging().offset_x(),
            tab_count: tabs.pane_ids().len(),
            animating,
        }
    }

    fn write_text_line<W: Write>(&self, writer: &mut W) -> Result<()> {
        let selected = self
            .selected_index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        let layers = self
            .layers
            .iter()
            .map(|layer| match layer {
                StickyLayer::Panes => "panes",
                StickyLayer::Header => "header",
                StickyLayer::Hero => "hero",
                StickyLayer::TabBar => "tab_bar",
            })
            .collect::<Vec<_>>()
            .join(">");

        writeln!(
            writer,
            "#{:<3} {:<18} t={:>8.1} header_y={:>8.1} tab_bar_y={:>8.1} {} tab={} page_x={:.1} frames={} layers={}",
            self.index,
            self.step,
            self.true_offset,
            self.frames.header.y(),
            self.frames.tab_bar.y(),
            if self.frames.pinned { "pinned  " } else { "unpinned" },
            selected,
            self.paging_offset,
            self.frames_ticked,
            layers,
        )?;
        Ok(())
    }
}

/// Everything a scenario run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub viewport: Size,
    pub initial: StepReport,
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    pub fn final_state(&self) -> &StepReport {
        self.steps.last().unwrap_or(&self.initial)
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "viewport {}x{}, compound header {:.1}",
            self.viewport.width, self.viewport.height, self.initial.compound_height
        )?;
        self.initial.write_text_line(writer)?;
        for step in &self.steps {
            step.write_text_line(writer)?;
        }
        Ok(())
    }
}
