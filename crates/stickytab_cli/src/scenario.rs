//! Scenario definition for headless scroll runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Full scenario: the view hierarchy to build and the steps to replay.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub header: Option<HeaderSpec>,
    #[serde(default)]
    pub hero: Option<HeroSpec>,
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
    /// Frame rate used for `tick` steps and drag momentum
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

fn default_fps() -> u32 {
    60
}

impl Scenario {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(input).context("invalid scenario")?;
        anyhow::ensure!(scenario.fps > 0, "scenario fps must be positive");
        Ok(scenario)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Seconds per simulated frame
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HeaderSpec {
    pub height: f32,
    #[serde(default)]
    pub pinned_height: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HeroSpec {
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabSpec {
    pub title: String,
    pub content_height: f32,
    #[serde(default)]
    pub top_inset: Option<f32>,
    #[serde(default)]
    pub bottom_inset: Option<f32>,
}

/// One scripted interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Finger drag on the selected pane. `dy` is the total translation,
    /// delivered in `moves` equal increments.
    Drag {
        dy: f32,
        #[serde(default)]
        dx: f32,
        #[serde(default = "default_moves")]
        moves: u32,
        #[serde(default = "default_true")]
        release: bool,
        /// Lift-off velocity in points per second
        #[serde(default)]
        velocity: f32,
    },
    /// Advance animations. Without `frames`, runs until everything rests.
    Tick {
        #[serde(default)]
        frames: Option<u32>,
    },
    SelectTab {
        index: usize,
        #[serde(default)]
        animated: bool,
    },
    /// Horizontal scroll followed by deceleration end
    Page { offset_x: f32 },
    SetHeaderHeight { height: f32 },
    RemoveTab { index: usize },
}

fn default_moves() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl ScenarioStep {
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioStep::Drag { .. } => "drag",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::SelectTab { .. } => "select_tab",
            ScenarioStep::Page { .. } => "page",
            ScenarioStep::SetHeaderHeight { .. } => "set_header_height",
            ScenarioStep::RemoveTab { .. } => "remove_tab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_scenario() {
        let scenario = Scenario::from_toml_str(
            r#"
            [[tabs]]
            title = "Posts"
            content_height = 2000

            [[steps]]
            type = "drag"
            dy = -120
            "#,
        )
        .unwrap();

        assert_eq!(scenario.viewport.width, 320.0);
        assert_eq!(scenario.fps, 60);
        assert!(scenario.header.is_none());
        assert_eq!(scenario.tabs.len(), 1);
        match &scenario.steps[0] {
            ScenarioStep::Drag {
                dy,
                dx,
                moves,
                release,
                velocity,
            } => {
                assert_eq!(*dy, -120.0);
                assert_eq!(*dx, 0.0);
                assert_eq!(*moves, 1);
                assert!(*release);
                assert_eq!(*velocity, 0.0);
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_parse_every_step_kind() {
        let scenario = Scenario::from_toml_str(
            r#"
            steps = [
                { type = "drag", dy = 10, release = false },
                { type = "tick" },
                { type = "tick", frames = 3 },
                { type = "select_tab", index = 1, animated = true },
                { type = "page", offset_x = 170 },
                { type = "set_header_height", height = 200 },
                { type = "remove_tab", index = 0 },
            ]
            "#,
        )
        .unwrap();

        let kinds: Vec<_> = scenario.steps.iter().map(ScenarioStep::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "drag",
                "tick",
                "tick",
                "select_tab",
                "page",
                "set_header_height",
                "remove_tab"
            ]
        );
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let err = Scenario::from_toml_str("steps = [{ type = \"fling\" }]").unwrap_err();
        assert!(format!("{err:#}").contains("invalid scenario"));
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        assert!(Scenario::from_toml_str("fps = 0").is_err());
    }
}
