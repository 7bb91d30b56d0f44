//! Scripted input for headless runs.

use anyhow::Result;
use serde::Deserialize;

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Total frames the scenario ticks.
    pub fn total_frames(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                ScenarioStep::Tick { frames } => *frames as u64,
                _ => 0,
            })
            .sum()
    }
}

/// One scripted step. Mouse steps use logical window coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Tick { frames: u32 },
    KeyDown { key: String },
    KeyUp { key: String },
    MouseDown { x: f32, y: f32 },
    MouseUp { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    Close,
}
