//! Scenario runner that drives an [`App`] without a display.

use anyhow::{bail, Result};

use crate::app::App;
use crate::headless_runtime::{HeadlessEventLoop, HeadlessRunConfig};
use crate::headless_scenario::HeadlessScenario;

/// Summary of a finished headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    /// Ticks the app ran during the scenario.
    pub frames_run: u64,
    /// Frames the window received.
    pub frames_presented: u64,
    /// The app finished in the closed state.
    pub closed: bool,
}

/// Execute scenario JSON against `app` with the default configuration.
///
/// The app is closed when the scenario ends.
pub fn run_scenario<S>(app: &mut App<S>, input: &str) -> Result<HeadlessReport> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(app, scenario, HeadlessRunConfig::default())
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario<S>(
    app: &mut App<S>,
    scenario: HeadlessScenario,
    cfg: HeadlessRunConfig,
) -> Result<HeadlessReport> {
    let total = scenario.total_frames();
    if total > cfg.max_frames {
        bail!(
            "scenario ticks {} frames, more than the limit of {}",
            total,
            cfg.max_frames
        );
    }
    if app.canvas().is_closed() {
        bail!("app is already closed");
    }

    let event_loop = HeadlessEventLoop::new(scenario, &app.window_config());
    let window = event_loop.window();
    let frames_before = app.frame_count();

    app.run_with(event_loop)?;

    let report = HeadlessReport {
        frames_run: app.frame_count() - frames_before,
        frames_presented: window.frames_presented(),
        closed: app.canvas().is_closed(),
    };
    tracing::debug!("Headless run finished: {:?}", report);
    Ok(report)
}
