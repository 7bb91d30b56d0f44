//! Desktop window runner

use easel_platform_desktop::DesktopEventLoop;

use crate::app::{App, GraphicsConfig};
use crate::error::Result;

/// Open a window and run the frame loop until it closes
///
/// Blocks the calling thread. The framerate is validated before any window
/// is created.
pub fn start_graphics<S>(config: GraphicsConfig<S>) -> Result<()> {
    let mut app = App::new(config)?;
    let event_loop = DesktopEventLoop::new(app.window_config(), app.canvas().framerate())?;
    app.run_with(event_loop)?;
    tracing::debug!(
        "'{}' finished after {} frames",
        app.canvas().title(),
        app.frame_count()
    );
    Ok(())
}
