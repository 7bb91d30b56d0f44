//! Desktop window implementation using winit and softbuffer

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::sync::Arc;

use easel_platform::{PlatformError, Result, Window, WindowConfig};
use softbuffer::{Context, Surface};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window as WinitWindow, WindowAttributes};

use crate::blit::blit_scaled;

type SoftSurface = Surface<Arc<WinitWindow>, Arc<WinitWindow>>;

/// Desktop window wrapping a winit window and its CPU surface
pub struct DesktopWindow {
    window: Arc<WinitWindow>,
    surface: RefCell<SoftSurface>,
    _context: Context<Arc<WinitWindow>>,
}

impl DesktopWindow {
    /// Create a new desktop window
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        let mut attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        if let Some((x, y)) = config.position {
            attrs = attrs.with_position(LogicalPosition::new(x, y));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| PlatformError::WindowCreation(e.to_string()))?,
        );

        let context = Context::new(Arc::clone(&window))
            .map_err(|e| PlatformError::Surface(e.to_string()))?;
        let surface = Surface::new(&context, Arc::clone(&window))
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        tracing::debug!(
            "Created window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            window,
            surface: RefCell::new(surface),
            _context: context,
        })
    }

    /// Get the underlying winit window
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }
}

impl Window for DesktopWindow {
    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn present(&self, pixels: &[u8], width: u32, height: u32) -> Result<()> {
        let (pw, ph) = self.size();
        let (Some(nw), Some(nh)) = (NonZeroU32::new(pw), NonZeroU32::new(ph)) else {
            // Minimized
            return Ok(());
        };

        let mut surface = self.surface.borrow_mut();
        surface
            .resize(nw, nh)
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| PlatformError::Surface(e.to_string()))?;
        blit_scaled(pixels, width, height, &mut buffer, pw, ph);
        buffer
            .present()
            .map_err(|e| PlatformError::Surface(e.to_string()))
    }
}
