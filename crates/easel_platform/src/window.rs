//! Window abstraction

use crate::error::Result;

/// Window creation options
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width
    pub width: u32,
    /// Logical height
    pub height: u32,
    /// Initial top-left position hint, in logical pixels
    pub position: Option<(i32, i32)>,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "graphics window".to_string(),
            width: 400,
            height: 400,
            position: Some((300, 300)),
            resizable: false,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_position(mut self, position: Option<(i32, i32)>) -> Self {
        self.position = position;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// A window the application can present frames into
pub trait Window {
    /// Physical size in pixels
    fn size(&self) -> (u32, u32);

    /// Ask for a `RedrawRequested` event
    fn request_redraw(&self);

    /// Copy a premultiplied RGBA8 frame of `width` x `height` onto the
    /// window, scaling to its physical size
    fn present(&self, pixels: &[u8], width: u32, height: u32) -> Result<()>;
}
