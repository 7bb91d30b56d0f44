//! The drawing canvas handed to every callback

use easel_core::{Color, Point};
use easel_image::Image;
use easel_paint::{FontDescriptor, FontRegistry, PaintContext};

use crate::error::Result;
use crate::input::InputState;

/// Where a canvas is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, no frame has run yet
    Uninitialized,
    /// Window is up and the timer is ticking
    Running,
    /// Window closed; drawing is ignored
    Closed,
}

/// Procedural drawing surface plus the input state seen so far
///
/// Drawing goes into an off-screen buffer that the loop driver presents
/// after every tick. Colors are normalized `[0, 1]` components; angles are
/// degrees.
pub struct Canvas {
    paint: PaintContext,
    input: InputState,
    title: String,
    framerate: i32,
    lifecycle: Lifecycle,
    warned_closed: bool,
}

impl Canvas {
    /// Create a canvas backed by the system fonts
    pub fn new(width: u32, height: u32, title: impl Into<String>, framerate: i32) -> Result<Self> {
        Self::with_fonts(width, height, title, framerate, FontRegistry::new())
    }

    /// Create a canvas with an explicit font registry
    pub fn with_fonts(
        width: u32,
        height: u32,
        title: impl Into<String>,
        framerate: i32,
        fonts: FontRegistry,
    ) -> Result<Self> {
        Ok(Self {
            paint: PaintContext::with_fonts(width, height, fonts)?,
            input: InputState::default(),
            title: title.into(),
            framerate,
            lifecycle: Lifecycle::Uninitialized,
            warned_closed: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.paint.width()
    }

    pub fn height(&self) -> u32 {
        self.paint.height()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn framerate(&self) -> i32 {
        self.framerate
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_closed(&self) -> bool {
        self.lifecycle == Lifecycle::Closed
    }

    /// The underlying paint context
    pub fn paint(&self) -> &PaintContext {
        &self.paint
    }

    /// Read back an off-screen buffer pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.paint.pixel(x, y)
    }

    pub(crate) fn start(&mut self) {
        if self.lifecycle == Lifecycle::Uninitialized {
            tracing::debug!("Canvas '{}' running", self.title);
            self.lifecycle = Lifecycle::Running;
        }
    }

    pub(crate) fn close(&mut self) {
        if self.lifecycle != Lifecycle::Closed {
            tracing::debug!("Canvas '{}' closed", self.title);
            self.lifecycle = Lifecycle::Closed;
        }
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Paint context for a drawing operation, or `None` once closed
    fn painter(&mut self) -> Option<&mut PaintContext> {
        if self.lifecycle == Lifecycle::Closed {
            if !self.warned_closed {
                tracing::warn!("Drawing on closed canvas '{}' is ignored", self.title);
                self.warned_closed = true;
            }
            return None;
        }
        Some(&mut self.paint)
    }

    // === Pen, brush, and font ===

    pub fn set_stroke_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.paint.set_stroke_color(r, g, b, a);
    }

    /// Also turns fill on
    pub fn set_fill_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.paint.set_fill_color(r, g, b, a);
    }

    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.paint.set_clear_color(r, g, b, a);
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.paint.set_stroke_width(width);
    }

    pub fn enable_fill(&mut self) {
        self.paint.enable_fill();
    }

    pub fn disable_fill(&mut self) {
        self.paint.disable_fill();
    }

    pub fn enable_stroke(&mut self) {
        self.paint.enable_stroke();
    }

    pub fn disable_stroke(&mut self) {
        self.paint.disable_stroke();
    }

    pub fn set_font(&mut self, family: &str) {
        self.paint.set_font(family);
    }

    /// Size in points
    pub fn set_font_size(&mut self, size: f32) {
        self.paint.set_font_size(size);
    }

    pub fn set_font_normal(&mut self) {
        self.paint.set_font_normal();
    }

    pub fn set_font_bold(&mut self) {
        self.paint.set_font_bold();
    }

    pub fn set_font_italic(&mut self) {
        self.paint.set_font_italic();
    }

    pub fn font(&self) -> &FontDescriptor {
        self.paint.font()
    }

    // === Drawing ===

    /// Fill the window with the clear color
    pub fn clear(&mut self) {
        if let Some(paint) = self.painter() {
            paint.clear();
        }
    }

    pub fn draw_point(&mut self, x: f32, y: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_point(x, y);
        }
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_line(x1, y1, x2, y2);
        }
    }

    pub fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_rectangle(x, y, width, height);
        }
    }

    pub fn draw_polygon<P>(&mut self, vertices: &[P])
    where
        P: Into<Point> + Copy,
    {
        if let Some(paint) = self.painter() {
            paint.draw_polygon(vertices);
        }
    }

    pub fn draw_triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.draw_polygon(&[(x1, y1), (x2, y2), (x3, y3)]);
    }

    /// Ellipse centered on `(x, y)` with radii `rx`, `ry`
    pub fn draw_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_ellipse(x, y, rx, ry);
        }
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, r: f32) {
        self.draw_ellipse(x, y, r, r);
    }

    /// Text with its baseline starting at `(x, y)`
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_text(text, x, y);
        }
    }

    /// Draw `image` with its pivot `(cx, cy)` at `(x, y)`, rotated `theta`
    /// degrees about the pivot
    pub fn draw_image(&mut self, image: &Image, x: f32, y: f32, cx: f32, cy: f32, theta: f32) {
        if let Some(paint) = self.painter() {
            paint.draw_image(image, x, y, cx, cy, theta);
        }
    }

    // === Transforms ===

    pub fn translate(&mut self, x: f32, y: f32) {
        if let Some(paint) = self.painter() {
            paint.translate(x, y);
        }
    }

    /// Rotate by `degrees`
    pub fn rotate(&mut self, degrees: f32) {
        if let Some(paint) = self.painter() {
            paint.rotate(degrees);
        }
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        if let Some(paint) = self.painter() {
            paint.scale(sx, sy);
        }
    }

    pub fn save(&mut self) {
        if let Some(paint) = self.painter() {
            paint.save();
        }
    }

    pub fn restore(&mut self) {
        if let Some(paint) = self.painter() {
            paint.restore();
        }
    }

    // === Queries ===

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.input.is_key_pressed(key)
    }

    pub fn is_mouse_pressed(&self) -> bool {
        self.input.is_mouse_pressed()
    }

    /// Last known mouse x, -1 before any mouse event
    pub fn mouse_x(&self) -> f32 {
        self.input.mouse_position().x
    }

    /// Last known mouse y, -1 before any mouse event
    pub fn mouse_y(&self) -> f32 {
        self.input.mouse_position().y
    }

    /// Width of `text` in the current font, in pixels
    pub fn get_text_width(&self, text: &str) -> f32 {
        self.paint.text_width(text)
    }

    /// Line height of the current font, in pixels
    pub fn get_text_height(&self) -> f32 {
        self.paint.text_height()
    }
}
