//! Paint context - the main drawing API

use std::sync::Arc;

use easel_core::{Color, Point, Rect, Transform2D};
use easel_image::Image;
use easel_text::{FontDescriptor, FontFace, FontRegistry, FontWeight};
use smallvec::SmallVec;
use tiny_skia::{
    FillRule, FilterQuality, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
};

use crate::convert::{
    demultiply, image_to_pixmap, skia_color, skia_transform, solid_paint, PathSink,
};
use crate::error::{PaintError, Result};

/// Configured stroke: paint plus geometry
struct Pen {
    paint: Paint<'static>,
    stroke: Stroke,
}

/// The paint context and the off-screen buffer it draws into
///
/// State setters reconfigure the pen, brush, or font immediately; drawing
/// primitives rasterize straight into the buffer using whatever is
/// configured at the time of the call.
pub struct PaintContext {
    pixmap: Pixmap,
    fonts: FontRegistry,
    font: FontDescriptor,
    face: Option<Arc<FontFace>>,
    stroke_enabled: bool,
    fill_enabled: bool,
    stroke_color: Color,
    fill_color: Color,
    stroke_width: f32,
    clear_color: Color,
    pen: Option<Pen>,
    brush: Option<Paint<'static>>,
    transform: Transform2D,
    transform_stack: SmallVec<[Transform2D; 8]>,
}

impl PaintContext {
    /// Create a context backed by the system fonts
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_fonts(width, height, FontRegistry::new())
    }

    /// Create a context with an explicit font registry
    pub fn with_fonts(width: u32, height: u32, fonts: FontRegistry) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidDimensions { width, height })?;

        let mut ctx = Self {
            pixmap,
            fonts,
            font: FontDescriptor::default(),
            face: None,
            stroke_enabled: true,
            fill_enabled: true,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            stroke_width: 1.0,
            clear_color: Color::WHITE,
            pen: None,
            brush: None,
            transform: Transform2D::identity(),
            transform_stack: SmallVec::new(),
        };
        ctx.update_pen();
        ctx.update_brush();
        ctx.update_font();
        ctx.clear();
        Ok(ctx)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The off-screen buffer
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA bytes of the off-screen buffer, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Read back one buffer pixel as a straight-alpha color
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(demultiply)
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_stroke_enabled(&self) -> bool {
        self.stroke_enabled
    }

    pub fn is_fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Number of saved transforms
    pub fn save_depth(&self) -> usize {
        self.transform_stack.len()
    }

    // === Paint state ===

    fn update_pen(&mut self) {
        self.pen = self.stroke_enabled.then(|| Pen {
            paint: solid_paint(self.stroke_color),
            stroke: Stroke {
                width: self.stroke_width,
                ..Default::default()
            },
        });
    }

    fn update_brush(&mut self) {
        self.brush = self.fill_enabled.then(|| solid_paint(self.fill_color));
    }

    fn update_font(&mut self) {
        self.face = match self.fonts.resolve(&self.font) {
            Ok(face) => Some(face),
            Err(e) => {
                tracing::debug!("No face for {:?}: {}", self.font, e);
                None
            }
        };
    }

    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = Color::new(r, g, b, a).clamped();
    }

    pub fn set_stroke_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.stroke_color = Color::new(r, g, b, a).clamped();
        self.update_pen();
    }

    /// Negative widths clamp to 0, which strokes a one-pixel hairline
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.update_pen();
    }

    /// Setting a fill color also turns fill on
    pub fn set_fill_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.fill_color = Color::new(r, g, b, a).clamped();
        self.enable_fill();
    }

    pub fn enable_fill(&mut self) {
        self.fill_enabled = true;
        self.update_brush();
    }

    pub fn disable_fill(&mut self) {
        self.fill_enabled = false;
        self.update_brush();
    }

    pub fn enable_stroke(&mut self) {
        self.stroke_enabled = true;
        self.update_pen();
    }

    pub fn disable_stroke(&mut self) {
        self.stroke_enabled = false;
        self.update_pen();
    }

    pub fn set_font(&mut self, family: &str) {
        self.font.family = family.to_string();
        self.update_font();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font.size = size;
        self.update_font();
    }

    /// Regular weight, upright
    pub fn set_font_normal(&mut self) {
        self.font.weight = FontWeight::Normal;
        self.font.italic = false;
        self.update_font();
    }

    pub fn set_font_bold(&mut self) {
        self.font.weight = FontWeight::Bold;
        self.update_font();
    }

    pub fn set_font_italic(&mut self) {
        self.font.italic = true;
        self.update_font();
    }

    /// Register extra font bytes and re-resolve the current font
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.fonts.load_font_data(data);
        self.update_font();
    }

    // === Transforms ===

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform.pre_translate(x, y);
    }

    /// Rotate by `degrees`, clockwise on screen
    pub fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform.pre_rotate(degrees);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    pub fn save(&mut self) {
        self.transform_stack.push(self.transform);
    }

    pub fn restore(&mut self) {
        match self.transform_stack.pop() {
            Some(transform) => self.transform = transform,
            None => tracing::debug!("restore() without matching save()"),
        }
    }

    // === Drawing ===

    /// Fill the whole buffer with the clear color, ignoring the transform
    pub fn clear(&mut self) {
        self.pixmap.fill(skia_color(self.clear_color));
    }

    /// A square of pen color, `stroke_width` on a side (at least one pixel)
    pub fn draw_point(&mut self, x: f32, y: f32) {
        let Some(pen) = &self.pen else {
            return;
        };
        let side = pen.stroke.width.max(1.0);
        let offset = (side - 1.0) / 2.0;
        if let Some(rect) = tiny_skia::Rect::from_xywh(x - offset, y - offset, side, side) {
            self.pixmap
                .fill_rect(rect, &pen.paint, skia_transform(self.transform), None);
        }
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path);
        }
    }

    pub fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let r = Rect::new(x, y, w, h).normalized();
        let mut pb = PathBuilder::new();
        pb.move_to(r.x, r.y);
        pb.line_to(r.x + r.width, r.y);
        pb.line_to(r.x + r.width, r.y + r.height);
        pb.line_to(r.x, r.y + r.height);
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill_and_stroke(&path, FillRule::Winding);
        }
    }

    /// Closed polygon through `vertices` in order (even-odd fill)
    pub fn draw_polygon<P>(&mut self, vertices: &[P])
    where
        P: Into<Point> + Copy,
    {
        let mut points = vertices.iter().map(|&v| v.into());
        let Some(first) = points.next() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in points {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill_and_stroke(&path, FillRule::EvenOdd);
        }
    }

    /// Ellipse centered on `(x, y)`; non-positive radii draw nothing
    pub fn draw_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
        if !(rx > 0.0 && ry > 0.0) {
            return;
        }
        let bounds = Rect::from_center(x, y, rx, ry);
        let path = tiny_skia::Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height)
            .and_then(PathBuilder::from_oval);
        if let Some(path) = path {
            self.fill_and_stroke(&path, FillRule::Winding);
        }
    }

    /// Text in pen color with its baseline at `y`
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        let (Some(pen), Some(face)) = (&self.pen, &self.face) else {
            return;
        };
        let mut sink = PathSink(PathBuilder::new());
        face.outline_text(text, self.font.pixel_size(), Point::new(x, y), &mut sink);
        if let Some(path) = sink.0.finish() {
            self.pixmap.fill_path(
                &path,
                &pen.paint,
                FillRule::Winding,
                skia_transform(self.transform),
                None,
            );
        }
    }

    /// Advance width of `text` in the current font, in pixels
    pub fn text_width(&self, text: &str) -> f32 {
        self.face
            .as_ref()
            .map_or(0.0, |face| face.advance_width(text, self.font.pixel_size()))
    }

    /// Ascent plus descent of the current font, in pixels
    pub fn text_height(&self) -> f32 {
        self.face
            .as_ref()
            .map_or(0.0, |face| face.height(self.font.pixel_size()))
    }

    /// Draw `image` with its top-left corner at `(x, y)` in the current
    /// coordinate space
    pub fn blit_image(&mut self, image: &Image, x: f32, y: f32) {
        let Some(source) = image_to_pixmap(image) else {
            return;
        };
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        let transform = skia_transform(self.transform.pre_translate(x, y));
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }

    /// Place `image` so that its pivot `(cx, cy)` lands on `(x, y)`,
    /// rotated `theta` degrees about that pivot
    pub fn draw_image(&mut self, image: &Image, x: f32, y: f32, cx: f32, cy: f32, theta: f32) {
        self.save();
        self.translate(x - cx, y - cy);

        if theta != 0.0 {
            self.translate(cx, cy);
            self.rotate(theta);
            self.translate(-cx, -cy);
        }

        self.blit_image(image, 0.0, 0.0);
        self.restore();
    }

    fn stroke_path(&mut self, path: &Path) {
        if let Some(pen) = &self.pen {
            self.pixmap.stroke_path(
                path,
                &pen.paint,
                &pen.stroke,
                skia_transform(self.transform),
                None,
            );
        }
    }

    fn fill_and_stroke(&mut self, path: &Path, rule: FillRule) {
        if let Some(brush) = &self.brush {
            self.pixmap
                .fill_path(path, brush, rule, skia_transform(self.transform), None);
        }
        self.stroke_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(width: u32, height: u32) -> PaintContext {
        PaintContext::with_fonts(width, height, FontRegistry::empty()).unwrap()
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        assert!(matches!(
            PaintContext::with_fonts(0, 10, FontRegistry::empty()),
            Err(PaintError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn defaults_match_canvas_conventions() {
        let ctx = ctx(8, 8);
        assert!(ctx.is_fill_enabled());
        assert!(ctx.is_stroke_enabled());
        assert_eq!(ctx.stroke_width(), 1.0);
        assert_eq!(ctx.stroke_color(), Color::BLACK);
        assert_eq!(ctx.fill_color(), Color::BLACK);
        assert_eq!(ctx.clear_color(), Color::WHITE);
        assert_eq!(ctx.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn set_fill_color_reenables_fill() {
        let mut ctx = ctx(8, 8);
        ctx.disable_fill();
        assert!(!ctx.is_fill_enabled());
        ctx.set_fill_color(1.0, 0.0, 0.0, 1.0);
        assert!(ctx.is_fill_enabled());
    }

    #[test]
    fn setters_clamp_out_of_range_values() {
        let mut ctx = ctx(8, 8);
        ctx.set_stroke_color(2.0, -1.0, 0.5, 1.0);
        assert_eq!(ctx.stroke_color(), Color::new(1.0, 0.0, 0.5, 1.0));
        ctx.set_stroke_width(-3.0);
        assert_eq!(ctx.stroke_width(), 0.0);
    }

    #[test]
    fn font_setters_update_descriptor() {
        let mut ctx = ctx(8, 8);
        ctx.set_font("Courier");
        ctx.set_font_size(20.0);
        ctx.set_font_bold();
        ctx.set_font_italic();
        assert_eq!(ctx.font().family, "Courier");
        assert_eq!(ctx.font().size, 20.0);
        assert_eq!(ctx.font().weight, FontWeight::Bold);
        assert!(ctx.font().italic);

        ctx.set_font_normal();
        assert_eq!(ctx.font().weight, FontWeight::Normal);
        assert!(!ctx.font().italic);
    }

    #[test]
    fn text_metrics_are_zero_without_fonts() {
        let mut ctx = ctx(16, 16);
        assert_eq!(ctx.text_width("hello"), 0.0);
        assert_eq!(ctx.text_height(), 0.0);
        let before = ctx.data().to_vec();
        ctx.draw_text("hello", 2.0, 12.0);
        assert_eq!(ctx.data(), &before[..]);
    }

    #[test]
    fn point_with_unit_width_covers_one_pixel() {
        let mut ctx = ctx(8, 8);
        ctx.draw_point(3.0, 4.0);
        assert_eq!(ctx.pixel(3, 4), Some(Color::BLACK));
        assert_eq!(ctx.pixel(2, 4), Some(Color::WHITE));
        assert_eq!(ctx.pixel(3, 5), Some(Color::WHITE));
    }

    #[test]
    fn disabled_stroke_skips_points_and_lines() {
        let mut ctx = ctx(8, 8);
        ctx.disable_stroke();
        let before = ctx.data().to_vec();
        ctx.draw_point(3.0, 3.0);
        ctx.draw_line(0.0, 0.0, 7.0, 7.0);
        assert_eq!(ctx.data(), &before[..]);
    }

    #[test]
    fn rectangle_fills_interior_with_brush() {
        let mut ctx = ctx(20, 20);
        ctx.disable_stroke();
        ctx.set_fill_color(1.0, 0.0, 0.0, 1.0);
        ctx.draw_rectangle(5.0, 5.0, 10.0, 10.0);
        assert_eq!(ctx.pixel(10, 10), Some(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(ctx.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(ctx.pixel(16, 16), Some(Color::WHITE));
    }

    #[test]
    fn polygon_is_closed_implicitly() {
        let mut ctx = ctx(20, 20);
        ctx.disable_stroke();
        ctx.set_fill_color(0.0, 0.0, 1.0, 1.0);
        ctx.draw_polygon(&[(2.0, 2.0), (18.0, 2.0), (2.0, 18.0)]);
        assert_eq!(ctx.pixel(4, 4), Some(Color::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(ctx.pixel(16, 16), Some(Color::WHITE));
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut ctx = ctx(8, 8);
        let before = ctx.data().to_vec();
        ctx.draw_polygon::<(f32, f32)>(&[]);
        ctx.draw_polygon(&[(1.0, 1.0)]);
        assert_eq!(ctx.data(), &before[..]);
    }

    #[test]
    fn save_restore_round_trips_transform() {
        let mut ctx = ctx(8, 8);
        ctx.translate(5.0, 5.0);
        let saved = ctx.transform();
        ctx.save();
        ctx.rotate(30.0);
        ctx.scale(2.0, 2.0);
        assert_eq!(ctx.save_depth(), 1);
        ctx.restore();
        assert_eq!(ctx.transform(), saved);
        assert_eq!(ctx.save_depth(), 0);

        // Unbalanced restore leaves the transform alone
        ctx.restore();
        assert_eq!(ctx.transform(), saved);
    }

    #[test]
    fn translate_moves_subsequent_drawing() {
        let mut ctx = ctx(10, 10);
        ctx.translate(4.0, 2.0);
        ctx.draw_point(1.0, 1.0);
        assert_eq!(ctx.pixel(5, 3), Some(Color::BLACK));
        assert_eq!(ctx.pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn draw_image_restores_transform() {
        let mut ctx = ctx(10, 10);
        let img = Image::new(2, 2);
        ctx.draw_image(&img, 5.0, 5.0, 1.0, 1.0, 45.0);
        assert!(ctx.transform().is_identity());
        assert_eq!(ctx.save_depth(), 0);
    }
}
