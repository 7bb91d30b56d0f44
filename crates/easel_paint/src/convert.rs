//! Conversions between Easel types and tiny-skia

use easel_core::{Color, Transform2D};
use easel_image::Image;
use easel_text::OutlineSink;
use tiny_skia::{ColorU8, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};

pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

pub(crate) fn skia_transform(t: Transform2D) -> Transform {
    Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

pub(crate) fn solid_paint(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

pub(crate) fn demultiply(pixel: PremultipliedColorU8) -> Color {
    let c = pixel.demultiply();
    Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
}

/// Copy an image into a premultiplied pixmap ready for compositing
///
/// Returns `None` for empty images.
pub fn image_to_pixmap(image: &Image) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.as_rgba8().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Some(pixmap)
}

/// Collects glyph outlines into a tiny-skia path
pub(crate) struct PathSink(pub PathBuilder);

impl OutlineSink for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
