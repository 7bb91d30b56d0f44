//! Font descriptors and faces

use std::sync::Arc;

use easel_core::Point;

use crate::{Result, TextError};

/// Pixels per typographic point at 96 DPI
pub const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// Font requested by the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    /// Size in points
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 14.0,
            weight: FontWeight::Normal,
            italic: false,
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Em size in pixels
    pub fn pixel_size(&self) -> f32 {
        self.size.max(0.0) * POINTS_TO_PIXELS
    }

    /// Key for face lookups (size does not affect which face is chosen)
    pub(crate) fn face_key(&self) -> String {
        format!(
            "{}:w{}:{}",
            self.family,
            self.weight.value(),
            if self.italic { "i" } else { "n" }
        )
    }
}

/// Receives glyph outlines in canvas pixel coordinates (y down)
pub trait OutlineSink {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    fn close(&mut self);
}

/// A loaded font face
///
/// Holds the raw font file; the ttf-parser view is rebuilt per query.
#[derive(Debug)]
pub struct FontFace {
    family: String,
    data: Arc<Vec<u8>>,
    index: u32,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
}

impl FontFace {
    /// Parse a face from font file bytes
    pub fn from_data_with_index(data: Vec<u8>, index: u32) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, index)
            .map_err(|e| TextError::FontParseError(e.to_string()))?;

        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
            .find_map(|name| name.to_string())
            .unwrap_or_default();
        let units_per_em = face.units_per_em() as f32;
        let ascender = face.ascender() as f32;
        let descender = face.descender() as f32;

        Ok(Self {
            family,
            data: Arc::new(data),
            index,
            units_per_em,
            ascender,
            descender,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }

    fn scale(&self, pixel_size: f32) -> f32 {
        if self.units_per_em > 0.0 {
            pixel_size / self.units_per_em
        } else {
            0.0
        }
    }

    /// Distance from baseline to the top of the tallest glyphs
    pub fn ascent(&self, pixel_size: f32) -> f32 {
        self.ascender * self.scale(pixel_size)
    }

    /// Distance from baseline to the bottom of descenders (positive)
    pub fn descent(&self, pixel_size: f32) -> f32 {
        -self.descender * self.scale(pixel_size)
    }

    /// Ascent plus descent
    pub fn height(&self, pixel_size: f32) -> f32 {
        self.ascent(pixel_size) + self.descent(pixel_size)
    }

    /// Sum of horizontal advances for `text`
    pub fn advance_width(&self, text: &str, pixel_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let scale = self.scale(pixel_size);
        text.chars()
            .map(|ch| {
                let glyph = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
                face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale
            })
            .sum()
    }

    /// Emit outlines for `text` with its baseline starting at `origin`
    ///
    /// Returns the total advance.
    pub fn outline_text(
        &self,
        text: &str,
        pixel_size: f32,
        origin: Point,
        sink: &mut dyn OutlineSink,
    ) -> f32 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let scale = self.scale(pixel_size);
        let mut pen_x = origin.x;

        for ch in text.chars() {
            let glyph = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
            let mut builder = GlyphBuilder {
                sink: &mut *sink,
                scale,
                x: pen_x,
                y: origin.y,
            };
            face.outline_glyph(glyph, &mut builder);
            pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        }

        pen_x - origin.x
    }
}

/// Maps font units (y up) onto a pixel-space sink (y down)
struct GlyphBuilder<'a> {
    sink: &'a mut dyn OutlineSink,
    scale: f32,
    x: f32,
    y: f32,
}

impl GlyphBuilder<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.y - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for GlyphBuilder<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.sink.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.sink.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.sink.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.sink.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_matches_canvas_defaults() {
        let desc = FontDescriptor::default();
        assert_eq!(desc.family, "Arial");
        assert_eq!(desc.size, 14.0);
        assert_eq!(desc.weight, FontWeight::Normal);
        assert!(!desc.italic);
    }

    #[test]
    fn pixel_size_uses_96_dpi() {
        let desc = FontDescriptor::new("Mono", 12.0);
        assert!((desc.pixel_size() - 16.0).abs() < 1e-4);
        assert_eq!(FontDescriptor::new("Mono", -3.0).pixel_size(), 0.0);
    }

    #[test]
    fn face_key_ignores_size() {
        let a = FontDescriptor::new("Arial", 10.0).bold();
        let b = FontDescriptor::new("Arial", 30.0).bold();
        assert_eq!(a.face_key(), b.face_key());
        assert_ne!(a.face_key(), a.clone().italic().face_key());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            FontFace::from_data_with_index(vec![0, 1, 2, 3], 0),
            Err(TextError::FontParseError(_))
        ));
    }
}
