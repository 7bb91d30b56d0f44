//! Image decoding and pixel access

use std::path::Path;

use easel_core::Color;
use image::RgbaImage;

use crate::error::{ImageError, Result};

/// Load an image file, decoding with whatever formats are enabled
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    Image::load(path)
}

/// A decoded image held as straight (non-premultiplied) RGBA8
///
/// Pixel accessors work in normalized `[0, 1]` color space and convert
/// to and from 8-bit channels internally.
#[derive(Clone, Debug)]
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    /// Create a fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Load and decode an image file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| ImageError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let pixels = decoded.to_rgba8();
        tracing::debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self { pixels })
    }

    /// Wrap raw straight-alpha RGBA8 data (4 bytes per pixel)
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        RgbaImage::from_raw(width, height, data)
            .map(|pixels| Self { pixels })
            .ok_or(ImageError::SizeMismatch {
                width,
                height,
                expected,
                actual,
            })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw straight-alpha RGBA8 bytes, row-major
    pub fn as_rgba8(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Read a pixel as a normalized color
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.check_bounds(x, y)?;
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Ok(Color::from_rgba8(r, g, b, a))
    }

    /// Write a pixel from normalized components
    ///
    /// Components are quantized to 8 bits, so a later `get_pixel` returns
    /// each channel within 1/255 of what was written.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: f32, g: f32, b: f32, a: f32) -> Result<()> {
        self.set_color(x, y, Color::new(r, g, b, a))
    }

    /// Write a pixel from a [`Color`]
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check_bounds(x, y)?;
        self.pixels.put_pixel(x, y, image::Rgba(color.to_rgba8()));
        Ok(())
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x < self.width() && y < self.height() {
            Ok(())
        } else {
            Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
