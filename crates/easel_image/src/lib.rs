//! Easel Image
//!
//! Decoded images with per-pixel access in normalized color space.
//!
//! # Example
//!
//! ```ignore
//! use easel_image::Image;
//!
//! let mut img = Image::load("sprite.png")?;
//! let c = img.get_pixel(0, 0)?;
//! img.set_pixel(0, 0, 1.0 - c.r, 1.0 - c.g, 1.0 - c.b, c.a)?;
//! ```

mod error;
mod loader;

pub use loader::{load_image, Image};
pub use error::{ImageError, Result};
