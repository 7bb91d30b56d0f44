//! Easel Text
//!
//! Font handling for the Easel canvas:
//!
//! - [`FontDescriptor`]: family, point size, weight, italic
//! - [`FontRegistry`]: system font discovery and face caching via fontdb
//! - [`FontFace`]: metrics and glyph outlines via ttf-parser

pub mod font;
pub mod registry;

pub use font::{FontDescriptor, FontFace, FontWeight, OutlineSink, POINTS_TO_PIXELS};
pub use registry::FontRegistry;

use thiserror::Error;

/// Text-related errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("No fonts are available")]
    NoFonts,
}

pub type Result<T> = std::result::Result<T, TextError>;
