//! Image error types

use std::path::PathBuf;
use thiserror::Error;

/// Image-related errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// Failed to read or decode an image file
    #[error("Failed to load image '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Raw pixel data does not match the stated dimensions
    #[error("Pixel data has {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinates outside the image
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
