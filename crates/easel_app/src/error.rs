//! Error types for easel_app

use easel_image::ImageError;
use easel_paint::PaintError;
use easel_platform::PlatformError;
use thiserror::Error;

/// Easel application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid framerate {0}: must be greater than zero")]
    InvalidFramerate(i32),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Paint error: {0}")]
    Paint(#[from] PaintError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Result type for easel_app operations
pub type Result<T> = std::result::Result<T, AppError>;
