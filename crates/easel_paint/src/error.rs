//! Paint error types

use thiserror::Error;

/// Paint-related errors
#[derive(Error, Debug)]
pub enum PaintError {
    /// Off-screen buffer could not be allocated
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
