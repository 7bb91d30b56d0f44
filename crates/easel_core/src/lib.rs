//! Easel core types
//!
//! Plain value types shared by every Easel crate:
//!
//! - [`Color`]: normalized RGBA color
//! - [`Point`] and [`Rect`]: geometry in canvas pixels
//! - [`Transform2D`]: 2D affine matrix used by the paint context

pub mod color;
pub mod geometry;
pub mod transform;

pub use color::Color;
pub use geometry::{Point, Rect};
pub use transform::{radians_to_degrees, Transform2D};
