//! Easel Paint
//!
//! Immediate-mode 2D drawing into an off-screen pixel buffer.
//!
//! # Features
//!
//! - Pen (stroke) and brush (fill) state with enable/disable switches
//! - Points, lines, rectangles, polygons, ellipses
//! - Text drawn from system font outlines
//! - Images placed with an optional rotation pivot
//! - Translate/rotate/scale with a save/restore stack
//!
//! ```ignore
//! use easel_paint::PaintContext;
//!
//! let mut ctx = PaintContext::new(400, 400)?;
//! ctx.clear();
//! ctx.set_fill_color(0.0, 0.3, 0.0, 1.0);
//! ctx.draw_ellipse(200.0, 200.0, 20.0, 20.0);
//! ```

mod context;
mod convert;
mod error;

pub use context::PaintContext;
pub use convert::image_to_pixmap;
pub use error::{PaintError, Result};

pub use easel_core::{Color, Point, Rect, Transform2D};
pub use easel_image::Image;
pub use easel_text::{FontDescriptor, FontRegistry, FontWeight};
