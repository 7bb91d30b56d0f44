//! Easel Application Framework
//!
//! A procedural canvas driven by a fixed-framerate loop.
//!
//! # Example
//!
//! ```ignore
//! use easel_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = GraphicsConfig::stateless(|canvas| {
//!         canvas.clear();
//!         canvas.set_fill_color(0.0, 0.3, 0.0, 1.0);
//!         canvas.draw_circle(canvas.mouse_x(), canvas.mouse_y(), 20.0);
//!     })
//!     .with_title("follow the mouse");
//!
//!     start_graphics(config)
//! }
//! ```

mod app;
mod canvas;
mod error;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
mod input;

#[cfg(all(feature = "windowed", not(any(target_os = "android", target_os = "ios"))))]
mod windowed;


pub use app::{App, DrawFn, GraphicsConfig, KeyFn, MouseFn};
pub use canvas::{Canvas, Lifecycle};
pub use error::{AppError, Result};
pub use input::InputState;

#[cfg(all(feature = "windowed", not(any(target_os = "android", target_os = "ios"))))]
pub use windowed::start_graphics;

pub use easel_core::{radians_to_degrees, Color, Point};
pub use easel_image::{load_image, Image};
pub use easel_paint::FontRegistry;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{App, GraphicsConfig};
    pub use crate::canvas::Canvas;
    pub use crate::error::{AppError, Result};

    #[cfg(all(feature = "windowed", not(any(target_os = "android", target_os = "ios"))))]
    pub use crate::windowed::start_graphics;

    pub use easel_core::{radians_to_degrees, Color, Point};
    pub use easel_image::{load_image, Image};
}
