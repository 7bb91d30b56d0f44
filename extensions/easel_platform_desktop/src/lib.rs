//! Easel Desktop Platform
//!
//! Windowing and input for macOS, Windows, and Linux.

pub mod blit;
pub mod event_loop;
pub mod input;
pub mod window;

pub use event_loop::DesktopEventLoop;
pub use window::DesktopWindow;
