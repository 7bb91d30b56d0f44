//! Easel Platform Abstraction
//!
//! Windowing, input, and frame timing shared by every backend.
//!
//! A backend implements [`EventLoop`] and [`Window`]; the application
//! hands the loop a handler closure that receives each [`Event`] together
//! with the window and answers with a [`ControlFlow`].

pub mod error;
pub mod event;
pub mod timer;
pub mod window;

pub use error::{PlatformError, Result};
pub use event::{
    ControlFlow, Event, InputEvent, KeyState, KeyboardEvent, LifecycleEvent, MouseButton,
    MouseEvent, WindowEvent,
};
pub use timer::FrameTimer;
pub use window::{Window, WindowConfig};

/// A source of events driving one window
pub trait EventLoop {
    type Window: Window;

    /// Run until the handler returns [`ControlFlow::Exit`] or the window
    /// closes
    fn run<F>(self, handler: F) -> Result<()>
    where
        F: FnMut(Event, &Self::Window) -> ControlFlow;
}
