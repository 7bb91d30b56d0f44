//! Platform-agnostic events

/// Top-level event delivered to the application handler
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Application lifecycle change
    Lifecycle(LifecycleEvent),
    /// Window state change
    Window(WindowEvent),
    /// Keyboard or mouse input
    Input(InputEvent),
    /// The frame timer fired
    Frame,
    /// The window wants its contents presented
    RedrawRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The window exists and events will start flowing
    Resumed,
    /// The application was suspended by the OS
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    CloseRequested,
    Resized { width: u32, height: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Keyboard(KeyboardEvent),
    Mouse(MouseEvent),
}

impl InputEvent {
    pub fn key_pressed(text: impl Into<String>) -> Self {
        InputEvent::Keyboard(KeyboardEvent {
            text: text.into(),
            state: KeyState::Pressed,
        })
    }

    pub fn key_released(text: impl Into<String>) -> Self {
        InputEvent::Keyboard(KeyboardEvent {
            text: text.into(),
            state: KeyState::Released,
        })
    }
}

/// A key transition carrying the text the key produces
///
/// `text` is empty for keys with no textual representation (arrows,
/// modifiers, function keys).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub text: String,
    pub state: KeyState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse input in logical window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseEvent {
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
    ButtonReleased { button: MouseButton, x: f32, y: f32 },
    Moved { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Returned by the event handler to keep running or stop the loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    #[default]
    Continue,
    Exit,
}
