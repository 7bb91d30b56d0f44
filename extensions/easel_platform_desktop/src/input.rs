//! Input event conversion from winit

use easel_platform::{InputEvent, KeyState, KeyboardEvent, MouseButton, MouseEvent};
use winit::event::{ElementState, MouseButton as WinitMouseButton};
use winit::keyboard::{Key, NamedKey};

/// Text a key produces
///
/// Character keys yield their (layout- and shift-aware) character; a few
/// named keys map to their control characters. Keys with no text, such as
/// arrows and modifiers, yield an empty string.
pub fn key_text(logical_key: &Key, text: Option<&str>) -> String {
    match logical_key {
        Key::Character(ch) => ch.to_string(),
        Key::Named(named) => match named {
            NamedKey::Space => " ".to_string(),
            NamedKey::Enter => "\r".to_string(),
            NamedKey::Tab => "\t".to_string(),
            NamedKey::Backspace => "\u{8}".to_string(),
            NamedKey::Escape => "\u{1b}".to_string(),
            NamedKey::Delete => "\u{7f}".to_string(),
            _ => String::new(),
        },
        _ => text.unwrap_or_default().to_string(),
    }
}

/// Convert a winit keyboard transition
pub fn convert_keyboard_event(
    logical_key: &Key,
    text: Option<&str>,
    state: ElementState,
) -> InputEvent {
    InputEvent::Keyboard(KeyboardEvent {
        text: key_text(logical_key, text),
        state: match state {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        },
    })
}

pub fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

pub fn mouse_pressed(button: WinitMouseButton, x: f32, y: f32) -> InputEvent {
    InputEvent::Mouse(MouseEvent::ButtonPressed {
        button: convert_mouse_button(button),
        x,
        y,
    })
}

pub fn mouse_released(button: WinitMouseButton, x: f32, y: f32) -> InputEvent {
    InputEvent::Mouse(MouseEvent::ButtonReleased {
        button: convert_mouse_button(button),
        x,
        y,
    })
}

pub fn mouse_moved(x: f32, y: f32) -> InputEvent {
    InputEvent::Mouse(MouseEvent::Moved { x, y })
}
