//! Keyboard and mouse state tracked by the canvas

use easel_core::Point;
use rustc_hash::FxHashSet;

/// Currently held keys and the last known mouse state
#[derive(Debug, Clone)]
pub struct InputState {
    keys: FxHashSet<String>,
    mouse: Point,
    mouse_down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: FxHashSet::default(),
            mouse: Point::new(-1.0, -1.0),
            mouse_down: false,
        }
    }
}

impl InputState {
    pub fn press_key(&mut self, text: &str) {
        self.keys.insert(text.to_string());
    }

    pub fn release_key(&mut self, text: &str) {
        self.keys.remove(text);
    }

    pub fn is_key_pressed(&self, text: &str) -> bool {
        self.keys.contains(text)
    }

    /// Number of distinct keys held
    pub fn keys_held(&self) -> usize {
        self.keys.len()
    }

    pub fn mouse_press(&mut self, x: f32, y: f32) {
        self.mouse = Point::new(x, y);
        self.mouse_down = true;
    }

    pub fn mouse_release(&mut self, x: f32, y: f32) {
        self.mouse = Point::new(x, y);
        self.mouse_down = false;
    }

    /// Moving does not change the button state
    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.mouse = Point::new(x, y);
    }

    pub fn is_mouse_pressed(&self) -> bool {
        self.mouse_down
    }

    pub fn mouse_position(&self) -> Point {
        self.mouse
    }
}
