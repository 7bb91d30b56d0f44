//! Movable ball demo
//!
//! A ball starts in the middle of a fixed window and moves while any of
//! W/A/S/D is held, stopping at the window edges.

use easel_app::{Canvas, GraphicsConfig};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FRAMERATE: i32 = 100;

pub const BALL_RADIUS: f32 = 20.0;
/// Pixels per frame
pub const BALL_SPEED: f32 = 2.0;

/// Ball position and which direction keys are held
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    pub right: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            x: WINDOW_WIDTH as f32 / 2.0,
            y: WINDOW_HEIGHT as f32 / 2.0,
            left: false,
            up: false,
            down: false,
            right: false,
        }
    }
}

impl Ball {
    pub fn key_pressed(&mut self, key: &str) {
        self.set_direction(key, true);
    }

    pub fn key_released(&mut self, key: &str) {
        self.set_direction(key, false);
    }

    fn set_direction(&mut self, key: &str, held: bool) {
        match key {
            "a" => self.left = held,
            "w" => self.up = held,
            "s" => self.down = held,
            "d" => self.right = held,
            _ => {}
        }
    }

    /// Move one frame's worth while keeping the ball's edge inside the
    /// window
    pub fn advance(&mut self) {
        let (width, height) = (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        if self.left && self.x - BALL_RADIUS > 0.0 {
            self.x -= BALL_SPEED;
        }
        if self.right && self.x + BALL_RADIUS < width {
            self.x += BALL_SPEED;
        }
        if self.up && self.y - BALL_RADIUS > 0.0 {
            self.y -= BALL_SPEED;
        }
        if self.down && self.y + BALL_RADIUS < height {
            self.y += BALL_SPEED;
        }
    }

    /// White-rimmed dark green disc
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.enable_stroke();
        canvas.set_stroke_color(0.0, 0.0, 0.0, 1.0);
        canvas.set_fill_color(1.0, 1.0, 1.0, 1.0);
        canvas.draw_circle(self.x, self.y, BALL_RADIUS);

        canvas.disable_stroke();
        canvas.set_fill_color(0.0, 0.3, 0.0, 1.0);
        canvas.draw_circle(self.x, self.y, BALL_RADIUS - 3.0);
    }
}

/// One frame: move, then repaint
pub fn frame(ball: &mut Ball, canvas: &mut Canvas) {
    canvas.set_fill_color(1.0, 1.0, 1.0, 1.0);
    ball.advance();
    canvas.clear();
    ball.draw(canvas);
}

/// Window and callbacks for the demo
pub fn config() -> GraphicsConfig<Ball> {
    GraphicsConfig::new(Ball::default(), frame)
        .with_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .with_framerate(FRAMERATE)
        .on_key_press(|ball: &mut Ball, _: &mut Canvas, key: &str| ball.key_pressed(key))
        .on_key_release(|ball: &mut Ball, _: &mut Canvas, key: &str| ball.key_released(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_and_still() {
        let mut ball = Ball::default();
        assert_eq!((ball.x, ball.y), (400.0, 400.0));
        ball.advance();
        assert_eq!((ball.x, ball.y), (400.0, 400.0));
    }

    #[test]
    fn keys_toggle_directions() {
        let mut ball = Ball::default();
        for key in ["a", "w", "s", "d"] {
            ball.key_pressed(key);
        }
        assert!(ball.left && ball.up && ball.down && ball.right);

        ball.key_released("w");
        ball.key_released("x");
        assert!(!ball.up);
        assert!(ball.left && ball.down && ball.right);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut ball = Ball::default();
        ball.key_pressed("a");
        ball.key_pressed("d");
        ball.advance();
        assert_eq!(ball.x, 400.0);
    }

    #[test]
    fn uppercase_keys_are_ignored() {
        let mut ball = Ball::default();
        ball.key_pressed("D");
        ball.advance();
        assert_eq!(ball.x, 400.0);
    }

    #[test]
    fn stops_at_top_left_corner() {
        let mut ball = Ball::default();
        ball.key_pressed("a");
        ball.key_pressed("w");
        for _ in 0..1000 {
            ball.advance();
        }
        assert_eq!((ball.x, ball.y), (BALL_RADIUS, BALL_RADIUS));
    }
}
