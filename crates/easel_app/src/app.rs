//! Loop driver: owns the canvas, the user state, and the callbacks

use easel_paint::FontRegistry;
use easel_platform::{
    ControlFlow, Event, EventLoop, InputEvent, KeyState, LifecycleEvent, MouseEvent, Window,
    WindowConfig, WindowEvent,
};

use crate::canvas::{Canvas, Lifecycle};
use crate::error::{AppError, Result};

/// Per-frame drawing callback
pub type DrawFn<S> = Box<dyn FnMut(&mut S, &mut Canvas)>;
/// Key callback, receives the key text
pub type KeyFn<S> = Box<dyn FnMut(&mut S, &mut Canvas, &str)>;
/// Mouse callback, receives logical window coordinates
pub type MouseFn<S> = Box<dyn FnMut(&mut S, &mut Canvas, f32, f32)>;

/// Everything needed to open a graphics window
///
/// `S` is the user state threaded through every callback; use `()` when
/// the callbacks keep their own state.
///
/// ```ignore
/// let config = GraphicsConfig::new(0u32, |frames, canvas| {
///     *frames += 1;
///     canvas.clear();
///     canvas.draw_circle(200.0, 200.0, 20.0);
/// })
/// .with_title("demo")
/// .with_framerate(60);
/// start_graphics(config)?;
/// ```
pub struct GraphicsConfig<S> {
    pub state: S,
    pub title: String,
    pub framerate: i32,
    pub width: u32,
    pub height: u32,
    draw: DrawFn<S>,
    mouse_press: MouseFn<S>,
    mouse_release: MouseFn<S>,
    mouse_move: MouseFn<S>,
    key_press: KeyFn<S>,
    key_release: KeyFn<S>,
    fonts: Option<FontRegistry>,
}

impl<S> GraphicsConfig<S> {
    pub fn new<F>(state: S, draw: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas) + 'static,
    {
        Self {
            state,
            title: "graphics window".to_string(),
            framerate: 40,
            width: 400,
            height: 400,
            draw: Box::new(draw),
            mouse_press: Box::new(|_, _, _, _| {}),
            mouse_release: Box::new(|_, _, _, _| {}),
            mouse_move: Box::new(|_, _, _, _| {}),
            key_press: Box::new(|_, _, _| {}),
            key_release: Box::new(|_, _, _| {}),
            fonts: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Frames per second; must be positive
    pub fn with_framerate(mut self, framerate: i32) -> Self {
        self.framerate = framerate;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Use a specific font registry instead of the system fonts
    pub fn with_fonts(mut self, fonts: FontRegistry) -> Self {
        self.fonts = Some(fonts);
        self
    }

    pub fn on_mouse_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas, f32, f32) + 'static,
    {
        self.mouse_press = Box::new(f);
        self
    }

    pub fn on_mouse_release<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas, f32, f32) + 'static,
    {
        self.mouse_release = Box::new(f);
        self
    }

    pub fn on_mouse_move<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas, f32, f32) + 'static,
    {
        self.mouse_move = Box::new(f);
        self
    }

    pub fn on_key_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas, &str) + 'static,
    {
        self.key_press = Box::new(f);
        self
    }

    pub fn on_key_release<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, &mut Canvas, &str) + 'static,
    {
        self.key_release = Box::new(f);
        self
    }
}

impl GraphicsConfig<()> {
    /// Configuration without user state
    pub fn stateless<F>(mut draw: F) -> Self
    where
        F: FnMut(&mut Canvas) + 'static,
    {
        Self::new((), move |_, canvas| draw(canvas))
    }
}

struct Callbacks<S> {
    draw: DrawFn<S>,
    mouse_press: MouseFn<S>,
    mouse_release: MouseFn<S>,
    mouse_move: MouseFn<S>,
    key_press: KeyFn<S>,
    key_release: KeyFn<S>,
}

/// A running graphics application
///
/// Translates platform events into canvas updates and user callbacks.
/// Any [`EventLoop`] can drive it through [`App::run_with`].
pub struct App<S> {
    canvas: Canvas,
    state: S,
    callbacks: Callbacks<S>,
    frames: u64,
}

impl<S> App<S> {
    /// Build the canvas; fails before any window exists if the framerate
    /// is not positive
    pub fn new(config: GraphicsConfig<S>) -> Result<Self> {
        if config.framerate <= 0 {
            return Err(AppError::InvalidFramerate(config.framerate));
        }

        let GraphicsConfig {
            state,
            title,
            framerate,
            width,
            height,
            draw,
            mouse_press,
            mouse_release,
            mouse_move,
            key_press,
            key_release,
            fonts,
        } = config;

        let canvas = match fonts {
            Some(fonts) => Canvas::with_fonts(width, height, title, framerate, fonts)?,
            None => Canvas::new(width, height, title, framerate)?,
        };

        Ok(Self {
            canvas,
            state,
            callbacks: Callbacks {
                draw,
                mouse_press,
                mouse_release,
                mouse_move,
                key_press,
                key_release,
            },
            frames: 0,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Number of ticks run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::default()
            .with_title(self.canvas.title())
            .with_size(self.canvas.width(), self.canvas.height())
    }

    /// Run one frame of the draw callback
    pub fn tick(&mut self) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.start();
        (self.callbacks.draw)(&mut self.state, &mut self.canvas);
        self.frames += 1;
    }

    /// Record a key press; empty text updates the key set but is not
    /// dispatched
    pub fn key_press(&mut self, text: &str) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.input_mut().press_key(text);
        if !text.is_empty() {
            (self.callbacks.key_press)(&mut self.state, &mut self.canvas, text);
        }
    }

    /// Record a key release; empty text updates the key set but is not
    /// dispatched
    pub fn key_release(&mut self, text: &str) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.input_mut().release_key(text);
        if !text.is_empty() {
            (self.callbacks.key_release)(&mut self.state, &mut self.canvas, text);
        }
    }

    pub fn mouse_press(&mut self, x: f32, y: f32) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.input_mut().mouse_press(x, y);
        (self.callbacks.mouse_press)(&mut self.state, &mut self.canvas, x, y);
    }

    pub fn mouse_release(&mut self, x: f32, y: f32) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.input_mut().mouse_release(x, y);
        (self.callbacks.mouse_release)(&mut self.state, &mut self.canvas, x, y);
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        if self.canvas.is_closed() {
            return;
        }
        self.canvas.input_mut().mouse_move(x, y);
        (self.callbacks.mouse_move)(&mut self.state, &mut self.canvas, x, y);
    }

    pub fn close(&mut self) {
        self.canvas.close();
    }

    /// Apply one platform event
    pub fn handle_event<W: Window>(&mut self, event: Event, window: &W) -> ControlFlow {
        match event {
            Event::Lifecycle(LifecycleEvent::Resumed) => self.canvas.start(),
            Event::Lifecycle(LifecycleEvent::Suspended) => {
                tracing::debug!("Application suspended");
            }
            Event::Frame => {
                self.tick();
                window.request_redraw();
            }
            Event::RedrawRequested => {
                let paint = self.canvas.paint();
                if let Err(e) = window.present(paint.data(), paint.width(), paint.height()) {
                    tracing::warn!("Failed to present frame: {}", e);
                }
            }
            Event::Input(InputEvent::Keyboard(key)) => match key.state {
                KeyState::Pressed => self.key_press(&key.text),
                KeyState::Released => self.key_release(&key.text),
            },
            Event::Input(InputEvent::Mouse(mouse)) => match mouse {
                MouseEvent::ButtonPressed { x, y, .. } => self.mouse_press(x, y),
                MouseEvent::ButtonReleased { x, y, .. } => self.mouse_release(x, y),
                MouseEvent::Moved { x, y } => self.mouse_move(x, y),
            },
            Event::Window(WindowEvent::CloseRequested) => self.close(),
            Event::Window(WindowEvent::Resized { width, height }) => {
                tracing::debug!("Window resized to {}x{}", width, height);
            }
        }

        if self.canvas.lifecycle() == Lifecycle::Closed {
            ControlFlow::Exit
        } else {
            ControlFlow::Continue
        }
    }

    /// Drive the app with `event_loop` until the window closes
    pub fn run_with<L: EventLoop>(&mut self, event_loop: L) -> Result<()> {
        tracing::debug!(
            "Starting '{}' at {} fps",
            self.canvas.title(),
            self.canvas.framerate()
        );
        event_loop.run(|event, window| self.handle_event(event, window))?;
        self.close();
        Ok(())
    }
}
