//! Headless event loop and window for deterministic runs without a display.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use easel_platform::{
    ControlFlow, Event, EventLoop, InputEvent, LifecycleEvent, MouseButton, MouseEvent, Result,
    Window, WindowConfig, WindowEvent,
};

use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

/// Configuration for headless execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Upper bound on frames a scenario may tick.
    pub max_frames: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 100_000,
        }
    }
}

impl HeadlessRunConfig {
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }
}

/// Window stand-in that records what was presented.
#[derive(Debug)]
pub struct HeadlessWindow {
    width: u32,
    height: u32,
    redraw_pending: Cell<bool>,
    presented: Cell<u64>,
    last_frame: RefCell<Vec<u8>>,
}

impl HeadlessWindow {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            redraw_pending: Cell::new(false),
            presented: Cell::new(0),
            last_frame: RefCell::new(Vec::new()),
        }
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.presented.get()
    }

    /// Copy of the most recently presented frame (premultiplied RGBA8).
    pub fn last_frame(&self) -> Vec<u8> {
        self.last_frame.borrow().clone()
    }

    fn take_redraw_request(&self) -> bool {
        self.redraw_pending.replace(false)
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn request_redraw(&self) {
        self.redraw_pending.set(true);
    }

    fn present(&self, pixels: &[u8], _width: u32, _height: u32) -> Result<()> {
        let mut frame = self.last_frame.borrow_mut();
        frame.clear();
        frame.extend_from_slice(pixels);
        self.presented.set(self.presented.get() + 1);
        Ok(())
    }
}

/// Event loop that replays a scenario instead of waiting on the OS.
///
/// Every scripted frame emits `Frame`, followed by `RedrawRequested` when
/// the handler asked for one. A scenario without a `close` step is closed
/// after its last step.
pub struct HeadlessEventLoop {
    scenario: HeadlessScenario,
    window: Rc<HeadlessWindow>,
}

impl HeadlessEventLoop {
    pub fn new(scenario: HeadlessScenario, window_config: &WindowConfig) -> Self {
        Self {
            scenario,
            window: Rc::new(HeadlessWindow::new(window_config)),
        }
    }

    /// Shared handle to the window, usable after the loop has run.
    pub fn window(&self) -> Rc<HeadlessWindow> {
        Rc::clone(&self.window)
    }
}

impl EventLoop for HeadlessEventLoop {
    type Window = HeadlessWindow;

    fn run<F>(self, mut handler: F) -> Result<()>
    where
        F: FnMut(Event, &Self::Window) -> ControlFlow,
    {
        let window = self.window;
        // True once the handler asks to stop
        let mut emit = |event: Event| handler(event, &*window) == ControlFlow::Exit;

        if emit(Event::Lifecycle(LifecycleEvent::Resumed)) {
            return Ok(());
        }

        for step in self.scenario.steps {
            let exit = match step {
                ScenarioStep::Tick { frames } => {
                    let mut exit = false;
                    for _ in 0..frames {
                        exit = emit(Event::Frame);
                        if !exit && window.take_redraw_request() {
                            exit = emit(Event::RedrawRequested);
                        }
                        if exit {
                            break;
                        }
                    }
                    exit
                }
                ScenarioStep::KeyDown { key } => emit(Event::Input(InputEvent::key_pressed(key))),
                ScenarioStep::KeyUp { key } => emit(Event::Input(InputEvent::key_released(key))),
                ScenarioStep::MouseDown { x, y } => {
                    emit(Event::Input(InputEvent::Mouse(MouseEvent::ButtonPressed {
                        button: MouseButton::Left,
                        x,
                        y,
                    })))
                }
                ScenarioStep::MouseUp { x, y } => {
                    emit(Event::Input(InputEvent::Mouse(MouseEvent::ButtonReleased {
                        button: MouseButton::Left,
                        x,
                        y,
                    })))
                }
                ScenarioStep::MouseMove { x, y } => {
                    emit(Event::Input(InputEvent::Mouse(MouseEvent::Moved { x, y })))
                }
                ScenarioStep::Close => {
                    emit(Event::Window(WindowEvent::CloseRequested));
                    return Ok(());
                }
            };
            if exit {
                return Ok(());
            }
        }

        emit(Event::Window(WindowEvent::CloseRequested));
        Ok(())
    }
}
