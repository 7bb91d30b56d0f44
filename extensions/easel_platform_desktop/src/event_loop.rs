//! Desktop event loop implementation using winit

use std::time::Instant;

use crate::input;
use crate::window::DesktopWindow;
use easel_platform::{
    ControlFlow, Event, EventLoop, FrameTimer, LifecycleEvent, PlatformError, Result,
    WindowConfig, WindowEvent,
};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::{
    ActiveEventLoop, ControlFlow as WinitControlFlow, EventLoop as WinitEventLoop,
};
use winit::window::WindowId;

/// Desktop event loop wrapping winit's event loop and a frame timer
pub struct DesktopEventLoop {
    event_loop: WinitEventLoop<()>,
    window_config: WindowConfig,
    timer: FrameTimer,
}

impl DesktopEventLoop {
    /// Create a new desktop event loop ticking at `framerate` frames per second
    pub fn new(config: WindowConfig, framerate: i32) -> Result<Self> {
        let timer = FrameTimer::new(framerate)?;

        // NOTE(macos): Explicitly set activation policy to Regular so a
        // non-bundled binary gets a normal, focusable app window.
        let event_loop = {
            let mut builder = WinitEventLoop::builder();

            #[cfg(target_os = "macos")]
            {
                use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
                builder.with_activation_policy(ActivationPolicy::Regular);
            }

            builder
                .build()
                .map_err(|e| PlatformError::EventLoop(e.to_string()))?
        };

        Ok(Self {
            event_loop,
            window_config: config,
            timer,
        })
    }
}

impl EventLoop for DesktopEventLoop {
    type Window = DesktopWindow;

    fn run<F>(self, handler: F) -> Result<()>
    where
        F: FnMut(Event, &Self::Window) -> ControlFlow,
    {
        let mut app = DesktopApp::new(self.window_config, self.timer, handler);
        self.event_loop
            .run_app(&mut app)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Internal winit application handler
struct DesktopApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    window_config: WindowConfig,
    window: Option<DesktopWindow>,
    timer: FrameTimer,
    handler: F,
    mouse_position: (f32, f32),
    should_exit: bool,
    error: Option<PlatformError>,
}

impl<F> DesktopApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    fn new(window_config: WindowConfig, timer: FrameTimer, handler: F) -> Self {
        Self {
            window_config,
            window: None,
            timer,
            handler,
            mouse_position: (-1.0, -1.0),
            should_exit: false,
            error: None,
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(ref window) = self.window {
            let flow = (self.handler)(event, window);
            if flow == ControlFlow::Exit {
                self.should_exit = true;
            }
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.timer.stop();
        // Drops the surface before the window goes away
        self.window = None;
        event_loop.exit();
    }
}

impl<F> ApplicationHandler for DesktopApp<F>
where
    F: FnMut(Event, &DesktopWindow) -> ControlFlow,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create window if we don't have one
        if self.window.is_none() {
            match DesktopWindow::new(event_loop, &self.window_config) {
                Ok(window) => {
                    self.window = Some(window);
                    self.timer.start(Instant::now());
                    self.handle_event(Event::Lifecycle(LifecycleEvent::Resumed));
                }
                Err(e) => {
                    tracing::error!("Failed to create window: {}", e);
                    self.error = Some(e);
                    event_loop.exit();
                }
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.handle_event(Event::Lifecycle(LifecycleEvent::Suspended));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => {
                self.handle_event(Event::Window(WindowEvent::CloseRequested));
                self.shutdown(event_loop);
                return;
            }

            WinitWindowEvent::Resized(size) => {
                self.handle_event(Event::Window(WindowEvent::Resized {
                    width: size.width,
                    height: size.height,
                }));
            }

            WinitWindowEvent::RedrawRequested => {
                self.handle_event(Event::RedrawRequested);
            }

            WinitWindowEvent::KeyboardInput { event, .. } => {
                let input_event = input::convert_keyboard_event(
                    &event.logical_key,
                    event.text.as_deref(),
                    event.state,
                );
                self.handle_event(Event::Input(input_event));
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.winit_window().scale_factor());
                let logical = position.to_logical::<f32>(scale);
                self.mouse_position = (logical.x, logical.y);
                let input_event = input::mouse_moved(logical.x, logical.y);
                self.handle_event(Event::Input(input_event));
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.mouse_position;
                let input_event = match state {
                    ElementState::Pressed => input::mouse_pressed(button, x, y),
                    ElementState::Released => input::mouse_released(button, x, y),
                };
                self.handle_event(Event::Input(input_event));
            }

            _ => {}
        }

        // Check for exit
        if self.should_exit {
            self.shutdown(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // The handler requests the redraw for each frame
        if self.timer.poll(Instant::now()) {
            self.handle_event(Event::Frame);
        }

        if self.should_exit {
            self.shutdown(event_loop);
            return;
        }

        match self.timer.deadline() {
            Some(deadline) => event_loop.set_control_flow(WinitControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(WinitControlFlow::Wait),
        }
    }
}
