//=========================================================================
// Platform Host
//
// Owns the Winit event loop, the OS window and the view coordinator.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ↓ WindowEvent                                          │
//  │  InputProcessor ──> PlatformEvent ──> event channel ──┐  │
//  │                                                       │  │
//  │  RedrawRequested (frame boundary)                     │  │
//  │   ├─ coordinator.update(elapsed) <── EventCollector ──┘  │
//  │   ├─ coordinator.render()                                │
//  │   └─ surface channel drained ──> close window, exit      │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Everything runs on one thread, so the event channel is written with
// `try_send`: a full channel drops the event instead of blocking the only
// thread that could drain it.
//
// Window close bypasses the channel so a full queue cannot swallow it. The
// host requests Exit on the coordinator directly, and the surface close
// that transition issues ends the loop after the next frame. A window that
// cannot be created exits the coordinator the same way and is reported
// from `run` as `PlatformError::WindowCreation`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::coordinator::ViewCoordinator;
use crate::core::platform_bridge::{PlatformError, PlatformEvent, SurfaceCommand};
use crate::core::view::TransitionRequest;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Attributes of the window created on `resumed()`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Winit application driving one [`ViewCoordinator`].
///
/// Not `Send`: Winit requires the main thread on macOS/iOS.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    config: WindowConfig,
    event_sender: Sender<PlatformEvent>,
    surface_commands: Receiver<SurfaceCommand>,
    input_processor: InputProcessor,
    coordinator: ViewCoordinator,
    last_frame: Option<Instant>,
    /// Set when startup fails inside the event loop; returned by `run`.
    startup_error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        config: WindowConfig,
        event_sender: Sender<PlatformEvent>,
        surface_commands: Receiver<SurfaceCommand>,
        coordinator: ViewCoordinator,
    ) -> Self {
        info!(target: "platform", "Platform host initialized");
        Self {
            window: None,
            config,
            event_sender,
            surface_commands,
            input_processor: InputProcessor::new(),
            coordinator,
            last_frame: None,
            startup_error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the coordinator stops.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created, the
    /// window cannot be created, or the loop terminates abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        if let Some(error) = self.startup_error.take() {
            return Err(error);
        }

        info!(
            target: "platform",
            "Event loop finished in state {:?}",
            self.coordinator.state()
        );
        Ok(())
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one coordinator frame. Returns `false` once the host should stop.
    fn run_frame(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        self.coordinator.update(elapsed);
        self.coordinator.render();

        let close_requested = self.take_close_request();
        if close_requested || !self.coordinator.is_running() {
            debug!(
                target: "platform",
                "Stopping (close requested: {}, running: {})",
                close_requested,
                self.coordinator.is_running()
            );
            return false;
        }
        true
    }

    //--- Shutdown ---------------------------------------------------------

    /// Applies Exit to the coordinator without going through the channel.
    fn request_close(&mut self) {
        info!(target: "platform", "Window close requested");
        self.coordinator.request_transition(TransitionRequest::exit());
    }

    /// Records a fatal startup error and exits the coordinator.
    fn abort_startup(&mut self, error: PlatformError) {
        error!(target: "platform", "{}", error);
        self.request_close();
        // The loop stops before any frame runs, so drain the close here.
        self.take_close_request();
        self.startup_error = Some(error);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        info!(target: "platform", "Closing window");
        self.window = None;
        event_loop.exit();
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues an event for the coordinator's next frame.
    fn forward(&self, event: PlatformEvent) {
        match self.event_sender.try_send(event) {
            Ok(()) => trace!(target: "platform::input", "Forwarded {:?}", event),
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform::input", "Event channel full, dropping {:?}", event)
            }
            Err(TrySendError::Disconnected(event)) => warn!(
                target: "platform::input",
                "Event channel disconnected, dropping {:?}",
                event
            ),
        }
    }

    /// Drains pending surface commands; true if any asked to close.
    fn take_close_request(&self) -> bool {
        let mut close = false;
        for command in self.surface_commands.try_iter() {
            match command {
                SurfaceCommand::Close => close = true,
            }
        }
        close
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.abort_startup(PlatformError::WindowCreation(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.request_close();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::Focused(focused) => self.forward(PlatformEvent::FocusChanged(focused)),

            WindowEvent::Resized(size) => self.forward(PlatformEvent::Resized {
                width: size.width,
                height: size.height,
            }),

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.key(&key_event) {
                    Some(event) => self.forward(event),
                    None => trace!(target: "platform::input", "Key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.mouse_button(button, state);
                self.forward(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.cursor_moved(position.x, position.y);
                self.forward(event);
            }

            WindowEvent::RedrawRequested => {
                if !self.run_frame() {
                    self.shutdown(event_loop);
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
