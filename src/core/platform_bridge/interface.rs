//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core contract: the events the platform produces, the
// commands it accepts back, and the two traits the coordinator consumes.
//
//   EventSource     platform → coordinator (poll, non-blocking)
//   DisplaySurface  coordinator → platform (close on Exit)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Window-level event offered to the coordinator's event pump.
///
/// `WindowClosed` is consumed by the coordinator itself and is never
/// forwarded to a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// Keyboard or mouse input.
    Input(InputEvent),

    /// Window gained (`true`) or lost (`false`) focus.
    FocusChanged(bool),

    /// Window inner size changed (physical pixels).
    Resized { width: u32, height: u32 },

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== SurfaceCommand ======================================================

/// Requests sent from the coordinator back to the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCommand {
    /// Destroy the window and leave the event loop.
    Close,
}

//=== EventSource =========================================================

/// Non-blocking source of pending platform events.
///
/// The coordinator drains it once per frame until it returns `None`.
pub trait EventSource {
    /// Returns the next pending event, or `None` when the queue is empty.
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

//=== DisplaySurface ======================================================

/// The window (or equivalent) the views draw into.
///
/// The coordinator only ever closes it; drawing belongs to the views.
pub trait DisplaySurface {
    /// Closes the surface. Repeated calls must be harmless.
    fn close(&mut self);
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All variants are fatal for the host: without an event loop or a window
/// there is nothing to drive the coordinator.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// The event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to create the window.
    WindowCreation(winit::error::OsError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
