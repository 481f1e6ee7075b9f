//=========================================================================
// Display Surfaces
//=========================================================================
//
// `DisplaySurface` implementations.
//
// - `SurfaceHandle`: sends `SurfaceCommand::Close` to the platform thread,
//   which owns the actual Winit window.
// - `DetachedSurface`: no window at all (headless hosts, tools, tests).
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{DisplaySurface, SurfaceCommand};

//=== SurfaceHandle =======================================================

/// Coordinator-side handle to the platform-owned window.
pub struct SurfaceHandle {
    commands: Sender<SurfaceCommand>,
    closed: bool,
}

impl SurfaceHandle {
    pub fn new(commands: Sender<SurfaceCommand>) -> Self {
        Self {
            commands,
            closed: false,
        }
    }

    /// Returns true once `close` has been requested.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl DisplaySurface for SurfaceHandle {
    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        match self.commands.try_send(SurfaceCommand::Close) {
            Ok(()) => debug!(target: "platform", "Surface close requested"),
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform", "Surface command queue full, close request dropped")
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(target: "platform", "Platform already gone, nothing to close")
            }
        }
    }
}

//=== DetachedSurface =====================================================

/// Surface for hosts that have no window.
#[derive(Debug, Default)]
pub struct DetachedSurface;

impl DisplaySurface for DetachedSurface {
    fn close(&mut self) {
        debug!(target: "platform", "Detached surface closed");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
