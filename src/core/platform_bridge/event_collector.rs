//=========================================================================
// Event Collector
//=========================================================================
//
// Channel-backed `EventSource`.
//
// Architecture:
//   Platform ──Sender<PlatformEvent>──> EventCollector ──poll_event()──> Coordinator
//
// A disconnected channel means the platform is gone; the collector then
// reports `WindowClosed` so the coordinator shuts down through the normal
// Exit path instead of spinning on an empty queue.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::{EventSource, PlatformEvent};

//=== EventCollector ======================================================

/// Drains platform events from a crossbeam channel without blocking.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    disconnected: bool,
}

impl EventCollector {
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }
}

impl EventSource for EventCollector {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        if self.disconnected {
            return Some(PlatformEvent::WindowClosed);
        }

        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!(target: "platform", "Platform channel disconnected, treating as window close");
                self.disconnected = true;
                Some(PlatformEvent::WindowClosed)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
