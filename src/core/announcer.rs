//=========================================================================
// Event Announcer
//=========================================================================
//
// Fire-and-forget notification of every transition the coordinator
// applies, for cross-cutting listeners such as audio cues.
//
// Architecture:
//   Coordinator ──fire()──> ChannelAnnouncer ──try_send──> Receiver (N listeners)
//
// The coordinator must never block on a listener, so the channel is
// bounded and full queues drop the notification.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::view::TransitionRequest;

//=== EventAnnouncer ======================================================

/// Receives every transition request before the coordinator applies it.
pub trait EventAnnouncer {
    /// Notifies listeners. Must return promptly.
    fn fire(&mut self, request: &TransitionRequest);
}

//=== NullAnnouncer =======================================================

/// Announcer with no listeners.
#[derive(Debug, Default)]
pub struct NullAnnouncer;

impl EventAnnouncer for NullAnnouncer {
    fn fire(&mut self, _request: &TransitionRequest) {}
}

//=== ChannelAnnouncer ====================================================

/// Publishes transition requests on a bounded crossbeam channel.
///
/// Listeners obtain receivers via [`ChannelAnnouncer::subscribe`]. Receivers
/// share one queue (crossbeam MPMC), so each notification is delivered to
/// exactly one of them; give each independent listener its own announcer
/// if fan-out is needed.
pub struct ChannelAnnouncer {
    sender: Sender<TransitionRequest>,
    receiver: Receiver<TransitionRequest>,
    dropped: u64,
}

impl ChannelAnnouncer {
    /// Creates an announcer buffering up to `capacity` notifications.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Announcer capacity must be positive");
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            dropped: 0,
        }
    }

    /// Returns a receiver for pending notifications.
    pub fn subscribe(&self) -> Receiver<TransitionRequest> {
        self.receiver.clone()
    }

    /// Number of notifications dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl EventAnnouncer for ChannelAnnouncer {
    fn fire(&mut self, request: &TransitionRequest) {
        match self.sender.try_send(*request) {
            Ok(()) => trace!(target: "coordinator", "Announced {:?}", request),
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                warn!(
                    target: "coordinator",
                    "Announcer queue full, dropped {:?} ({} dropped so far)",
                    request,
                    self.dropped
                );
            }
            // The announcer holds a receiver itself, so this is unreachable
            // in practice.
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
