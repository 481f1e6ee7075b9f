//=========================================================================
// Coordinator Context
//=========================================================================
//
// The session values the state machine reads and writes. Kept as one
// plain value so the transition planner can be exercised without views,
// a simulation, or a window.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::progress::clamp_level;
use crate::core::view::ViewState;

//=== CoordinatorContext ==================================================

/// Session state owned by the coordinator.
///
/// Invariants:
/// - `current_state` is never a request-only tag (`Continue`, `Resume`)
/// - `unlocked_level` stays within `[1, max_level]` and never decreases
/// - `current_level` is within `[1, max_level]`
/// - `is_running` is false exactly when `current_state == Exiting`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorContext {
    pub(crate) current_state: ViewState,
    pub(crate) current_level: u32,
    pub(crate) unlocked_level: u32,
    pub(crate) is_running: bool,
}

impl CoordinatorContext {
    /// Fresh session on the main menu at level 1.
    pub fn new(unlocked_level: u32, max_level: u32) -> Self {
        Self {
            current_state: ViewState::MainMenu,
            current_level: 1,
            unlocked_level: clamp_level(i64::from(unlocked_level), max_level),
            is_running: true,
        }
    }

    pub fn current_state(&self) -> ViewState {
        self.current_state
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn unlocked_level(&self) -> u32 {
        self.unlocked_level
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}
