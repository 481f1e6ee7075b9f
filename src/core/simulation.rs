//=========================================================================
// Simulation Facade
//=========================================================================
//
// The in-session game engine as the coordinator sees it: something that
// can be reset, loaded with a level, stepped, and asked how it is going.
//
// The simulation only reports state. It never requests transitions; the
// coordinator polls `state()` after each frame's dispatch and decides.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== SimulationState =====================================================

/// Outcome reported by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationState {
    /// Nothing loaded (fresh, or just reset).
    #[default]
    Idle,

    /// A level is in progress.
    Playing,

    /// The player completed the level.
    Won,

    /// The player lost the level.
    Failed,
}

impl SimulationState {
    /// Returns true for `Won` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Failed)
    }
}

//=== SimulationFacade ====================================================

/// Contract for the game-logic engine driven by the coordinator.
pub trait SimulationFacade {
    /// Discards the current level and returns to `Idle`.
    fn reset(&mut self);

    /// Loads `level` (1-based) and starts it.
    fn initialize(&mut self, level: u32);

    /// Advances the simulation by one frame.
    fn update(&mut self, elapsed: Duration);

    /// Current outcome.
    fn state(&self) -> SimulationState;
}
