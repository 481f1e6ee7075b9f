//=========================================================================
// Core
//
// Everything the view coordinator needs that is independent of Winit.
//
// Modules:
// - `coordinator`:     state machine, frame pipeline, builder
// - `view`:            View trait, ViewState tags, registry
// - `progress`:        unlocked-level persistence
// - `simulation`:      game-engine facade consumed by the coordinator
// - `announcer`:       transition notifications
// - `platform_bridge`: event source and display surface contracts
// - `input`:           keyboard/mouse event types
//
//=========================================================================

//=== Module Declarations =================================================

pub mod announcer;
pub mod coordinator;
pub mod input;
pub mod platform_bridge;
pub mod progress;
pub mod simulation;
pub mod view;

//=== Re-exports ==========================================================

pub use announcer::{ChannelAnnouncer, EventAnnouncer, NullAnnouncer};
pub use coordinator::{CoordinatorBuilder, CoordinatorContext, ViewCoordinator, DEFAULT_MAX_LEVEL};
pub use progress::{ProgressError, ProgressStore, DEFAULT_PROGRESS_PATH};
pub use simulation::{SimulationFacade, SimulationState};
pub use view::{TransitionRequest, View, ViewInit, ViewState};
