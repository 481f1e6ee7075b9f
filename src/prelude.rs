//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use serene_views::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Host
pub use crate::engine::{Engine, EngineBuilder};

// Coordinator
pub use crate::core::coordinator::{CoordinatorBuilder, ViewCoordinator};

// Views
pub use crate::core::view::{TransitionRequest, View, ViewInit, ViewState};

// Collaborators
pub use crate::core::announcer::{ChannelAnnouncer, EventAnnouncer};
pub use crate::core::progress::ProgressStore;
pub use crate::core::simulation::{SimulationFacade, SimulationState};

// Platform bridge & input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use crate::core::platform_bridge::{DisplaySurface, EventCollector, EventSource, PlatformEvent};
