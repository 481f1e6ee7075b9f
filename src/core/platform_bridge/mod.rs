//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (Winit) with the view coordinator.
//
// The coordinator depends only on the traits defined here, so it can be
// driven by the Winit host, a headless loop, or test doubles without
// change.
//
// Components:
// - `interface`: event/command types, the two traits, platform errors
// - `event_collector`: channel-backed `EventSource`
// - `surface`: channel-backed and detached `DisplaySurface`s
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;
mod surface;

//=== Public API ==========================================================

pub use event_collector::EventCollector;
pub use interface::{DisplaySurface, EventSource, PlatformError, PlatformEvent, SurfaceCommand};
pub use surface::{DetachedSurface, SurfaceHandle};
