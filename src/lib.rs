//=========================================================================
// Serene Views Library Root
//
// Presentation-state coordinator for the Serene game: one active view at
// a time, transitions driven by player input and simulation outcomes, and
// the unlocked level persisted between sessions.
//
// Responsibilities:
// - Expose the coordinator and its collaborator contracts (`core`)
// - Provide a Winit host that drives the coordinator each frame (`Engine`)
// - Keep the Winit integration (`platform`) private
//
// Typical usage:
// ```no_run
// use serene_views::prelude::*;
//
// let engine = EngineBuilder::new().with_title("Serene").build();
// let coordinator = CoordinatorBuilder::new(my_simulation, engine.event_source())
//     .with_surface(engine.surface())
//     .register_view(ViewState::MainMenu, my_main_menu)
//     .build();
// engine.run(coordinator)?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the coordinator, the view contract and every collaborator
// interface. It has no Winit dependency and can be driven by any host.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` adapts Winit window events and owns the OS window.
// `engine` wires platform and coordinator together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
