//=========================================================================
// View System
//=========================================================================
//
// The capability contract every screen implements, plus the tags and
// registry the coordinator uses to pick the active one.
//
// Architecture:
//   ViewCoordinator
//     └─ ViewRegistry: HashMap<ViewState, Box<dyn View>>
//
// Flow (per frame, active view only):
//   handle_event() → TransitionRequest → update() → render()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;

//=== Module Declarations =================================================

mod view_registry;
mod view_state;

//=== Public API ==========================================================

pub use view_registry::ViewRegistry;
pub use view_state::{TransitionRequest, ViewInit, ViewState};

//=== View Trait ==========================================================

/// One discrete interactive screen.
///
/// Views are owned by the coordinator and only ever touched from its
/// thread. A view never switches screens itself; it returns a
/// [`TransitionRequest`] from `handle_event` and the coordinator decides.
///
/// # Minimal Implementation
///
/// ```rust
/// # use serene_views::prelude::*;
/// struct Credits;
///
/// impl View for Credits {
///     fn render(&mut self) {}
///
///     fn handle_event(&mut self, event: &PlatformEvent) -> TransitionRequest {
///         match event {
///             PlatformEvent::Input(input) if input.pressed_key() == Some(KeyCode::Escape) => {
///                 TransitionRequest::to(ViewState::MainMenu)
///             }
///             _ => TransitionRequest::CONTINUE,
///         }
///     }
/// }
/// ```
pub trait View {
    /// Called each time the view becomes active through a transition.
    ///
    /// Not called on `Resume`: the play view keeps its state across a pause.
    fn on_enter(&mut self, _init: ViewInit) {}

    /// Called once per frame while the view is active.
    fn update(&mut self, _elapsed: Duration) {}

    /// Draws the view. Called once per frame while the view is active.
    fn render(&mut self);

    /// Reacts to one platform event.
    ///
    /// Never receives `PlatformEvent::WindowClosed`; the coordinator handles
    /// that itself.
    fn handle_event(&mut self, event: &PlatformEvent) -> TransitionRequest;
}
