//=========================================================================
// Input
//
// Platform-independent keyboard and mouse events handed to views.
//
//=========================================================================

//=== Submodules ==========================================================

mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
