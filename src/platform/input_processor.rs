//=========================================================================
// Input Processor
//=========================================================================
//
// Translates Winit window input into `PlatformEvent`s for the coordinator.
//
//   WindowEvent ──InputProcessor──> PlatformEvent::Input(InputEvent)
//
// Modifier state is sticky: the last `ModifiersChanged` applies to every
// following key and button event. Auto-repeated key presses are dropped so
// that holding Enter on a menu does not fire one transition per repeat.
// Keys outside the engine's `KeyCode` set are dropped as well.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
use crate::core::platform_bridge::PlatformEvent;

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
        }
    }

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    #[cfg(test)]
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //--- Event Translation ------------------------------------------------

    /// Returns `None` for repeats and unmapped keys.
    pub(crate) fn key(&self, key_event: &KeyEvent) -> Option<PlatformEvent> {
        if key_event.repeat {
            return None;
        }

        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };

        self.key_code(KeyCode::from(code), key_event.state)
    }

    pub(crate) fn mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> PlatformEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;

        PlatformEvent::Input(match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        })
    }

    pub(crate) fn cursor_moved(&self, x: f64, y: f64) -> PlatformEvent {
        PlatformEvent::Input(InputEvent::MouseMoved {
            x: x as f32,
            y: y as f32,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_code(&self, key: KeyCode, state: ElementState) -> Option<PlatformEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.modifiers;
        Some(PlatformEvent::Input(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        }))
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            W::Digit0 | W::Numpad0 => KeyCode::Digit0,
            W::Digit1 | W::Numpad1 => KeyCode::Digit1,
            W::Digit2 | W::Numpad2 => KeyCode::Digit2,
            W::Digit3 | W::Numpad3 => KeyCode::Digit3,
            W::Digit4 | W::Numpad4 => KeyCode::Digit4,
            W::Digit5 | W::Numpad5 => KeyCode::Digit5,
            W::Digit6 | W::Numpad6 => KeyCode::Digit6,
            W::Digit7 | W::Numpad7 => KeyCode::Digit7,
            W::Digit8 | W::Numpad8 => KeyCode::Digit8,
            W::Digit9 | W::Numpad9 => KeyCode::Digit9,

            W::KeyA => KeyCode::KeyA, W::KeyB => KeyCode::KeyB, W::KeyC => KeyCode::KeyC,
            W::KeyD => KeyCode::KeyD, W::KeyE => KeyCode::KeyE, W::KeyF => KeyCode::KeyF,
            W::KeyG => KeyCode::KeyG, W::KeyH => KeyCode::KeyH, W::KeyI => KeyCode::KeyI,
            W::KeyJ => KeyCode::KeyJ, W::KeyK => KeyCode::KeyK, W::KeyL => KeyCode::KeyL,
            W::KeyM => KeyCode::KeyM, W::KeyN => KeyCode::KeyN, W::KeyO => KeyCode::KeyO,
            W::KeyP => KeyCode::KeyP, W::KeyQ => KeyCode::KeyQ, W::KeyR => KeyCode::KeyR,
            W::KeyS => KeyCode::KeyS, W::KeyT => KeyCode::KeyT, W::KeyU => KeyCode::KeyU,
            W::KeyV => KeyCode::KeyV, W::KeyW => KeyCode::KeyW, W::KeyX => KeyCode::KeyX,
            W::KeyY => KeyCode::KeyY, W::KeyZ => KeyCode::KeyZ,

            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,

            W::Space => KeyCode::Space,
            W::Enter | W::NumpadEnter => KeyCode::Enter,
            W::Escape => KeyCode::Escape,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
