//=========================================================================
// View State & Transition Requests
//=========================================================================
//
// The tag set shared by the coordinator, the views and the announcer.
//
//   ViewState          which screen is active (or which one is requested)
//   TransitionRequest  what a view / the simulation poll asks for
//   ViewInit           what a view receives when it becomes active
//
//=========================================================================

//=== ViewState ===========================================================

/// Presentation state tag.
///
/// Most variants are resting states the coordinator can sit in. Two are
/// request-only and never become `current_state`:
///
/// - `Continue`: "no transition", returned by views for ordinary input
/// - `Resume`: return from `Paused` to `Playing` without resetting
///
/// `Exiting` is terminal: once entered, the coordinator stops running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    MainMenu,
    LevelMenu,
    Playing,
    Paused,
    Won,
    Finished,
    Failed,
    Exiting,

    Resume,
    Continue,
}

impl ViewState {
    /// Returns true for tags that have a view instance behind them.
    pub fn has_view(self) -> bool {
        !matches!(self, Self::Exiting | Self::Continue | Self::Resume)
    }
}

//=== TransitionRequest ===================================================

/// A request to change the active view.
///
/// `level` is only meaningful for `Playing`; `None` and `Some(0)` both mean
/// "keep the current level".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub target: ViewState,
    pub level: Option<u32>,
}

impl TransitionRequest {
    /// The "nothing to do" request.
    pub const CONTINUE: Self = Self {
        target: ViewState::Continue,
        level: None,
    };

    /// Request a state with no level attached.
    pub fn to(target: ViewState) -> Self {
        Self { target, level: None }
    }

    /// Request `Playing` at a specific level (`0` keeps the current one).
    pub fn play(level: u32) -> Self {
        Self {
            target: ViewState::Playing,
            level: Some(level),
        }
    }

    /// Request `Exiting`.
    pub fn exit() -> Self {
        Self::to(ViewState::Exiting)
    }

    /// Returns true if this request asks for no transition.
    pub fn is_continue(&self) -> bool {
        self.target == ViewState::Continue
    }

    /// The explicitly requested level, with `0` folded into `None`.
    pub fn requested_level(&self) -> Option<u32> {
        self.level.filter(|&level| level > 0)
    }
}

impl Default for TransitionRequest {
    fn default() -> Self {
        Self::CONTINUE
    }
}

//=== ViewInit ============================================================

/// Argument handed to a view when it becomes active.
///
/// Each screen needs a different piece of session data: the level menu
/// needs the unlock count, the pause/win/fail screens the current level,
/// the rest nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewInit {
    Plain,
    Unlocked(u32),
    Level(u32),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_default_is_continue() {
        let request = TransitionRequest::default();
        assert_eq!(request, TransitionRequest::CONTINUE);
        assert!(request.is_continue());
    }

    #[test]
    fn zero_level_means_keep_current() {
        assert_eq!(TransitionRequest::play(0).requested_level(), None);
        assert_eq!(TransitionRequest::to(ViewState::Playing).requested_level(), None);
        assert_eq!(TransitionRequest::play(4).requested_level(), Some(4));
    }

    #[test]
    fn exiting_has_no_view() {
        assert!(!ViewState::Exiting.has_view());
        assert!(!ViewState::Continue.has_view());
        assert!(ViewState::Finished.has_view());
        assert!(ViewState::MainMenu.has_view());
    }

    #[test]
    fn exit_request_targets_exiting() {
        assert_eq!(TransitionRequest::exit().target, ViewState::Exiting);
        assert!(!TransitionRequest::exit().is_continue());
    }
}
