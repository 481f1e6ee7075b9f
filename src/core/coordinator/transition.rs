//=========================================================================
// Transition Planner
//=========================================================================
//
// The transition table as a pure function:
//
//   (context, request, max_level) → Option<TransitionPlan>
//
// A plan is the next context plus the ordered side effects the coordinator
// must run to get there. `None` means the request has no row in the table
// and is ignored.
//
// | Request        | Guard               | Effects                               | Next     |
// |----------------|---------------------|---------------------------------------|----------|
// | MainMenu       |                     | enter(MainMenu)                       | MainMenu |
// | LevelMenu      |                     | enter(LevelMenu, unlocked)            | LevelMenu|
// | Playing(n>0)   |                     | reset, init(n), enter(Playing)        | Playing  |
// | Playing(0)     |                     | reset, init(current), enter(Playing)  | Playing  |
// | Resume         | state == Paused     | (none)                                | Playing  |
// | Paused         |                     | enter(Paused, current)                | Paused   |
// | Won            | current < max       | persist(unlocked'), enter(Won, cur)   | Won      |
// | Won            | current >= max      | enter(Finished)                       | Finished |
// | Failed         |                     | enter(Failed, current)                | Failed   |
// | Exiting        |                     | close surface                         | Exiting  |
//
// Once the session has exited every request is ignored.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::CoordinatorContext;
use crate::core::progress::clamp_level;
use crate::core::view::{TransitionRequest, ViewInit, ViewState};

//=== Effect ==============================================================

/// Side effect of a transition, executed in order by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ResetSimulation,
    InitializeSimulation(u32),
    EnterView(ViewState, ViewInit),
    PersistProgress(u32),
    CloseSurface,
}

//=== TransitionPlan ======================================================

/// Result of planning one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    pub next: CoordinatorContext,
    pub effects: Vec<Effect>,
}

//=== plan_transition() ===================================================

/// Resolves `request` against the transition table.
pub fn plan_transition(
    context: &CoordinatorContext,
    request: &TransitionRequest,
    max_level: u32,
) -> Option<TransitionPlan> {
    if !context.is_running {
        return None;
    }

    let mut next = *context;
    let mut effects = Vec::with_capacity(3);

    match request.target {
        ViewState::MainMenu => {
            effects.push(Effect::EnterView(ViewState::MainMenu, ViewInit::Plain));
            next.current_state = ViewState::MainMenu;
        }

        ViewState::LevelMenu => {
            effects.push(Effect::EnterView(
                ViewState::LevelMenu,
                ViewInit::Unlocked(context.unlocked_level),
            ));
            next.current_state = ViewState::LevelMenu;
        }

        ViewState::Playing => {
            if let Some(level) = request.requested_level() {
                next.current_level = clamp_level(i64::from(level), max_level);
            }
            effects.push(Effect::ResetSimulation);
            effects.push(Effect::InitializeSimulation(next.current_level));
            effects.push(Effect::EnterView(ViewState::Playing, ViewInit::Plain));
            next.current_state = ViewState::Playing;
        }

        ViewState::Resume => {
            if context.current_state != ViewState::Paused {
                return None;
            }
            next.current_state = ViewState::Playing;
        }

        ViewState::Paused => {
            effects.push(Effect::EnterView(
                ViewState::Paused,
                ViewInit::Level(context.current_level),
            ));
            next.current_state = ViewState::Paused;
        }

        ViewState::Won => {
            if context.current_level >= max_level {
                effects.push(Effect::EnterView(ViewState::Finished, ViewInit::Plain));
                next.current_state = ViewState::Finished;
            } else {
                let candidate = context.current_level + 1;
                if candidate > next.unlocked_level {
                    next.unlocked_level = clamp_level(i64::from(candidate), max_level);
                }
                effects.push(Effect::PersistProgress(next.unlocked_level));
                effects.push(Effect::EnterView(
                    ViewState::Won,
                    ViewInit::Level(context.current_level),
                ));
                next.current_state = ViewState::Won;
            }
        }

        ViewState::Failed => {
            effects.push(Effect::EnterView(
                ViewState::Failed,
                ViewInit::Level(context.current_level),
            ));
            next.current_state = ViewState::Failed;
        }

        ViewState::Exiting => {
            effects.push(Effect::CloseSurface);
            next.current_state = ViewState::Exiting;
            next.is_running = false;
        }

        // Finished is only reachable through the Won guard.
        ViewState::Finished | ViewState::Continue => return None,
    }

    Some(TransitionPlan { next, effects })
}

//=========================================================================
// Unit Tests
//=========================================================================
