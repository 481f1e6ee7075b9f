//=========================================================================
// View Coordinator
//=========================================================================
//
// Owns the active view, the session context, and the frame pipeline.
//
// Architecture:
// ```text
//   Host loop ──update(elapsed)──> ViewCoordinator ──render()──> active View
//                                   │
//                                   ├─ EventSource      (platform events)
//                                   ├─ ViewRegistry     (one View per state)
//                                   ├─ SimulationFacade (polled, never pushes)
//                                   ├─ EventAnnouncer   (fired before every transition)
//                                   ├─ ProgressStore    (unlocked level on disk)
//                                   └─ DisplaySurface   (closed on Exit)
// ```
//
// Frame pipeline (two ordered phases, never merged):
//   1. Dispatch: pump events into the active view, apply its requests
//   2. Step:     advance simulation (Playing only), update active view
//   3. Poll:     simulation Won/Failed overrides whatever 1–2 left
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod context;
mod transition;

//=== Public API ==========================================================

pub use builder::CoordinatorBuilder;
pub use context::CoordinatorContext;
pub use transition::{plan_transition, Effect, TransitionPlan};

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::announcer::EventAnnouncer;
use crate::core::platform_bridge::{DisplaySurface, EventSource, PlatformEvent};
use crate::core::progress::ProgressStore;
use crate::core::simulation::{SimulationFacade, SimulationState};
use crate::core::view::{TransitionRequest, ViewRegistry, ViewState};

//=== Constants ===========================================================

/// Number of levels shipped with the game.
pub const DEFAULT_MAX_LEVEL: u32 = 9;

//=== ViewCoordinator =====================================================

/// Presentation-state machine driven once per frame by the host.
///
/// Create with [`CoordinatorBuilder`]. The host loop is:
///
/// ```no_run
/// # use std::time::Duration;
/// # fn frame(coordinator: &mut serene_views::core::coordinator::ViewCoordinator) {
/// while coordinator.is_running() {
///     coordinator.update(Duration::from_millis(16));
///     coordinator.render();
/// }
/// # }
/// ```
pub struct ViewCoordinator {
    context: CoordinatorContext,
    max_level: u32,
    views: ViewRegistry,
    simulation: Box<dyn SimulationFacade>,
    events: Box<dyn EventSource>,
    surface: Box<dyn DisplaySurface>,
    announcer: Box<dyn EventAnnouncer>,
    progress: ProgressStore,
}

impl ViewCoordinator {
    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.context.is_running
    }

    pub fn state(&self) -> ViewState {
        self.context.current_state
    }

    pub fn current_level(&self) -> u32 {
        self.context.current_level
    }

    pub fn unlocked_level(&self) -> u32 {
        self.context.unlocked_level
    }

    pub fn context(&self) -> &CoordinatorContext {
        &self.context
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    //--- Frame Pipeline ---------------------------------------------------

    /// Runs one frame of event dispatch, simulation stepping and polling.
    ///
    /// Does nothing once the session has exited.
    pub fn update(&mut self, elapsed: Duration) {
        if !self.context.is_running {
            return;
        }

        //--- Phase 1: dispatch platform events -----------------------------
        self.pump_events();

        if !self.context.is_running {
            return;
        }

        //--- Phase 2: step the active state --------------------------------
        // Re-read: dispatch may have left Playing.
        let state = self.context.current_state;
        if state == ViewState::Playing {
            self.simulation.update(elapsed);
        }
        if let Some(view) = self.views.get_mut(state) {
            view.update(elapsed);
        }

        //--- Phase 3: simulation outcome overrides -------------------------
        self.poll_simulation();
    }

    /// Renders the active view. States without a view render nothing.
    pub fn render(&mut self) {
        if !self.context.is_running {
            return;
        }

        if let Some(view) = self.views.get_mut(self.context.current_state) {
            view.render();
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Announces `request` and applies it if the transition table has a row
    /// for it. Returns whether the state machine changed.
    pub fn request_transition(&mut self, request: TransitionRequest) -> bool {
        self.announcer.fire(&request);

        let Some(plan) = plan_transition(&self.context, &request, self.max_level) else {
            warn!(
                target: "coordinator",
                "Ignoring {:?} while in {:?}",
                request,
                self.context.current_state
            );
            return false;
        };

        for effect in &plan.effects {
            self.run_effect(*effect);
        }

        debug!(
            target: "coordinator",
            "{:?} → {:?} (level {}, unlocked {})",
            self.context.current_state,
            plan.next.current_state,
            plan.next.current_level,
            plan.next.unlocked_level
        );

        self.context = plan.next;
        true
    }

    //--- Internal Helpers -------------------------------------------------

    fn pump_events(&mut self) {
        while let Some(event) = self.events.poll_event() {
            if event == PlatformEvent::WindowClosed {
                info!(target: "coordinator", "Window close requested");
                self.request_transition(TransitionRequest::exit());
                break;
            }

            let state = self.context.current_state;
            let Some(view) = self.views.get_mut(state) else {
                trace!(target: "coordinator", "No view for {:?}, dropping {:?}", state, event);
                continue;
            };

            let request = view.handle_event(&event);
            if !request.is_continue() {
                self.request_transition(request);
            }

            if !self.context.is_running {
                break;
            }
        }
    }

    fn poll_simulation(&mut self) {
        let outcome = self.simulation.state();
        if !outcome.is_terminal() {
            return;
        }
        let target = if outcome == SimulationState::Won {
            ViewState::Won
        } else {
            ViewState::Failed
        };

        info!(
            target: "coordinator",
            "Simulation reported {:?} on level {}",
            target,
            self.context.current_level
        );

        self.simulation.reset();
        self.request_transition(TransitionRequest::to(target));
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ResetSimulation => self.simulation.reset(),
            Effect::InitializeSimulation(level) => self.simulation.initialize(level),
            Effect::EnterView(state, init) => match self.views.get_mut(state) {
                Some(view) => view.on_enter(init),
                None => warn!(target: "coordinator", "No view registered for {:?}", state),
            },
            Effect::PersistProgress(level) => self.progress.save(i64::from(level)),
            Effect::CloseSurface => self.surface.close(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::platform_bridge::EventCollector;
    use crate::core::view::{View, ViewInit};
    use crossbeam_channel::{unbounded, Sender};
    use std::cell::{Cell, RefCell};
    use std::fs;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU64, Ordering};

    //--- Call Log ---------------------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Enter(ViewState, ViewInit),
        Update(ViewState),
        Render(ViewState),
        Event(ViewState, PlatformEvent),
        SimReset,
        SimInit(u32),
        SimUpdate(Duration),
        Announce(TransitionRequest),
        Close,
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    //--- Mocks ------------------------------------------------------------

    /// Every test view shares one key map:
    /// M main menu, L level menu, digits play, P pause, R resume,
    /// F finished, Escape exit.
    struct MockView {
        state: ViewState,
        log: Log,
    }

    impl View for MockView {
        fn on_enter(&mut self, init: ViewInit) {
            self.log.borrow_mut().push(Call::Enter(self.state, init));
        }

        fn update(&mut self, _elapsed: Duration) {
            self.log.borrow_mut().push(Call::Update(self.state));
        }

        fn render(&mut self) {
            self.log.borrow_mut().push(Call::Render(self.state));
        }

        fn handle_event(&mut self, event: &PlatformEvent) -> TransitionRequest {
            self.log.borrow_mut().push(Call::Event(self.state, *event));

            let PlatformEvent::Input(input) = event else {
                return TransitionRequest::CONTINUE;
            };
            let Some(key) = input.pressed_key() else {
                return TransitionRequest::CONTINUE;
            };

            if let Some(level) = key.digit() {
                return TransitionRequest::play(level);
            }

            match key {
                KeyCode::KeyM => TransitionRequest::to(ViewState::MainMenu),
                KeyCode::KeyL => TransitionRequest::to(ViewState::LevelMenu),
                KeyCode::KeyP => TransitionRequest::to(ViewState::Paused),
                KeyCode::KeyR => TransitionRequest::to(ViewState::Resume),
                KeyCode::KeyF => TransitionRequest::to(ViewState::Finished),
                KeyCode::Escape => TransitionRequest::exit(),
                _ => TransitionRequest::CONTINUE,
            }
        }
    }

    struct MockSimulation {
        log: Log,
        outcome: Rc<Cell<SimulationState>>,
    }

    impl SimulationFacade for MockSimulation {
        fn reset(&mut self) {
            self.log.borrow_mut().push(Call::SimReset);
            self.outcome.set(SimulationState::Idle);
        }

        fn initialize(&mut self, level: u32) {
            self.log.borrow_mut().push(Call::SimInit(level));
            self.outcome.set(SimulationState::Playing);
        }

        fn update(&mut self, elapsed: Duration) {
            self.log.borrow_mut().push(Call::SimUpdate(elapsed));
        }

        fn state(&self) -> SimulationState {
            self.outcome.get()
        }
    }

    struct MockAnnouncer {
        log: Log,
    }

    impl EventAnnouncer for MockAnnouncer {
        fn fire(&mut self, request: &TransitionRequest) {
            self.log.borrow_mut().push(Call::Announce(*request));
        }
    }

    struct MockSurface {
        log: Log,
    }

    impl DisplaySurface for MockSurface {
        fn close(&mut self) {
            self.log.borrow_mut().push(Call::Close);
        }
    }

    //--- Harness ----------------------------------------------------------

    const FRAME: Duration = Duration::from_millis(16);

    const ALL_VIEWS: [ViewState; 7] = [
        ViewState::MainMenu,
        ViewState::LevelMenu,
        ViewState::Playing,
        ViewState::Paused,
        ViewState::Won,
        ViewState::Finished,
        ViewState::Failed,
    ];

    struct Harness {
        coordinator: ViewCoordinator,
        log: Log,
        outcome: Rc<Cell<SimulationState>>,
        events: Sender<PlatformEvent>,
        progress_path: PathBuf,
    }

    impl Harness {
        fn calls(&self) -> Vec<Call> {
            self.log.borrow().clone()
        }

        fn clear(&self) {
            self.log.borrow_mut().clear();
        }

        fn press(&self, key: KeyCode) {
            self.events
                .send(PlatformEvent::Input(InputEvent::key_down(key)))
                .unwrap();
        }

        fn frame(&mut self) {
            self.coordinator.update(FRAME);
            self.coordinator.render();
        }

        fn saved_progress(&self) -> Option<String> {
            fs::read_to_string(&self.progress_path).ok()
        }
    }

    fn temp_progress_path() -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "serene-coordinator-test-{}-{}",
            std::process::id(),
            test_id
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("progress.log")
    }

    fn harness_with(max_level: u32, saved: Option<&str>, views: &[ViewState]) -> Harness {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let outcome = Rc::new(Cell::new(SimulationState::Idle));
        let (events, rx) = unbounded();
        let progress_path = temp_progress_path();

        if let Some(content) = saved {
            fs::create_dir_all(progress_path.parent().unwrap()).unwrap();
            fs::write(&progress_path, content).unwrap();
        }

        let simulation = MockSimulation {
            log: log.clone(),
            outcome: outcome.clone(),
        };

        let mut builder = CoordinatorBuilder::new(simulation, EventCollector::new(rx))
            .with_max_level(max_level)
            .with_progress_path(&progress_path)
            .with_announcer(MockAnnouncer { log: log.clone() })
            .with_surface(MockSurface { log: log.clone() });

        for &state in views {
            builder = builder.register_view(state, MockView { state, log: log.clone() });
        }

        Harness {
            coordinator: builder.build(),
            log,
            outcome,
            events,
            progress_path,
        }
    }

    fn harness() -> Harness {
        harness_with(5, None, &ALL_VIEWS)
    }

    /// Starts level `level` from the main menu and clears the log.
    fn playing(level: u32) -> Harness {
        let mut h = harness();
        h.coordinator.request_transition(TransitionRequest::play(level));
        h.clear();
        h.frame();
        h.clear();
        h
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn build_starts_on_main_menu() {
        let h = harness();

        assert!(h.coordinator.is_running());
        assert_eq!(h.coordinator.state(), ViewState::MainMenu);
        assert_eq!(h.coordinator.current_level(), 1);
        assert_eq!(h.coordinator.unlocked_level(), 1);
        assert_eq!(h.calls(), vec![Call::Enter(ViewState::MainMenu, ViewInit::Plain)]);
    }

    #[test]
    fn build_loads_saved_progress() {
        let h = harness_with(5, Some("3"), &ALL_VIEWS);
        assert_eq!(h.coordinator.unlocked_level(), 3);
    }

    #[test]
    fn build_clamps_saved_progress() {
        let h = harness_with(5, Some("40"), &ALL_VIEWS);
        assert_eq!(h.coordinator.unlocked_level(), 5);

        let h = harness_with(5, Some("garbage"), &ALL_VIEWS);
        assert_eq!(h.coordinator.unlocked_level(), 1);
    }

    //--- Dispatch ---------------------------------------------------------

    #[test]
    fn view_request_starts_level() {
        let mut h = harness();
        h.clear();
        h.press(KeyCode::Digit2);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Playing);
        assert_eq!(h.coordinator.current_level(), 2);
        assert_eq!(
            h.calls(),
            vec![
                Call::Event(
                    ViewState::MainMenu,
                    PlatformEvent::Input(InputEvent::key_down(KeyCode::Digit2))
                ),
                Call::Announce(TransitionRequest::play(2)),
                Call::SimReset,
                Call::SimInit(2),
                Call::Enter(ViewState::Playing, ViewInit::Plain),
                Call::SimUpdate(FRAME),
                Call::Update(ViewState::Playing),
            ]
        );
    }

    #[test]
    fn continue_responses_apply_nothing() {
        let mut h = harness();
        h.clear();
        h.press(KeyCode::KeyZ);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::MainMenu);
        assert!(!h.calls().iter().any(|c| matches!(c, Call::Announce(_))));
    }

    #[test]
    fn mid_frame_transition_redirects_later_events() {
        let mut h = harness();
        h.clear();
        h.press(KeyCode::Digit1);
        h.press(KeyCode::KeyP);
        h.press(KeyCode::KeyX);

        h.coordinator.update(FRAME);

        let receivers: Vec<ViewState> = h
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Event(state, _) => Some(state),
                _ => None,
            })
            .collect();

        assert_eq!(
            receivers,
            vec![ViewState::MainMenu, ViewState::Playing, ViewState::Paused]
        );
        assert_eq!(h.coordinator.state(), ViewState::Paused);
    }

    #[test]
    fn non_input_events_reach_active_view() {
        let mut h = harness();
        h.clear();
        h.events.send(PlatformEvent::FocusChanged(false)).unwrap();

        h.coordinator.update(FRAME);

        assert!(h
            .calls()
            .contains(&Call::Event(ViewState::MainMenu, PlatformEvent::FocusChanged(false))));
    }

    //--- Window close / Exit ----------------------------------------------

    #[test]
    fn window_close_exits_before_view_sees_events() {
        let mut h = harness();
        h.clear();
        h.events.send(PlatformEvent::WindowClosed).unwrap();
        h.press(KeyCode::Digit1);

        h.coordinator.update(FRAME);

        assert!(!h.coordinator.is_running());
        assert_eq!(h.coordinator.state(), ViewState::Exiting);
        assert_eq!(
            h.calls(),
            vec![Call::Announce(TransitionRequest::exit()), Call::Close]
        );
    }

    #[test]
    fn view_requested_exit_stops_pump() {
        let mut h = harness();
        h.clear();
        h.press(KeyCode::Escape);
        h.press(KeyCode::Digit1);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Exiting);
        let events = h
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Event(..)))
            .count();
        assert_eq!(events, 1);
    }

    #[test]
    fn exit_is_idempotent() {
        let mut h = playing(2);
        h.events.send(PlatformEvent::WindowClosed).unwrap();
        h.frame();
        h.clear();

        h.outcome.set(SimulationState::Won);
        h.press(KeyCode::KeyM);
        for _ in 0..3 {
            h.frame();
        }

        assert!(!h.coordinator.is_running());
        assert_eq!(h.coordinator.state(), ViewState::Exiting);
        assert!(h.calls().is_empty(), "No updates or renders after exit: {:?}", h.calls());
        assert!(!h.coordinator.request_transition(TransitionRequest::to(ViewState::MainMenu)));
        assert_eq!(h.coordinator.state(), ViewState::Exiting);
    }

    //--- Simulation Polling -----------------------------------------------

    #[test]
    fn simulation_only_steps_while_playing() {
        let mut h = harness();
        h.clear();
        h.coordinator.update(FRAME);
        assert!(!h.calls().iter().any(|c| matches!(c, Call::SimUpdate(_))));

        let mut h = playing(1);
        h.press(KeyCode::KeyP);
        h.coordinator.update(FRAME);
        assert!(
            !h.calls().iter().any(|c| matches!(c, Call::SimUpdate(_))),
            "Pausing in dispatch must skip the simulation step"
        );
    }

    #[test]
    fn won_unlocks_and_persists() {
        let mut h = playing(2);
        h.outcome.set(SimulationState::Won);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Won);
        assert_eq!(h.coordinator.unlocked_level(), 3);
        assert_eq!(h.saved_progress().as_deref(), Some("3"));
        assert!(h.calls().ends_with(&[
            Call::SimReset,
            Call::Announce(TransitionRequest::to(ViewState::Won)),
            Call::Enter(ViewState::Won, ViewInit::Level(2)),
        ]));
    }

    #[test]
    fn won_at_max_level_finishes_without_unlock() {
        let mut h = harness_with(5, Some("4"), &ALL_VIEWS);
        h.coordinator.request_transition(TransitionRequest::play(5));
        h.outcome.set(SimulationState::Won);
        h.clear();

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Finished);
        assert_eq!(h.coordinator.unlocked_level(), 4);
        assert_eq!(h.saved_progress().as_deref(), Some("4"));
        // Listeners see the Won intent even though Finished is entered.
        assert!(h
            .calls()
            .contains(&Call::Announce(TransitionRequest::to(ViewState::Won))));
        assert!(h.calls().contains(&Call::Enter(ViewState::Finished, ViewInit::Plain)));
    }

    #[test]
    fn failed_keeps_unlock() {
        let mut h = playing(3);
        h.outcome.set(SimulationState::Failed);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Failed);
        assert_eq!(h.coordinator.unlocked_level(), 1);
        assert_eq!(h.saved_progress(), None);
        assert!(h.calls().contains(&Call::Enter(ViewState::Failed, ViewInit::Level(3))));
    }

    #[test]
    fn simulation_outcome_overrides_view_request() {
        let mut h = playing(1);
        h.outcome.set(SimulationState::Won);
        h.press(KeyCode::KeyP);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Won);
        assert_eq!(h.coordinator.unlocked_level(), 2);
    }

    #[test]
    fn outcome_is_consumed_once() {
        let mut h = playing(1);
        h.outcome.set(SimulationState::Failed);
        h.coordinator.update(FRAME);
        h.clear();

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Failed);
        assert!(!h.calls().iter().any(|c| matches!(c, Call::Announce(_))));
    }

    //--- Pause / Resume ---------------------------------------------------

    #[test]
    fn resume_keeps_simulation_state() {
        let mut h = playing(2);
        h.press(KeyCode::KeyP);
        h.coordinator.update(FRAME);
        assert!(h.calls().contains(&Call::Enter(ViewState::Paused, ViewInit::Level(2))));
        h.clear();

        h.press(KeyCode::KeyR);
        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Playing);
        let calls = h.calls();
        assert!(!calls.contains(&Call::SimReset));
        assert!(!calls.iter().any(|c| matches!(c, Call::SimInit(_) | Call::Enter(..))));
        assert!(calls.contains(&Call::SimUpdate(FRAME)));
    }

    #[test]
    fn replay_keeps_current_level() {
        let mut h = playing(3);
        h.outcome.set(SimulationState::Failed);
        h.coordinator.update(FRAME);
        h.clear();

        h.press(KeyCode::Digit0);
        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::Playing);
        assert_eq!(h.coordinator.current_level(), 3);
        assert!(h.calls().contains(&Call::SimInit(3)));
    }

    //--- Rendering --------------------------------------------------------

    #[test]
    fn render_targets_active_view_only() {
        let mut h = harness();
        h.clear();

        h.coordinator.render();
        h.coordinator.request_transition(TransitionRequest::to(ViewState::LevelMenu));
        h.coordinator.render();

        let renders: Vec<Call> = h
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Render(_)))
            .collect();
        assert_eq!(
            renders,
            vec![Call::Render(ViewState::MainMenu), Call::Render(ViewState::LevelMenu)]
        );
    }

    //--- Ignored requests -------------------------------------------------

    #[test]
    fn unknown_targets_are_announced_then_ignored() {
        let mut h = harness();
        h.clear();
        h.press(KeyCode::KeyF);

        h.coordinator.update(FRAME);

        assert_eq!(h.coordinator.state(), ViewState::MainMenu);
        assert!(h
            .calls()
            .contains(&Call::Announce(TransitionRequest::to(ViewState::Finished))));
        assert!(!h.calls().iter().any(|c| matches!(c, Call::Enter(..))));
    }

    #[test]
    fn missing_view_still_changes_state() {
        let mut h = harness_with(5, None, &[ViewState::MainMenu]);

        assert!(h.coordinator.request_transition(TransitionRequest::to(ViewState::LevelMenu)));
        assert_eq!(h.coordinator.state(), ViewState::LevelMenu);

        h.clear();
        h.press(KeyCode::KeyM);
        h.frame();
        assert!(h.calls().is_empty(), "Events without a view are dropped");
    }

    //--- End to End -------------------------------------------------------

    #[test]
    fn fresh_install_win_unlocks_level_two() {
        let mut h = harness();
        assert_eq!(h.saved_progress(), None);
        assert_eq!(h.coordinator.unlocked_level(), 1);

        h.press(KeyCode::Digit1);
        h.frame();
        assert_eq!(h.coordinator.state(), ViewState::Playing);
        assert_eq!(h.coordinator.current_level(), 1);

        h.outcome.set(SimulationState::Won);
        h.frame();
        assert_eq!(h.coordinator.state(), ViewState::Won);
        assert_eq!(h.coordinator.unlocked_level(), 2);
        assert_eq!(h.saved_progress().as_deref(), Some("2"));

        h.clear();
        h.press(KeyCode::KeyL);
        h.frame();
        assert_eq!(h.coordinator.state(), ViewState::LevelMenu);
        assert!(h
            .calls()
            .contains(&Call::Enter(ViewState::LevelMenu, ViewInit::Unlocked(2))));
    }
}
