//=========================================================================
// Coordinator Builder
//=========================================================================
//
// Fluent configuration for `ViewCoordinator`.
//
// Required: a simulation and an event source.
// Defaults:
// - max level:     DEFAULT_MAX_LEVEL
// - progress file: DEFAULT_PROGRESS_PATH
// - announcer:     NullAnnouncer
// - surface:       DetachedSurface
// - views:         none (register one per screen)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::{CoordinatorContext, ViewCoordinator, DEFAULT_MAX_LEVEL};
use crate::core::announcer::{EventAnnouncer, NullAnnouncer};
use crate::core::platform_bridge::{DetachedSurface, DisplaySurface, EventSource};
use crate::core::progress::{ProgressStore, DEFAULT_PROGRESS_PATH};
use crate::core::simulation::SimulationFacade;
use crate::core::view::{View, ViewInit, ViewRegistry, ViewState};

//=== CoordinatorBuilder ==================================================

/// Builder for [`ViewCoordinator`].
///
/// ```no_run
/// # use std::time::Duration;
/// # use serene_views::prelude::*;
/// # struct Engine;
/// # impl SimulationFacade for Engine {
/// #     fn reset(&mut self) {}
/// #     fn initialize(&mut self, _level: u32) {}
/// #     fn update(&mut self, _elapsed: Duration) {}
/// #     fn state(&self) -> SimulationState { SimulationState::Idle }
/// # }
/// # struct Menu;
/// # impl View for Menu {
/// #     fn render(&mut self) {}
/// #     fn handle_event(&mut self, _e: &PlatformEvent) -> TransitionRequest {
/// #         TransitionRequest::CONTINUE
/// #     }
/// # }
/// # let (_tx, rx) = crossbeam_channel::unbounded();
/// let coordinator = CoordinatorBuilder::new(Engine, EventCollector::new(rx))
///     .with_max_level(12)
///     .with_progress_path("saves/progress.log")
///     .register_view(ViewState::MainMenu, Menu)
///     .build();
/// ```
pub struct CoordinatorBuilder {
    simulation: Box<dyn SimulationFacade>,
    events: Box<dyn EventSource>,
    surface: Box<dyn DisplaySurface>,
    announcer: Box<dyn EventAnnouncer>,
    progress_path: PathBuf,
    max_level: u32,
    views: ViewRegistry,
}

impl CoordinatorBuilder {
    /// Creates a builder around the two mandatory collaborators.
    pub fn new<S, E>(simulation: S, events: E) -> Self
    where
        S: SimulationFacade + 'static,
        E: EventSource + 'static,
    {
        Self {
            simulation: Box::new(simulation),
            events: Box::new(events),
            surface: Box::new(DetachedSurface),
            announcer: Box::new(NullAnnouncer),
            progress_path: PathBuf::from(DEFAULT_PROGRESS_PATH),
            max_level: DEFAULT_MAX_LEVEL,
            views: ViewRegistry::new(),
        }
    }

    /// Sets the number of playable levels.
    ///
    /// Default: [`DEFAULT_MAX_LEVEL`]
    ///
    /// # Panics
    ///
    /// Panics if `max_level == 0`.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        assert!(max_level > 0, "Max level must be positive");
        self.max_level = max_level;
        self
    }

    /// Sets where the unlocked level is persisted.
    ///
    /// Default: [`DEFAULT_PROGRESS_PATH`]
    pub fn with_progress_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.progress_path = path.into();
        self
    }

    /// Sets the transition listener.
    pub fn with_announcer<A>(mut self, announcer: A) -> Self
    where
        A: EventAnnouncer + 'static,
    {
        self.announcer = Box::new(announcer);
        self
    }

    /// Sets the surface closed on Exit.
    pub fn with_surface<D>(mut self, surface: D) -> Self
    where
        D: DisplaySurface + 'static,
    {
        self.surface = Box::new(surface);
        self
    }

    /// Registers the view presenting `state`.
    pub fn register_view<V>(mut self, state: ViewState, view: V) -> Self
    where
        V: View + 'static,
    {
        self.views.register(state, view);
        self
    }

    /// Loads progress, enters the main menu, and returns the coordinator.
    pub fn build(self) -> ViewCoordinator {
        if !self.views.contains(ViewState::MainMenu) {
            warn!(target: "coordinator", "No main menu view registered, startup screen is blank");
        }

        let progress = ProgressStore::new(self.progress_path, self.max_level);
        let unlocked = progress.load();
        let context = CoordinatorContext::new(unlocked, self.max_level);

        info!(
            target: "coordinator",
            "Building coordinator ({} views, {} levels, unlocked {})",
            self.views.len(),
            self.max_level,
            context.unlocked_level
        );

        let mut coordinator = ViewCoordinator {
            context,
            max_level: self.max_level,
            views: self.views,
            simulation: self.simulation,
            events: self.events,
            surface: self.surface,
            announcer: self.announcer,
            progress,
        };

        if let Some(view) = coordinator.views.get_mut(ViewState::MainMenu) {
            view.on_enter(ViewInit::Plain);
        }

        coordinator
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
