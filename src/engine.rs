//=========================================================================
// Serene Engine
//
// Entry point wiring the Winit host to a view coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(coordinator)──>  [Event Loop]
//         │                          │
//         ├─ with_title()            ├─ event_source() ──> CoordinatorBuilder::new
//         ├─ with_size()             └─ surface()      ──> with_surface
//         └─ with_channel_capacity()
// ```
//
// The engine owns both ends of the two channels. Hand the coordinator the
// receiving half of the event channel and the sending half of the surface
// channel, then give the built coordinator back to `run`.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::coordinator::ViewCoordinator;
use crate::core::platform_bridge::{
    EventCollector, PlatformError, PlatformEvent, SurfaceCommand, SurfaceHandle,
};
use crate::platform::{Platform, WindowConfig};

//=== Constants ===========================================================

const SURFACE_CHANNEL_CAPACITY: usize = 4;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Serene"
/// - **Window size**: 800x600 logical pixels
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// # use std::time::Duration;
/// use serene_views::prelude::*;
/// # struct Game;
/// # impl SimulationFacade for Game {
/// #     fn reset(&mut self) {}
/// #     fn initialize(&mut self, _level: u32) {}
/// #     fn update(&mut self, _elapsed: Duration) {}
/// #     fn state(&self) -> SimulationState { SimulationState::Idle }
/// # }
///
/// let engine = EngineBuilder::new()
///     .with_title("Puzzle")
///     .with_size(1024, 768)
///     .build();
///
/// let coordinator = CoordinatorBuilder::new(Game, engine.event_source())
///     .with_surface(engine.surface())
///     .build();
///
/// engine.run(coordinator)?;
/// # Ok::<(), serene_views::core::platform_bridge::PlatformError>(())
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Serene".to_string(),
            width: 800,
            height: 600,
            channel_capacity: 128,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the capacity of the platform → coordinator event channel.
    ///
    /// Events arriving while the channel is full are dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine and its channels.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (\"{}\", {}x{}, channel: {})",
            self.title, self.width, self.height, self.channel_capacity
        );

        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (surface_tx, surface_rx) = bounded(SURFACE_CHANNEL_CAPACITY);

        Engine {
            config: WindowConfig {
                title: self.title,
                width: self.width,
                height: self.height,
            },
            event_tx,
            event_rx,
            surface_tx,
            surface_rx,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Windowed runtime for a [`ViewCoordinator`].
///
/// Create via [`EngineBuilder`].
pub struct Engine {
    config: WindowConfig,
    event_tx: Sender<PlatformEvent>,
    event_rx: Receiver<PlatformEvent>,
    surface_tx: Sender<SurfaceCommand>,
    surface_rx: Receiver<SurfaceCommand>,
}

impl Engine {
    //--- Wiring -----------------------------------------------------------

    /// Event source fed by the window. Pass to [`CoordinatorBuilder::new`].
    ///
    /// [`CoordinatorBuilder::new`]: crate::core::coordinator::CoordinatorBuilder::new
    pub fn event_source(&self) -> EventCollector {
        EventCollector::new(self.event_rx.clone())
    }

    /// Surface that closes the window. Pass to `with_surface`.
    pub fn surface(&self) -> SurfaceHandle {
        SurfaceHandle::new(self.surface_tx.clone())
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and drives `coordinator` until it exits.
    ///
    /// Blocks the calling thread, which must be the main thread on
    /// macOS/iOS.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(self, coordinator: ViewCoordinator) -> Result<(), PlatformError> {
        info!("Starting engine runtime in state {:?}", coordinator.state());

        let platform = Platform::new(self.config, self.event_tx, self.surface_rx, coordinator);

        let result = platform.run();
        match &result {
            Ok(()) => info!("Engine shutdown complete"),
            Err(e) => error!("Platform error: {}", e),
        }
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
