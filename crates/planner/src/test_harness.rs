//! # TestPlanner — headless harness for the planner pipeline
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`PlannerPlugin`] and a
//! manual clock, so generation latency can be driven deterministically without
//! a window or renderer.

use std::time::Duration;

use bevy::app::App;
use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use uuid::Uuid;

use crate::config::DEFAULT_SEED;
use crate::design::HouseDesign;
use crate::draft::{DesignDraft, PlannerStep};
use crate::generation::{DesignsGenerated, GenerateDesigns, GenerationFailed, PendingGeneration};
use crate::history::{CurrentDesigns, DesignHistory, SelectHistoryItem};
use crate::land::{LandMeasurement, PlotShape, Slope};
use crate::planner_rng::PlannerRng;
use crate::preferences::HousePreferences;
use crate::PlannerPlugin;

/// Simulated time per `tick()`.
pub const TICK: Duration = Duration::from_millis(100);

pub struct TestPlanner {
    app: App,
}

impl Default for TestPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPlanner {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A planner seeded with the default session seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
        // Inserted BEFORE PlannerPlugin so init_resource keeps it.
        app.insert_resource(PlannerRng::from_seed_u64(seed));
        app.add_plugins(PlannerPlugin);
        app.update();
        Self { app }
    }

    /// Fill the draft's plot fields.
    pub fn with_draft(mut self, width: f64, length: f64) -> Self {
        let mut draft = self.app.world_mut().resource_mut::<DesignDraft>();
        draft.width = width;
        draft.length = length;
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue a generation request; it is picked up on the next tick.
    pub fn request(&mut self, land: LandMeasurement, preferences: HousePreferences) {
        self.app
            .world_mut()
            .send_event(GenerateDesigns { land, preferences });
    }

    /// Request the reference scenario: 20 m × 25 m rectangular flat plot,
    /// default preferences.
    pub fn request_reference(&mut self) {
        let land = reference_land();
        self.request(land, HousePreferences::default());
    }

    pub fn select_history(&mut self, id: Uuid) {
        self.app.world_mut().send_event(SelectHistoryItem(id));
    }

    /// Run `n` frames, each advancing the clock by [`TICK`].
    ///
    /// A `yield_now()` between frames lets `AsyncComputeTaskPool` threads make
    /// progress when the test drives the schedule in a tight loop.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
            std::thread::yield_now();
        }
    }

    /// Tick until no generation is pending. Returns the number of frames run.
    ///
    /// Panics if the request is still pending after `max_ticks`.
    pub fn run_until_idle(&mut self, max_ticks: u32) -> u32 {
        for n in 1..=max_ticks {
            self.tick(1);
            if !self.is_pending() {
                return n;
            }
        }
        panic!("generation still pending after {max_ticks} ticks");
    }

    /// Request the reference scenario and wait for it to complete.
    pub fn generate_reference(&mut self) -> Vec<HouseDesign> {
        self.request_reference();
        self.tick(1);
        self.run_until_idle(500);
        self.current_designs().to_vec()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn is_pending(&self) -> bool {
        self.resource::<PendingGeneration>().is_pending()
    }

    pub fn history(&self) -> &DesignHistory {
        self.resource::<DesignHistory>()
    }

    pub fn current_designs(&self) -> &[HouseDesign] {
        &self.resource::<CurrentDesigns>().0
    }

    pub fn draft(&self) -> &DesignDraft {
        self.resource::<DesignDraft>()
    }

    pub fn step(&self) -> PlannerStep {
        *self.resource::<PlannerStep>()
    }

    /// `DesignsGenerated` events still held in the event buffers.
    pub fn generated_events(&self) -> Vec<DesignsGenerated> {
        let events = self.resource::<Events<DesignsGenerated>>();
        events.get_cursor().read(events).copied().collect()
    }

    /// `GenerationFailed` events still held in the event buffers.
    pub fn failed_events(&self) -> Vec<GenerationFailed> {
        let events = self.resource::<Events<GenerationFailed>>();
        events.get_cursor().read(events).cloned().collect()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_history_len(&self, expected: usize) {
        let len = self.history().len();
        assert_eq!(len, expected, "Expected {expected} history items, got {len}");
    }

    pub fn assert_step(&self, expected: PlannerStep) {
        let step = self.step();
        assert_eq!(step, expected, "Expected step {expected:?}, got {step:?}");
    }
}

/// 20 m × 25 m rectangular flat plot.
pub fn reference_land() -> LandMeasurement {
    match LandMeasurement::new(20.0, 25.0, PlotShape::Rectangular, Slope::Flat) {
        Ok(land) => land,
        Err(e) => panic!("reference plot rejected: {e}"),
    }
}
