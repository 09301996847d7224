//! Background design generation.
//!
//! A [`GenerateDesigns`] request spawns synthesis on the `AsyncComputeTaskPool`
//! with an RNG forked from [`PlannerRng`]. The batch is published only once
//! both the task has finished and [`SYNTHESIS_LATENCY`] has elapsed. Only one
//! request may be in flight; requests that arrive meanwhile are dropped with a
//! warning rather than queued, so history is never written concurrently.
//! A request the engine rejects ends in [`GenerationFailed`] and leaves
//! history untouched.

use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};
use chrono::Utc;
use uuid::Uuid;

use crate::config::SYNTHESIS_LATENCY;
use crate::design::{HistoryItem, HouseDesign};
use crate::draft::PlannerStep;
use crate::history::{CurrentDesigns, DesignHistory};
use crate::land::LandMeasurement;
use crate::planner_error::PlannerError;
use crate::planner_rng::PlannerRng;
use crate::preferences::HousePreferences;
use crate::synthesis::{generate_designs, random_uuid};

/// Ask for a new batch of designs.
#[derive(Event, Clone, Debug)]
pub struct GenerateDesigns {
    pub land: LandMeasurement,
    pub preferences: HousePreferences,
}

/// Sent once a batch has been stored in history and put on screen.
#[derive(Event, Clone, Copy, Debug)]
pub struct DesignsGenerated {
    pub history_id: Uuid,
    pub count: usize,
}

/// Sent when a request produced no batch.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct GenerationFailed {
    pub error: PlannerError,
}

type Synthesis = Result<Vec<HouseDesign>, PlannerError>;

struct InFlight {
    task: Task<Synthesis>,
    latency: Timer,
    land: LandMeasurement,
    preferences: HousePreferences,
    result: Option<Synthesis>,
}

/// The request currently being synthesized, if any.
#[derive(Resource, Default)]
pub struct PendingGeneration(Option<InFlight>);

impl PendingGeneration {
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Fraction of the latency window that has elapsed, for progress display.
    pub fn progress(&self) -> Option<f32> {
        self.0.as_ref().map(|in_flight| in_flight.latency.fraction())
    }
}

pub fn start_generation(
    mut requests: EventReader<GenerateDesigns>,
    mut pending: ResMut<PendingGeneration>,
    mut rng: ResMut<PlannerRng>,
    mut failed: EventWriter<GenerationFailed>,
) {
    for request in requests.read() {
        if pending.is_pending() {
            warn!("Design generation already in progress, ignoring new request");
            continue;
        }
        if let Err(error) = request.preferences.validate() {
            warn!("Rejected design request: {}", error);
            failed.send(GenerationFailed { error });
            continue;
        }

        let land = request.land.clone();
        let preferences = request.preferences.clone();
        let mut task_rng = rng.fork();
        let task = AsyncComputeTaskPool::get().spawn({
            let land = land.clone();
            let preferences = preferences.clone();
            async move { generate_designs(&land, &preferences, &mut task_rng) }
        });

        info!(
            "Generating designs: {} plot of {}m², {} style",
            land.shape(),
            land.area(),
            preferences.style
        );
        pending.0 = Some(InFlight {
            task,
            latency: Timer::new(SYNTHESIS_LATENCY, TimerMode::Once),
            land,
            preferences,
            result: None,
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn finish_generation(
    time: Res<Time>,
    mut pending: ResMut<PendingGeneration>,
    mut rng: ResMut<PlannerRng>,
    mut history: ResMut<DesignHistory>,
    mut current: ResMut<CurrentDesigns>,
    mut step: ResMut<PlannerStep>,
    mut generated: EventWriter<DesignsGenerated>,
    mut failed: EventWriter<GenerationFailed>,
) {
    let Some(in_flight) = pending.0.as_mut() else {
        return;
    };

    in_flight.latency.tick(time.delta());
    if in_flight.result.is_none() {
        // A finished task must not be polled again; the result is kept here.
        in_flight.result = block_on(futures_lite::future::poll_once(&mut in_flight.task));
    }
    if !in_flight.latency.finished() || in_flight.result.is_none() {
        return;
    }

    let Some(done) = pending.0.take() else {
        return;
    };
    let designs = match done.result {
        Some(Ok(designs)) => designs,
        Some(Err(error)) => {
            warn!("Design generation failed: {}", error);
            failed.send(GenerationFailed { error });
            return;
        }
        None => return,
    };
    let item = HistoryItem {
        id: random_uuid(&mut rng.0),
        land_measurement: done.land,
        preferences: done.preferences,
        designs: designs.clone(),
        created_at: Utc::now(),
    };
    let history_id = item.id;
    let count = designs.len();

    history.push_front(item);
    current.0 = designs;
    *step = PlannerStep::Designs;
    generated.send(DesignsGenerated { history_id, count });
    info!("Generated {} designs (history entry {})", count, history_id);
}
