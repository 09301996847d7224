use bevy::prelude::*;

pub mod config;
pub mod design;
pub mod draft;
pub mod format;
pub mod generation;
pub mod history;
pub mod land;
pub mod planner_error;
pub mod planner_rng;
pub mod plot_geometry;
pub mod preferences;
pub mod synthesis;

#[cfg(test)]
pub mod test_harness;

use draft::{DesignDraft, PlannerStep};
use generation::{DesignsGenerated, GenerateDesigns, GenerationFailed, PendingGeneration};
use history::{CurrentDesigns, DesignHistory, SelectHistoryItem};
use planner_rng::PlannerRng;

/// Ordering anchor for systems that react to planner state changes.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlannerSet;

/// Planner state, events and the generation pipeline. Headless: no window,
/// renderer or UI is required, which is how the test harness runs it.
///
/// A [`PlannerRng`] inserted before this plugin is kept, so the app can seed
/// the session from its environment.
pub struct PlannerPlugin;

impl Plugin for PlannerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlannerRng>()
            .init_resource::<DesignDraft>()
            .init_resource::<PlannerStep>()
            .init_resource::<DesignHistory>()
            .init_resource::<CurrentDesigns>()
            .init_resource::<PendingGeneration>()
            .add_event::<GenerateDesigns>()
            .add_event::<DesignsGenerated>()
            .add_event::<GenerationFailed>()
            .add_event::<SelectHistoryItem>()
            .add_systems(
                Update,
                (
                    generation::start_generation,
                    generation::finish_generation,
                    history::restore_history_item,
                )
                    .chain()
                    .in_set(PlannerSet),
            );
    }
}
