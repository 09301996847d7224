//! 3D plot view.
//!
//! While the 3D view is switched on and the draft describes a valid plot, one
//! [`PlotSceneRoot`] entity owns the ground slab and the house model. Any
//! change to the plot inputs rebuilds it; switching the view off or entering
//! an invalid dimension despawns it and hands the render lease back.

mod mesh_data;
mod render_lease;
mod systems;


use bevy::prelude::*;

pub use render_lease::RenderModeLease;
pub use systems::{
    remove_failed_house, sync_plot_scene, GroundSlab, HouseModel, HouseModelPath, PlotSceneRoot,
    PlotView, SceneKey,
};

pub struct PlotScenePlugin;

impl Plugin for PlotScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlotView>()
            .init_resource::<HouseModelPath>()
            .init_resource::<RenderModeLease>()
            .add_systems(
                Update,
                (
                    sync_plot_scene.after(planner::PlannerSet),
                    remove_failed_house.run_if(resource_exists::<AssetServer>),
                ),
            );
    }
}
