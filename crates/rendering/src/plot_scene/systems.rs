use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

use planner::draft::DesignDraft;
use planner::land::PlotShape;
use planner::plot_geometry::{build_plot_scene, PlotScene, Viewport};

use crate::camera::OrbitCamera;

use super::mesh_data::SlabMeshData;
use super::render_lease::RenderModeLease;

/// Grass green for the slab top; sides and bottom are darkened from it.
const GROUND_COLOR: [f32; 4] = [0.42, 0.62, 0.33, 1.0];

/// Whether the 3D view is switched on. Toggled from the UI.
#[derive(Resource, Default, Debug)]
pub struct PlotView {
    pub show_3d: bool,
}

/// Asset path of the house model, or `None` to show the ground only.
#[derive(Resource, Clone, Debug)]
pub struct HouseModelPath(pub Option<String>);

impl Default for HouseModelPath {
    fn default() -> Self {
        Self(Some(planner::config::DEFAULT_HOUSE_MODEL.to_string()))
    }
}

/// Inputs a scene was built from. A change means rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneKey {
    pub width: f64,
    pub length: f64,
    pub shape: PlotShape,
}

/// Root of one 3D visualization. Every entity it spawns is a descendant, so a
/// single recursive despawn tears the whole scene down.
#[derive(Component, Debug)]
pub struct PlotSceneRoot {
    pub key: SceneKey,
}

#[derive(Component)]
pub struct GroundSlab;

#[derive(Component)]
pub struct HouseModel;

/// The scene the current view and draft call for, if any.
fn desired_scene(view: &PlotView, draft: &DesignDraft) -> Option<(SceneKey, PlotScene)> {
    if !view.show_3d {
        return None;
    }
    let key = SceneKey {
        width: draft.width,
        length: draft.length,
        shape: draft.shape,
    };
    build_plot_scene(key.width, key.length, key.shape, Viewport::SCENE).map(|scene| (key, scene))
}

/// Keep exactly one scene root matching the draft while the 3D view is on,
/// and none otherwise. Holds the render lease exactly while a root exists.
#[allow(clippy::too_many_arguments)]
pub fn sync_plot_scene(
    mut commands: Commands,
    view: Res<PlotView>,
    draft: Res<DesignDraft>,
    model: Res<HouseModelPath>,
    asset_server: Option<Res<AssetServer>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lease: ResMut<RenderModeLease>,
    mut winit: Option<ResMut<WinitSettings>>,
    mut orbit: Option<ResMut<OrbitCamera>>,
    roots: Query<(Entity, &PlotSceneRoot)>,
) {
    if !view.is_changed() && !draft.is_changed() && !model.is_changed() {
        return;
    }

    let desired = desired_scene(&view, &draft);
    let desired_key = desired.as_ref().map(|(key, _)| *key);

    let mut current = None;
    for (entity, root) in &roots {
        if current.is_none() && Some(root.key) == desired_key && !model.is_changed() {
            current = Some(entity);
        } else {
            commands.entity(entity).despawn_recursive();
            info!("Plot scene torn down");
        }
    }

    let Some((key, scene)) = desired else {
        lease.release(winit.as_deref_mut());
        return;
    };
    if current.is_some() {
        return;
    }

    let mut slab = SlabMeshData::new();
    slab.add_slab(&scene.outline, scene.thickness, GROUND_COLOR);
    let slab_mesh = meshes.add(slab.into_mesh());
    let ground = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.9,
        ..default()
    });

    commands
        .spawn((
            PlotSceneRoot { key },
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                GroundSlab,
                Mesh3d(slab_mesh),
                MeshMaterial3d(ground),
                Transform::default(),
            ));

            if let (Some(path), Some(asset_server)) = (&model.0, &asset_server) {
                let handle =
                    asset_server.load(bevy::gltf::GltfAssetLabel::Scene(0).from_asset(path.clone()));
                parent.spawn((
                    HouseModel,
                    SceneRoot(handle),
                    Transform::from_translation(scene.house.translation)
                        .with_scale(Vec3::splat(scene.house.scale)),
                ));
            }
        });

    if let Some(orbit) = orbit.as_deref_mut() {
        orbit.frame(&scene);
    }
    lease.acquire(winit.as_deref_mut());
    info!(
        "Plot scene spawned: {}m x {}m {}",
        key.width, key.length, key.shape
    );
}

/// Drop the house when its model fails to load; the ground stays.
pub fn remove_failed_house(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    houses: Query<(Entity, &SceneRoot), With<HouseModel>>,
) {
    for (entity, root) in &houses {
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(root.0.id()) {
            warn!("House model failed to load, showing ground only: {}", err);
            commands.entity(entity).despawn_recursive();
        }
    }
}
