use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod plot_scene;

use camera::CameraDrag;

pub use plot_scene::{HouseModelPath, PlotScenePlugin, PlotView};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDrag>()
            .add_systems(Startup, (camera::setup_camera, setup_lighting))
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_mouse_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                )
                    .chain()
                    .run_if(|view: Res<PlotView>| view.show_3d),
            )
            .add_plugins(PlotScenePlugin);
    }
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 0.98, 0.92),
        brightness: 400.0,
    });

    // Late-afternoon sun from the south-west
    commands.spawn((
        DirectionalLight {
            illuminance: 12000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            -std::f32::consts::FRAC_PI_4,
            -std::f32::consts::FRAC_PI_3,
            0.0,
        )),
    ));
}
