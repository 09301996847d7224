use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use export::ExportDir;
use planner::planner_rng::PlannerRng;
use rendering::HouseModelPath;

mod launch_config;

use launch_config::LaunchConfig;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Plotwise".to_string(),
            resolution: (1280.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Read after DefaultPlugins so parse warnings reach the log.
    let config = LaunchConfig::from_env();
    info!(
        "Plotwise starting: seed={}, exports to {}",
        config.seed,
        config.export_dir.display()
    );

    // Inserted before PlannerPlugin, which keeps an existing generator.
    app.insert_resource(PlannerRng::from_seed_u64(config.seed))
        .add_plugins((
            planner::PlannerPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
            export::ExportPlugin,
        ))
        .insert_resource(ExportDir(config.export_dir))
        .insert_resource(HouseModelPath(config.house_model));

    app.run();
}
