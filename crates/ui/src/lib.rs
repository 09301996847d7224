use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod gallery;
pub mod history_panel;
pub mod land_form;
pub mod planner_panel;
pub mod plot_canvas;
pub mod preferences_form;
pub mod theme;
pub mod ui_widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(UiStatePlugin)
            .add_systems(Startup, theme::apply_planner_theme)
            .add_systems(
                Update,
                // Panel order matters to egui: top bar, right sidebar, then
                // the step panels (which may claim the central area).
                (
                    planner_panel::header_ui,
                    history_panel::history_panel_ui,
                    planner_panel::planner_panel_ui,
                )
                    .chain()
                    .after(UiStateSet),
            );
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiStateSet;

/// Form state and the bookkeeping systems that need no egui context.
pub struct UiStatePlugin;

impl Plugin for UiStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<land_form::LandForm>()
            .init_resource::<planner_panel::PreferencesError>()
            .init_resource::<history_panel::HistoryPanelOpen>()
            .add_systems(
                Update,
                (
                    planner_panel::sync_land_form,
                    planner_panel::hide_scene_outside_land_step,
                    planner_panel::record_generation_failure,
                )
                    .in_set(UiStateSet)
                    .after(planner::PlannerSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use planner::draft::{DesignDraft, PlannerStep};
    use planner::generation::GenerationFailed;
    use planner::planner_error::PlannerError;
    use rendering::PlotView;

    fn state_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<DesignDraft>()
            .init_resource::<PlannerStep>()
            .init_resource::<PlotView>()
            .add_event::<GenerationFailed>();
        app.add_plugins(UiStatePlugin);
        app.update();
        app
    }

    #[test]
    fn test_restored_draft_reaches_form() {
        let mut app = state_app();
        {
            let mut draft = app.world_mut().resource_mut::<DesignDraft>();
            draft.width = 30.0;
            draft.length = 18.5;
        }
        app.update();
        let form = app.world().resource::<land_form::LandForm>();
        assert_eq!(form.width_text, "30");
        assert_eq!(form.length_text, "18.5");
    }

    #[test]
    fn test_leaving_land_step_hides_scene() {
        let mut app = state_app();
        app.world_mut().resource_mut::<PlotView>().show_3d = true;
        app.update();
        assert!(app.world().resource::<PlotView>().show_3d);

        *app.world_mut().resource_mut::<PlannerStep>() = PlannerStep::Preferences;
        app.update();
        assert!(!app.world().resource::<PlotView>().show_3d);
    }

    #[test]
    fn test_generation_failure_reaches_preferences_form() {
        let mut app = state_app();
        app.world_mut().send_event(GenerationFailed {
            error: PlannerError::SizeOutOfRange { value: 3e20 },
        });
        app.update();
        let error = app.world().resource::<planner_panel::PreferencesError>();
        let message = error.0.as_deref().expect("failure message");
        assert!(message.contains("out of range"), "got: {message}");
    }
}
