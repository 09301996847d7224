//! Header bar and the step panels (land, preferences, designs).
//!
//! While the 3D view is on, the land form moves into a left side panel and no
//! central panel is drawn, so the scene behind egui stays visible.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use export::{ExportOutcome, ExportRequest, ExportStatus};
use planner::draft::{DesignDraft, PlannerStep};
use planner::generation::{GenerateDesigns, GenerationFailed, PendingGeneration};
use planner::history::CurrentDesigns;
use rendering::PlotView;

use crate::gallery::gallery_contents;
use crate::history_panel::HistoryPanelOpen;
use crate::land_form::{land_form_contents, LandForm};
use crate::preferences_form::preferences_form_contents;
use crate::theme;
use crate::ui_widgets::progress_bar_with_text;

/// Message under the preferences form after a rejected submission.
#[derive(Resource, Default)]
pub struct PreferencesError(pub Option<String>);

/// Status line text for the last export, and whether it succeeded.
pub fn export_status_text(status: &ExportStatus) -> Option<(String, bool)> {
    match status.last.as_ref()? {
        ExportOutcome::Written(path) => Some((format!("Exported to {}", path.display()), true)),
        ExportOutcome::Failed(message) => Some((format!("Export failed: {message}"), false)),
    }
}

/// Top bar: app name, step title, 2D/3D toggle, history button, export status.
pub fn header_ui(
    mut contexts: EguiContexts,
    step: Res<PlannerStep>,
    mut view: ResMut<PlotView>,
    mut history_open: ResMut<HistoryPanelOpen>,
    export_status: Res<ExportStatus>,
) {
    egui::TopBottomPanel::top("planner_header").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Plotwise")
                    .size(theme::FONT_TITLE)
                    .color(theme::PRIMARY)
                    .strong(),
            );
            ui.separator();
            ui.label(egui::RichText::new(step.title()).color(theme::TEXT_MUTED));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if history_open.0 { "Hide History" } else { "History" };
                if ui.button(label).clicked() {
                    history_open.0 = !history_open.0;
                }
                if *step == PlannerStep::Land {
                    let mut show_3d = view.show_3d;
                    ui.toggle_value(&mut show_3d, "3D View");
                    if show_3d != view.show_3d {
                        view.show_3d = show_3d;
                    }
                }
                if let Some((text, ok)) = export_status_text(&export_status) {
                    let color = if ok { theme::SUCCESS } else { theme::ERROR };
                    ui.colored_label(color, text);
                }
            });
        });
    });
}

/// The 3D view only belongs to the land step.
pub fn hide_scene_outside_land_step(step: Res<PlannerStep>, mut view: ResMut<PlotView>) {
    if step.is_changed() && *step != PlannerStep::Land && view.show_3d {
        view.show_3d = false;
    }
}

/// Show a request the pipeline gave up on under the preferences form.
pub fn record_generation_failure(
    mut failed: EventReader<GenerationFailed>,
    mut error: ResMut<PreferencesError>,
) {
    if let Some(failure) = failed.read().last() {
        error.0 = Some(failure.error.to_string());
    }
}

/// Keep the land form's text buffers in step with the draft.
pub fn sync_land_form(draft: Res<DesignDraft>, mut form: ResMut<LandForm>) {
    if draft.is_changed() {
        form.sync_from(&draft);
    }
}

fn pending_contents(ui: &mut egui::Ui, progress: f32) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.add(egui::Spinner::new().size(48.0).color(theme::PRIMARY));
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new("Generating your dream home designs...")
                .size(theme::FONT_HEADING - 2.0)
                .color(theme::TEXT),
        );
        ui.add_space(8.0);
        progress_bar_with_text(ui, progress, &format!("{:.0}%", progress * 100.0));
    });
}

/// Step panels. Edits go to a copy of the draft that is written back only
/// when something changed, so the 3D scene is not rebuilt every frame.
#[allow(clippy::too_many_arguments)]
pub fn planner_panel_ui(
    mut contexts: EguiContexts,
    mut step: ResMut<PlannerStep>,
    mut draft: ResMut<DesignDraft>,
    mut land_form: ResMut<LandForm>,
    mut prefs_error: ResMut<PreferencesError>,
    view: Res<PlotView>,
    pending: Res<PendingGeneration>,
    current: Res<CurrentDesigns>,
    mut generate: EventWriter<GenerateDesigns>,
    mut export: EventWriter<ExportRequest>,
) {
    let ctx = contexts.ctx_mut();
    let mut edited = draft.clone();
    let mut next = *step;

    if let Some(progress) = pending.progress() {
        egui::CentralPanel::default().show(ctx, |ui| pending_contents(ui, progress));
        return;
    }

    match next {
        PlannerStep::Land if view.show_3d => {
            egui::SidePanel::left("land_panel")
                .resizable(false)
                .exact_width(380.0)
                .show(ctx, |ui| {
                    land_form_contents(ui, &mut land_form, &mut edited, &mut next, false);
                });
        }
        PlannerStep::Land => {
            egui::CentralPanel::default().show(ctx, |ui| {
                land_form_contents(ui, &mut land_form, &mut edited, &mut next, true);
            });
        }
        PlannerStep::Preferences => {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(request) = preferences_form_contents(
                    ui,
                    &mut edited,
                    &mut next,
                    &mut prefs_error.0,
                    pending.is_pending(),
                ) {
                    generate.send(request);
                }
            });
        }
        PlannerStep::Designs => {
            egui::CentralPanel::default().show(ctx, |ui| {
                if current.0.is_empty() {
                    next = PlannerStep::Preferences;
                } else if let Some(id) = gallery_contents(ui, &current.0, &mut next) {
                    export.send(ExportRequest::Design(id));
                }
            });
        }
    }

    draft.set_if_neq(edited);
    step.set_if_neq(next);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_export_status_text() {
        let mut status = ExportStatus::default();
        assert_eq!(export_status_text(&status), None);

        status.last = Some(ExportOutcome::Written(PathBuf::from("exports/a.json")));
        let (text, ok) = export_status_text(&status).expect("status");
        assert!(ok);
        assert!(text.contains("a.json"), "got: {text}");

        status.last = Some(ExportOutcome::Failed("disk full".into()));
        let (text, ok) = export_status_text(&status).expect("status");
        assert!(!ok);
        assert_eq!(text, "Export failed: disk full");
    }
}
