//! Preferences step: style, rooms, floors, garage, outdoor space and budget.

use bevy_egui::egui;

use planner::draft::{DesignDraft, PlannerStep};
use planner::format::format_measure;
use planner::generation::GenerateDesigns;
use planner::land::LandMeasurement;
use planner::preferences::{BudgetTier, HouseStyle, OutdoorSpace};

use crate::ui_widgets::{
    field_error, section_separator, stat_row, themed_button, themed_button_primary,
    themed_heading_with_caption,
};

pub const BEDROOM_OPTIONS: [u32; 5] = [1, 2, 3, 4, 5];
pub const BATHROOM_OPTIONS: [u32; 4] = [1, 2, 3, 4];
pub const FLOOR_OPTIONS: [u32; 3] = [1, 2, 3];

/// The last option of each count stands for "that many or more".
pub fn bedroom_label(n: u32) -> String {
    match n {
        1 => "1 Bedroom".to_string(),
        n if n >= 5 => "5+ Bedrooms".to_string(),
        n => format!("{n} Bedrooms"),
    }
}

pub fn bathroom_label(n: u32) -> String {
    match n {
        1 => "1 Bathroom".to_string(),
        n if n >= 4 => "4+ Bathrooms".to_string(),
        n => format!("{n} Bathrooms"),
    }
}

pub fn floor_label(n: u32) -> String {
    match n {
        1 => "Single Story".to_string(),
        2 => "Two Stories".to_string(),
        3 => "Three Stories".to_string(),
        n => format!("{n} Stories"),
    }
}

fn count_combo(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut u32,
    options: &[u32],
    name: fn(u32) -> String,
) {
    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(name(*value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, *option, name(*option));
                }
            });
    });
}

fn enum_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[T],
    name: fn(T) -> &'static str,
) {
    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(name(*value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, *option, name(*option));
                }
            });
    });
}

/// Everything a submission needs, or the message to show instead.
pub fn build_request(draft: &DesignDraft) -> Result<GenerateDesigns, String> {
    let land = draft.land().map_err(|e| e.to_string())?;
    draft.preferences.validate().map_err(|e| e.to_string())?;
    Ok(GenerateDesigns {
        land,
        preferences: draft.preferences.clone(),
    })
}

fn land_summary(ui: &mut egui::Ui, land: &LandMeasurement) {
    ui.horizontal(|ui| {
        stat_row(
            ui,
            "Plot",
            &format!(
                "{}m \u{00d7} {}m",
                format_measure(land.width()),
                format_measure(land.length())
            ),
        );
        stat_row(ui, "Area", &format!("{}m\u{00b2}", format_measure(land.area())));
        stat_row(ui, "Shape", land.shape().label());
    });
}

/// Draw the preferences step. Returns the request to send when the user
/// submits valid inputs.
pub fn preferences_form_contents(
    ui: &mut egui::Ui,
    draft: &mut DesignDraft,
    step: &mut PlannerStep,
    error: &mut Option<String>,
    busy: bool,
) -> Option<GenerateDesigns> {
    themed_heading_with_caption(
        ui,
        PlannerStep::Preferences.title(),
        "Tell us about your ideal home",
    );
    if let Ok(land) = draft.land() {
        land_summary(ui, &land);
        section_separator(ui);
    }

    let prefs = &mut draft.preferences;
    egui::Grid::new("preferences_grid")
        .num_columns(2)
        .spacing([24.0, 10.0])
        .show(ui, |ui| {
            enum_combo(
                ui,
                "pref_style",
                "House Style",
                &mut prefs.style,
                &HouseStyle::ALL,
                HouseStyle::label,
            );
            count_combo(
                ui,
                "pref_bedrooms",
                "Number of Bedrooms",
                &mut prefs.bedrooms,
                &BEDROOM_OPTIONS,
                bedroom_label,
            );
            ui.end_row();

            count_combo(
                ui,
                "pref_bathrooms",
                "Number of Bathrooms",
                &mut prefs.bathrooms,
                &BATHROOM_OPTIONS,
                bathroom_label,
            );
            count_combo(
                ui,
                "pref_floors",
                "Number of Floors",
                &mut prefs.floors,
                &FLOOR_OPTIONS,
                floor_label,
            );
            ui.end_row();

            ui.vertical(|ui| {
                ui.label("Garage");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut prefs.garage, true, "Yes");
                    ui.radio_value(&mut prefs.garage, false, "No");
                });
            });
            enum_combo(
                ui,
                "pref_outdoor",
                "Outdoor Space",
                &mut prefs.outdoor_space,
                &OutdoorSpace::ALL,
                OutdoorSpace::label,
            );
            ui.end_row();

            enum_combo(
                ui,
                "pref_budget",
                "Budget",
                &mut prefs.budget,
                &BudgetTier::ALL,
                BudgetTier::label,
            );
            ui.end_row();
        });

    field_error(ui, error.as_deref());
    ui.add_space(12.0);

    let mut request = None;
    ui.horizontal(|ui| {
        if themed_button(ui, "\u{2190} Back").clicked() {
            *step = PlannerStep::Land;
            *error = None;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if themed_button_primary(ui, "Generate Designs \u{2192}", !busy).clicked() {
                match build_request(draft) {
                    Ok(req) => {
                        *error = None;
                        request = Some(req);
                    }
                    Err(message) => *error = Some(message),
                }
            }
        });
    });
    request
}
