//! Land step: plot dimensions, shape and slope, with the live plot preview.

use bevy::prelude::*;
use bevy_egui::egui;

use planner::draft::{DesignDraft, PlannerStep};
use planner::format::format_measure;
use planner::land::{PlotShape, Slope};

use crate::plot_canvas;
use crate::ui_widgets::{
    caption, field_error, stat_row, themed_button_primary, themed_heading_with_caption,
};

/// Text buffers behind the dimension fields plus their validation messages.
///
/// The draft only holds numbers; the buffers keep what the user typed so an
/// empty or half-typed field is not overwritten by `0`.
#[derive(Resource, Default, Debug)]
pub struct LandForm {
    pub width_text: String,
    pub length_text: String,
    pub width_error: Option<String>,
    pub length_error: Option<String>,
}

/// Parse a dimension field. Messages match what the form shows.
pub fn parse_dimension(name: &str, text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(format!("{name} is required"));
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(format!("{name} must be greater than 0")),
    }
}

impl LandForm {
    /// Copy the buffers into the draft. Invalid entries become `0`, which the
    /// plot preview treats as idle.
    pub fn write_draft(&self, draft: &mut DesignDraft) {
        draft.width = parse_dimension("Width", &self.width_text).unwrap_or(0.0);
        draft.length = parse_dimension("Length", &self.length_text).unwrap_or(0.0);
    }

    /// Pick up dimensions set elsewhere (a restored history entry).
    pub fn sync_from(&mut self, draft: &DesignDraft) {
        for (value, text) in [
            (draft.width, &mut self.width_text),
            (draft.length, &mut self.length_text),
        ] {
            if value > 0.0 && text.trim().parse::<f64>().ok() != Some(value) {
                *text = format_measure(value);
            }
        }
    }

    /// Validate both fields, recording messages. `true` when the step may
    /// advance.
    pub fn submit(&mut self) -> bool {
        self.width_error = parse_dimension("Width", &self.width_text).err();
        self.length_error = parse_dimension("Length", &self.length_text).err();
        self.width_error.is_none() && self.length_error.is_none()
    }
}

fn dimension_field(ui: &mut egui::Ui, label: &str, hint: &str, text: &mut String) -> bool {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(160.0),
    )
    .changed()
}

/// Draw the land step into `ui`, editing a scratch copy of the draft. The plot
/// preview is skipped while the 3D view is showing the plot instead.
pub fn land_form_contents(
    ui: &mut egui::Ui,
    form: &mut LandForm,
    draft: &mut DesignDraft,
    step: &mut PlannerStep,
    show_preview: bool,
) {
    themed_heading_with_caption(
        ui,
        PlannerStep::Land.title(),
        "Enter the dimensions of your land",
    );

    let mut edited = false;
    egui::Grid::new("land_form_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.vertical(|ui| {
                edited |= dimension_field(ui, "Width (meters)", "Enter width", &mut form.width_text);
                field_error(ui, form.width_error.as_deref());
            });
            ui.vertical(|ui| {
                edited |=
                    dimension_field(ui, "Length (meters)", "Enter length", &mut form.length_text);
                field_error(ui, form.length_error.as_deref());
            });
            ui.end_row();

            ui.vertical(|ui| {
                ui.label("Land Shape");
                egui::ComboBox::from_id_salt("land_shape")
                    .selected_text(draft.shape.label())
                    .show_ui(ui, |ui| {
                        for option in PlotShape::ALL {
                            ui.selectable_value(&mut draft.shape, option, option.label());
                        }
                    });
            });
            ui.vertical(|ui| {
                ui.label("Terrain Slope");
                egui::ComboBox::from_id_salt("land_slope")
                    .selected_text(draft.slope.label())
                    .show_ui(ui, |ui| {
                        for option in Slope::ALL {
                            ui.selectable_value(&mut draft.slope, option, option.label());
                        }
                    });
            });
            ui.end_row();
        });

    if edited {
        form.write_draft(draft);
    }

    let area = draft.area();
    if area > 0.0 {
        ui.add_space(12.0);
        stat_row(ui, "Total Area", &format!("{} square meters", format_measure(area)));
        if show_preview {
            plot_canvas::plot_canvas(ui, draft.width, draft.length, draft.shape);
        } else {
            caption(ui, "Showing the plot in 3D. Drag to pan, right-drag to orbit, scroll to zoom.");
        }
    }

    ui.add_space(12.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        if themed_button_primary(ui, "Continue to Preferences \u{2192}", true).clicked()
            && form.submit()
        {
            *step = PlannerStep::Preferences;
        }
    });
}
