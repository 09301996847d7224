//! Designs step: one card per generated design.

use bevy_egui::egui;

use planner::design::HouseDesign;
use planner::draft::PlannerStep;
use uuid::Uuid;

use crate::theme;
use crate::ui_widgets::{badge, caption, themed_button, themed_heading_with_caption};

const CARD_WIDTH: f32 = 300.0;

/// Chips under the card title.
pub fn design_badges(design: &HouseDesign) -> [String; 4] {
    let floors = if design.floors == 1 { "Floor" } else { "Floors" };
    [
        format!("{} Bedrooms", design.bedrooms),
        format!("{} Bathrooms", design.bathrooms),
        format!("{} {}", design.floors, floors),
        format!("{} m\u{00b2}", design.square_footage),
    ]
}

/// "+ N more features" when the card shows only the first few.
pub fn more_features_label(design: &HouseDesign) -> Option<String> {
    let hidden = design.features.len() - design.key_features().len();
    (hidden > 0).then(|| format!("+ {hidden} more features"))
}

/// One design card. Returns `true` when its export button was clicked.
fn design_card(ui: &mut egui::Ui, design: &HouseDesign) -> bool {
    let mut export = false;
    egui::Frame::group(ui.style())
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(
                egui::RichText::new(&design.title)
                    .size(theme::FONT_HEADING - 2.0)
                    .color(theme::TEXT_HEADING)
                    .strong(),
            );
            ui.horizontal_wrapped(|ui| {
                let [bedrooms, bathrooms, floors, size] = design_badges(design);
                badge(ui, &bedrooms, theme::BADGE_BLUE);
                badge(ui, &bathrooms, theme::BADGE_BLUE);
                badge(ui, &floors, theme::BADGE_BLUE);
                badge(ui, &size, theme::BADGE_GREEN);
            });
            ui.add_space(6.0);
            ui.label(egui::RichText::new(&design.description).color(theme::TEXT));

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Key Features:").strong());
            for feature in design.key_features() {
                ui.horizontal(|ui| {
                    ui.colored_label(theme::SUCCESS, "\u{2022}");
                    ui.label(feature);
                });
            }
            if let Some(more) = more_features_label(design) {
                ui.label(
                    egui::RichText::new(more)
                        .size(theme::FONT_SMALL)
                        .color(theme::PRIMARY),
                )
                .on_hover_text(design.features.join("\n"));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    caption(ui, "Estimated Cost");
                    ui.label(
                        egui::RichText::new(&design.estimated_cost)
                            .size(theme::FONT_HEADING - 2.0)
                            .color(theme::PRIMARY)
                            .strong(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    export = themed_button(ui, "\u{2b07} Export").clicked();
                });
            });
        });
    export
}

/// Draw the gallery. Returns the id of a design whose export was requested.
pub fn gallery_contents(
    ui: &mut egui::Ui,
    designs: &[HouseDesign],
    step: &mut PlannerStep,
) -> Option<Uuid> {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            themed_heading_with_caption(
                ui,
                "Your House Designs",
                "Based on your specifications, we've created these designs for you",
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if themed_button(ui, "Modify Requirements").clicked() {
                *step = PlannerStep::Preferences;
            }
        });
    });

    let mut export = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for design in designs {
                if design_card(ui, design) {
                    export = Some(design.id);
                }
            }
        });
    });
    export
}
