//! Themed egui helpers shared by the planner panels.
//!
//! Forms, cards and the history list all draw through these so spacing,
//! font sizes and colors stay in one place ([`crate::theme`]).

use bevy_egui::egui;

use crate::theme;

// =============================================================================
// Buttons
// =============================================================================

pub fn themed_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).size(theme::FONT_BODY))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// The main action of a panel ("Continue", "Generate Designs").
pub fn themed_button_primary(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(egui::Color32::WHITE),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add_enabled(enabled, button)
}

// =============================================================================
// Headers
// =============================================================================

pub fn themed_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

/// Heading plus a muted one-line explanation underneath.
pub fn themed_heading_with_caption(ui: &mut egui::Ui, text: &str, note: &str) {
    themed_heading(ui, text);
    caption(ui, note);
    ui.add_space(theme::ITEM_SPACING);
}

// =============================================================================
// Rows and badges
// =============================================================================

/// `label:  value`, label muted.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_BODY)
                .color(theme::TEXT)
                .strong(),
        );
    });
}

/// Small rounded chip, e.g. "3 Bedrooms".
pub fn badge(ui: &mut egui::Ui, text: &str, (fill, color): (egui::Color32, egui::Color32)) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(color),
            );
        });
}

/// Red validation message under a form field.
pub fn field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.label(
            egui::RichText::new(error)
                .size(theme::FONT_SMALL)
                .color(theme::ERROR),
        );
    }
}

// =============================================================================
// Progress
// =============================================================================

pub fn progress_bar_with_text(ui: &mut egui::Ui, fraction: f32, text: &str) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(theme::PRIMARY)
            .text(text)
            .desired_width(ui.available_width().min(320.0)),
    )
}

// =============================================================================
// Section helpers
// =============================================================================

pub fn section_separator(ui: &mut egui::Ui) {
    ui.add_space(theme::ITEM_SPACING);
    ui.separator();
    ui.add_space(theme::ITEM_SPACING);
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors_are_distinct() {
        assert_ne!(theme::PRIMARY, theme::TEXT);
        assert_ne!(theme::SUCCESS, theme::ERROR);
        assert_ne!(theme::TEXT, theme::TEXT_MUTED);
        assert_ne!(theme::PLOT_FILL, theme::PLOT_OUTLINE);
    }

    #[test]
    fn test_badge_text_contrasts_with_fill() {
        for (fill, text) in [theme::BADGE_BLUE, theme::BADGE_GREEN, theme::BADGE_PURPLE] {
            let lum = |c: egui::Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
            assert!(lum(fill) > lum(text) + 200);
        }
    }
}
