use bevy_egui::{egui, EguiContexts};

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

/// Badge fills, paired with their text color.
pub const BADGE_BLUE: (egui::Color32, egui::Color32) = (
    egui::Color32::from_rgb(219, 234, 254),
    egui::Color32::from_rgb(30, 64, 175),
);
pub const BADGE_GREEN: (egui::Color32, egui::Color32) = (
    egui::Color32::from_rgb(220, 252, 231),
    egui::Color32::from_rgb(22, 101, 52),
);
pub const BADGE_PURPLE: (egui::Color32, egui::Color32) = (
    egui::Color32::from_rgb(243, 232, 255),
    egui::Color32::from_rgb(107, 33, 168),
);

// Plot canvas
pub const PLOT_FILL: egui::Color32 = egui::Color32::from_rgb(232, 245, 233);
pub const PLOT_OUTLINE: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
pub const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(200, 230, 201);
pub const COMPASS: egui::Color32 = egui::Color32::from_rgb(33, 33, 33);
/// Semi-opaque white under the compass letters.
pub const COMPASS_FACE: egui::Color32 = egui::Color32::from_white_alpha(204);
pub const NEEDLE: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);

pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_TITLE: f32 = 24.0;

pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const ITEM_SPACING: f32 = 6.0;

pub fn apply_planner_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::from_rgb(249, 250, 251);
    let inactive = egui::Color32::from_rgb(243, 244, 246);
    let hover = egui::Color32::from_rgb(229, 231, 235);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;

    style.visuals.window_fill = egui::Color32::WHITE;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::WHITE;

    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, ITEM_SPACING);

    ctx.set_style(style);
}
