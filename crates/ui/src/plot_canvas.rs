//! 2D plot preview painted with egui.
//!
//! Geometry comes from [`planner::plot_geometry::build_plot_geometry`] every
//! frame; this module only maps it onto painter shapes.

use bevy_egui::egui;

use planner::land::PlotShape;
use planner::plot_geometry::{build_plot_geometry, PlotGeometry, TextLabel, Viewport};

use crate::theme;

const OUTLINE_WIDTH: f32 = 2.0;
const GRID_WIDTH: f32 = 1.0;
const LABEL_FONT: f32 = 14.0;
const COMPASS_FONT: f32 = 10.0;

fn to_pos(p: bevy::math::Vec2, offset: egui::Vec2) -> egui::Pos2 {
    egui::pos2(p.x, p.y) + offset
}

/// Every non-text shape of the preview, back to front, translated by `offset`
/// (the canvas' top-left corner on screen).
pub fn plot_shapes(geometry: &PlotGeometry, offset: egui::Vec2) -> Vec<egui::Shape> {
    let boundary: Vec<egui::Pos2> = geometry
        .boundary
        .iter()
        .map(|p| to_pos(*p, offset))
        .collect();
    let annotations = &geometry.annotations;

    let mut shapes = Vec::with_capacity(annotations.grid_lines.len() + 5);
    shapes.push(egui::Shape::convex_polygon(
        boundary.clone(),
        theme::PLOT_FILL,
        egui::Stroke::NONE,
    ));
    for line in &annotations.grid_lines {
        shapes.push(egui::Shape::line_segment(
            [to_pos(line.start, offset), to_pos(line.end, offset)],
            egui::Stroke::new(GRID_WIDTH, theme::GRID_LINE),
        ));
    }
    shapes.push(egui::Shape::closed_line(
        boundary,
        egui::Stroke::new(OUTLINE_WIDTH, theme::PLOT_OUTLINE),
    ));

    let compass = &annotations.compass;
    shapes.push(egui::Shape::circle_filled(
        to_pos(compass.center, offset),
        compass.radius,
        theme::COMPASS_FACE,
    ));
    shapes.push(egui::Shape::circle_stroke(
        to_pos(compass.center, offset),
        compass.radius,
        egui::Stroke::new(1.0, theme::COMPASS),
    ));
    shapes.push(egui::Shape::convex_polygon(
        compass.needle.iter().map(|p| to_pos(*p, offset)).collect(),
        theme::NEEDLE,
        egui::Stroke::NONE,
    ));
    shapes
}

/// Text centered on the label position, rotated by its angle.
fn paint_label(painter: &egui::Painter, label: &TextLabel, offset: egui::Vec2, size: f32) {
    let galley = painter.layout_no_wrap(
        label.text.clone(),
        egui::FontId::proportional(size),
        theme::TEXT,
    );
    let half = galley.size() / 2.0;
    let center = to_pos(label.position, offset);
    let top_left = center - egui::emath::Rot2::from_angle(label.angle) * half;
    painter.add(egui::epaint::TextShape::new(top_left, galley, theme::TEXT).with_angle(label.angle));
}

/// Paint `geometry` into a canvas of `viewport` size at the cursor.
pub fn paint_plot(ui: &mut egui::Ui, geometry: &PlotGeometry, viewport: Viewport) {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(viewport.width, viewport.height),
        egui::Sense::hover(),
    );
    let offset = response.rect.min.to_vec2();

    painter.rect_filled(response.rect, egui::CornerRadius::same(4), egui::Color32::WHITE);
    painter.extend(plot_shapes(geometry, offset));

    let annotations = &geometry.annotations;
    paint_label(&painter, &annotations.width_label, offset, LABEL_FONT);
    paint_label(&painter, &annotations.length_label, offset, LABEL_FONT);
    paint_label(&painter, &annotations.area_label, offset, LABEL_FONT);
    for (cardinal, position) in &annotations.compass.labels {
        painter.text(
            to_pos(*position, offset),
            egui::Align2::CENTER_CENTER,
            cardinal.letter(),
            egui::FontId::proportional(COMPASS_FONT),
            theme::COMPASS,
        );
    }
}

/// Preview for the current inputs. Draws nothing at all while the inputs do
/// not describe a plot.
pub fn plot_canvas(ui: &mut egui::Ui, width: f64, length: f64, shape: PlotShape) {
    if let Some(geometry) = build_plot_geometry(width, length, shape, Viewport::CANVAS) {
        paint_plot(ui, &geometry, Viewport::CANVAS);
    }
}
