//! Measurement and orientation overlays for the 2D plot.

use std::f32::consts::FRAC_PI_2;

use bevy::math::Vec2;

use crate::config::{
    COMPASS_LABEL_INSET, COMPASS_MARGIN, COMPASS_RADIUS, DIMENSION_LABEL_OFFSET, GRID_DIVISIONS,
};
use crate::format::format_measure;

use super::types::{Cardinal, Compass, GridLine, PlotAnnotations, TextLabel};

/// Needle tip distance from the rim.
const NEEDLE_TIP_INSET: f32 = 10.0;
const NEEDLE_HALF_WIDTH: f32 = 4.0;
const NEEDLE_TAIL: f32 = 5.0;

pub(crate) fn build_annotations(
    width: f64,
    length: f64,
    scale: f32,
    origin: Vec2,
    size: Vec2,
) -> PlotAnnotations {
    PlotAnnotations {
        width_label: TextLabel {
            text: format!("{}m", format_measure(width)),
            position: Vec2::new(
                origin.x + size.x / 2.0,
                origin.y + size.y + DIMENSION_LABEL_OFFSET,
            ),
            angle: 0.0,
        },
        length_label: TextLabel {
            text: format!("{}m", format_measure(length)),
            position: Vec2::new(origin.x - DIMENSION_LABEL_OFFSET, origin.y + size.y / 2.0),
            angle: -FRAC_PI_2,
        },
        grid_lines: grid_lines(width.max(length) as f32, scale, origin, size),
        compass: compass(origin, size),
        area_label: TextLabel {
            text: format!("Area: {}m²", format_measure(width * length)),
            position: origin + size / 2.0,
            angle: 0.0,
        },
    }
}

/// Lines every `max_dimension / GRID_DIVISIONS` meters, kept only when they
/// fall strictly inside the bounding box, clipped to it.
fn grid_lines(max_dimension: f32, scale: f32, origin: Vec2, size: Vec2) -> Vec<GridLine> {
    let step = max_dimension / GRID_DIVISIONS as f32 * scale;
    let end = origin + size;
    let mut lines = Vec::new();

    for i in 1..GRID_DIVISIONS {
        let x = origin.x + step * i as f32;
        if x < end.x {
            lines.push(GridLine {
                start: Vec2::new(x, origin.y),
                end: Vec2::new(x, end.y),
            });
        }
    }

    for i in 1..GRID_DIVISIONS {
        let y = origin.y + step * i as f32;
        if y < end.y {
            lines.push(GridLine {
                start: Vec2::new(origin.x, y),
                end: Vec2::new(end.x, y),
            });
        }
    }

    lines
}

/// Compass tucked into the top-right corner of the bounding box.
fn compass(origin: Vec2, size: Vec2) -> Compass {
    let r = COMPASS_RADIUS;
    let c = Vec2::new(
        origin.x + size.x - r - COMPASS_MARGIN,
        origin.y + r + COMPASS_MARGIN,
    );
    let inset = r - COMPASS_LABEL_INSET;

    Compass {
        center: c,
        radius: r,
        labels: [
            (Cardinal::North, Vec2::new(c.x, c.y - inset)),
            (Cardinal::South, Vec2::new(c.x, c.y + inset)),
            (Cardinal::East, Vec2::new(c.x + inset, c.y)),
            (Cardinal::West, Vec2::new(c.x - inset, c.y)),
        ],
        needle: [
            Vec2::new(c.x, c.y - r + NEEDLE_TIP_INSET),
            Vec2::new(c.x - NEEDLE_HALF_WIDTH, c.y),
            Vec2::new(c.x, c.y + NEEDLE_TAIL),
            Vec2::new(c.x + NEEDLE_HALF_WIDTH, c.y),
        ],
    }
}
