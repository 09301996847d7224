use bevy::log::debug;
use bevy::math::{Vec2, Vec3};

use crate::config::{
    GROUND_THICKNESS, HOUSE_MODEL_SCALE, PLOT_PADDING, SCENE_PADDING,
};
use crate::land::PlotShape;

use super::annotations::build_annotations;
use super::types::{polygon_bounds, HousePlacement, PlotGeometry, PlotScene, Viewport};

const RECTANGLE_OUTLINE: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Fixed stand-in for an irregular lot: a hexagon with chamfered top corners
/// and a narrowed bottom edge.
const IRREGULAR_OUTLINE: [Vec2; 6] = [
    Vec2::new(0.0, 0.3),
    Vec2::new(0.2, 0.0),
    Vec2::new(0.8, 0.0),
    Vec2::new(1.0, 0.3),
    Vec2::new(0.7, 1.0),
    Vec2::new(0.3, 1.0),
];

/// Camera distance as a multiple of the longer scaled plot side.
const CAMERA_DISTANCE_FACTOR: f32 = 1.5;

/// Boundary vertices as fractions of `(width, length)`. The same for every size.
pub fn outline_fractions(shape: PlotShape) -> &'static [Vec2] {
    match shape {
        PlotShape::Rectangular | PlotShape::Square => &RECTANGLE_OUTLINE,
        PlotShape::Irregular => &IRREGULAR_OUTLINE,
    }
}

/// Dimension survives the trip into f32 viewport space.
fn representable(meters: f64) -> bool {
    let narrowed = meters as f32;
    narrowed.is_finite() && narrowed > 0.0
}

/// Scaled and centered boundary, shared by the 2D and 3D builders.
struct BoundaryLayout {
    boundary: Vec<Vec2>,
    scale: f32,
    origin: Vec2,
    size: Vec2,
}

fn layout_boundary(
    width: f64,
    length: f64,
    shape: PlotShape,
    viewport: Viewport,
    padding: f32,
) -> Option<BoundaryLayout> {
    let dimensions_valid =
        width.is_finite() && length.is_finite() && width > 0.0 && length > 0.0;
    let available = viewport.min_dimension() - 2.0 * padding;
    let viewport_valid = available.is_finite() && available > 0.0;
    if !dimensions_valid || !viewport_valid {
        debug!(
            "Plot geometry idle: width={}, length={}, viewport={}x{}",
            width, length, viewport.width, viewport.height
        );
        return None;
    }

    // Fit in f64; the f32 layout must still describe a plot with area.
    let scale = f64::from(available) / width.max(length);
    let size = Vec2::new((width * scale) as f32, (length * scale) as f32);
    let scale = scale as f32;
    let origin = viewport.center() - size / 2.0;
    let boundary: Vec<Vec2> = outline_fractions(shape)
        .iter()
        .map(|f| origin + *f * size)
        .collect();

    let (min, max) = polygon_bounds(&boundary);
    let extent = max - min;
    let drawable = representable(width)
        && representable(length)
        && scale.is_finite()
        && scale > 0.0
        && extent.is_finite()
        && extent.x > 0.0
        && extent.y > 0.0;
    if !drawable {
        debug!(
            "Plot geometry idle: {}x{} does not fit a {}x{} viewport",
            width, length, viewport.width, viewport.height
        );
        return None;
    }

    Some(BoundaryLayout {
        boundary,
        scale,
        origin,
        size,
    })
}

/// Fit a plot into `viewport` and compute its outline and annotations.
///
/// Returns `None` (nothing to draw) for non-positive or non-finite
/// dimensions, for dimensions that do not survive narrowing to `f32`, for a
/// side that scales to less than a representable sliver, and for a viewport
/// too small to hold the padding.
pub fn build_plot_geometry(
    width: f64,
    length: f64,
    shape: PlotShape,
    viewport: Viewport,
) -> Option<PlotGeometry> {
    let layout = layout_boundary(width, length, shape, viewport, PLOT_PADDING)?;
    let annotations = build_annotations(width, length, layout.scale, layout.origin, layout.size);

    Some(PlotGeometry {
        boundary: layout.boundary,
        scale: layout.scale,
        origin: layout.origin,
        size: layout.size,
        annotations,
    })
}

/// 3D variant: the same outline laid flat on the XZ plane, centered on the
/// world origin, with the house placed at the plot center on top of the slab.
///
/// `viewport` is the container size in scene units; [`Viewport::SCENE`] is the
/// one the 3D view uses.
pub fn build_plot_scene(
    width: f64,
    length: f64,
    shape: PlotShape,
    viewport: Viewport,
) -> Option<PlotScene> {
    let layout = layout_boundary(width, length, shape, viewport, SCENE_PADDING)?;
    let center = viewport.center();

    // Screen-space y (down) becomes world z (towards the default camera).
    let outline = layout
        .boundary
        .iter()
        .map(|p| {
            let local = *p - center;
            Vec3::new(local.x, 0.0, local.y)
        })
        .collect();

    Some(PlotScene {
        outline,
        thickness: GROUND_THICKNESS,
        scale: layout.scale,
        extent: layout.size,
        house: HousePlacement {
            translation: Vec3::ZERO,
            scale: HOUSE_MODEL_SCALE,
        },
        camera_focus: Vec3::ZERO,
        camera_distance: layout.size.max_element() * CAMERA_DISTANCE_FACTOR,
    })
}
