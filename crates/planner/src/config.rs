use std::time::Duration;

// ---------------------------------------------------------------------------
// Design synthesis
// ---------------------------------------------------------------------------

/// Number of candidate designs produced by one synthesis call.
pub const DESIGN_BATCH_SIZE: usize = 3;
/// Fraction of the plot area a building footprint may occupy.
pub const MAX_FOOTPRINT_FRACTION: f64 = 0.4;
/// Half-open range of the per-candidate footprint multiplier.
pub const BASE_FACTOR_MIN: f64 = 0.7;
pub const BASE_FACTOR_MAX: f64 = 1.0;
/// Half-open range of the per-candidate size variation.
pub const VARIATION_MIN: f64 = 0.9;
pub const VARIATION_MAX: f64 = 1.1;
/// Cost premium added by each floor above the first.
pub const FLOOR_COST_PREMIUM: f64 = 0.15;
/// Plots strictly larger than this (m²) get the "Large backyard" feature.
pub const LARGE_BACKYARD_AREA: f64 = 500.0;
/// Simulated latency wrapped around every synthesis request.
pub const SYNTHESIS_LATENCY: Duration = Duration::from_secs(2);
/// Number of leading features shown as "key features".
pub const KEY_FEATURE_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Plot geometry (2D canvas, pixels)
// ---------------------------------------------------------------------------

pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 300.0;
pub const PLOT_PADDING: f32 = 40.0;
/// Grid lines split the longer plot side into this many cells.
pub const GRID_DIVISIONS: u32 = 10;
/// Distance between a plot edge and its dimension label.
pub const DIMENSION_LABEL_OFFSET: f32 = 25.0;
pub const COMPASS_RADIUS: f32 = 20.0;
/// Gap between the compass rim and the bounding-box corner.
pub const COMPASS_MARGIN: f32 = 10.0;
/// Direction letters sit this far inside the compass rim.
pub const COMPASS_LABEL_INSET: f32 = 8.0;

// ---------------------------------------------------------------------------
// Plot scene (3D, scene units)
// ---------------------------------------------------------------------------

/// Square container the 3D plot is fitted into, in scene units.
pub const SCENE_EXTENT: f32 = 24.0;
pub const SCENE_PADDING: f32 = 2.0;
pub const GROUND_THICKNESS: f32 = 0.2;
/// Uniform scale applied to the house model, independent of plot size.
pub const HOUSE_MODEL_SCALE: f32 = 2.5;

// ---------------------------------------------------------------------------
// Session defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_HOUSE_MODEL: &str = "models/house.glb";
