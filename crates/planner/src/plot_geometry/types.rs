use bevy::math::{Vec2, Vec3};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, SCENE_EXTENT};

/// Fixed-size drawing surface the plot is fitted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The 2D canvas used by the plot preview.
    pub const CANVAS: Viewport = Viewport {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    /// Square ground area of the 3D view, in scene units.
    pub const SCENE: Viewport = Viewport {
        width: SCENE_EXTENT,
        height: SCENE_EXTENT,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(extent: f32) -> Self {
        Self::new(extent, extent)
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A piece of text anchored at its center. `angle` is in radians, clockwise
/// in screen space (y down), so `-PI/2` reads bottom-to-top.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec2,
    pub angle: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: Vec2,
    pub end: Vec2,
}

/// Cardinal direction shown on the orientation marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub fn letter(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

/// Compass rose: a circle, four letters and a needle pointing north.
#[derive(Clone, Debug, PartialEq)]
pub struct Compass {
    pub center: Vec2,
    pub radius: f32,
    pub labels: [(Cardinal, Vec2); 4],
    /// Tip, left, tail, right.
    pub needle: [Vec2; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotAnnotations {
    pub width_label: TextLabel,
    pub length_label: TextLabel,
    pub grid_lines: Vec<GridLine>,
    pub compass: Compass,
    pub area_label: TextLabel,
}

/// Drawable 2D plot, in viewport coordinates (origin top-left, y down).
#[derive(Clone, Debug, PartialEq)]
pub struct PlotGeometry {
    /// Closed polygon, first point not repeated.
    pub boundary: Vec<Vec2>,
    /// Viewport units per meter.
    pub scale: f32,
    /// Top-left corner of the scaled bounding box.
    pub origin: Vec2,
    /// Scaled bounding-box size: `(width, length) * scale`.
    pub size: Vec2,
    pub annotations: PlotAnnotations,
}

impl PlotGeometry {
    /// Axis-aligned bounds of the boundary polygon as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        polygon_bounds(&self.boundary)
    }

    /// Bounding-box size converted back to meters.
    pub fn unscaled_size(&self) -> Vec2 {
        let (min, max) = self.bounds();
        (max - min) / self.scale
    }
}

/// Where and how big the house model sits on the ground slab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HousePlacement {
    pub translation: Vec3,
    pub scale: f32,
}

/// 3D plot: a horizontal slab centered on the world origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotScene {
    /// Top-face outline on the XZ plane at `y = 0`.
    pub outline: Vec<Vec3>,
    pub thickness: f32,
    /// Scene units per meter.
    pub scale: f32,
    /// Scaled extent along X (plot width) and Z (plot length).
    pub extent: Vec2,
    pub house: HousePlacement,
    pub camera_focus: Vec3,
    pub camera_distance: f32,
}

pub(crate) fn polygon_bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    )
}
