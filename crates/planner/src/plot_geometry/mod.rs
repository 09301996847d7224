//! Plot geometry: plot dimensions → drawable outline, annotations and a 3D slab.
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! every change; nothing is cached between frames.

mod annotations;
mod builder;
mod types;

pub use builder::{build_plot_geometry, build_plot_scene, outline_fractions};
pub use types::{
    Cardinal, Compass, GridLine, HousePlacement, PlotAnnotations, PlotGeometry, PlotScene,
    TextLabel, Viewport,
};
