//! Design synthesis: plot + preferences → a batch of candidate designs.

mod calculations;
mod generator;
mod tables;
mod tests;

pub use calculations::{
    assemble_features, compose_title, describe, estimated_cost, estimated_cost_amount,
    floor_cost_multiplier, level_descriptor, max_footprint, size_descriptor, square_footage,
};
pub use generator::{design_title, generate_designs, generate_designs_at, random_uuid};
pub use tables::{
    base_cost_per_sqm, budget_features, outdoor_features, style_cost_multiplier,
    style_description, style_features, style_title_tokens, DESIGN_IMAGES,
};
