//! Pure sizing, cost, feature and wording rules. No randomness in here:
//! the random multipliers are drawn by the generator and passed in.

use crate::config::{FLOOR_COST_PREMIUM, LARGE_BACKYARD_AREA, MAX_FOOTPRINT_FRACTION};
use crate::format::{format_currency, format_measure};
use crate::land::LandMeasurement;
use crate::planner_error::PlannerError;
use crate::preferences::HousePreferences;

use super::tables::{
    base_cost_per_sqm, budget_features, outdoor_features, style_cost_multiplier,
    style_description, style_features,
};

/// Largest footprint the plot allows, in m².
pub fn max_footprint(plot_area: f64) -> f64 {
    plot_area * MAX_FOOTPRINT_FRACTION
}

/// Total living area for one candidate.
///
/// The footprint shrinks by `sqrt(floors)` and is then stacked `floors` times,
/// so extra floors grow total area sub-linearly. Never returns 0; fails
/// instead of saturating when the result does not fit a `u64`.
pub fn square_footage(
    max_footprint: f64,
    floors: u32,
    base_factor: f64,
    variation: f64,
) -> Result<u64, PlannerError> {
    let floors = f64::from(floors.max(1));
    let footprint = max_footprint * base_factor / floors.sqrt();
    let total = (footprint * floors * variation).round().max(1.0);
    // u64::MAX rounds up to 2^64 as f64, so the bound is exclusive.
    if !total.is_finite() || total >= u64::MAX as f64 {
        return Err(PlannerError::SizeOutOfRange { value: total });
    }
    Ok(total as u64)
}

/// `1 + (floors - 1) * 0.15`.
pub fn floor_cost_multiplier(floors: u32) -> f64 {
    1.0 + f64::from(floors.saturating_sub(1)) * FLOOR_COST_PREMIUM
}

/// Unformatted cost estimate in dollars.
pub fn estimated_cost_amount(prefs: &HousePreferences, square_footage: u64) -> f64 {
    base_cost_per_sqm(prefs.budget)
        * style_cost_multiplier(prefs.style)
        * floor_cost_multiplier(prefs.floors)
        * square_footage as f64
}

pub fn estimated_cost(prefs: &HousePreferences, square_footage: u64) -> String {
    format_currency(estimated_cost_amount(prefs, square_footage))
}

/// Feature list in display order: style, budget, outdoor, then the
/// conditional garage / backyard / floor-layout entries. Not de-duplicated.
pub fn assemble_features(prefs: &HousePreferences, plot_area: f64) -> Vec<String> {
    let mut features: Vec<String> = style_features(prefs.style)
        .iter()
        .chain(budget_features(prefs.budget))
        .chain(outdoor_features(prefs.outdoor_space))
        .map(|f| (*f).to_string())
        .collect();

    if prefs.garage {
        let kind = if prefs.is_multi_level() {
            "Attached"
        } else {
            "Integrated"
        };
        features.push(format!("{kind} garage"));
    }

    if plot_area > LARGE_BACKYARD_AREA {
        features.push("Large backyard".to_string());
    }

    if prefs.is_multi_level() {
        features.push("Primary bedroom suite on second floor".to_string());
    } else {
        features.push("Single-level living for convenience".to_string());
    }

    features
}

pub fn size_descriptor(bedrooms: u32) -> &'static str {
    if bedrooms <= 2 {
        "Compact"
    } else if bedrooms >= 4 {
        "Spacious"
    } else {
        "Balanced"
    }
}

pub fn level_descriptor(floors: u32) -> &'static str {
    if floors > 1 {
        "Multi-Level"
    } else {
        "Single-Story"
    }
}

pub fn compose_title(style_token: &str, prefs: &HousePreferences) -> String {
    format!(
        "{style_token} {} {} Home",
        size_descriptor(prefs.bedrooms),
        level_descriptor(prefs.floors)
    )
}

pub fn describe(land: &LandMeasurement, prefs: &HousePreferences) -> String {
    format!(
        "This {} home is designed to maximize your {}m² {} plot. {}",
        prefs.style,
        format_measure(land.area()),
        land.shape(),
        style_description(prefs.style)
    )
}
