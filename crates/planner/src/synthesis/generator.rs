use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::config::{
    BASE_FACTOR_MAX, BASE_FACTOR_MIN, DESIGN_BATCH_SIZE, VARIATION_MAX, VARIATION_MIN,
};
use crate::design::HouseDesign;
use crate::land::LandMeasurement;
use crate::planner_error::PlannerError;
use crate::preferences::HousePreferences;

use super::calculations::{
    assemble_features, compose_title, describe, estimated_cost, max_footprint, square_footage,
};
use super::tables::{style_title_tokens, DESIGN_IMAGES};

/// Generate a batch of candidate designs stamped with the current time.
pub fn generate_designs<R: Rng + ?Sized>(
    land: &LandMeasurement,
    prefs: &HousePreferences,
    rng: &mut R,
) -> Result<Vec<HouseDesign>, PlannerError> {
    generate_designs_at(land, prefs, rng, Utc::now())
}

/// Generate a batch of [`DESIGN_BATCH_SIZE`] candidates.
///
/// Per candidate the generator draws, in order: the footprint factor, the
/// size variation, the title token and the id bytes. Features, cost and
/// description follow deterministically from those draws and the inputs.
///
/// Fails on counts below one and on a plot whose candidates would not have
/// a representable living area.
pub fn generate_designs_at<R: Rng + ?Sized>(
    land: &LandMeasurement,
    prefs: &HousePreferences,
    rng: &mut R,
    created_at: DateTime<Utc>,
) -> Result<Vec<HouseDesign>, PlannerError> {
    prefs.validate()?;
    let footprint_cap = max_footprint(land.area());
    let description = describe(land, prefs);

    (0..DESIGN_BATCH_SIZE)
        .map(|i| {
            let base_factor = rng.gen_range(BASE_FACTOR_MIN..BASE_FACTOR_MAX);
            let variation = rng.gen_range(VARIATION_MIN..VARIATION_MAX);
            let size = square_footage(footprint_cap, prefs.floors, base_factor, variation)?;
            let title = design_title(prefs, &mut *rng);

            Ok(HouseDesign {
                id: random_uuid(&mut *rng),
                title,
                description: description.clone(),
                image_url: DESIGN_IMAGES[i % DESIGN_IMAGES.len()].to_string(),
                square_footage: size,
                bedrooms: prefs.bedrooms,
                bathrooms: prefs.bathrooms,
                floors: prefs.floors,
                features: assemble_features(prefs, land.area()),
                estimated_cost: estimated_cost(prefs, size),
                created_at,
            })
        })
        .collect()
}

/// Title with a uniformly chosen style token. Repeats across a batch are allowed.
pub fn design_title<R: Rng + ?Sized>(prefs: &HousePreferences, rng: &mut R) -> String {
    let tokens = style_title_tokens(prefs.style);
    let token = tokens[rng.gen_range(0..tokens.len())];
    compose_title(token, prefs)
}

/// Version-4 UUID whose random bits come from `rng`.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
