use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::KEY_FEATURE_COUNT;
use crate::land::LandMeasurement;
use crate::preferences::HousePreferences;

/// One candidate produced by the synthesis engine. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDesign {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub square_footage: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub floors: u32,
    pub features: Vec<String>,
    pub estimated_cost: String,
    pub created_at: DateTime<Utc>,
}

impl HouseDesign {
    /// The leading features shown on a design card.
    pub fn key_features(&self) -> &[String] {
        &self.features[..self.features.len().min(KEY_FEATURE_COUNT)]
    }
}

/// One generation request and its batch, as kept in the session history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: Uuid,
    pub land_measurement: LandMeasurement,
    pub preferences: HousePreferences,
    pub designs: Vec<HouseDesign>,
    pub created_at: DateTime<Utc>,
}

impl HistoryItem {
    /// Title of the first design, or a generic label for an empty batch.
    pub fn headline(&self) -> &str {
        self.designs
            .first()
            .map(|d| d.title.as_str())
            .unwrap_or("House Design")
    }
}
