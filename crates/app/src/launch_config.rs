//! Settings read once from the environment at startup.

use std::path::PathBuf;

use bevy::prelude::*;

use planner::config::{DEFAULT_HOUSE_MODEL, DEFAULT_SEED};

pub const SEED_VAR: &str = "PLOTWISE_SEED";
pub const EXPORT_DIR_VAR: &str = "PLOTWISE_EXPORT_DIR";
pub const HOUSE_MODEL_VAR: &str = "PLOTWISE_HOUSE_MODEL";

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub seed: u64,
    pub export_dir: PathBuf,
    /// `None` when the variable is set but empty: show the ground only.
    pub house_model: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            export_dir: PathBuf::from(export::DEFAULT_EXPORT_DIR),
            house_model: Some(DEFAULT_HOUSE_MODEL.to_string()),
        }
    }
}

impl LaunchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(e) => warn!(
                    "Ignoring {}={:?} ({}); using seed {}",
                    SEED_VAR, raw, e, config.seed
                ),
            }
        }
        if let Some(dir) = lookup(EXPORT_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(model) = lookup(HOUSE_MODEL_VAR) {
            let model = model.trim();
            config.house_model = (!model.is_empty()).then(|| model.to_string());
        }
        config
    }
}
