//! Editable inputs and the step the planner is on.

use bevy::prelude::*;

use crate::land::{LandMeasurement, PlotShape, Slope};
use crate::planner_error::PlannerError;
use crate::preferences::HousePreferences;

/// Raw, possibly-invalid inputs as the forms hold them.
///
/// Width and length start at zero (nothing entered yet). The plot preview
/// reads these directly and stays idle until both are positive.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct DesignDraft {
    pub width: f64,
    pub length: f64,
    pub shape: PlotShape,
    pub slope: Slope,
    pub preferences: HousePreferences,
}

impl DesignDraft {
    /// Validate the plot fields into a [`LandMeasurement`].
    pub fn land(&self) -> Result<LandMeasurement, PlannerError> {
        LandMeasurement::new(self.width, self.length, self.shape, self.slope)
    }

    /// Live area readout; zero until both dimensions are positive.
    pub fn area(&self) -> f64 {
        if self.width > 0.0 && self.length > 0.0 {
            self.width * self.length
        } else {
            0.0
        }
    }

    /// Overwrite every field from a previously submitted request.
    pub fn restore(&mut self, land: &LandMeasurement, preferences: &HousePreferences) {
        self.width = land.width();
        self.length = land.length();
        self.shape = land.shape();
        self.slope = land.slope();
        self.preferences = preferences.clone();
    }
}

/// Where the user is in the land → preferences → designs flow.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlannerStep {
    #[default]
    Land,
    Preferences,
    Designs,
}

impl PlannerStep {
    pub fn title(self) -> &'static str {
        match self {
            Self::Land => "Land Measurements",
            Self::Preferences => "House Preferences",
            Self::Designs => "Your Designs",
        }
    }

    /// The step "Back" leads to. `Land` has no predecessor.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Land => None,
            Self::Preferences => Some(Self::Land),
            Self::Designs => Some(Self::Preferences),
        }
    }
}
