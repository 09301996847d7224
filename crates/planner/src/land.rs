use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::planner_error::PlannerError;

/// Relative tolerance used when checking a stored area against `width * length`.
const AREA_TOLERANCE: f64 = 1e-9;

/// Outline family of a plot. Selects the boundary-generation branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotShape {
    #[default]
    Rectangular,
    Square,
    Irregular,
}

impl PlotShape {
    pub const ALL: [PlotShape; 3] = [Self::Rectangular, Self::Square, Self::Irregular];

    /// Lower-case identifier, as used in descriptions and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Square => "square",
            Self::Irregular => "irregular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular",
            Self::Square => "Square",
            Self::Irregular => "Irregular",
        }
    }
}

impl fmt::Display for PlotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotShape {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| PlannerError::UnsupportedValue {
                field: "shape",
                value: s.to_string(),
            })
    }
}

/// Terrain slope. Carried through to history and export; no engine reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slope {
    #[default]
    Flat,
    Gentle,
    Steep,
}

impl Slope {
    pub const ALL: [Slope; 3] = [Self::Flat, Self::Gentle, Self::Steep];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Gentle => "gentle",
            Self::Steep => "steep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Gentle => "Gentle Slope",
            Self::Steep => "Steep Slope",
        }
    }
}

impl FromStr for Slope {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slope| slope.as_str() == s)
            .ok_or_else(|| PlannerError::UnsupportedValue {
                field: "slope",
                value: s.to_string(),
            })
    }
}

/// A validated plot description. `area` is always `width * length`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLandMeasurement")]
pub struct LandMeasurement {
    width: f64,
    length: f64,
    area: f64,
    shape: PlotShape,
    slope: Slope,
}

impl LandMeasurement {
    /// Build a measurement, rejecting non-positive or non-finite dimensions
    /// and dimensions whose product overflows or underflows.
    pub fn new(
        width: f64,
        length: f64,
        shape: PlotShape,
        slope: Slope,
    ) -> Result<Self, PlannerError> {
        check_dimension("width", width)?;
        check_dimension("length", length)?;
        let area = width * length;
        check_dimension("area", area)?;
        Ok(Self {
            width,
            length,
            area,
            shape,
            slope,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn shape(&self) -> PlotShape {
        self.shape
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), PlannerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidDimension { field, value })
    }
}

/// Wire form of [`LandMeasurement`]; converted through [`TryFrom`] so stored
/// data goes through the same checks as freshly entered data.
#[derive(Deserialize)]
struct RawLandMeasurement {
    width: f64,
    length: f64,
    area: f64,
    shape: PlotShape,
    slope: Slope,
}

impl TryFrom<RawLandMeasurement> for LandMeasurement {
    type Error = PlannerError;

    fn try_from(raw: RawLandMeasurement) -> Result<Self, Self::Error> {
        let land = LandMeasurement::new(raw.width, raw.length, raw.shape, raw.slope)?;
        let tolerance = AREA_TOLERANCE * land.area.max(1.0);
        if (land.area - raw.area).abs() > tolerance {
            return Err(PlannerError::AreaMismatch {
                expected: land.area,
                found: raw.area,
            });
        }
        Ok(land)
    }
}
