// ---------------------------------------------------------------------------
// PlannerError: input validation failures at the engine boundary
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while turning raw input into plot or preference records.
///
/// Engines never see these: every value that reaches them has already been
/// validated, so their lookup tables can stay total.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Width, length or their product is zero, negative, NaN or infinite.
    InvalidDimension { field: &'static str, value: f64 },
    /// A closed-set field received a value outside its enumeration.
    UnsupportedValue { field: &'static str, value: String },
    /// Bedrooms, bathrooms or floors below one.
    InvalidCount { field: &'static str, value: u32 },
    /// A stored area disagrees with `width * length`.
    AreaMismatch { expected: f64, found: f64 },
    /// A candidate's living area does not fit a whole number of m².
    SizeOutOfRange { value: f64 },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidDimension { field, value } => {
                write!(f, "Invalid {field}: {value} (must be greater than 0)")
            }
            PlannerError::UnsupportedValue { field, value } => {
                write!(f, "Unsupported {field}: '{value}'")
            }
            PlannerError::InvalidCount { field, value } => {
                write!(f, "Invalid {field}: {value} (must be at least 1)")
            }
            PlannerError::AreaMismatch { expected, found } => write!(
                f,
                "Area mismatch: width x length is {expected}, but area is {found}"
            ),
            PlannerError::SizeOutOfRange { value } => {
                write!(f, "House size of {value} m² is out of range for this plot")
            }
        }
    }
}

impl std::error::Error for PlannerError {}
