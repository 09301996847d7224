use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::planner_error::PlannerError;

/// Parse a closed-set value by its lower-case identifier.
fn parse_closed<T: Copy>(
    field: &'static str,
    s: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, PlannerError> {
    all.iter()
        .copied()
        .find(|v| as_str(*v) == s)
        .ok_or_else(|| PlannerError::UnsupportedValue {
            field,
            value: s.to_string(),
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStyle {
    #[default]
    Modern,
    Traditional,
    Minimalist,
    Colonial,
    Craftsman,
}

impl HouseStyle {
    pub const ALL: [HouseStyle; 5] = [
        Self::Modern,
        Self::Traditional,
        Self::Minimalist,
        Self::Colonial,
        Self::Craftsman,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Traditional => "traditional",
            Self::Minimalist => "minimalist",
            Self::Colonial => "colonial",
            Self::Craftsman => "craftsman",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Traditional => "Traditional",
            Self::Minimalist => "Minimalist",
            Self::Colonial => "Colonial",
            Self::Craftsman => "Craftsman",
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseStyle {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("style", s, &Self::ALL, Self::as_str)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutdoorSpace {
    Small,
    #[default]
    Medium,
    Large,
}

impl OutdoorSpace {
    pub const ALL: [OutdoorSpace; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl FromStr for OutdoorSpace {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("outdoorSpace", s, &Self::ALL, Self::as_str)
    }
}

/// Budget tier. Ordered from cheapest to most expensive.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [Self::Low, Self::Medium, Self::High, Self::Luxury];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Luxury => "luxury",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Economic",
            Self::Medium => "Standard",
            Self::High => "Premium",
            Self::Luxury => "Luxury",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("budget", s, &Self::ALL, Self::as_str)
    }
}

/// What the user wants built. Counts are validated by [`HousePreferences::validate`],
/// which deserialization also runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawHousePreferences")]
pub struct HousePreferences {
    pub style: HouseStyle,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub floors: u32,
    pub garage: bool,
    pub outdoor_space: OutdoorSpace,
    pub budget: BudgetTier,
}

impl Default for HousePreferences {
    fn default() -> Self {
        Self {
            style: HouseStyle::Modern,
            bedrooms: 3,
            bathrooms: 2,
            floors: 1,
            garage: true,
            outdoor_space: OutdoorSpace::Medium,
            budget: BudgetTier::Medium,
        }
    }
}

impl HousePreferences {
    /// Check that every count is at least one.
    pub fn validate(&self) -> Result<(), PlannerError> {
        for (field, value) in [
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
            ("floors", self.floors),
        ] {
            if value < 1 {
                return Err(PlannerError::InvalidCount { field, value });
            }
        }
        Ok(())
    }

    pub fn is_multi_level(&self) -> bool {
        self.floors > 1
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHousePreferences {
    style: HouseStyle,
    bedrooms: u32,
    bathrooms: u32,
    floors: u32,
    garage: bool,
    outdoor_space: OutdoorSpace,
    budget: BudgetTier,
}

impl TryFrom<RawHousePreferences> for HousePreferences {
    type Error = PlannerError;

    fn try_from(raw: RawHousePreferences) -> Result<Self, Self::Error> {
        let prefs = HousePreferences {
            style: raw.style,
            bedrooms: raw.bedrooms,
            bathrooms: raw.bathrooms,
            floors: raw.floors,
            garage: raw.garage,
            outdoor_space: raw.outdoor_space,
            budget: raw.budget,
        };
        prefs.validate()?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_defaults() {
        let prefs = HousePreferences::default();
        assert_eq!(prefs.style, HouseStyle::Modern);
        assert_eq!(prefs.bedrooms, 3);
        assert_eq!(prefs.bathrooms, 2);
        assert_eq!(prefs.floors, 1);
        assert!(prefs.garage);
        assert_eq!(prefs.outdoor_space, OutdoorSpace::Medium);
        assert_eq!(prefs.budget, BudgetTier::Medium);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let prefs = HousePreferences {
            floors: 0,
            ..Default::default()
        };
        assert_eq!(
            prefs.validate(),
            Err(PlannerError::InvalidCount {
                field: "floors",
                value: 0
            })
        );
    }

    #[test]
    fn test_parse_every_style() {
        for style in HouseStyle::ALL {
            assert_eq!(style.as_str().parse::<HouseStyle>(), Ok(style));
        }
        assert!("gothic".parse::<HouseStyle>().is_err());
        assert!("Modern".parse::<HouseStyle>().is_err());
    }

    #[test]
    fn test_parse_budget_and_outdoor() {
        assert_eq!("luxury".parse::<BudgetTier>(), Ok(BudgetTier::Luxury));
        assert_eq!("large".parse::<OutdoorSpace>(), Ok(OutdoorSpace::Large));
        let err = "huge".parse::<OutdoorSpace>().unwrap_err();
        assert!(matches!(
            err,
            PlannerError::UnsupportedValue {
                field: "outdoorSpace",
                ..
            }
        ));
    }

    #[test]
    fn test_budget_tiers_are_ordered() {
        assert!(BudgetTier::Low < BudgetTier::Medium);
        assert!(BudgetTier::Medium < BudgetTier::High);
        assert!(BudgetTier::High < BudgetTier::Luxury);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_string(&HousePreferences::default()).expect("serialize");
        assert!(json.contains("\"outdoorSpace\":\"medium\""), "got: {json}");
        assert!(json.contains("\"style\":\"modern\""), "got: {json}");
    }

    #[test]
    fn test_json_rejects_unknown_budget() {
        let json = r#"{"style":"modern","bedrooms":3,"bathrooms":2,"floors":1,"garage":true,"outdoorSpace":"medium","budget":"unlimited"}"#;
        assert!(serde_json::from_str::<HousePreferences>(json).is_err());
    }

    #[test]
    fn test_json_rejects_zero_counts() {
        let json = r#"{"style":"modern","bedrooms":0,"bathrooms":2,"floors":1,"garage":true,"outdoorSpace":"medium","budget":"medium"}"#;
        let err = serde_json::from_str::<HousePreferences>(json).unwrap_err();
        assert!(err.to_string().contains("bedrooms"), "got: {err}");

        let valid = serde_json::to_string(&HousePreferences::default()).expect("serialize");
        let restored: HousePreferences = serde_json::from_str(&valid).expect("deserialize");
        assert_eq!(restored, HousePreferences::default());
    }
}
