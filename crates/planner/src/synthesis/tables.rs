//! Fixed lookup tables keyed by preference enums.
//!
//! Every table is an exhaustive `match`, so a new enum member is a compile
//! error here until it gets its entries.

use crate::preferences::{BudgetTier, HouseStyle, OutdoorSpace};

/// Reference images handed out by candidate index. Not generated content.
pub const DESIGN_IMAGES: [&str; 6] = [
    "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/1029599/pexels-photo-1029599.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    "https://images.pexels.com/photos/53610/large-home-residential-house-architecture-53610.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
];

pub fn style_features(style: HouseStyle) -> &'static [&'static str] {
    match style {
        HouseStyle::Modern => &[
            "Floor-to-ceiling windows",
            "Open concept living areas",
            "Smart home technology integration",
            "Sustainable building materials",
        ],
        HouseStyle::Traditional => &[
            "Formal dining room",
            "Traditional fireplace",
            "Crown molding",
            "Wainscoting details",
        ],
        HouseStyle::Minimalist => &[
            "Hidden storage solutions",
            "Neutral color palette",
            "Multi-functional spaces",
            "Streamlined fixtures",
        ],
        HouseStyle::Colonial => &[
            "Grand entrance foyer",
            "Symmetrical window placement",
            "Decorative columns",
            "Central staircase",
        ],
        HouseStyle::Craftsman => &[
            "Exposed wooden beams",
            "Built-in cabinetry",
            "Stone fireplaces",
            "Covered front porch",
        ],
    }
}

pub fn budget_features(budget: BudgetTier) -> &'static [&'static str] {
    match budget {
        BudgetTier::Low => &[
            "Energy-efficient appliances",
            "Standard finishes",
            "Practical layout",
        ],
        BudgetTier::Medium => &[
            "Granite countertops",
            "Hardwood floors in main areas",
            "Walk-in closets",
        ],
        BudgetTier::High => &[
            "Custom cabinetry",
            "Premium finishes throughout",
            "Large master suite with spa bath",
        ],
        BudgetTier::Luxury => &[
            "Home theater room",
            "Wine cellar",
            "Custom architectural details",
            "Heated floors",
        ],
    }
}

pub fn outdoor_features(outdoor: OutdoorSpace) -> &'static [&'static str] {
    match outdoor {
        OutdoorSpace::Small => &["Cozy patio space", "Low-maintenance landscaping"],
        OutdoorSpace::Medium => &["Outdoor dining area", "Garden spaces", "Landscaped yard"],
        OutdoorSpace::Large => &[
            "Swimming pool",
            "Outdoor kitchen",
            "Extensive gardens",
            "Multiple entertainment zones",
        ],
    }
}

/// Construction cost per square meter, in dollars.
pub fn base_cost_per_sqm(budget: BudgetTier) -> f64 {
    match budget {
        BudgetTier::Low => 1200.0,
        BudgetTier::Medium => 1800.0,
        BudgetTier::High => 2500.0,
        BudgetTier::Luxury => 3500.0,
    }
}

pub fn style_cost_multiplier(style: HouseStyle) -> f64 {
    match style {
        HouseStyle::Modern => 1.10,
        HouseStyle::Traditional => 1.00,
        HouseStyle::Minimalist => 0.95,
        HouseStyle::Colonial => 1.15,
        HouseStyle::Craftsman => 1.20,
    }
}

/// Leading title word, picked uniformly per candidate.
pub fn style_title_tokens(style: HouseStyle) -> &'static [&'static str; 4] {
    match style {
        HouseStyle::Modern => &["Contemporary", "Urban", "Sleek", "Modernist"],
        HouseStyle::Traditional => &["Heritage", "Classic", "Timeless", "Elegant"],
        HouseStyle::Minimalist => &["Essential", "Pure", "Simple", "Zen"],
        HouseStyle::Colonial => &["Grand Colonial", "Heritage", "Stately", "Traditional"],
        HouseStyle::Craftsman => &["Artisan", "Handcrafted", "Rustic", "Naturalist"],
    }
}

pub fn style_description(style: HouseStyle) -> &'static str {
    match style {
        HouseStyle::Modern => "Clean lines, minimalist aesthetics, open floor plans, and integration with natural surroundings.",
        HouseStyle::Traditional => "Classic design elements, symmetrical facades, and formal room layouts that create a timeless appeal.",
        HouseStyle::Minimalist => "Simplified forms, monochromatic color schemes, and elimination of excess elements for serene living spaces.",
        HouseStyle::Colonial => "Symmetrical design, decorative crown moldings, grand entrances, and traditional room arrangements.",
        HouseStyle::Craftsman => "Hand-crafted details, natural materials, wide eaves, and cozy interior spaces with built-in features.",
    }
}
