#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::calculations::*;
    use super::super::generator::*;
    use super::super::tables::*;
    use crate::config::DESIGN_BATCH_SIZE;
    use crate::format::format_currency;
    use crate::land::{LandMeasurement, PlotShape, Slope};
    use crate::planner_error::PlannerError;
    use crate::preferences::{BudgetTier, HousePreferences, HouseStyle, OutdoorSpace};

    fn sample_land() -> LandMeasurement {
        LandMeasurement::new(20.0, 25.0, PlotShape::Rectangular, Slope::Flat).unwrap()
    }

    fn sample_prefs() -> HousePreferences {
        HousePreferences {
            style: HouseStyle::Modern,
            bedrooms: 3,
            bathrooms: 2,
            floors: 1,
            garage: true,
            outdoor_space: OutdoorSpace::Medium,
            budget: BudgetTier::Medium,
        }
    }

    fn all_preference_combinations() -> Vec<HousePreferences> {
        let mut out = Vec::new();
        for style in HouseStyle::ALL {
            for budget in BudgetTier::ALL {
                for outdoor_space in OutdoorSpace::ALL {
                    for floors in 1..=3 {
                        for garage in [false, true] {
                            out.push(HousePreferences {
                                style,
                                bedrooms: floors + 1,
                                bathrooms: 2,
                                floors,
                                garage,
                                outdoor_space,
                                budget,
                            });
                        }
                    }
                }
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Footprint sizing
    // -------------------------------------------------------------------------

    #[test]
    fn max_footprint_is_forty_percent_of_area() {
        assert!((max_footprint(500.0) - 200.0).abs() < 1e-9);
        assert!((max_footprint(1234.0) - 493.6).abs() < 1e-9);
    }

    #[test]
    fn square_footage_single_floor() {
        // 200 * 0.8 * 1.0 = 160
        assert_eq!(square_footage(200.0, 1, 0.8, 1.0), Ok(160));
        // 200 * 0.7 * 0.9 = 126
        assert_eq!(square_footage(200.0, 1, 0.7, 0.9), Ok(126));
    }

    #[test]
    fn square_footage_spreads_over_floors() {
        // footprint = 200 / sqrt(4) = 100, total = 100 * 4 = 400
        assert_eq!(square_footage(200.0, 4, 1.0, 1.0), Ok(400));
        // footprint = 200 / sqrt(2), total = 200 * sqrt(2) ~= 282.84
        assert_eq!(square_footage(200.0, 2, 1.0, 1.0), Ok(283));
    }

    #[test]
    fn square_footage_never_zero() {
        assert_eq!(square_footage(0.1, 1, 0.7, 0.9), Ok(1));
    }

    #[test]
    fn square_footage_past_u32_keeps_its_value() {
        // A 100 km x 100 km plot: 4e9 m² footprint, past u32::MAX.
        assert_eq!(square_footage(4e9, 1, 1.0, 1.0), Ok(4_000_000_000));
        assert_eq!(square_footage(4e9, 1, 1.1, 1.0), Ok(4_400_000_000));
    }

    #[test]
    fn square_footage_out_of_range_is_an_error() {
        let err = square_footage(1e300, 1, 0.8, 1.0).unwrap_err();
        assert!(matches!(err, PlannerError::SizeOutOfRange { .. }), "{err}");
        assert!(square_footage(f64::INFINITY, 2, 0.8, 1.0).is_err());
        assert!(square_footage(u64::MAX as f64, 1, 1.0, 1.0).is_err());
    }

    // -------------------------------------------------------------------------
    // Concrete scenario: 20 x 25 rectangular plot, modern / medium
    // -------------------------------------------------------------------------

    #[test]
    fn scenario_sizes_within_bounds() {
        let land = sample_land();
        let prefs = sample_prefs();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let designs = generate_designs(&land, &prefs, &mut rng).unwrap();
            assert_eq!(designs.len(), 3);
            for design in &designs {
                assert!(
                    (126..=220).contains(&design.square_footage),
                    "seed {seed}: {} out of [126, 220]",
                    design.square_footage
                );
            }
        }
    }

    #[test]
    fn scenario_cost_tracks_base_rate() {
        let land = sample_land();
        let prefs = sample_prefs();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for design in generate_designs(&land, &prefs, &mut rng).unwrap() {
            let expected = 1800.0 * 1.1 * design.square_footage as f64;
            let amount = estimated_cost_amount(&prefs, design.square_footage);
            assert!((amount - expected).abs() < 1e-6, "{amount} vs {expected}");
            assert_eq!(design.estimated_cost, format_currency(amount));
        }
    }

    #[test]
    fn scenario_feature_list() {
        let features = assemble_features(&sample_prefs(), 500.0);
        let expected = [
            "Floor-to-ceiling windows",
            "Open concept living areas",
            "Smart home technology integration",
            "Sustainable building materials",
            "Granite countertops",
            "Hardwood floors in main areas",
            "Walk-in closets",
            "Outdoor dining area",
            "Garden spaces",
            "Landscaped yard",
            "Integrated garage",
            "Single-level living for convenience",
        ];
        assert_eq!(features, expected);
    }

    #[test]
    fn scenario_description() {
        assert_eq!(
            describe(&sample_land(), &sample_prefs()),
            "This modern home is designed to maximize your 500m² rectangular plot. \
             Clean lines, minimalist aesthetics, open floor plans, and integration with natural surroundings."
        );
    }

    // -------------------------------------------------------------------------
    // Batch invariants
    // -------------------------------------------------------------------------

    #[test]
    fn batch_copies_counts_for_every_combination() {
        let land = LandMeasurement::new(18.0, 32.5, PlotShape::Irregular, Slope::Gentle).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for prefs in all_preference_combinations() {
            let designs = generate_designs(&land, &prefs, &mut rng).unwrap();
            assert_eq!(designs.len(), DESIGN_BATCH_SIZE);
            for design in &designs {
                assert!(design.square_footage > 0);
                assert_eq!(design.bedrooms, prefs.bedrooms);
                assert_eq!(design.bathrooms, prefs.bathrooms);
                assert_eq!(design.floors, prefs.floors);
            }
        }
    }

    #[test]
    fn batch_ids_are_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let designs = generate_designs(&sample_land(), &sample_prefs(), &mut rng).unwrap();
        assert_ne!(designs[0].id, designs[1].id);
        assert_ne!(designs[1].id, designs[2].id);
        assert_ne!(designs[0].id, designs[2].id);
        assert_eq!(designs[0].id.get_version_num(), 4);
    }

    #[test]
    fn batch_images_follow_candidate_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let designs = generate_designs(&sample_land(), &sample_prefs(), &mut rng).unwrap();
        for (i, design) in designs.iter().enumerate() {
            assert_eq!(design.image_url, DESIGN_IMAGES[i]);
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let first = generate_designs_at(&sample_land(), &sample_prefs(), &mut a, at).unwrap();
        let second = generate_designs_at(&sample_land(), &sample_prefs(), &mut b, at).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|d| d.created_at == at));
    }

    #[test]
    fn candidates_differ_in_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let land = LandMeasurement::new(40.0, 60.0, PlotShape::Square, Slope::Flat).unwrap();
        let designs = generate_designs(&land, &sample_prefs(), &mut rng).unwrap();
        let sizes: Vec<u64> = designs.iter().map(|d| d.square_footage).collect();
        assert!(sizes[0] != sizes[1] || sizes[1] != sizes[2], "sizes: {sizes:?}");
    }

    #[test]
    fn very_large_plot_keeps_exact_sizes() {
        // 100 km x 100 km: two-floor candidates land around 3.5e9 to 6.3e9 m².
        let land = LandMeasurement::new(1e5, 1e5, PlotShape::Square, Slope::Flat).unwrap();
        let prefs = HousePreferences {
            floors: 2,
            ..sample_prefs()
        };
        let stacked = 0.4e10 * 2f64.sqrt();
        let mut past_u32 = 0;
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let designs = generate_designs(&land, &prefs, &mut rng).unwrap();
            let sizes: Vec<u64> = designs.iter().map(|d| d.square_footage).collect();
            assert!(sizes[0] != sizes[1] || sizes[1] != sizes[2], "sizes: {sizes:?}");
            for design in &designs {
                let size = design.square_footage as f64;
                assert!(size >= stacked * 0.7 * 0.9 - 1.0, "seed {seed}: {size}");
                assert!(size <= stacked * 1.0 * 1.1 + 1.0, "seed {seed}: {size}");
                assert_eq!(
                    design.estimated_cost,
                    format_currency(estimated_cost_amount(&prefs, design.square_footage))
                );
            }
            past_u32 += sizes.iter().filter(|s| **s > u64::from(u32::MAX)).count();
        }
        assert!(past_u32 > 0);
    }

    #[test]
    fn unrepresentable_sizes_fail_the_batch() {
        let land = LandMeasurement::new(1e154, 1e154, PlotShape::Square, Slope::Flat).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = generate_designs(&land, &sample_prefs(), &mut rng).unwrap_err();
        assert!(matches!(err, PlannerError::SizeOutOfRange { .. }), "{err}");
    }

    #[test]
    fn zero_counts_are_rejected_before_drawing() {
        for (field, prefs) in [
            ("bedrooms", HousePreferences { bedrooms: 0, ..sample_prefs() }),
            ("bathrooms", HousePreferences { bathrooms: 0, ..sample_prefs() }),
            ("floors", HousePreferences { floors: 0, ..sample_prefs() }),
        ] {
            let mut rng = ChaCha8Rng::seed_from_u64(8);
            let err = generate_designs(&sample_land(), &prefs, &mut rng).unwrap_err();
            assert_eq!(err, PlannerError::InvalidCount { field, value: 0 });
        }
    }

    // -------------------------------------------------------------------------
    // Cost rules
    // -------------------------------------------------------------------------

    #[test]
    fn cost_strictly_increases_with_budget_tier() {
        for style in HouseStyle::ALL {
            let amounts: Vec<f64> = BudgetTier::ALL
                .iter()
                .map(|&budget| {
                    let prefs = HousePreferences {
                        style,
                        budget,
                        ..sample_prefs()
                    };
                    estimated_cost_amount(&prefs, 180)
                })
                .collect();
            for pair in amounts.windows(2) {
                assert!(pair[1] > pair[0], "{style}: {amounts:?}");
            }
        }
    }

    #[test]
    fn second_floor_adds_fifteen_percent() {
        let one = HousePreferences {
            floors: 1,
            ..sample_prefs()
        };
        let two = HousePreferences {
            floors: 2,
            ..sample_prefs()
        };
        let base = estimated_cost_amount(&one, 200);
        let upper = estimated_cost_amount(&two, 200);
        assert!(upper >= base * 1.15 - 1e-6);
        assert!((upper / base - 1.15).abs() < 1e-9);
    }

    #[test]
    fn floor_multiplier_values() {
        assert!((floor_cost_multiplier(1) - 1.0).abs() < 1e-12);
        assert!((floor_cost_multiplier(2) - 1.15).abs() < 1e-12);
        assert!((floor_cost_multiplier(3) - 1.30).abs() < 1e-12);
    }

    #[test]
    fn cost_tables() {
        assert_eq!(base_cost_per_sqm(BudgetTier::Low), 1200.0);
        assert_eq!(base_cost_per_sqm(BudgetTier::Luxury), 3500.0);
        assert_eq!(style_cost_multiplier(HouseStyle::Minimalist), 0.95);
        assert_eq!(style_cost_multiplier(HouseStyle::Craftsman), 1.20);
    }

    #[test]
    fn estimated_cost_is_formatted_currency() {
        let prefs = HousePreferences {
            style: HouseStyle::Traditional,
            budget: BudgetTier::High,
            ..sample_prefs()
        };
        // 2500 * 1.0 * 1.0 * 150
        assert_eq!(estimated_cost(&prefs, 150), "$375,000");
    }

    // -------------------------------------------------------------------------
    // Features
    // -------------------------------------------------------------------------

    #[test]
    fn feature_list_has_minimum_length() {
        for prefs in all_preference_combinations() {
            let features = assemble_features(&prefs, 100.0);
            assert!(features.len() >= 9, "{prefs:?}: {}", features.len());
            let fixed = style_features(prefs.style).len()
                + budget_features(prefs.budget).len()
                + outdoor_features(prefs.outdoor_space).len();
            assert!(fixed >= 9);
        }
    }

    #[test]
    fn garage_feature_matches_preference() {
        for prefs in all_preference_combinations() {
            let features = assemble_features(&prefs, 300.0);
            let garages = features.iter().filter(|f| f.ends_with("garage")).count();
            assert_eq!(garages, usize::from(prefs.garage), "{prefs:?}");
        }
    }

    #[test]
    fn garage_wording_depends_on_floors() {
        let single = assemble_features(&sample_prefs(), 300.0);
        assert!(single.contains(&"Integrated garage".to_string()));

        let multi = assemble_features(
            &HousePreferences {
                floors: 2,
                ..sample_prefs()
            },
            300.0,
        );
        assert!(multi.contains(&"Attached garage".to_string()));
    }

    #[test]
    fn exactly_one_floor_layout_feature() {
        for prefs in all_preference_combinations() {
            let features = assemble_features(&prefs, 300.0);
            let upstairs = features
                .iter()
                .filter(|f| *f == "Primary bedroom suite on second floor")
                .count();
            let single = features
                .iter()
                .filter(|f| *f == "Single-level living for convenience")
                .count();
            assert_eq!(upstairs + single, 1);
            assert_eq!(upstairs == 1, prefs.floors > 1);
        }
    }

    #[test]
    fn large_backyard_only_above_500() {
        let at_limit = assemble_features(&sample_prefs(), 500.0);
        assert!(!at_limit.contains(&"Large backyard".to_string()));
        let above = assemble_features(&sample_prefs(), 500.5);
        assert!(above.contains(&"Large backyard".to_string()));
    }

    #[test]
    fn luxury_and_large_tables_have_four_entries() {
        assert_eq!(budget_features(BudgetTier::Luxury).len(), 4);
        assert_eq!(outdoor_features(OutdoorSpace::Large).len(), 4);
        assert_eq!(outdoor_features(OutdoorSpace::Small).len(), 2);
    }

    // -------------------------------------------------------------------------
    // Titles
    // -------------------------------------------------------------------------

    #[test]
    fn descriptors() {
        assert_eq!(size_descriptor(1), "Compact");
        assert_eq!(size_descriptor(2), "Compact");
        assert_eq!(size_descriptor(3), "Balanced");
        assert_eq!(size_descriptor(4), "Spacious");
        assert_eq!(level_descriptor(1), "Single-Story");
        assert_eq!(level_descriptor(2), "Multi-Level");
    }

    #[test]
    fn title_uses_style_token() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for style in HouseStyle::ALL {
            let prefs = HousePreferences {
                style,
                ..sample_prefs()
            };
            let title = design_title(&prefs, &mut rng);
            let tokens = style_title_tokens(style);
            assert!(
                tokens
                    .iter()
                    .any(|t| title == format!("{t} Balanced Single-Story Home")),
                "unexpected title {title}"
            );
        }
    }

    #[test]
    fn compose_title_multi_level() {
        let prefs = HousePreferences {
            bedrooms: 5,
            floors: 2,
            ..sample_prefs()
        };
        assert_eq!(
            compose_title("Urban", &prefs),
            "Urban Spacious Multi-Level Home"
        );
    }

    #[test]
    fn key_features_are_first_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let designs = generate_designs(&sample_land(), &sample_prefs(), &mut rng).unwrap();
        let key = designs[0].key_features();
        assert_eq!(key.len(), 3);
        assert_eq!(key, &designs[0].features[..3]);
    }
}
