//! Property tests for the layout and storage rules.

use proptest::prelude::*;

use wardrobe_advisor::{suggest_defaults, ConfigurationInput, LengthUnit, WardrobeType};

fn wardrobe_type() -> impl Strategy<Value = WardrobeType> {
    prop_oneof![
        Just(WardrobeType::Openable),
        Just(WardrobeType::Sliding),
        Just(WardrobeType::WalkIn),
    ]
}

fn unit() -> impl Strategy<Value = LengthUnit> {
    prop_oneof![Just(LengthUnit::Mm), Just(LengthUnit::Ft)]
}

fn mm(unit: LengthUnit) -> f64 {
    unit.mm_factor()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the advisor is total; no f64 input panics.
    #[test]
    fn property_suggest_never_panics(
        width in any::<f64>(),
        height in any::<f64>(),
        depth in any::<f64>(),
        kind in wardrobe_type(),
        unit in unit(),
    ) {
        let result = suggest_defaults(&ConfigurationInput::new(unit, width, height, depth, kind));
        prop_assert!(result.columns >= 1);
    }

    /// PROPERTY: drawers always land in [2, 6].
    #[test]
    fn property_drawers_clamped(
        width in prop_oneof![-1.0e7f64..1.0e7, Just(f64::NAN), Just(f64::INFINITY)],
        kind in wardrobe_type(),
    ) {
        let result = suggest_defaults(&ConfigurationInput::mm(width, 2000.0, 600.0, kind));
        prop_assert!((2..=6).contains(&result.drawers), "drawers = {}", result.drawers);
    }

    /// PROPERTY: for openable wardrobes, wider never means fewer columns.
    #[test]
    fn property_openable_columns_monotonic(
        a in 1.0f64..20_000.0,
        b in 1.0f64..20_000.0,
    ) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let columns = |w| {
            suggest_defaults(&ConfigurationInput::mm(w, 2000.0, 600.0, WardrobeType::Openable))
                .columns
        };
        prop_assert!(columns(narrow) <= columns(wide));
    }

    /// PROPERTY: below 550 mm depth (in any unit) there are no rods and a
    /// foldable shelf is always fitted.
    #[test]
    fn property_shallow_depth_means_no_rods(
        depth_mm in 1.0f64..549.0,
        width_mm in 300.0f64..6000.0,
        height_mm in 300.0f64..3000.0,
        kind in wardrobe_type(),
        unit in unit(),
    ) {
        let factor = mm(unit);
        let input = ConfigurationInput::new(
            unit,
            width_mm / factor,
            height_mm / factor,
            depth_mm / factor,
            kind,
        );
        let result = suggest_defaults(&input);
        prop_assert_eq!(result.rods, 0);
        prop_assert!(result.foldable_shelf);
        prop_assert_eq!(result.shelves, result.columns * 4);
    }

    /// PROPERTY: walk-ins never get shutters or hinges.
    #[test]
    fn property_walkin_has_no_shutters(
        width in 1.0f64..10_000.0,
        height in 1.0f64..4000.0,
        depth in 1.0f64..2000.0,
        unit in unit(),
    ) {
        let result = suggest_defaults(&ConfigurationInput::new(
            unit, width, height, depth, WardrobeType::WalkIn,
        ));
        prop_assert_eq!(result.shutters, 0);
        prop_assert_eq!(result.hinges_per_shutter, 0);
        prop_assert!(!result.straightener_per_shutter);
    }

    /// PROPERTY: only openable wardrobes carry hinges, and openable ones
    /// always carry 2 to 4.
    #[test]
    fn property_hinges_only_on_openable(
        width in 1.0f64..10_000.0,
        height in 1.0f64..4000.0,
        kind in wardrobe_type(),
    ) {
        let result = suggest_defaults(&ConfigurationInput::mm(width, height, 600.0, kind));
        if kind == WardrobeType::Openable {
            prop_assert!((2..=4).contains(&result.hinges_per_shutter));
            prop_assert_eq!(result.shutters, result.columns);
        } else {
            prop_assert_eq!(result.hinges_per_shutter, 0);
        }
    }

    /// PROPERTY: identical input, identical output.
    #[test]
    fn property_deterministic(
        width in 1.0f64..10_000.0,
        height in 1.0f64..4000.0,
        depth in 1.0f64..2000.0,
        kind in wardrobe_type(),
        unit in unit(),
    ) {
        let input = ConfigurationInput::new(unit, width, height, depth, kind);
        prop_assert_eq!(suggest_defaults(&input), suggest_defaults(&input));
    }

    /// PROPERTY: with rods, every rod has a top shelf above it.
    #[test]
    fn property_shelves_cover_rods(
        width in 1.0f64..10_000.0,
        height in 1.0f64..4000.0,
        depth in 550.0f64..2000.0,
        kind in wardrobe_type(),
    ) {
        let result = suggest_defaults(&ConfigurationInput::mm(width, height, depth, kind));
        prop_assert!(result.rods >= 1);
        prop_assert!(!result.foldable_shelf);
        prop_assert!(result.shelves >= result.rods);
    }
}
