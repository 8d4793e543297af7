//! End-to-end scenarios for the advisor, one per reference wardrobe.
//!
//! Run with: `cargo test --test scenarios`

use wardrobe_advisor::{
    map_to_smart_default_type, suggest_defaults, ConfigurationInput, LengthUnit, NoteSeverity,
    WardrobeType,
};

#[test]
fn scenario_tall_openable_needs_straighteners() {
    let input = ConfigurationInput::mm(1200.0, 2400.0, 600.0, WardrobeType::Openable);
    let result = suggest_defaults(&input);

    assert_eq!(result.columns, 2);
    assert_eq!(result.shutters, 2);
    assert_eq!(result.hinges_per_shutter, 4);
    assert!(result.straightener_per_shutter);
    assert_eq!(result.rods, 3);
    assert_eq!(result.shelves, 3);
    assert_eq!(result.drawers, 4);
    assert!(!result.foldable_shelf);

    assert_eq!(result.notes.len(), 1);
    assert_eq!(result.notes[0].severity, NoteSeverity::Warning);
    assert!(result.notes[0].message.contains("straightener"));
}

#[test]
fn scenario_shallow_sliding_in_feet() {
    let input = ConfigurationInput::new(LengthUnit::Ft, 3.0, 7.0, 1.5, WardrobeType::Sliding);
    let result = suggest_defaults(&input);

    // 914.4 x 2133.6 x 457.2 mm
    assert_eq!(result.columns, 2);
    assert_eq!(result.shutters, 2);
    assert_eq!(result.hinges_per_shutter, 0);
    assert!(!result.straightener_per_shutter);
    assert_eq!(result.rods, 0);
    assert!(result.foldable_shelf);
    assert_eq!(result.shelves, 8);
    assert_eq!(result.drawers, 3);

    let messages: Vec<&str> = result.messages().collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("457 mm"), "{messages:?}");
    assert!(messages[1].contains("Hangers are not recommended"), "{messages:?}");
    assert_eq!(result.notes[0].severity, NoteSeverity::Info);
    assert_eq!(result.notes[1].severity, NoteSeverity::Warning);
}

#[test]
fn scenario_shallow_walkin() {
    let input = ConfigurationInput::mm(600.0, 2000.0, 300.0, WardrobeType::WalkIn);
    let result = suggest_defaults(&input);

    assert_eq!(result.columns, 1);
    assert_eq!(result.shutters, 0);
    assert_eq!(result.hinges_per_shutter, 0);
    assert_eq!(result.rods, 0);
    assert!(result.foldable_shelf);
    assert_eq!(result.shelves, 4);
    assert_eq!(result.drawers, 2);
    assert_eq!(result.notes.len(), 1);
}

#[test]
fn scenario_low_wide_openable() {
    let input = ConfigurationInput::mm(2000.0, 900.0, 600.0, WardrobeType::Openable);
    let result = suggest_defaults(&input);

    assert_eq!(result.columns, 3);
    assert_eq!(result.shutters, 3);
    assert_eq!(result.hinges_per_shutter, 2);
    assert!(!result.straightener_per_shutter);
    assert_eq!(result.rods, 2);
    assert_eq!(result.shelves, 6);
    assert_eq!(result.drawers, 6);
    assert!(!result.foldable_shelf);
    assert!(result.notes.is_empty());
}

#[test]
fn sliding_shutter_count_boundary() {
    let at = ConfigurationInput::mm(1800.0, 2100.0, 600.0, WardrobeType::Sliding);
    let past = ConfigurationInput::mm(1801.0, 2100.0, 600.0, WardrobeType::Sliding);

    assert_eq!(suggest_defaults(&at).shutters, 2);
    assert_eq!(suggest_defaults(&past).shutters, 3);
}

#[test]
fn nine_hundred_mm_rounds_up_to_two_columns() {
    let input = ConfigurationInput::mm(900.0, 2000.0, 600.0, WardrobeType::Openable);
    assert_eq!(suggest_defaults(&input).columns, 2);

    let input = ConfigurationInput::mm(550.0, 2000.0, 600.0, WardrobeType::Openable);
    assert_eq!(suggest_defaults(&input).columns, 1);
}

#[test]
fn quote_labels_map_to_types() {
    let input = ConfigurationInput::mm(
        2400.0,
        2400.0,
        600.0,
        map_to_smart_default_type("Walk-in"),
    );
    let result = suggest_defaults(&input);
    assert_eq!(result.shutters, 0);
    assert_eq!(result.columns, 4);
}
