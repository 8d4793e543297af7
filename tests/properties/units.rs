//! Property tests for unit normalization.

use proptest::prelude::*;

use wardrobe_advisor::{to_millimeters, LengthUnit, MM_PER_FOOT};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: converting to mm is idempotent once the value is in mm.
    #[test]
    fn property_mm_is_fixed_point(x in -1.0e6f64..1.0e6) {
        let once = to_millimeters(x, LengthUnit::Ft);
        prop_assert_eq!(to_millimeters(once, LengthUnit::Mm), once);
    }

    /// PROPERTY: feet scale by exactly 304.8.
    #[test]
    fn property_feet_scale_linearly(x in 0.0f64..1.0e4) {
        prop_assert_eq!(to_millimeters(x, LengthUnit::Ft), x * MM_PER_FOOT);
    }
}

#[test]
fn mm_per_foot_is_exact() {
    assert_eq!(MM_PER_FOOT, 304.8);
}
