#![no_main]

use libfuzzer_sys::fuzz_target;
use wardrobe_advisor::{suggest_defaults, ConfigurationInput, LengthUnit, WardrobeType};

// The rule engine is total: any floats, including NaN and infinities, must
// produce a result without panicking.
fuzz_target!(|data: &[u8]| {
    if data.len() < 26 {
        return;
    }
    let float = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i..i + 8]);
        f64::from_le_bytes(bytes)
    };
    let unit = if data[24] % 2 == 0 {
        LengthUnit::Mm
    } else {
        LengthUnit::Ft
    };
    let wardrobe_type = match data[25] % 3 {
        0 => WardrobeType::Openable,
        1 => WardrobeType::Sliding,
        _ => WardrobeType::WalkIn,
    };

    let input = ConfigurationInput::new(unit, float(0), float(8), float(16), wardrobe_type);
    let result = suggest_defaults(&input);
    assert!(result.drawers >= 2 && result.drawers <= 6);
});
