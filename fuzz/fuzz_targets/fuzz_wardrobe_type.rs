#![no_main]

use libfuzzer_sys::fuzz_target;
use wardrobe_advisor::{map_to_smart_default_type, LengthUnit, WardrobeType};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // WardrobeType deserialization from YAML
        let _ = wardrobe_advisor::serde_yaml_ng::from_str::<WardrobeType>(content);

        // WardrobeType deserialization from JSON
        let _ = serde_json::from_str::<WardrobeType>(content);

        let _ = map_to_smart_default_type(content);
        let _ = content.parse::<WardrobeType>();
        let _ = content.parse::<LengthUnit>();
    }
});
