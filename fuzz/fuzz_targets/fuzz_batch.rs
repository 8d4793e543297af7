#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use wardrobe_advisor::batch::parse_batch;
use wardrobe_advisor::config::DefaultsConfig;
use wardrobe_advisor::{advise_batch, BatchFormat, WardrobeAdvisor};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let advisor = WardrobeAdvisor::default();
        let defaults = DefaultsConfig::default();
        for format in [BatchFormat::Toml, BatchFormat::Json, BatchFormat::Yaml] {
            if let Ok(entries) = parse_batch(content, format, Path::new("fuzz")) {
                let _ = advise_batch(&advisor, &entries, &defaults);
            }
        }
    }
});
