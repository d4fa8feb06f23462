#![no_main]

use libfuzzer_sys::fuzz_target;
use quadsprite_atlas::{import_atlas, JsonAtlasSource, SpriteSheet};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let import = import_atlas(&JsonAtlasSource::from_text(text));
    let failed = import.error.is_some();
    let sheet = SpriteSheet::from_import(import);

    // A failed import must leave an empty sheet.
    assert!(!failed || sheet.is_empty());
    for (_, geometry) in sheet.iter() {
        assert_eq!(geometry.triangles, quadsprite_atlas::QUAD_TRIANGLES);
    }
});
