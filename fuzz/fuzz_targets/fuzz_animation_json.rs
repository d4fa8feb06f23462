#![no_main]

use libfuzzer_sys::fuzz_target;
use quadsprite_spec::{validate_animation, SpriteAnimation};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(animation) = SpriteAnimation::from_json(text) else {
        return;
    };
    for frameset in &animation.framesets {
        assert!(!(frameset.looping() && frameset.number_of_plays() > 0));
        assert_eq!(
            frameset.number_of_frames().is_some(),
            frameset.start_frame <= frameset.end_frame
        );
    }
    let _ = validate_animation(&animation, Some(64));
    let _ = serde_json::to_string(&animation);
});
