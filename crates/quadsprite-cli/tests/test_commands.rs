//! End-to-end tests of the command building blocks against files on disk.

use std::io::Write;

use pretty_assertions::assert_eq;
use quadsprite_cli::commands::json_output::{JsonError, ValidateOutput};
use quadsprite_cli::commands::play::{select_frameset, simulate, PlaySettings};
use quadsprite_cli::commands::slice::slice_frames;
use quadsprite_cli::input::{load_animation, load_atlas};
use quadsprite_spec::validate_animation;

const ATLAS: &str = r#"{
  "frames": [
    { "filename": "hero_0.png", "frame": {"x": 0,  "y": 0, "w": 16, "h": 16} },
    { "filename": "hero_1.png", "frame": {"x": 16, "y": 0, "w": 16, "h": 16} },
    { "filename": "hero_2.png", "frame": {"x": 32, "y": 0, "w": 16, "h": 16} },
    { "filename": "hero_3.png", "frame": {"x": 48, "y": 0, "w": 16, "h": 16} }
  ],
  "meta": { "size": {"w": 64, "h": 16} }
}"#;

const ANIMATION: &str = r#"{
  "framesets": [
    { "name": "idle", "start_frame": 0, "end_frame": 1, "duration": 1.0, "looping": true },
    { "name": "attack", "start_frame": 1, "end_frame": 3, "duration": 0.75, "ping_pong": true },
    { "name": "charge", "start_frame": 2, "end_frame": 5, "duration": 0.4 }
  ]
}"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_slice_atlas_file() {
    let atlas = write_temp(ATLAS);
    let sheet = load_atlas(atlas.path()).unwrap();
    let frames = slice_frames(&sheet);

    let names: Vec<&str> = frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["hero_0", "hero_1", "hero_2", "hero_3"]);
    assert_eq!(frames[3].uvs[0], [0.75, 0.0]);
    assert_eq!(frames[3].uvs[3], [1.0, 1.0]);
}

#[test]
fn test_validate_against_atlas_flags_out_of_range_frameset() {
    let atlas = write_temp(ATLAS);
    let animation = write_temp(ANIMATION);

    let sheet = load_atlas(atlas.path()).unwrap();
    let animation = load_animation(animation.path()).unwrap();
    let result = validate_animation(&animation, Some(sheet.len()));

    let output = ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(JsonError::from).collect(),
        warnings: Vec::new(),
        framesets: Some(animation.len()),
    };
    assert!(!output.success);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, "E004");
    assert!(output.errors[0]
        .path
        .as_deref()
        .is_some_and(|p| p.starts_with("framesets[2]")));

    // Without the atlas the same set is valid.
    assert!(validate_animation(&animation, None).is_ok());
}

#[test]
fn test_play_attack_timeline() {
    let animation = write_temp(ANIMATION);
    let animation = load_animation(animation.path()).unwrap();
    let frameset = select_frameset(&animation, Some("Attack")).unwrap();

    let timeline = simulate(
        frameset,
        PlaySettings {
            fps: 4,
            seconds: 3.0,
            seed: 7,
        },
    );
    let frames: Vec<u32> = timeline.events.iter().map(|e| e.frame).collect();
    assert_eq!(frames, vec![1, 2, 3, 2, 1]);
    assert_eq!(timeline.finished_at, Some(5));
}
