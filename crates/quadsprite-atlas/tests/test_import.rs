//! Import tests: JSON atlases on disk through to sprite sheet geometry.

use std::io::Write;

use pretty_assertions::assert_eq;
use quadsprite_atlas::{import_atlas, AtlasImportError, JsonAtlasSource, SpriteSheet};
use quadsprite_spec::TextureSize;

const ATLAS: &str = r#"
{
  "frames": {
    "coin_0.png": { "frame": {"x": 0,  "y": 0, "w": 16, "h": 16}, "rotated": false,
                    "spriteSourceSize": {"x": 0, "y": 0, "w": 16, "h": 16}, "sourceSize": {"w": 16, "h": 16} },
    "coin_1.png": { "frame": {"x": 16, "y": 0, "w": 16, "h": 16}, "rotated": false,
                    "spriteSourceSize": {"x": 0, "y": 0, "w": 16, "h": 16}, "sourceSize": {"w": 16, "h": 16} },
    "coin_2.png": { "frame": {"x": 0, "y": 16, "w": 16, "h": 16}, "rotated": false,
                    "spriteSourceSize": {"x": 0, "y": 0, "w": 16, "h": 16}, "sourceSize": {"w": 16, "h": 16} }
  },
  "meta": { "image": "coin.png", "size": {"w": 32, "h": 32} }
}
"#;

fn write_atlas(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_import_from_file_builds_sheet() {
    let file = write_atlas(ATLAS);
    let import = import_atlas(&JsonAtlasSource::from_path(file.path()));
    assert!(import.is_ok());

    let sheet = SpriteSheet::from_import(import);
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.texture(), Some(TextureSize::new(32, 32)));
    assert_eq!(sheet.index_of("coin_2"), Some(2));

    // coin_2 sits in the bottom-left quarter of the texture.
    let geometry = sheet.geometry(2).unwrap();
    assert_eq!(
        geometry.uvs,
        [[0.0, 0.0], [0.5, 0.0], [0.0, 0.5], [0.5, 0.5]]
    );
    assert_eq!(geometry.scale, [16.0, 16.0, 0.0]);

    // coin_1 sits in the top-right quarter.
    assert_eq!(
        sheet.geometry(1).unwrap().uvs,
        [[0.5, 0.5], [1.0, 0.5], [0.5, 1.0], [1.0, 1.0]]
    );
}

#[test]
fn test_broken_file_yields_empty_sheet_and_error() {
    let file = write_atlas(r#"{ "frames": { "a.png": { "frame": "oops" } } }"#);
    let import = import_atlas(&JsonAtlasSource::from_path(file.path()));
    assert!(matches!(import.error, Some(AtlasImportError::Json(_))));

    let sheet = SpriteSheet::from_import(import);
    assert!(sheet.is_empty());
}

#[test]
fn test_duplicate_names_after_extension_strip() {
    let file = write_atlas(
        r#"{ "frames": [
            { "filename": "a.png", "frame": {"x": 0, "y": 0, "w": 1, "h": 1} },
            { "filename": "a.jpg", "frame": {"x": 1, "y": 0, "w": 1, "h": 1} }
        ] }"#,
    );
    let import = import_atlas(&JsonAtlasSource::from_path(file.path()));
    match import.error {
        Some(AtlasImportError::DuplicateFrame(name)) => assert_eq!(name, "a"),
        other => panic!("expected duplicate frame error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let import = import_atlas(&JsonAtlasSource::from_path(&path));
    let err = import.error.expect("import should fail");
    assert_eq!(err.code(), "ATLAS_001");
    assert!(err.to_string().contains("missing.json"));
}
