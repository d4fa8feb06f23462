//! Atlas frame records.
//!
//! An atlas is a single texture packing many sub-images. Each [`AtlasFrame`]
//! describes one sub-image rectangle in pixel space, with a top-left origin
//! and y growing downward.

use serde::{Deserialize, Serialize};

/// Texture dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureSize {
    /// Creates a new texture size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One frame of an atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasFrame {
    /// Frame name, unique within an atlas.
    pub name: String,

    /// Top-left corner of the frame in the texture, in pixels.
    pub position: [f32; 2],

    /// Frame width and height in pixels.
    pub size: [f32; 2],

    /// Whether the packer rotated this frame by 90 degrees.
    /// Carried for round-tripping; slicing does not apply rotation.
    #[serde(default)]
    pub rotated: bool,

    /// Original, untrimmed sprite dimensions.
    #[serde(default)]
    pub frame_size: [f32; 2],

    /// Offset of the trimmed rectangle inside the original sprite.
    #[serde(default)]
    pub offset: [f32; 2],
}

impl AtlasFrame {
    /// Creates a frame at `position` with `size`. The source size defaults
    /// to `size` with no offset.
    pub fn new(name: impl Into<String>, position: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            name: name.into(),
            position,
            size,
            rotated: false,
            frame_size: size,
            offset: [0.0, 0.0],
        }
    }

    /// Marks the frame as rotated by the packer.
    pub fn with_rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// Sets the original sprite dimensions and trim offset.
    pub fn with_source(mut self, frame_size: [f32; 2], offset: [f32; 2]) -> Self {
        self.frame_size = frame_size;
        self.offset = offset;
        self
    }

    /// Pixel width.
    pub fn width(&self) -> f32 {
        self.size[0]
    }

    /// Pixel height.
    pub fn height(&self) -> f32 {
        self.size[1]
    }
}

/// A decoded atlas: the frames plus, when known, the texture they index into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasDocument {
    /// Texture dimensions declared by the atlas, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<TextureSize>,

    /// Frames in atlas order. Frame indices used by framesets refer to this order.
    pub frames: Vec<AtlasFrame>,
}

impl AtlasDocument {
    /// Creates a document from frames with no declared texture.
    pub fn new(frames: Vec<AtlasFrame>) -> Self {
        Self {
            texture: None,
            frames,
        }
    }

    /// Sets the declared texture size.
    pub fn with_texture(mut self, texture: TextureSize) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Derives a frame name from an atlas key by dropping everything from the
/// first `.` onward. Keys without a `.` are returned unchanged.
pub fn frame_name_from_key(key: &str) -> &str {
    match key.split_once('.') {
        Some((stem, _)) => stem,
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_name_strips_extension() {
        assert_eq!(frame_name_from_key("walk_01.png"), "walk_01");
        assert_eq!(frame_name_from_key("walk_01.anim.png"), "walk_01");
        assert_eq!(frame_name_from_key("idle"), "idle");
        assert_eq!(frame_name_from_key(".hidden"), "");
    }

    #[test]
    fn new_frame_defaults_source_to_size() {
        let frame = AtlasFrame::new("a", [4.0, 8.0], [16.0, 32.0]);
        assert_eq!(frame.frame_size, [16.0, 32.0]);
        assert_eq!(frame.offset, [0.0, 0.0]);
        assert!(!frame.rotated);
        assert_eq!(frame.width(), 16.0);
        assert_eq!(frame.height(), 32.0);
    }

    #[test]
    fn frame_deserializes_with_optional_fields_missing() {
        let json = r#"{ "name": "a", "position": [1, 2], "size": [3, 4] }"#;
        let frame: AtlasFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.position, [1.0, 2.0]);
        assert!(!frame.rotated);
        assert_eq!(frame.frame_size, [0.0, 0.0]);
    }

    #[test]
    fn degenerate_texture() {
        assert!(TextureSize::new(0, 10).is_degenerate());
        assert!(TextureSize::new(10, 0).is_degenerate());
        assert!(!TextureSize::new(1, 1).is_degenerate());
    }
}
