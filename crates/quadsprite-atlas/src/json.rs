//! TexturePacker-style JSON atlases.
//!
//! Both layouts the packer writes are accepted:
//!
//! ```json
//! { "frames": { "walk_0.png": { "frame": {"x":0,"y":0,"w":32,"h":32}, ... } },
//!   "meta": { "size": {"w":128,"h":64} } }
//! ```
//!
//! and the array form, where each entry carries a `"filename"` key. Both forms
//! keep document order, since framesets address frames by index.
//!
//! Field mapping per entry: `position` comes from `frame.x/y`; `size` from
//! `spriteSourceSize.w/h` (falling back to `frame.w/h`); `frame_size` from
//! `sourceSize`; `offset` from `spriteSourceSize.x/y`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use quadsprite_spec::{frame_name_from_key, AtlasDocument, AtlasFrame, TextureSize};
use serde::Deserialize;

use crate::import::{AtlasImportError, AtlasSource};

#[derive(Debug, Deserialize)]
struct JsonAtlas {
    #[serde(default)]
    frames: Option<JsonFrames>,
    #[serde(default)]
    meta: Option<JsonMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonFrames {
    Hash(IndexMap<String, JsonFrameEntry>),
    Array(Vec<JsonNamedEntry>),
}

#[derive(Debug, Deserialize)]
struct JsonNamedEntry {
    filename: String,
    #[serde(flatten)]
    entry: JsonFrameEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonFrameEntry {
    frame: JsonRect,
    #[serde(default)]
    rotated: bool,
    #[serde(default)]
    sprite_source_size: Option<JsonRect>,
    #[serde(default)]
    source_size: Option<JsonSize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct JsonRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct JsonSize {
    w: f32,
    h: f32,
}

#[derive(Debug, Deserialize)]
struct JsonMeta {
    #[serde(default)]
    size: Option<JsonSize>,
}

impl JsonFrameEntry {
    fn into_frame(self, key: &str) -> AtlasFrame {
        let trimmed = self.sprite_source_size.unwrap_or(JsonRect {
            x: 0.0,
            y: 0.0,
            w: self.frame.w,
            h: self.frame.h,
        });
        let source = self.source_size.unwrap_or(JsonSize {
            w: trimmed.w,
            h: trimmed.h,
        });
        AtlasFrame::new(
            frame_name_from_key(key),
            [self.frame.x, self.frame.y],
            [trimmed.w, trimmed.h],
        )
        .with_rotated(self.rotated)
        .with_source([source.w, source.h], [trimmed.x, trimmed.y])
    }
}

/// Parses a JSON atlas document.
pub fn parse_json_atlas(text: &str) -> Result<AtlasDocument, AtlasImportError> {
    let atlas: JsonAtlas = serde_json::from_str(text)?;

    let frames = match atlas.frames.ok_or(AtlasImportError::MissingFrames)? {
        JsonFrames::Hash(map) => map
            .into_iter()
            .map(|(key, entry)| entry.into_frame(&key))
            .collect(),
        JsonFrames::Array(entries) => entries
            .into_iter()
            .map(|named| named.entry.into_frame(&named.filename))
            .collect(),
    };

    let texture = atlas
        .meta
        .and_then(|m| m.size)
        .map(|s| TextureSize::new(s.w.max(0.0) as u32, s.h.max(0.0) as u32));

    Ok(AtlasDocument { texture, frames })
}

#[derive(Debug, Clone)]
enum Input {
    Path(PathBuf),
    Text(String),
}

/// An [`AtlasSource`] reading TexturePacker-style JSON from a file or a string.
#[derive(Debug, Clone)]
pub struct JsonAtlasSource {
    input: Input,
}

impl JsonAtlasSource {
    /// Reads the atlas from `path` on every load.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: Input::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Uses in-memory JSON text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: Input::Text(text.into()),
        }
    }
}

impl AtlasSource for JsonAtlasSource {
    fn load(&self) -> Result<AtlasDocument, AtlasImportError> {
        match &self.input {
            Input::Path(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| AtlasImportError::Io {
                        path: path.clone(),
                        source,
                    })?;
                parse_json_atlas(&text)
            }
            Input::Text(text) => parse_json_atlas(text),
        }
    }
}
