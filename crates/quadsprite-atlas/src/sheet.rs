//! Sprite sheets: atlas frames bound to a texture, with cached geometry.

use quadsprite_spec::{AtlasDocument, AtlasFrame, TextureSize};

use crate::geometry::{compute_geometry, FrameGeometry};
use crate::import::AtlasImport;

/// Atlas frames plus the texture they index into.
///
/// Per-frame geometry is computed eagerly and rebuilt whenever the frames or
/// the texture change, so lookups during playback are plain indexing.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    frames: Vec<AtlasFrame>,
    texture: Option<TextureSize>,
    geometry: Vec<FrameGeometry>,
}

impl SpriteSheet {
    /// Creates a sheet and computes its geometry.
    pub fn new(frames: Vec<AtlasFrame>, texture: Option<TextureSize>) -> Self {
        let mut sheet = Self {
            frames,
            texture,
            geometry: Vec::new(),
        };
        sheet.rebuild();
        sheet
    }

    /// Creates a sheet from a decoded atlas, using its declared texture size.
    pub fn from_document(document: AtlasDocument) -> Self {
        Self::new(document.frames, document.texture)
    }

    /// Creates a sheet from an import result. A failed import gives an empty sheet.
    pub fn from_import(import: AtlasImport) -> Self {
        Self::from_document(import.document)
    }

    /// Replaces the frames and rebuilds geometry.
    pub fn set_frames(&mut self, frames: Vec<AtlasFrame>) {
        self.frames = frames;
        self.rebuild();
    }

    /// Binds a texture and rebuilds geometry.
    pub fn set_texture(&mut self, texture: TextureSize) {
        self.texture = Some(texture);
        self.rebuild();
    }

    /// Unbinds the texture. Geometry falls back to zero UVs.
    pub fn clear_texture(&mut self) {
        self.texture = None;
        self.rebuild();
    }

    /// The bound texture, if any.
    pub fn texture(&self) -> Option<TextureSize> {
        self.texture
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the sheet has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame record at `index`.
    pub fn frame(&self, index: usize) -> Option<&AtlasFrame> {
        self.frames.get(index)
    }

    /// Cached geometry at `index`.
    pub fn geometry(&self, index: usize) -> Option<&FrameGeometry> {
        self.geometry.get(index)
    }

    /// Index of the frame named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.frames.iter().position(|f| f.name == name)
    }

    /// Frames in atlas order.
    pub fn frames(&self) -> &[AtlasFrame] {
        &self.frames
    }

    /// Iterates frames with their geometry.
    pub fn iter(&self) -> impl Iterator<Item = (&AtlasFrame, &FrameGeometry)> {
        self.frames.iter().zip(self.geometry.iter())
    }

    fn rebuild(&mut self) {
        let (width, height) = match self.texture {
            Some(t) => (t.width, t.height),
            None => (0, 0),
        };

        let rotated = self.frames.iter().filter(|f| f.rotated).count();
        if rotated > 0 {
            log::warn!(
                "{} rotated atlas frame(s) will be shown unrotated; rotation is not applied",
                rotated
            );
        }
        if self.texture.map_or(true, |t| t.is_degenerate()) && !self.frames.is_empty() {
            log::debug!("sprite sheet has no usable texture, UVs are zeroed");
        }

        self.geometry = self
            .frames
            .iter()
            .map(|frame| compute_geometry(frame, width, height))
            .collect();

        log::debug!(
            "rebuilt sprite sheet geometry: {} frames, texture {}x{}",
            self.frames.len(),
            width,
            height
        );
    }
}
