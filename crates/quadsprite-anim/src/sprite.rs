//! A sprite showing one frame of a sprite sheet.

use std::sync::Arc;

use quadsprite_atlas::{FrameGeometry, SpriteSheet};
use quadsprite_spec::AtlasFrame;

/// One displayed frame of a shared [`SpriteSheet`].
///
/// The host uploads [`Sprite::take_mesh_update`] to its mesh whenever it
/// returns geometry; the sprite itself owns no GPU state.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    sheet: Option<Arc<SpriteSheet>>,
    frame_index: usize,
    mesh_dirty: bool,
}

impl Sprite {
    /// Creates a sprite bound to `sheet`, showing frame 0.
    pub fn new(sheet: Arc<SpriteSheet>) -> Self {
        Self {
            sheet: Some(sheet),
            frame_index: 0,
            mesh_dirty: true,
        }
    }

    /// Binds a different sheet. The frame index is clamped into the new sheet.
    pub fn attach(&mut self, sheet: Arc<SpriteSheet>) {
        self.sheet = Some(sheet);
        self.show_frame(self.frame_index);
    }

    /// Unbinds the sheet and goes back to frame 0.
    pub fn detach(&mut self) {
        self.sheet = None;
        self.frame_index = 0;
        self.mesh_dirty = false;
    }

    /// The bound sheet.
    pub fn sheet(&self) -> Option<&Arc<SpriteSheet>> {
        self.sheet.as_ref()
    }

    /// Index of the shown frame.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Shows frame `index`, clamped to the sheet's frame range, and returns
    /// the index actually shown.
    pub fn show_frame(&mut self, index: usize) -> usize {
        let last = self
            .sheet
            .as_ref()
            .map(|s| s.len().saturating_sub(1))
            .unwrap_or(0);
        self.frame_index = index.min(last);
        self.mesh_dirty = true;
        self.frame_index
    }

    /// Atlas record of the shown frame.
    pub fn current_frame(&self) -> Option<&AtlasFrame> {
        self.sheet.as_ref()?.frame(self.frame_index)
    }

    /// Geometry of the shown frame.
    pub fn current_geometry(&self) -> Option<&FrameGeometry> {
        self.sheet.as_ref()?.geometry(self.frame_index)
    }

    /// Returns the shown frame's geometry once after each change, then `None`
    /// until the frame changes again.
    pub fn take_mesh_update(&mut self) -> Option<FrameGeometry> {
        if !self.mesh_dirty {
            return None;
        }
        let geometry = self.current_geometry().copied();
        if geometry.is_some() {
            self.mesh_dirty = false;
        }
        geometry
    }
}
