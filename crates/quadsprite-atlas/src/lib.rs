//! QuadSprite Atlas Slicing
//!
//! This crate turns decoded texture atlas frames into the geometry a host
//! needs to draw one frame of a sprite on a unit quad.
//!
//! # Features
//!
//! - **Slicing**: [`compute_geometry`] maps a frame's pixel rectangle to quad
//!   UVs (V flipped) and a pixel-accurate display scale
//! - **Sprite sheets**: [`SpriteSheet`] owns frames plus texture size and
//!   caches per-frame geometry, rebuilding it when either changes
//! - **Import**: [`AtlasSource`] abstracts the atlas loader; [`import_atlas`]
//!   reports failures by name and falls back to an empty frame set;
//!   [`JsonAtlasSource`] reads TexturePacker-style JSON
//!
//! # Example
//!
//! ```
//! use quadsprite_atlas::{compute_geometry, QUAD_TRIANGLES};
//! use quadsprite_spec::AtlasFrame;
//!
//! let frame = AtlasFrame::new("hero_0", [0.0, 0.0], [32.0, 32.0]);
//! let geometry = compute_geometry(&frame, 64, 64);
//!
//! assert_eq!(geometry.triangles, QUAD_TRIANGLES);
//! assert_eq!(geometry.uvs[0], [0.0, 0.5]); // lower-left
//! assert_eq!(geometry.scale, [32.0, 32.0, 0.0]);
//! ```

pub mod geometry;
pub mod import;
pub mod json;
pub mod sheet;

// Re-export main types for convenience
pub use geometry::{
    compute_geometry, compute_uvs, display_scale, pixel_to_unit, FrameGeometry, QUAD_NORMALS,
    QUAD_TRIANGLES, QUAD_VERTICES,
};
pub use import::{import_atlas, AtlasImport, AtlasImportError, AtlasSource};
pub use json::{parse_json_atlas, JsonAtlasSource};
pub use sheet::SpriteSheet;
