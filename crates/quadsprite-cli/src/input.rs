//! Loading animation sets and atlases from disk.

use std::path::{Path, PathBuf};

use quadsprite_atlas::{import_atlas, AtlasImportError, JsonAtlasSource, SpriteSheet};
use quadsprite_spec::SpriteAnimation;
use thiserror::Error;

/// Errors while loading command inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The animation set is not valid JSON.
    #[error("failed to parse animation set '{}': {source}", path.display())]
    Animation {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The atlas import failed.
    #[error("failed to import atlas '{}': {source}", path.display())]
    Atlas {
        path: PathBuf,
        #[source]
        source: AtlasImportError,
    },
}

impl InputError {
    /// Stable code for JSON output. Atlas failures pass the import code through.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::Read { .. } => "CLI_001",
            InputError::Animation { .. } => "CLI_002",
            InputError::Atlas { source, .. } => source.code(),
        }
    }
}

/// Reads and parses an animation set document.
pub fn load_animation(path: &Path) -> Result<SpriteAnimation, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SpriteAnimation::from_json(&text).map_err(|source| InputError::Animation {
        path: path.to_path_buf(),
        source,
    })
}

/// Imports a JSON atlas into a sprite sheet.
///
/// Unlike a host import, a broken atlas is an error here rather than an
/// empty sheet.
pub fn load_atlas(path: &Path) -> Result<SpriteSheet, InputError> {
    let mut import = import_atlas(&JsonAtlasSource::from_path(path));
    if let Some(source) = import.error.take() {
        return Err(InputError::Atlas {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(SpriteSheet::from_import(import))
}
