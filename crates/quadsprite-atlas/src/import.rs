//! Atlas import.
//!
//! Decoding an atlas file is delegated to an [`AtlasSource`]. A failed import
//! never takes the host down: [`import_atlas`] logs the named error, hands the
//! error back for reporting, and continues with an empty frame set.

use std::collections::HashSet;
use std::path::PathBuf;

use quadsprite_spec::{AtlasDocument, AtlasFrame};
use thiserror::Error;

/// Errors that can occur while importing an atlas.
#[derive(Debug, Error)]
pub enum AtlasImportError {
    /// The atlas file could not be read.
    #[error("failed to read atlas '{path}': {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The atlas is not valid JSON or does not match the expected shape.
    #[error("atlas JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no `frames` entry.
    #[error("atlas has no 'frames' entry")]
    MissingFrames,

    /// A frame has unusable geometry.
    #[error("invalid atlas frame '{name}': {reason}")]
    InvalidFrame {
        /// Frame name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two frames resolve to the same name.
    #[error("duplicate atlas frame name: '{0}'")]
    DuplicateFrame(String),
}

impl AtlasImportError {
    /// Stable code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AtlasImportError::Io { .. } => "ATLAS_001",
            AtlasImportError::Json(_) => "ATLAS_002",
            AtlasImportError::MissingFrames => "ATLAS_003",
            AtlasImportError::InvalidFrame { .. } => "ATLAS_004",
            AtlasImportError::DuplicateFrame(_) => "ATLAS_005",
        }
    }
}

/// Something that can produce a decoded atlas.
pub trait AtlasSource {
    /// Loads and decodes the atlas.
    fn load(&self) -> Result<AtlasDocument, AtlasImportError>;
}

/// Outcome of [`import_atlas`]: the decoded document, or an empty one plus the error.
#[derive(Debug, Default)]
pub struct AtlasImport {
    /// Decoded atlas. Empty when the import failed.
    pub document: AtlasDocument,
    /// The import error, if the source failed.
    pub error: Option<AtlasImportError>,
}

impl AtlasImport {
    /// Returns true if the source loaded without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Imports an atlas from `source`.
///
/// On failure the error is logged and returned in [`AtlasImport::error`], and
/// the document is empty so the rest of the system stays usable.
pub fn import_atlas(source: &dyn AtlasSource) -> AtlasImport {
    match source.load().and_then(|document| {
        check_frames(&document.frames)?;
        Ok(document)
    }) {
        Ok(document) => {
            log::debug!("imported atlas with {} frames", document.frames.len());
            AtlasImport {
                document,
                error: None,
            }
        }
        Err(err) => {
            log::warn!("atlas import error [{}]: {}", err.code(), err);
            AtlasImport {
                document: AtlasDocument::default(),
                error: Some(err),
            }
        }
    }
}

/// Rejects duplicate names and non-finite or negative rectangles.
pub(crate) fn check_frames(frames: &[AtlasFrame]) -> Result<(), AtlasImportError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for frame in frames {
        if !seen.insert(frame.name.as_str()) {
            return Err(AtlasImportError::DuplicateFrame(frame.name.clone()));
        }
        let values = frame.position.iter().chain(frame.size.iter());
        if values.clone().any(|v| !v.is_finite()) {
            return Err(AtlasImportError::InvalidFrame {
                name: frame.name.clone(),
                reason: "position and size must be finite".to_string(),
            });
        }
        if values.clone().any(|v| *v < 0.0) {
            return Err(AtlasImportError::InvalidFrame {
                name: frame.name.clone(),
                reason: "position and size must not be negative".to_string(),
            });
        }
    }
    Ok(())
}
