//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and prints exactly one of these documents
//! to stdout instead of colored text.

use serde::{Deserialize, Serialize};

use quadsprite_spec::{ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI-level failures. Validation and atlas codes pass through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Animation set JSON parse error
    pub const ANIMATION_PARSE: &str = "CLI_002";
    /// Requested frameset does not exist
    pub const UNKNOWN_FRAMESET: &str = "CLI_003";
    /// Animation set has no framesets to play
    pub const NO_FRAMESETS: &str = "CLI_004";
    /// Frameset cannot be played
    pub const INVALID_FRAMESET: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "ATLAS_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

impl From<&InputError> for JsonError {
    fn from(error: &InputError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `quadsprite validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Number of framesets checked, when the animation set loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framesets: Option<usize>,
}

/// One sliced frame in `quadsprite slice --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlicedFrame {
    pub index: usize,
    pub name: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub rotated: bool,
    pub uvs: [[f32; 2]; 4],
    pub scale: [f32; 3],
}

/// Output of `quadsprite slice --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliceOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    /// Texture size used for UVs, `[width, height]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<[u32; 2]>,
    pub frames: Vec<SlicedFrame>,
}

/// A frame change in the `play` timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameEvent {
    /// Host tick on which the frame was shown (0 is the `play` call).
    pub tick: u32,
    /// Simulated time in seconds.
    pub time: f32,
    pub frame: u32,
    pub times_played: u32,
}

/// Output of `quadsprite play --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frameset: Option<String>,
    pub events: Vec<FrameEvent>,
    /// Tick on which playback finished, if it did within the simulated time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<u32>,
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
