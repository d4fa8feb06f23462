//! CLI command implementations

pub mod json_output;
pub mod play;
pub mod slice;
pub mod validate;

/// Exit code for a failed validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for input and runtime errors.
pub const EXIT_ERROR: u8 = 2;
