//! Animation set validation.
//!
//! Playback itself never fails on a bad frameset (an inverted range simply
//! refuses to advance). Validation is the place where those problems are
//! surfaced to the author, once, with a stable code and a JSON path.

use std::collections::HashSet;

use crate::animation::SpriteAnimation;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::frameset::Frameset;

/// Validates every frameset of an animation set.
///
/// # Arguments
/// * `animation` - The animation set to validate
/// * `atlas_frames` - Number of frames in the atlas the set plays from, when known
///
/// # Example
/// ```
/// use quadsprite_spec::{Frameset, SpriteAnimation};
/// use quadsprite_spec::validation::validate_animation;
///
/// let animation = SpriteAnimation::new(vec![Frameset::new("walk", 0, 9).with_duration(1.0)]);
/// assert!(validate_animation(&animation, Some(10)).is_ok());
/// assert!(!validate_animation(&animation, Some(8)).is_ok());
/// ```
pub fn validate_animation(
    animation: &SpriteAnimation,
    atlas_frames: Option<usize>,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    if animation.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoFramesets,
            "animation set has no framesets",
            "framesets",
        ));
    }

    let mut seen_names: HashSet<String> = HashSet::new();
    for (index, frameset) in animation.framesets.iter().enumerate() {
        validate_frameset(frameset, index, atlas_frames, &mut result);

        if !frameset.name.is_empty() && !seen_names.insert(frameset.name.to_ascii_lowercase()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateFramesetName,
                format!(
                    "frameset name '{}' is already used (names are case-insensitive)",
                    frameset.name
                ),
                format!("framesets[{}].name", index),
            ));
        }
    }

    result
}

/// Validates a single frameset at position `index` of its animation set.
pub fn validate_frameset(
    frameset: &Frameset,
    index: usize,
    atlas_frames: Option<usize>,
    result: &mut ValidationResult,
) {
    let path = |field: &str| format!("framesets[{}].{}", index, field);

    if frameset.name.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyName,
            "frameset name must not be empty",
            path("name"),
        ));
    }

    match frameset.number_of_frames() {
        None => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidRange,
                format!(
                    "start_frame {} is after end_frame {}",
                    frameset.start_frame, frameset.end_frame
                ),
                path("start_frame"),
            ));
        }
        Some(1) if frameset.start_on_random_frame => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::RandomStartSingleFrame,
                "random start has no effect on a single-frame range",
                path("start_on_random_frame"),
            ));
        }
        Some(_) => {}
    }

    if let Some(count) = atlas_frames {
        if frameset.end_frame as usize >= count {
            result.add_error(ValidationError::with_path(
                ErrorCode::FrameOutOfAtlas,
                format!(
                    "end_frame {} is outside the atlas ({} frames)",
                    frameset.end_frame, count
                ),
                path("end_frame"),
            ));
        }
    }

    if !frameset.duration.is_finite() || frameset.duration < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!(
                "duration must be a finite, non-negative number of seconds, got {}",
                frameset.duration
            ),
            path("duration"),
        ));
    } else if frameset.duration == 0.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ZeroDuration,
            "zero duration advances one frame per update",
            path("duration"),
        ));
    }
}
