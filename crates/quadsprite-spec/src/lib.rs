//! QuadSprite Data Model
//!
//! This crate provides the engine-independent types shared by the QuadSprite
//! crates: atlas frame records, framesets (named frame ranges with playback
//! settings), animation sets, and their validation.
//!
//! # Example
//!
//! ```
//! use quadsprite_spec::{Frameset, SpriteAnimation};
//! use quadsprite_spec::validation::validate_animation;
//!
//! let walk = Frameset::new("walk", 0, 7).with_duration(0.8).with_looping(true);
//! let jump = Frameset::new("jump", 8, 11).with_duration(0.4).with_number_of_plays(1);
//! let animation = SpriteAnimation::new(vec![walk, jump]);
//!
//! assert_eq!(animation.frameset("WALK").map(|f| f.name.as_str()), Some("walk"));
//! assert!(validate_animation(&animation, Some(12)).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`atlas`]: Atlas frame records and texture dimensions
//! - [`frameset`]: Frame range configuration with the looping/play-count invariant
//! - [`animation`]: Named collections of framesets
//! - [`error`]: Error and warning types
//! - [`validation`]: Animation set validation

pub mod animation;
pub mod atlas;
pub mod error;
pub mod frameset;
pub mod validation;

// Re-export commonly used types at the crate root
pub use animation::SpriteAnimation;
pub use atlas::{frame_name_from_key, AtlasDocument, AtlasFrame, TextureSize};
pub use error::{
    ErrorCode, FramesetError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use frameset::Frameset;
pub use validation::{validate_animation, validate_frameset};
