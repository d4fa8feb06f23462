//! QuadSprite Playback
//!
//! Tick-driven frameset playback for quad sprites. Nothing here runs on its
//! own: the host owns the loop and calls [`FramesetPlayer::tick`] (or
//! [`AnimatedSprite::update`]) with elapsed time once per frame.
//!
//! # Example
//!
//! ```
//! use quadsprite_anim::{DeterministicRng, FramesetPlayer};
//! use quadsprite_spec::Frameset;
//!
//! let mut player = FramesetPlayer::new(Frameset::new("blink", 0, 2).with_ping_pong(true));
//! let mut rng = DeterministicRng::new(42);
//!
//! let mut frames = vec![player.play(&mut rng)];
//! while !player.is_finished() {
//!     frames.push(player.advance());
//! }
//! assert_eq!(frames, vec![Some(0), Some(1), Some(2), Some(1), Some(0), None]);
//! ```
//!
//! # Determinism
//!
//! Random start frames come from a [`DeterministicRng`] supplied by the host,
//! so the same seed reproduces the same playback.

pub mod animated;
pub mod player;
pub mod rng;
pub mod sprite;

// Re-export main types for convenience
pub use animated::{AnimatedSprite, AnimationError, UpdateOutcome};
pub use player::{FramesetPlayer, PlaybackState};
pub use rng::DeterministicRng;
pub use sprite::Sprite;
