//! Animated sprites: a sprite driven by a frameset player.
//!
//! The host calls [`AnimatedSprite::update`] once per tick with the elapsed
//! time and uploads the sprite's mesh when the shown frame changes.

use quadsprite_spec::{Frameset, SpriteAnimation};
use thiserror::Error;

use crate::player::FramesetPlayer;
use crate::rng::DeterministicRng;
use crate::sprite::Sprite;

/// Errors when starting playback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// No frameset with this name (case-insensitive).
    #[error("unknown frameset '{0}'")]
    UnknownFrameset(String),

    /// The animation set is empty, so there is no default frameset.
    #[error("animation set has no framesets")]
    NoFramesets,
}

/// What happened during one [`AnimatedSprite::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing is playing.
    Idle,
    /// Still playing, the shown frame did not change.
    Unchanged(u32),
    /// Moved to a new frame.
    Advanced(u32),
    /// Playback ended during this update. The last frame stays shown.
    Finished,
}

impl UpdateOutcome {
    /// Frame shown after the update, for the playing outcomes.
    pub fn frame(&self) -> Option<u32> {
        match self {
            UpdateOutcome::Unchanged(f) | UpdateOutcome::Advanced(f) => Some(*f),
            UpdateOutcome::Idle | UpdateOutcome::Finished => None,
        }
    }
}

/// A [`Sprite`] playing framesets from a [`SpriteAnimation`].
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    sprite: Sprite,
    animation: SpriteAnimation,
    player: Option<FramesetPlayer>,
    rng: DeterministicRng,
    play_on_start: bool,
    destroy_after_finished: bool,
}

impl AnimatedSprite {
    /// Creates an idle animated sprite. `rng` supplies random start frames.
    pub fn new(sprite: Sprite, animation: SpriteAnimation, rng: DeterministicRng) -> Self {
        Self {
            sprite,
            animation,
            player: None,
            rng,
            play_on_start: false,
            destroy_after_finished: false,
        }
    }

    /// Play the default frameset from [`AnimatedSprite::start`].
    pub fn with_play_on_start(mut self, play_on_start: bool) -> Self {
        self.play_on_start = play_on_start;
        self
    }

    /// Ask the host to remove this sprite once playback finishes.
    pub fn with_destroy_after_finished(mut self, destroy: bool) -> Self {
        self.destroy_after_finished = destroy;
        self
    }

    /// Host start hook: plays the default frameset when `play_on_start` is set.
    pub fn start(&mut self) -> Result<(), AnimationError> {
        if self.play_on_start {
            self.play_default()?;
        }
        Ok(())
    }

    /// Plays the first frameset of the animation set.
    pub fn play_default(&mut self) -> Result<Option<u32>, AnimationError> {
        let frameset = self
            .animation
            .first()
            .cloned()
            .ok_or(AnimationError::NoFramesets)?;
        Ok(self.play_frameset(frameset))
    }

    /// Plays the frameset called `name` (case-insensitive).
    pub fn play_named(&mut self, name: &str) -> Result<Option<u32>, AnimationError> {
        let frameset = self
            .animation
            .frameset(name)
            .cloned()
            .ok_or_else(|| AnimationError::UnknownFrameset(name.to_string()))?;
        Ok(self.play_frameset(frameset))
    }

    /// Plays `frameset` from the beginning and shows its first frame.
    pub fn play_frameset(&mut self, frameset: Frameset) -> Option<u32> {
        log::debug!("playing frameset '{}'", frameset.name);
        let player = self.player.insert(FramesetPlayer::new(frameset));
        let first = player.play(&mut self.rng);
        if let Some(frame) = first {
            self.sprite.show_frame(frame as usize);
        }
        first
    }

    /// Stops playback, keeping the shown frame.
    pub fn stop(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.stop();
        }
    }

    /// Stops playback and shows `index`.
    pub fn show_frame(&mut self, index: usize) -> usize {
        self.stop();
        self.sprite.show_frame(index)
    }

    /// Returns true while a frameset is advancing.
    pub fn is_playing(&self) -> bool {
        self.player.as_ref().is_some_and(|p| p.is_playing())
    }

    /// The active player, if anything has been played.
    pub fn player(&self) -> Option<&FramesetPlayer> {
        self.player.as_ref()
    }

    /// The frameset currently or most recently played.
    pub fn current_frameset(&self) -> Option<&Frameset> {
        self.player.as_ref().map(|p| p.frameset())
    }

    /// The animation set.
    pub fn animation(&self) -> &SpriteAnimation {
        &self.animation
    }

    /// The underlying sprite.
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Mutable access to the underlying sprite.
    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// Advances playback by `dt` seconds and shows the resulting frame.
    pub fn update(&mut self, dt: f32) -> UpdateOutcome {
        let Some(player) = self.player.as_mut() else {
            return UpdateOutcome::Idle;
        };
        if !player.is_playing() {
            return UpdateOutcome::Idle;
        }

        let before = player.current_frame();
        match player.tick(dt) {
            None => UpdateOutcome::Finished,
            Some(frame) if Some(frame) != before => {
                self.sprite.show_frame(frame as usize);
                UpdateOutcome::Advanced(frame)
            }
            Some(frame) => UpdateOutcome::Unchanged(frame),
        }
    }

    /// Whether the host should remove this sprite after `outcome`.
    pub fn should_despawn(&self, outcome: UpdateOutcome) -> bool {
        self.destroy_after_finished && outcome == UpdateOutcome::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quadsprite_atlas::SpriteSheet;
    use quadsprite_spec::{AtlasFrame, TextureSize};

    fn animated(animation: SpriteAnimation) -> AnimatedSprite {
        let frames = (0..6)
            .map(|i| AtlasFrame::new(format!("f{}", i), [i as f32 * 16.0, 0.0], [16.0, 16.0]))
            .collect();
        let sheet = Arc::new(SpriteSheet::new(frames, Some(TextureSize::new(96, 16))));
        AnimatedSprite::new(Sprite::new(sheet), animation, DeterministicRng::new(42))
    }

    fn walk_and_jump() -> SpriteAnimation {
        SpriteAnimation::new(vec![
            Frameset::new("walk", 0, 3).with_duration(0.4).with_looping(true),
            Frameset::new("jump", 4, 5).with_duration(0.2),
        ])
    }

    #[test]
    fn play_named_shows_first_frame() {
        let mut sprite = animated(walk_and_jump());
        assert_eq!(sprite.play_named("JUMP").unwrap(), Some(4));
        assert_eq!(sprite.sprite().frame_index(), 4);
        assert!(sprite.is_playing());
        assert_eq!(sprite.current_frameset().unwrap().name, "jump");
    }

    #[test]
    fn unknown_frameset_is_error() {
        let mut sprite = animated(walk_and_jump());
        assert_eq!(
            sprite.play_named("swim"),
            Err(AnimationError::UnknownFrameset("swim".to_string()))
        );
        assert!(sprite.play_named("").is_err());
        assert!(!sprite.is_playing());
    }

    #[test]
    fn empty_animation_has_no_default() {
        let mut sprite = animated(SpriteAnimation::default());
        assert_eq!(sprite.play_default(), Err(AnimationError::NoFramesets));
    }

    #[test]
    fn update_advances_sprite() {
        let mut sprite = animated(walk_and_jump());
        sprite.play_default().unwrap();
        assert_eq!(sprite.update(0.05), UpdateOutcome::Unchanged(0));
        assert_eq!(sprite.update(0.06), UpdateOutcome::Advanced(1));
        assert_eq!(sprite.sprite().frame_index(), 1);
    }

    #[test]
    fn finishing_reports_once_and_keeps_last_frame() {
        let mut sprite = animated(walk_and_jump()).with_destroy_after_finished(true);
        sprite.play_named("jump").unwrap();
        assert_eq!(sprite.update(0.1), UpdateOutcome::Advanced(5));
        let outcome = sprite.update(0.1);
        assert_eq!(outcome, UpdateOutcome::Finished);
        assert!(sprite.should_despawn(outcome));
        assert_eq!(sprite.sprite().frame_index(), 5);
        assert_eq!(sprite.update(0.1), UpdateOutcome::Idle);
    }

    #[test]
    fn show_frame_stops_playback() {
        let mut sprite = animated(walk_and_jump());
        sprite.play_default().unwrap();
        assert_eq!(sprite.show_frame(5), 5);
        assert!(!sprite.is_playing());
        assert_eq!(sprite.update(1.0), UpdateOutcome::Idle);
        assert_eq!(sprite.sprite().frame_index(), 5);
    }

    #[test]
    fn start_respects_play_on_start() {
        let mut idle = animated(walk_and_jump());
        idle.start().unwrap();
        assert!(!idle.is_playing());

        let mut auto = animated(walk_and_jump()).with_play_on_start(true);
        auto.start().unwrap();
        assert!(auto.is_playing());
        assert_eq!(auto.current_frameset().unwrap().name, "walk");
    }
}
