//! Frameset configuration.
//!
//! A frameset is a named, inclusive range of atlas frame indices played as one
//! clip. `looping` and a positive `number_of_plays` are mutually exclusive:
//! both fields are private and only change through [`Frameset::set_looping`]
//! and [`Frameset::set_number_of_plays`], which clear the other setting.

use serde::{Deserialize, Serialize};

use crate::error::FramesetError;

/// Play count meaning "no limit".
pub const UNLIMITED_PLAYS: i32 = -1;

/// A named frame range with playback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FramesetParams", into = "FramesetParams")]
pub struct Frameset {
    /// Frameset name (lookup key).
    pub name: String,

    /// First frame of the range (inclusive).
    pub start_frame: u32,

    /// Last frame of the range (inclusive).
    pub end_frame: u32,

    /// Seconds needed to play the whole range once.
    pub duration: f32,

    /// Start on a random frame of the range instead of `start_frame`.
    pub start_on_random_frame: bool,

    /// Reverse direction at each end of the range instead of wrapping.
    pub ping_pong: bool,

    looping: bool,
    number_of_plays: i32,
}

impl Frameset {
    /// Creates a frameset over `[start_frame, end_frame]` that plays once,
    /// with zero duration and no looping.
    pub fn new(name: impl Into<String>, start_frame: u32, end_frame: u32) -> Self {
        Self {
            name: name.into(),
            start_frame,
            end_frame,
            duration: 0.0,
            start_on_random_frame: false,
            ping_pong: false,
            looping: false,
            number_of_plays: UNLIMITED_PLAYS,
        }
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Enables or disables ping-pong playback.
    pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
        self.ping_pong = ping_pong;
        self
    }

    /// Enables or disables the random start frame.
    pub fn with_random_start(mut self, random: bool) -> Self {
        self.start_on_random_frame = random;
        self
    }

    /// Sets looping (see [`Frameset::set_looping`]).
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.set_looping(looping);
        self
    }

    /// Sets the play count (see [`Frameset::set_number_of_plays`]).
    pub fn with_number_of_plays(mut self, plays: i32) -> Self {
        self.set_number_of_plays(plays);
        self
    }

    /// Whether playback repeats until stopped.
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Number of full traversals before playback ends. `<= 0` means unlimited.
    pub fn number_of_plays(&self) -> i32 {
        self.number_of_plays
    }

    /// Sets looping. Turning looping on makes the play count unlimited.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        if looping {
            self.number_of_plays = UNLIMITED_PLAYS;
        }
    }

    /// Sets the play count. A positive count turns looping off.
    pub fn set_number_of_plays(&mut self, plays: i32) {
        self.number_of_plays = plays;
        if plays > 0 {
            self.looping = false;
        }
    }

    /// Whether a positive play count bounds playback.
    pub fn limits_number_of_plays(&self) -> bool {
        self.number_of_plays > 0
    }

    /// Number of frames in the range, or `None` when `start_frame > end_frame`.
    ///
    /// Counted in `u64` so the full `0..=u32::MAX` range fits.
    pub fn number_of_frames(&self) -> Option<u64> {
        if self.start_frame <= self.end_frame {
            Some(u64::from(self.end_frame - self.start_frame) + 1)
        } else {
            None
        }
    }

    /// Seconds each frame is shown, or `None` for an invalid range.
    pub fn duration_per_frame(&self) -> Option<f32> {
        self.number_of_frames().map(|n| self.duration / n as f32)
    }

    /// Whether `frame` lies inside the range.
    pub fn contains(&self, frame: u32) -> bool {
        frame >= self.start_frame && frame <= self.end_frame
    }

    /// Checks the range and duration, turning the `None` frame count into an error.
    pub fn validate(&self) -> Result<(), FramesetError> {
        if self.number_of_frames().is_none() {
            return Err(FramesetError::InvalidRange {
                name: self.name.clone(),
                start: self.start_frame,
                end: self.end_frame,
            });
        }
        if !self.duration.is_finite() {
            return Err(FramesetError::NonFiniteDuration(self.name.clone()));
        }
        if self.duration < 0.0 {
            return Err(FramesetError::NegativeDuration {
                name: self.name.clone(),
                duration: self.duration,
            });
        }
        Ok(())
    }
}

/// Serialized form of a [`Frameset`]. Converting into a `Frameset` applies the
/// looping/play-count rule, with looping taking precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FramesetParams {
    name: String,
    start_frame: u32,
    end_frame: u32,
    #[serde(default)]
    duration: f32,
    #[serde(default)]
    start_on_random_frame: bool,
    #[serde(default)]
    ping_pong: bool,
    #[serde(default)]
    looping: bool,
    #[serde(default = "default_plays")]
    number_of_plays: i32,
}

fn default_plays() -> i32 {
    UNLIMITED_PLAYS
}

impl From<FramesetParams> for Frameset {
    fn from(p: FramesetParams) -> Self {
        let mut frameset = Frameset::new(p.name, p.start_frame, p.end_frame)
            .with_duration(p.duration)
            .with_random_start(p.start_on_random_frame)
            .with_ping_pong(p.ping_pong);
        frameset.set_number_of_plays(p.number_of_plays);
        frameset.set_looping(p.looping);
        frameset
    }
}

impl From<Frameset> for FramesetParams {
    fn from(f: Frameset) -> Self {
        Self {
            name: f.name,
            start_frame: f.start_frame,
            end_frame: f.end_frame,
            duration: f.duration,
            start_on_random_frame: f.start_on_random_frame,
            ping_pong: f.ping_pong,
            looping: f.looping,
            number_of_plays: f.number_of_plays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_of_frames_for_valid_range() {
        assert_eq!(Frameset::new("a", 0, 3).number_of_frames(), Some(4));
        assert_eq!(Frameset::new("a", 5, 5).number_of_frames(), Some(1));
    }

    #[test]
    fn number_of_frames_for_inverted_range() {
        let frameset = Frameset::new("a", 4, 2);
        assert_eq!(frameset.number_of_frames(), None);
        assert_eq!(frameset.duration_per_frame(), None);
    }

    #[test]
    fn number_of_frames_for_full_range() {
        let frameset = Frameset::new("all", 0, u32::MAX).with_duration(1.0);
        assert_eq!(frameset.number_of_frames(), Some(1 << 32));
        let per_frame = frameset.duration_per_frame().unwrap();
        assert!(per_frame > 0.0 && per_frame.is_finite());
        assert!(frameset.validate().is_ok());
        assert!(frameset.contains(u32::MAX));
    }

    #[test]
    fn contains_is_inclusive() {
        let frameset = Frameset::new("a", 2, 4);
        assert!(!frameset.contains(1));
        assert!(frameset.contains(2));
        assert!(frameset.contains(4));
        assert!(!frameset.contains(5));
    }

    #[test]
    fn duration_per_frame_divides_duration() {
        let frameset = Frameset::new("a", 0, 3).with_duration(2.0);
        assert_eq!(frameset.duration_per_frame(), Some(0.5));
    }

    #[test]
    fn looping_clears_play_count() {
        let mut frameset = Frameset::new("a", 0, 1).with_number_of_plays(3);
        assert!(frameset.limits_number_of_plays());
        frameset.set_looping(true);
        assert!(frameset.looping());
        assert_eq!(frameset.number_of_plays(), UNLIMITED_PLAYS);
        assert!(!frameset.limits_number_of_plays());
    }

    #[test]
    fn positive_play_count_clears_looping() {
        let mut frameset = Frameset::new("a", 0, 1).with_looping(true);
        frameset.set_number_of_plays(2);
        assert!(!frameset.looping());
        assert_eq!(frameset.number_of_plays(), 2);
    }

    #[test]
    fn non_positive_play_count_keeps_looping() {
        let mut frameset = Frameset::new("a", 0, 1).with_looping(true);
        frameset.set_number_of_plays(0);
        assert!(frameset.looping());
        frameset.set_looping(false);
        assert_eq!(frameset.number_of_plays(), 0);
    }

    #[test]
    fn deserialize_applies_invariant() {
        let json = r#"{ "name": "a", "start_frame": 0, "end_frame": 3, "looping": true, "number_of_plays": 4 }"#;
        let frameset: Frameset = serde_json::from_str(json).unwrap();
        assert!(frameset.looping());
        assert_eq!(frameset.number_of_plays(), UNLIMITED_PLAYS);
    }

    #[test]
    fn deserialize_defaults() {
        let json = r#"{ "name": "idle", "start_frame": 2, "end_frame": 4 }"#;
        let frameset: Frameset = serde_json::from_str(json).unwrap();
        assert_eq!(frameset, Frameset::new("idle", 2, 4));
    }

    #[test]
    fn validate_reports_each_problem() {
        assert!(Frameset::new("a", 0, 1).with_duration(1.0).validate().is_ok());
        assert!(matches!(
            Frameset::new("a", 3, 1).validate(),
            Err(FramesetError::InvalidRange { start: 3, end: 1, .. })
        ));
        assert!(matches!(
            Frameset::new("a", 0, 1).with_duration(-1.0).validate(),
            Err(FramesetError::NegativeDuration { .. })
        ));
        assert!(matches!(
            Frameset::new("a", 0, 1).with_duration(f32::NAN).validate(),
            Err(FramesetError::NonFiniteDuration(_))
        ));
    }
}
