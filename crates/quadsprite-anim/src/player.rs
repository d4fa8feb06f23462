//! Frameset playback state machine.
//!
//! A [`FramesetPlayer`] walks the frame range of one [`Frameset`]. It is either
//! Idle or Playing; while Playing, [`FramesetPlayer::advance`] moves one frame
//! according to the frameset's loop, ping-pong and play-count settings, and
//! [`FramesetPlayer::tick`] converts elapsed host time into advances.
//!
//! A current frame of `None` means playback finished. A finished player stays
//! inert until [`FramesetPlayer::play`] is called again.

use quadsprite_spec::Frameset;
use rand::Rng;

/// Coarse playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// Not advancing. Either never started, stopped, or finished.
    Idle,
    /// Advancing through the frame range.
    Playing,
}

/// Timeline state for one frameset.
#[derive(Debug, Clone)]
pub struct FramesetPlayer {
    frameset: Frameset,
    current_frame: Option<u32>,
    step: i8,
    times_played: u32,
    playing: bool,
    elapsed: f64,
}

impl FramesetPlayer {
    /// Creates an idle player with no current frame.
    pub fn new(frameset: Frameset) -> Self {
        Self {
            frameset,
            current_frame: None,
            step: 1,
            times_played: 0,
            playing: false,
            elapsed: 0.0,
        }
    }

    /// The frameset being played.
    pub fn frameset(&self) -> &Frameset {
        &self.frameset
    }

    /// Mutable access to the frameset. Changes apply from the next advance.
    pub fn frameset_mut(&mut self) -> &mut Frameset {
        &mut self.frameset
    }

    /// Current frame index, or `None` once playback has finished.
    pub fn current_frame(&self) -> Option<u32> {
        self.current_frame
    }

    /// Direction of traversal: `1` forward, `-1` backward.
    pub fn step(&self) -> i8 {
        self.step
    }

    /// Number of completed traversals since the last play.
    pub fn times_played(&self) -> u32 {
        self.times_played
    }

    /// Returns true while advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns true once playback reached its end (no current frame).
    pub fn is_finished(&self) -> bool {
        self.current_frame.is_none()
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        if self.playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    /// Starts playback from the beginning.
    ///
    /// With `start_on_random_frame` the first frame is drawn uniformly from
    /// `[start_frame, end_frame]` using `rng`; otherwise `rng` is not touched.
    /// An inverted range leaves the player Idle with no current frame.
    pub fn play<R: Rng>(&mut self, rng: &mut R) -> Option<u32> {
        let start = self.frameset.start_frame;
        let end = self.frameset.end_frame;
        let first = if self.frameset.start_on_random_frame && start <= end {
            rng.gen_range(start..=end)
        } else {
            start
        };
        self.start_at(first)
    }

    /// Starts playback at `start_frame`, ignoring the random start setting.
    pub fn reset(&mut self) -> Option<u32> {
        self.start_at(self.frameset.start_frame)
    }

    /// Stops advancing. The current frame is kept.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    fn start_at(&mut self, frame: u32) -> Option<u32> {
        self.step = 1;
        self.times_played = 0;
        self.elapsed = 0.0;

        if self.frameset.number_of_frames().is_none() {
            log::debug!(
                "frameset '{}' has an inverted range ({}..{}), not playing",
                self.frameset.name,
                self.frameset.start_frame,
                self.frameset.end_frame
            );
            self.current_frame = None;
            self.playing = false;
        } else {
            self.current_frame = Some(frame);
            self.playing = true;
        }
        self.current_frame
    }

    fn finish(&mut self) {
        log::debug!(
            "frameset '{}' finished after {} play(s)",
            self.frameset.name,
            self.times_played
        );
        self.current_frame = None;
        self.playing = false;
    }

    /// Whether another traversal should start after one completes.
    fn continues(&self) -> bool {
        self.frameset.looping()
            || (self.frameset.limits_number_of_plays()
                && self.times_played < self.frameset.number_of_plays() as u32)
    }

    /// Moves one frame forward in the timeline and returns the new current frame.
    ///
    /// Does nothing while Idle.
    pub fn advance(&mut self) -> Option<u32> {
        if !self.playing {
            return self.current_frame;
        }
        let (Some(current), Some(frame_count)) =
            (self.current_frame, self.frameset.number_of_frames())
        else {
            self.playing = false;
            return self.current_frame;
        };

        if !self.frameset.contains(current) {
            // The range was edited while playing.
            self.step = 1;
            self.current_frame = Some(self.frameset.start_frame);
            return self.current_frame;
        }

        let start = self.frameset.start_frame as i64;
        let end = self.frameset.end_frame as i64;
        let current = current as i64;

        let next = if !self.frameset.ping_pong {
            self.step = 1;
            let candidate = current + 1;
            if candidate > end {
                self.times_played += 1;
                if self.continues() {
                    Some(start)
                } else {
                    None
                }
            } else {
                Some(candidate)
            }
        } else if frame_count == 1 {
            // Nowhere to bounce to: every step completes a traversal.
            self.step = 1;
            self.times_played += 1;
            if self.continues() {
                Some(start)
            } else {
                None
            }
        } else {
            let candidate = current + self.step as i64;
            if candidate < start {
                self.times_played += 1;
            }

            if candidate > end || (candidate < start && self.continues()) {
                self.step = -self.step;
                Some((current + self.step as i64).clamp(start, end))
            } else if candidate < start {
                None
            } else {
                Some(candidate)
            }
        };

        match next {
            Some(frame) => self.current_frame = Some(frame as u32),
            None => self.finish(),
        }
        self.current_frame
    }

    /// Feeds `dt` seconds of host time and advances as many frames as are due.
    ///
    /// With a zero duration every tick advances exactly one frame. Remaining
    /// time below one frame's duration carries over to the next tick. A
    /// non-finite `dt` is ignored. However long `dt` is, a tick steps through
    /// at most a few traversals; whole traversals beyond those are only
    /// counted in [`FramesetPlayer::times_played`].
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        if !self.playing {
            return self.current_frame;
        }
        let (Some(per_frame), Some(frame_count)) = (
            self.frameset.duration_per_frame(),
            self.frameset.number_of_frames(),
        ) else {
            self.playing = false;
            return self.current_frame;
        };

        if !(per_frame > 0.0 && per_frame.is_finite()) {
            self.elapsed = 0.0;
            return self.advance();
        }
        if !dt.is_finite() {
            log::warn!("ignoring non-finite tick of {} s", dt);
            return self.current_frame;
        }

        let per_frame = f64::from(per_frame);
        let total = self.elapsed + f64::from(dt.max(0.0));
        let due = (total / per_frame).floor();
        self.elapsed = (total - due * per_frame).clamp(0.0, per_frame);

        // Saturating float-to-int conversion.
        let due = due as u64;
        let cycle = self.cycle_length(frame_count);

        // The first traversal can start mid-bounce; after it the timeline
        // repeats every `cycle` advances, adding one play each time.
        let warmup = due.min(cycle);
        self.advance_by(warmup);
        let remaining = self.skip_cycles(due - warmup, cycle);
        self.advance_by(remaining);
        self.current_frame
    }

    /// Advances per full traversal: the range length, or the round trip for
    /// ping-pong.
    fn cycle_length(&self, frame_count: u64) -> u64 {
        if self.frameset.ping_pong && frame_count > 1 {
            2 * (frame_count - 1)
        } else {
            frame_count
        }
    }

    fn advance_by(&mut self, count: u64) {
        let mut left = count;
        while self.playing && left > 0 {
            self.advance();
            left -= 1;
        }
    }

    /// Counts whole traversals of `due` advances without stepping through
    /// them, keeping enough to end playback when the play count runs out.
    /// Returns the advances still to perform.
    fn skip_cycles(&mut self, due: u64, cycle: u64) -> u64 {
        if !self.playing || cycle == 0 {
            return due;
        }
        let cycles = due / cycle;
        let skipped = if self.frameset.looping() {
            cycles
        } else if self.frameset.limits_number_of_plays() {
            let plays = self.frameset.number_of_plays() as u64;
            cycles.min(plays.saturating_sub(u64::from(self.times_played) + 1))
        } else {
            0
        };
        let played = u64::from(self.times_played).saturating_add(skipped);
        self.times_played = u32::try_from(played).unwrap_or(u32::MAX);
        due - skipped * cycle
    }
}
