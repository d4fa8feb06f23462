//! Play command implementation
//!
//! Simulates a host ticking one frameset at a fixed rate and prints every
//! frame change.

use anyhow::{Context, Result};
use colored::Colorize;
use quadsprite_anim::{DeterministicRng, FramesetPlayer};
use quadsprite_spec::{Frameset, SpriteAnimation};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, FrameEvent, JsonError, PlayOutput};
use super::{EXIT_ERROR, EXIT_INVALID};
use crate::input::load_animation;

/// Simulation settings for the play command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaySettings {
    /// Host ticks per second.
    pub fps: u32,
    /// Simulated seconds.
    pub seconds: f32,
    /// Seed for random start frames.
    pub seed: u32,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self {
            fps: 60,
            seconds: 5.0,
            seed: 0,
        }
    }
}

/// The recorded result of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub events: Vec<FrameEvent>,
    pub finished_at: Option<u32>,
}

/// Run the play command
///
/// # Arguments
/// * `animation_path` - Path to the animation set JSON
/// * `frameset` - Frameset to play (default: the first one)
/// * `settings` - Tick rate, duration and seed
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the frameset cannot be played, 2 on input errors
pub fn run(
    animation_path: &str,
    frameset: Option<&str>,
    settings: PlaySettings,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(animation_path, frameset, settings)
    } else {
        run_human(animation_path, frameset, settings)
    }
}

fn run_human(animation_path: &str, name: Option<&str>, settings: PlaySettings) -> Result<ExitCode> {
    let animation = load_animation(Path::new(animation_path))
        .with_context(|| format!("Failed to load animation set: {}", animation_path))?;

    let frameset = match select_frameset(&animation, name) {
        Ok(frameset) => frameset,
        Err(error) => {
            println!("{} {}", "FAILED".red().bold(), error.message);
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    println!(
        "{} {} at {} fps for {}s (seed {})",
        "Playing:".cyan().bold(),
        frameset.name,
        settings.fps,
        settings.seconds,
        settings.seed
    );

    let timeline = simulate(frameset, settings);
    for event in &timeline.events {
        println!(
            "  {} {:>8.3}s  frame {:>4}  {}",
            format!("#{:<5}", event.tick).dimmed(),
            event.time,
            event.frame,
            format!("plays {}", event.times_played).dimmed()
        );
    }

    match timeline.finished_at {
        Some(tick) => println!("\n{} finished on tick {}", "DONE".green().bold(), tick),
        None => println!("\n{} still playing", "DONE".green().bold()),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(animation_path: &str, name: Option<&str>, settings: PlaySettings) -> Result<ExitCode> {
    let animation = match load_animation(Path::new(animation_path)) {
        Ok(animation) => animation,
        Err(error) => {
            print_json(&failure(JsonError::from(&error)))?;
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };

    let frameset = match select_frameset(&animation, name) {
        Ok(frameset) => frameset,
        Err(error) => {
            print_json(&failure(error))?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let frameset_name = frameset.name.clone();
    let timeline = simulate(frameset, settings);
    print_json(&PlayOutput {
        success: true,
        errors: Vec::new(),
        frameset: Some(frameset_name),
        events: timeline.events,
        finished_at: timeline.finished_at,
    })?;
    Ok(ExitCode::SUCCESS)
}

fn failure(error: JsonError) -> PlayOutput {
    PlayOutput {
        success: false,
        errors: vec![error],
        frameset: None,
        events: Vec::new(),
        finished_at: None,
    }
}

/// Picks the named frameset (case-insensitive) or the first one, and checks
/// that it can be played.
pub fn select_frameset(animation: &SpriteAnimation, name: Option<&str>) -> Result<Frameset, JsonError> {
    let frameset = match name {
        Some(name) => animation.frameset(name).ok_or_else(|| {
            JsonError::new(
                error_codes::UNKNOWN_FRAMESET,
                format!("unknown frameset '{}'", name),
            )
        })?,
        None => animation.first().ok_or_else(|| {
            JsonError::new(error_codes::NO_FRAMESETS, "animation set has no framesets")
        })?,
    };
    frameset
        .validate()
        .map_err(|e| JsonError::new(error_codes::INVALID_FRAMESET, e.to_string()))?;
    Ok(frameset.clone())
}

/// Plays `frameset` and ticks it `fps * seconds` times, recording the initial
/// frame and every change.
pub fn simulate(frameset: Frameset, settings: PlaySettings) -> Timeline {
    let fps = settings.fps.max(1);
    let dt = 1.0 / fps as f32;
    let ticks = (settings.seconds.max(0.0) * fps as f32).round() as u32;

    let mut rng = DeterministicRng::new(settings.seed);
    let mut player = FramesetPlayer::new(frameset);
    let mut events = Vec::new();
    let mut finished_at = None;

    let mut last = player.play(&mut rng);
    if let Some(frame) = last {
        events.push(FrameEvent {
            tick: 0,
            time: 0.0,
            frame,
            times_played: player.times_played(),
        });
    }

    for tick in 1..=ticks {
        let frame = player.tick(dt);
        match frame {
            None => {
                finished_at = Some(tick);
                break;
            }
            Some(frame) if Some(frame) != last => events.push(FrameEvent {
                tick,
                time: tick as f32 * dt,
                frame,
                times_played: player.times_played(),
            }),
            Some(_) => {}
        }
        last = frame;
    }

    log::debug!(
        "simulated {} tick(s), {} frame change(s)",
        ticks,
        events.len()
    );
    Timeline {
        events,
        finished_at,
    }
}
