//! QuadSprite CLI - Command-line interface for atlas slicing and frameset playback
//!
//! This binary slices atlases into quad geometry, validates animation sets,
//! and previews frameset timelines without a host engine.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use quadsprite_cli::commands;
use quadsprite_cli::commands::play::PlaySettings;
use quadsprite_spec::TextureSize;

/// QuadSprite - Atlas-sliced quad sprites and frameset playback
#[derive(Parser)]
#[command(name = "quadsprite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice an atlas and print per-frame UVs and scale
    Slice {
        /// Path to the JSON atlas
        #[arg(short, long)]
        atlas: String,

        /// Texture width in pixels (overrides the atlas meta size)
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Texture height in pixels (overrides the atlas meta size)
        #[arg(long, requires = "width")]
        height: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate an animation set without playing it
    Validate {
        /// Path to the animation set JSON
        #[arg(short = 'n', long)]
        animation: String,

        /// Atlas whose frame count bounds every frameset
        #[arg(short, long)]
        atlas: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Simulate fixed-rate ticks and print the frame timeline
    Play {
        /// Path to the animation set JSON
        #[arg(short = 'n', long)]
        animation: String,

        /// Frameset to play (default: the first one)
        #[arg(short, long)]
        frameset: Option<String>,

        /// Host ticks per second
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,

        /// Simulated seconds
        #[arg(long, default_value_t = 5.0)]
        seconds: f32,

        /// Seed for random start frames
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Slice {
            atlas,
            width,
            height,
            json,
        } => {
            let texture = width.zip(height).map(|(w, h)| TextureSize::new(w, h));
            commands::slice::run(&atlas, texture, json)
        }
        Commands::Validate {
            animation,
            atlas,
            json,
        } => commands::validate::run(&animation, atlas.as_deref(), json),
        Commands::Play {
            animation,
            frameset,
            fps,
            seconds,
            seed,
            json,
        } => commands::play::run(
            &animation,
            frameset.as_deref(),
            PlaySettings { fps, seconds, seed },
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_slice_with_texture() {
        let cli = Cli::try_parse_from([
            "quadsprite",
            "slice",
            "--atlas",
            "hero.json",
            "--width",
            "256",
            "--height",
            "128",
        ])
        .unwrap();
        match cli.command {
            Commands::Slice {
                atlas,
                width,
                height,
                json,
            } => {
                assert_eq!(atlas, "hero.json");
                assert_eq!(width, Some(256));
                assert_eq!(height, Some(128));
                assert!(!json);
            }
            _ => panic!("expected slice command"),
        }
    }

    #[test]
    fn test_cli_slice_width_requires_height() {
        let result = Cli::try_parse_from(["quadsprite", "slice", "--atlas", "a.json", "--width", "64"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from([
            "quadsprite",
            "validate",
            "--animation",
            "hero.anim.json",
            "--atlas",
            "hero.json",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate {
                animation,
                atlas,
                json,
            } => {
                assert_eq!(animation, "hero.anim.json");
                assert_eq!(atlas.as_deref(), Some("hero.json"));
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_play_defaults() {
        let cli = Cli::try_parse_from(["quadsprite", "play", "-n", "hero.anim.json"]).unwrap();
        match cli.command {
            Commands::Play {
                frameset,
                fps,
                seconds,
                seed,
                json,
                ..
            } => {
                assert_eq!(frameset, None);
                assert_eq!(fps, 60);
                assert_eq!(seconds, 5.0);
                assert_eq!(seed, 0);
                assert!(!json);
            }
            _ => panic!("expected play command"),
        }
    }

    #[test]
    fn test_cli_play_rejects_zero_fps() {
        let result =
            Cli::try_parse_from(["quadsprite", "play", "-n", "a.json", "--fps", "0"]);
        assert!(result.is_err());
    }
}
