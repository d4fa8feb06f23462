//! Validate command implementation
//!
//! Checks an animation set, optionally against the frame count of an atlas.

use anyhow::{Context, Result};
use colored::Colorize;
use quadsprite_spec::{validate_animation, SpriteAnimation, ValidationResult};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, JsonError, JsonWarning, ValidateOutput};
use super::{EXIT_ERROR, EXIT_INVALID};
use crate::input::{load_animation, load_atlas, InputError};

/// Run the validate command
///
/// # Arguments
/// * `animation_path` - Path to the animation set JSON
/// * `atlas_path` - Optional atlas whose frame count bounds every frameset
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid, 2 if an input cannot be loaded
pub fn run(animation_path: &str, atlas_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(animation_path, atlas_path)
    } else {
        run_human(animation_path, atlas_path)
    }
}

fn run_human(animation_path: &str, atlas_path: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), animation_path);

    let animation = load_animation(Path::new(animation_path))
        .with_context(|| format!("Failed to load animation set: {}", animation_path))?;

    let atlas_frames = match atlas_path {
        Some(path) => {
            let sheet = load_atlas(Path::new(path))
                .with_context(|| format!("Failed to load atlas: {}", path))?;
            println!("{} {} ({} frames)", "Atlas:".dimmed(), path, sheet.len());
            Some(sheet.len())
        }
        None => None,
    };

    let result = validate_animation(&animation, atlas_frames);
    print_validation_results(&animation, &result);

    if result.is_ok() {
        println!(
            "\n{} {} frameset(s) valid",
            "SUCCESS".green().bold(),
            animation.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Animation set has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

fn run_json(animation_path: &str, atlas_path: Option<&str>) -> Result<ExitCode> {
    let loaded = load_inputs(animation_path, atlas_path);
    let (animation, atlas_frames) = match loaded {
        Ok(inputs) => inputs,
        Err(error) => {
            print_json(&ValidateOutput {
                success: false,
                errors: vec![JsonError::from(&error)],
                warnings: Vec::new(),
                framesets: None,
            })?;
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };

    let result = validate_animation(&animation, atlas_frames);
    let output = ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(JsonError::from).collect(),
        warnings: result.warnings.iter().map(JsonWarning::from).collect(),
        framesets: Some(animation.len()),
    };
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

fn load_inputs(
    animation_path: &str,
    atlas_path: Option<&str>,
) -> Result<(SpriteAnimation, Option<usize>), InputError> {
    let animation = load_animation(Path::new(animation_path))?;
    let atlas_frames = match atlas_path {
        Some(path) => Some(load_atlas(Path::new(path))?.len()),
        None => None,
    };
    Ok((animation, atlas_frames))
}

fn print_validation_results(animation: &SpriteAnimation, result: &ValidationResult) {
    for frameset in &animation.framesets {
        let frames = frameset
            .number_of_frames()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} [{}..={}] {} frame(s)",
            frameset.name.bold(),
            frameset.start_frame,
            frameset.end_frame,
            frames
        );
    }

    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!("  {} [{}]{}: {}", "x".red(), error.code, path.dimmed(), error.message);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code,
                path.dimmed(),
                warning.message
            );
        }
    }
}
