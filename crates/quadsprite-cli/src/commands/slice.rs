//! Slice command implementation
//!
//! Imports an atlas and prints the quad geometry of every frame.

use anyhow::{Context, Result};
use colored::Colorize;
use quadsprite_atlas::SpriteSheet;
use quadsprite_spec::TextureSize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, JsonError, SliceOutput, SlicedFrame};
use super::EXIT_ERROR;
use crate::input::load_atlas;

/// Run the slice command
///
/// # Arguments
/// * `atlas_path` - Path to the JSON atlas
/// * `texture` - Texture size overriding the atlas `meta.size`
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 2 if the atlas cannot be imported
pub fn run(atlas_path: &str, texture: Option<TextureSize>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(atlas_path, texture)
    } else {
        run_human(atlas_path, texture)
    }
}

fn run_human(atlas_path: &str, texture: Option<TextureSize>) -> Result<ExitCode> {
    println!("{} {}", "Slicing:".cyan().bold(), atlas_path);

    let sheet = load_sheet(atlas_path, texture)
        .with_context(|| format!("Failed to load atlas: {}", atlas_path))?;

    match sheet.texture() {
        Some(size) => println!("{} {}x{}", "Texture:".dimmed(), size.width, size.height),
        None => println!(
            "  {} no texture size in atlas or on the command line, UVs are zero",
            "!".yellow()
        ),
    }

    for frame in slice_frames(&sheet) {
        let rotated = if frame.rotated {
            " (rotated, not applied)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  [{}] {}{}",
            frame.index,
            frame.name.bold(),
            rotated
        );
        println!(
            "      {} {:?}  {} {:?}",
            "pos".dimmed(),
            frame.position,
            "size".dimmed(),
            frame.size
        );
        println!("      {} {:?}", "uv".dimmed(), frame.uvs);
    }

    println!(
        "\n{} {} frame(s)",
        "SUCCESS".green().bold(),
        sheet.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(atlas_path: &str, texture: Option<TextureSize>) -> Result<ExitCode> {
    let output = match load_sheet(atlas_path, texture) {
        Ok(sheet) => SliceOutput {
            success: true,
            errors: Vec::new(),
            texture: sheet.texture().map(|t| [t.width, t.height]),
            frames: slice_frames(&sheet),
        },
        Err(error) => {
            print_json(&SliceOutput {
                success: false,
                errors: vec![JsonError::from(&error)],
                texture: None,
                frames: Vec::new(),
            })?;
            return Ok(ExitCode::from(EXIT_ERROR));
        }
    };
    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}

fn load_sheet(
    atlas_path: &str,
    texture: Option<TextureSize>,
) -> Result<SpriteSheet, crate::input::InputError> {
    let mut sheet = load_atlas(Path::new(atlas_path))?;
    if let Some(size) = texture {
        sheet.set_texture(size);
    }
    Ok(sheet)
}

/// Flattens a sheet into its per-frame output records.
pub fn slice_frames(sheet: &SpriteSheet) -> Vec<SlicedFrame> {
    sheet
        .iter()
        .enumerate()
        .map(|(index, (frame, geometry))| SlicedFrame {
            index,
            name: frame.name.clone(),
            position: frame.position,
            size: frame.size,
            rotated: frame.rotated,
            uvs: geometry.uvs,
            scale: geometry.scale,
        })
        .collect()
}
