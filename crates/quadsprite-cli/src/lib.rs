//! QuadSprite CLI library.
//!
//! Input loading and the `slice`, `validate` and `play` command
//! implementations behind the `quadsprite` binary.

pub mod commands;
pub mod input;
