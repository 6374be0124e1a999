//! Subcommand implementations for the `mdgrid` binary.

pub mod detect;
pub mod extract;
pub mod input;
pub mod render;
