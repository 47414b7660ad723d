//! Subcommand handlers for shellansi.

pub mod config;
pub mod render;
