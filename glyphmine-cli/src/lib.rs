//! Glyphmine CLI library
//!
//! Thin glue around `glyphmine-core`: partition discovery, JSONL record
//! loading, artifact writing, and the clap command surface.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
