//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod mine;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mine glyph confusions for every partition of a state
    Mine(mine::MineArgs),

    /// Write a TOML template of the mining knobs
    GenerateConfig(generate_config::GenerateConfigArgs),
}
