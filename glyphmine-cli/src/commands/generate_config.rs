//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Edit the knobs, then run:");
        println!("  glyphmine mine --config {}", self.output.display());
        Ok(())
    }
}

/// Template configuration content with the shipped defaults.
fn template() -> &'static str {
    r#"# glyphmine configuration
# Every knob is optional; omitted values use the shipped defaults shown here.

[mining]
# Token length bounds (characters)
min_token_len = 2
max_token_len = 24
# Edit-distance ceiling for admissible token pairs
max_dist = 2
# Maximum character length of either side of a confusion chunk
max_chunk_len = 3
# Keep matra-only confusions out of the main table
drop_matra_only_from_main = true

[limits]
# Top-N tokens by frequency considered per skeleton bucket
max_variants_per_skeleton = 40
# Pairs examined per skeleton bucket before moving on
max_pairs_per_skeleton = 400
# Accepted pairs per partition before mining stops
max_suggestions_total = 30000
# Stop tokens: the top ratio of distinct tokens whose count also clears
# the floor are excluded from mining entirely
ignore_top_freq_ratio = 0.0008
ignore_min_count = 150
# Example token pairs retained per (src, dst) entry
max_examples_per_pair = 3
# Entries retained per table in partition reports / merged artifacts
report_cap = 5000
merged_cap = 2000

[input]
# Record fields mined for tokens
text_fields = ["voter_name_norm", "relative_name_norm"]
# Per-partition records file name (one JSON object per line)
records_file = "voters.jsonl"

[performance]
# Worker threads for the partition map phase (0 = derive from hardware,
# clamped to [2, 12])
workers = 0
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(template()).unwrap();
        let miner = parsed.to_miner_config("S27".to_string());
        assert_eq!(miner, glyphmine_core::MinerConfig::default());
    }

    #[test]
    fn test_execute_writes_template() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("mining.toml");
        let args = GenerateConfigArgs {
            output: output.clone(),
        };
        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("[mining]"));
        assert!(content.contains("max_variants_per_skeleton = 40"));
    }
}
