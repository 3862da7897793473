//! Configuration module
//!
//! Optional TOML file exposing the mining knobs; anything not set falls
//! back to the shipped defaults in `MinerConfig`.

use anyhow::{Context, Result};
use glyphmine_core::MinerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Token and chunk knobs
    #[serde(default)]
    pub mining: MiningConfig,

    /// Combinatorial caps and stop-token thresholds
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Record input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Token filtering and chunk extraction knobs
#[derive(Debug, Deserialize, Serialize)]
pub struct MiningConfig {
    /// Minimum token length in characters
    pub min_token_len: usize,
    /// Maximum token length in characters
    pub max_token_len: usize,
    /// Edit-distance ceiling for admissible pairs
    pub max_dist: usize,
    /// Maximum character length of either chunk side
    pub max_chunk_len: usize,
    /// Keep matra-only confusions out of the main table
    pub drop_matra_only_from_main: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        let d = MinerConfig::default();
        Self {
            min_token_len: d.min_token_len,
            max_token_len: d.max_token_len,
            max_dist: d.max_dist,
            max_chunk_len: d.max_chunk_len,
            drop_matra_only_from_main: d.drop_matra_only_from_main,
        }
    }
}

/// Caps and stop-token thresholds
#[derive(Debug, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Top-N tokens by frequency considered per skeleton bucket
    pub max_variants_per_skeleton: usize,
    /// Pairs examined per skeleton bucket
    pub max_pairs_per_skeleton: u64,
    /// Accepted pairs per partition
    pub max_suggestions_total: u64,
    /// Ratio of distinct tokens eligible as stop tokens
    pub ignore_top_freq_ratio: f64,
    /// Absolute count floor for stop tokens
    pub ignore_min_count: u64,
    /// Example pairs retained per entry
    pub max_examples_per_pair: usize,
    /// Entries retained per table in a partition report
    pub report_cap: usize,
    /// Entries retained in a merged artifact
    pub merged_cap: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let d = MinerConfig::default();
        Self {
            max_variants_per_skeleton: d.max_variants_per_skeleton,
            max_pairs_per_skeleton: d.max_pairs_per_skeleton,
            max_suggestions_total: d.max_suggestions_total,
            ignore_top_freq_ratio: d.ignore_top_freq_ratio,
            ignore_min_count: d.ignore_min_count,
            max_examples_per_pair: d.max_examples_per_pair,
            report_cap: d.report_cap,
            merged_cap: d.merged_cap,
        }
    }
}

/// Record input configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct InputConfig {
    /// Record fields mined for tokens
    pub text_fields: Vec<String>,
    /// Per-partition records file name
    pub records_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text_fields: MinerConfig::default().text_fields,
            records_file: "voters.jsonl".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = derive from hardware)
    pub workers: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Convert to the core mining configuration.
    pub fn to_miner_config(&self, state_code: String) -> MinerConfig {
        MinerConfig {
            state_code,
            text_fields: self.input.text_fields.clone(),
            min_token_len: self.mining.min_token_len,
            max_token_len: self.mining.max_token_len,
            max_dist: self.mining.max_dist,
            max_chunk_len: self.mining.max_chunk_len,
            max_variants_per_skeleton: self.limits.max_variants_per_skeleton,
            max_pairs_per_skeleton: self.limits.max_pairs_per_skeleton,
            max_suggestions_total: self.limits.max_suggestions_total,
            ignore_top_freq_ratio: self.limits.ignore_top_freq_ratio,
            ignore_min_count: self.limits.ignore_min_count,
            max_examples_per_pair: self.limits.max_examples_per_pair,
            drop_matra_only_from_main: self.mining.drop_matra_only_from_main,
            report_cap: self.limits.report_cap,
            merged_cap: self.limits.merged_cap,
            workers: if self.performance.workers > 0 {
                Some(self.performance.workers)
            } else {
                None
            },
        }
    }
}
