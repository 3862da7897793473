//! Mining configuration
//!
//! One immutable value threaded through every component; there is no
//! process-wide mutable state. Defaults are the empirically tuned knobs the
//! miner has shipped with.

use serde::{Deserialize, Serialize};

/// Configuration for a mining run
#[derive(Debug, Clone, PartialEq)]
pub struct MinerConfig {
    /// Partition-set identifier stamped into merged artifacts (e.g. "S27")
    pub state_code: String,
    /// Record fields mined for tokens
    pub text_fields: Vec<String>,
    /// Minimum token length in characters
    pub min_token_len: usize,
    /// Maximum token length in characters
    pub max_token_len: usize,
    /// Edit-distance ceiling for admissible token pairs
    pub max_dist: usize,
    /// Maximum character length of either side of an emitted chunk
    pub max_chunk_len: usize,
    /// Top-N tokens by frequency considered per skeleton bucket
    pub max_variants_per_skeleton: usize,
    /// Pairs examined per skeleton bucket before moving on
    pub max_pairs_per_skeleton: u64,
    /// Accepted pairs per partition before mining stops
    pub max_suggestions_total: u64,
    /// Ratio of distinct tokens eligible as stop tokens
    pub ignore_top_freq_ratio: f64,
    /// Absolute count floor a stop token must also exceed
    pub ignore_min_count: u64,
    /// Example token pairs retained per (src, dst) entry
    pub max_examples_per_pair: usize,
    /// When set, matra-only confusions are routed exclusively to the
    /// matra-only table and never appear in the main table
    pub drop_matra_only_from_main: bool,
    /// Entries retained per table in a partition report
    pub report_cap: usize,
    /// Entries retained in a merged artifact
    pub merged_cap: usize,
    /// Worker-count override (None = derive from hardware parallelism)
    pub workers: Option<usize>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            state_code: "S27".to_string(),
            text_fields: vec![
                "voter_name_norm".to_string(),
                "relative_name_norm".to_string(),
            ],
            min_token_len: 2,
            max_token_len: 24,
            max_dist: 2,
            max_chunk_len: 3,
            max_variants_per_skeleton: 40,
            max_pairs_per_skeleton: 400,
            max_suggestions_total: 30_000,
            ignore_top_freq_ratio: 0.0008,
            ignore_min_count: 150,
            max_examples_per_pair: 3,
            drop_matra_only_from_main: true,
            report_cap: 5000,
            merged_cap: 2000,
            workers: None,
        }
    }
}

impl MinerConfig {
    /// The effective-configuration snapshot embedded in partition reports.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            min_token_len: self.min_token_len,
            max_token_len: self.max_token_len,
            max_dist: self.max_dist,
            max_chunk_len: self.max_chunk_len,
            max_variants_per_skeleton: self.max_variants_per_skeleton,
            max_pairs_per_skeleton: self.max_pairs_per_skeleton,
            drop_matra_only_from_main: self.drop_matra_only_from_main,
        }
    }
}

/// Copy of the mining knobs written into every partition artifact, so a
/// stored artifact records the configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// Minimum token length in characters
    pub min_token_len: usize,
    /// Maximum token length in characters
    pub max_token_len: usize,
    /// Edit-distance ceiling for admissible token pairs
    pub max_dist: usize,
    /// Maximum character length of either side of an emitted chunk
    pub max_chunk_len: usize,
    /// Top-N tokens by frequency considered per skeleton bucket
    pub max_variants_per_skeleton: usize,
    /// Pairs examined per skeleton bucket before moving on
    pub max_pairs_per_skeleton: u64,
    /// Whether matra-only confusions were dropped from the main table
    pub drop_matra_only_from_main: bool,
}
