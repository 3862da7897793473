//! Result objects emitted by workers and the merger
//!
//! JSON field names match the artifacts the downstream fuzzy-search side
//! already consumes, so changes here are wire-format changes.

use crate::config::ConfigSnapshot;
use serde::{Deserialize, Serialize};

/// An example token pair (a, b) that produced a confusion entry.
pub type ExamplePair = (String, String);

/// One weighted (src, dst) confusion with bounded provenance examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionEntry {
    /// Source-side chunk
    pub src: String,
    /// Destination-side chunk
    pub dst: String,
    /// Accumulated weight (sum of per-pair geometric-mean contributions)
    pub weight: f64,
    /// First-seen example token pairs, capped per configuration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ExamplePair>,
}

/// Counters and tables from a successful partition run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionStats {
    /// Distinct tokens seen in the partition
    pub tokens: usize,
    /// Vocabulary size after stop-token removal
    pub vocab_used: usize,
    /// Stop tokens excluded from mining
    pub stop_tokens: usize,
    /// Skeleton buckets formed
    pub skeleton_groups: usize,
    /// Candidate pairs examined (including length-gap rejects)
    pub pairs_compared: u64,
    /// Pairs that produced at least one chunk
    pub pairs_accepted: u64,
    /// Main confusion table, weight-descending, capped
    pub suggestions: Vec<ConfusionEntry>,
    /// Matra-only confusion table, weight-descending, capped
    pub matra_only: Vec<ConfusionEntry>,
    /// Free-form diagnostic (e.g. set when no tokens were found)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Build timestamp, seconds since the Unix epoch
    pub built_at_epoch: u64,
    /// Elapsed wall time in seconds
    pub seconds: f64,
    /// Effective configuration used for the run
    pub config: ConfigSnapshot,
}

/// Self-contained result of mining one partition.
///
/// Workers never raise past their boundary: a failure to read or parse the
/// partition's input is captured here with `ok == false` and an error
/// string, and the run continues with the remaining partitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionReport {
    /// Partition identifier (e.g. "ac=012")
    pub ac: String,
    /// Whether mining completed
    pub ok: bool,
    /// Diagnostic message when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Counters and tables when `ok` is true
    #[serde(flatten)]
    pub stats: Option<PartitionStats>,
}

impl PartitionReport {
    /// A successful report.
    pub fn success(ac: impl Into<String>, stats: PartitionStats) -> Self {
        Self {
            ac: ac.into(),
            ok: true,
            error: None,
            stats: Some(stats),
        }
    }

    /// A failed report carrying a diagnostic message.
    pub fn failure(ac: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            ac: ac.into(),
            ok: false,
            error: Some(error.into()),
            stats: None,
        }
    }
}

/// Globally merged confusion table for one track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedReport {
    /// Partition-set identifier
    pub state_code: String,
    /// Build timestamp, seconds since the Unix epoch
    pub built_at_epoch: u64,
    /// Number of partitions considered (successful or not)
    pub ac_count: usize,
    /// Worker count used for the map phase
    pub workers: usize,
    /// Union size before truncation
    pub merged_count: usize,
    /// Ranked entries, weight-descending, truncated to the global cap
    pub top: Vec<ConfusionEntry>,
}
