//! Partition coordination and cross-partition merging
//!
//! The map phase is embarrassingly parallel: one worker per partition, no
//! shared mutable state, every worker returns an owned report (failed or
//! not). The reduce phase runs strictly single-threaded after all workers
//! have joined, so the merge accumulator never has concurrent writers.

use crate::config::MinerConfig;
use crate::error::{MineError, Result};
use crate::miner::{mine_records, sort_entries, Record};
use crate::report::{ConfusionEntry, ExamplePair, MergedReport, PartitionReport};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-partition record access, supplied by the caller.
///
/// The core never reads files itself; it only needs the configured text
/// field values of each record. Implementations should return an error for
/// missing or unreadable input — the coordinator turns that into a failed
/// report for the partition in question.
pub trait RecordSource: Sync {
    /// Load all records for one partition.
    fn records(&self, partition: &str) -> Result<Vec<Record>>;
}

/// Which merged table to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// General confusions
    Main,
    /// Pure-diacritic confusions
    MatraOnly,
}

/// Derive the worker count: hardware parallelism minus two, clamped to
/// [2, 12], unless overridden.
pub fn choose_workers(override_workers: Option<usize>) -> usize {
    if let Some(w) = override_workers {
        if w > 0 {
            return w;
        }
    }
    let n = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8);
    n.saturating_sub(2).clamp(2, 12)
}

/// Mine one partition, capturing any loader failure as a failed report.
pub fn mine_partition<S: RecordSource>(
    source: &S,
    partition: &str,
    config: &MinerConfig,
) -> PartitionReport {
    match source.records(partition) {
        Ok(records) => mine_records(partition, &records, config),
        Err(err) => PartitionReport::failure(partition, err.to_string()),
    }
}

/// Run the map phase: one worker per partition on a bounded thread pool.
///
/// Reports come back in the order of `partitions`, regardless of which
/// worker finished first, and failures never abort sibling partitions.
pub fn mine_all<S: RecordSource>(
    source: &S,
    partitions: &[String],
    config: &MinerConfig,
    workers: usize,
) -> Result<Vec<PartitionReport>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| MineError::Config(e.to_string()))?;

    Ok(pool.install(|| {
        partitions
            .par_iter()
            .map(|partition| mine_partition(source, partition, config))
            .collect()
    }))
}

/// Reduce phase: union one track's entries across all successful reports.
///
/// Weights for identical (src, dst) keys are summed and examples are
/// concatenated up to the per-pair cap, in the order the reports are given.
/// Entry weights are order-independent; callers who need byte-identical
/// artifacts should pass reports in a fixed order so example selection is
/// reproducible too.
pub fn merge_reports(
    reports: &[PartitionReport],
    track: Track,
    config: &MinerConfig,
    workers: usize,
) -> MergedReport {
    let mut merged: FxHashMap<(String, String), (f64, Vec<ExamplePair>)> = FxHashMap::default();

    for report in reports {
        let Some(stats) = report.stats.as_ref().filter(|_| report.ok) else {
            continue;
        };
        let entries = match track {
            Track::Main => &stats.suggestions,
            Track::MatraOnly => &stats.matra_only,
        };
        for entry in entries {
            if entry.src == entry.dst {
                continue;
            }
            let slot = merged
                .entry((entry.src.clone(), entry.dst.clone()))
                .or_default();
            slot.0 += entry.weight;
            for example in &entry.examples {
                if slot.1.len() >= config.max_examples_per_pair {
                    break;
                }
                slot.1.push(example.clone());
            }
        }
    }

    let mut top: Vec<ConfusionEntry> = merged
        .into_iter()
        .map(|((src, dst), (weight, examples))| ConfusionEntry {
            src,
            dst,
            weight,
            examples,
        })
        .collect();
    sort_entries(&mut top);
    let merged_count = top.len();
    top.truncate(config.merged_cap);

    MergedReport {
        state_code: config.state_code.clone(),
        built_at_epoch: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
        ac_count: reports.len(),
        workers,
        merged_count,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_override_wins() {
        assert_eq!(choose_workers(Some(4)), 4);
        assert_eq!(choose_workers(Some(1)), 1);
    }

    #[test]
    fn worker_count_is_clamped() {
        let workers = choose_workers(None);
        assert!((2..=12).contains(&workers));
        // Zero override falls back to the derived count
        assert_eq!(choose_workers(Some(0)), workers);
    }

    #[test]
    fn merge_skips_failed_reports() {
        let config = MinerConfig::default();
        let failed = PartitionReport::failure("ac=001", "missing input");
        let merged = merge_reports(&[failed], Track::Main, &config, 2);
        assert_eq!(merged.ac_count, 1);
        assert_eq!(merged.merged_count, 0);
        assert!(merged.top.is_empty());
    }
}
