//! Glyph-confusion mining for Devanagari name corpora
//!
//! Mines likely character-level confusion patterns (OCR and data-entry
//! substitutions) from large collections of short name-like strings,
//! producing ranked, weighted "source chunk → destination chunk" tables for
//! downstream fuzzy search and correction.
//!
//! The pipeline per partition: tokenize and normalize the configured text
//! fields, block tokens by their diacritic-stripped skeleton, filter
//! candidate pairs with a banded bounded edit distance, extract minimal
//! diff chunks from a full alignment, and aggregate weighted confusions
//! under strict combinatorial caps. Partitions are mined independently in
//! parallel and reduced into one globally ranked table per track.
//!
//! All orderings are deterministic: bucket visitation and candidate
//! ranking use a stable content hash instead of map iteration order, so
//! identical input and configuration yield byte-identical ranked output.

#![warn(missing_docs)]

pub mod align;
pub mod config;
pub mod coordinator;
pub mod distance;
pub mod error;
pub mod miner;
pub mod report;
pub mod script;
pub mod stablehash;
pub mod tokenize;

pub use align::{align_ops, extract_chunks, Chunk, EditOp};
pub use config::{ConfigSnapshot, MinerConfig};
pub use coordinator::{choose_workers, merge_reports, mine_all, mine_partition, RecordSource, Track};
pub use distance::bounded_levenshtein;
pub use error::{MineError, Result};
pub use miner::{mine_records, Record};
pub use report::{ConfusionEntry, ExamplePair, MergedReport, PartitionReport, PartitionStats};
pub use script::{is_matra_only_confusion, skeleton_key, strip_marks};
pub use stablehash::stable_hash;
pub use tokenize::{normalize, tokenize};
