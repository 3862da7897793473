//! Per-partition confusion mining
//!
//! Runs the whole pipeline for one partition: token frequency counting,
//! stop-token removal, skeleton bucketing, bounded-distance pair filtering,
//! alignment chunk extraction, and weighted aggregation under the
//! combinatorial caps. Everything here is deterministic: every ordering a
//! hash map would otherwise dictate is replaced by an explicit sort keyed
//! on frequency and the stable content hash.

use crate::align::extract_chunks;
use crate::config::MinerConfig;
use crate::distance::bounded_levenshtein;
use crate::report::{ConfusionEntry, ExamplePair, PartitionReport, PartitionStats};
use crate::script::{is_matra_only_confusion, skeleton_key};
use crate::stablehash::stable_hash;
use crate::tokenize::tokenize;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// One input record: the values of the configured text fields, in
/// configuration order. Missing or non-text fields arrive as empty strings.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Field values to mine tokens from
    pub fields: Vec<String>,
}

impl Record {
    /// Build a record from any iterable of field values.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Accumulator for one confusion table.
#[derive(Default)]
struct TableAcc {
    entries: FxHashMap<(String, String), (f64, Vec<ExamplePair>)>,
}

impl TableAcc {
    fn add(&mut self, src: &str, dst: &str, weight: f64, example: &ExamplePair, max_examples: usize) {
        let slot = self
            .entries
            .entry((src.to_string(), dst.to_string()))
            .or_default();
        slot.0 += weight;
        if slot.1.len() < max_examples {
            slot.1.push(example.clone());
        }
    }

    /// Rank entries by weight descending with a (src, dst) tie-break, and
    /// truncate to the report cap.
    fn pack(self, cap: usize) -> Vec<ConfusionEntry> {
        let mut out: Vec<ConfusionEntry> = self
            .entries
            .into_iter()
            .filter(|((src, dst), _)| src != dst)
            .map(|((src, dst), (weight, examples))| ConfusionEntry {
                src,
                dst,
                weight,
                examples,
            })
            .collect();
        sort_entries(&mut out);
        out.truncate(cap);
        out
    }
}

/// Weight-descending order with a lexicographic (src, dst) tie-break, so
/// ranked output is identical across runs and platforms.
pub(crate) fn sort_entries(entries: &mut [ConfusionEntry]) {
    entries.sort_by(|a, b| {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| (&a.src, &a.dst).cmp(&(&b.src, &b.dst)))
    });
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn round_ms(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Mine one partition's records into a partition report. Infallible: an
/// empty or token-free partition yields a successful report with zeroed
/// counters and a note.
pub fn mine_records(ac: &str, records: &[Record], config: &MinerConfig) -> PartitionReport {
    let started = Instant::now();

    // Token frequencies across all configured fields
    let mut freq: FxHashMap<String, u64> = FxHashMap::default();
    for record in records {
        for field in &record.fields {
            for token in tokenize(field, config) {
                *freq.entry(token).or_insert(0) += 1;
            }
        }
    }

    if freq.is_empty() {
        return PartitionReport::success(
            ac,
            PartitionStats {
                tokens: 0,
                vocab_used: 0,
                stop_tokens: 0,
                skeleton_groups: 0,
                pairs_compared: 0,
                pairs_accepted: 0,
                suggestions: Vec::new(),
                matra_only: Vec::new(),
                notes: Some("no devanagari tokens found".to_string()),
                built_at_epoch: epoch_seconds(),
                seconds: round_ms(started.elapsed().as_secs_f64()),
                config: config.snapshot(),
            },
        );
    }

    // Stop tokens: among the top slice of distinct tokens by count, those
    // whose count also clears the absolute floor. Ultra-common tokens
    // generate disproportionate noisy pairs without yielding meaningful
    // confusions.
    let mut by_count: Vec<&String> = freq.keys().collect();
    by_count.sort_by_key(|t| (Reverse(freq[*t]), stable_hash(t.as_str())));
    let top_n = ((freq.len() as f64) * config.ignore_top_freq_ratio) as usize;
    let top_n = top_n.max(1);
    let stop: Vec<&String> = by_count
        .iter()
        .take(top_n)
        .filter(|t| freq[**t] >= config.ignore_min_count)
        .copied()
        .collect();
    let stop_count = stop.len();

    // Group the surviving vocabulary by skeleton; skeletons shorter than
    // two characters make too unstable a bucket.
    let mut groups: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut vocab_used = 0usize;
    for token in freq.keys() {
        if stop.iter().any(|s| *s == token) {
            continue;
        }
        vocab_used += 1;
        let sk = skeleton_key(token);
        if sk.chars().count() < 2 {
            continue;
        }
        groups.entry(sk).or_default().push(token.clone());
    }

    let mut main = TableAcc::default();
    let mut matra = TableAcc::default();
    let mut pairs_compared = 0u64;
    let mut pairs_accepted = 0u64;

    // Bucket visitation order comes from the stable hash of the bucket key,
    // not map iteration order, so the global cap truncates the same way in
    // every run.
    let mut bucket_keys: Vec<&String> = groups.keys().collect();
    bucket_keys.sort_by_key(|sk| (stable_hash(sk.as_str()), (*sk).clone()));

    'mining: for sk in bucket_keys {
        let members = &groups[sk];
        if members.len() < 2 {
            continue;
        }

        // Top variants by frequency, ties broken by content hash
        let mut variants: Vec<&String> = members.iter().collect();
        variants.sort_by_key(|t| (Reverse(freq[*t]), stable_hash(t.as_str()), (*t).clone()));
        variants.truncate(config.max_variants_per_skeleton);

        let mut local_pairs = 0u64;
        'bucket: for i in 0..variants.len() {
            let a = variants[i];
            for b in &variants[i + 1..] {
                local_pairs += 1;
                if local_pairs > config.max_pairs_per_skeleton {
                    break 'bucket;
                }

                pairs_compared += 1;
                let len_a = a.chars().count();
                let len_b = b.chars().count();
                if len_a.abs_diff(len_b) > config.max_dist {
                    continue;
                }

                let dist = bounded_levenshtein(a, b, config.max_dist);
                if dist == 0 || dist > config.max_dist {
                    continue;
                }

                let chunks = extract_chunks(a, b, config.max_chunk_len);
                if chunks.is_empty() {
                    continue;
                }

                let weight = ((freq[a] as f64) * (freq[*b] as f64)).sqrt();
                pairs_accepted += 1;
                let example: ExamplePair = (a.clone(), (*b).clone());

                for chunk in &chunks {
                    if is_matra_only_confusion(&chunk.src, &chunk.dst) {
                        matra.add(
                            &chunk.src,
                            &chunk.dst,
                            weight,
                            &example,
                            config.max_examples_per_pair,
                        );
                        if config.drop_matra_only_from_main {
                            continue;
                        }
                    }
                    main.add(
                        &chunk.src,
                        &chunk.dst,
                        weight,
                        &example,
                        config.max_examples_per_pair,
                    );
                }

                if pairs_accepted >= config.max_suggestions_total {
                    break 'mining;
                }
            }
        }
    }

    log::debug!(
        "{ac}: {} distinct tokens, {} buckets, {pairs_compared} compared, {pairs_accepted} accepted",
        freq.len(),
        groups.len()
    );

    PartitionReport::success(
        ac,
        PartitionStats {
            tokens: freq.len(),
            vocab_used,
            stop_tokens: stop_count,
            skeleton_groups: groups.len(),
            pairs_compared,
            pairs_accepted,
            suggestions: main.pack(config.report_cap),
            matra_only: matra.pack(config.report_cap),
            notes: None,
            built_at_epoch: epoch_seconds(),
            seconds: round_ms(started.elapsed().as_secs_f64()),
            config: config.snapshot(),
        },
    )
}
