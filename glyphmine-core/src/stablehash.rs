//! Seed-free content hashing for deterministic ordering
//!
//! Bucket visitation and within-bucket candidate ranking must not depend on
//! map iteration order or thread scheduling, so ties are broken by a
//! fixed-width hash of the content itself. `FxHasher` is deterministic and
//! carries no per-process seed, which is the whole point here; it is never
//! used for anything security-sensitive.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Hash a string to a stable 64-bit ordering key.
pub fn stable_hash(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish()
}
