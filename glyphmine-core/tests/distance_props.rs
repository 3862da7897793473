//! Property tests for the distance filter and alignment

use glyphmine_core::{align_ops, bounded_levenshtein, extract_chunks};
use proptest::prelude::*;

/// Reference unbounded Levenshtein distance, straight from the recurrence.
fn reference_levenshtein(a: &str, b: &str) -> usize {
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    let (la, lb) = (ca.len(), cb.len());
    let mut prev: Vec<usize> = (0..=lb).collect();
    let mut cur = vec![0usize; lb + 1];
    for i in 1..=la {
        cur[0] = i;
        for j in 1..=lb {
            let cost = usize::from(ca[i - 1] != cb[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[lb]
}

fn devanagari_token() -> impl Strategy<Value = String> {
    // Mix of consonants, matras, and marks so edits hit every character class
    let alphabet = vec!['क', 'ख', 'म', 'र', 'न', 'ा', 'ि', 'ु', 'ं', '्'];
    prop::collection::vec(prop::sample::select(alphabet), 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn distance_zero_iff_equal(a in devanagari_token(), b in devanagari_token()) {
        let d = bounded_levenshtein(&a, &b, 2);
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn distance_is_symmetric(a in devanagari_token(), b in devanagari_token()) {
        prop_assert_eq!(
            bounded_levenshtein(&a, &b, 2),
            bounded_levenshtein(&b, &a, 2)
        );
    }

    #[test]
    fn length_gap_exceeds_budget(a in devanagari_token(), b in devanagari_token()) {
        let gap = a.chars().count().abs_diff(b.chars().count());
        if gap > 2 {
            prop_assert_eq!(bounded_levenshtein(&a, &b, 2), 3);
        }
    }

    #[test]
    fn banded_agrees_with_reference(a in devanagari_token(), b in devanagari_token()) {
        let max_dist = 2usize;
        let reference = reference_levenshtein(&a, &b);
        let banded = bounded_levenshtein(&a, &b, max_dist);
        if reference <= max_dist {
            prop_assert_eq!(banded, reference);
        } else {
            prop_assert!(banded > max_dist);
        }
    }

    #[test]
    fn alignment_distance_is_exact(a in devanagari_token(), b in devanagari_token()) {
        let (ops, dist) = align_ops(&a, &b);
        prop_assert_eq!(dist, reference_levenshtein(&a, &b));
        // Replaying the ops reconstructs both tokens
        let mut src = String::new();
        let mut dst = String::new();
        for op in ops {
            match op {
                glyphmine_core::EditOp::Match(ch) => {
                    src.push(ch);
                    dst.push(ch);
                }
                glyphmine_core::EditOp::Substitute { src: s, dst: d } => {
                    src.push(s);
                    dst.push(d);
                }
                glyphmine_core::EditOp::Delete(ch) => src.push(ch),
                glyphmine_core::EditOp::Insert(ch) => dst.push(ch),
            }
        }
        prop_assert_eq!(src, a);
        prop_assert_eq!(dst, b);
    }

    #[test]
    fn chunks_respect_invariants(a in devanagari_token(), b in devanagari_token()) {
        for chunk in extract_chunks(&a, &b, 3) {
            prop_assert_ne!(&chunk.src, &chunk.dst);
            prop_assert!(chunk.src.chars().count() <= 3);
            prop_assert!(chunk.dst.chars().count() <= 3);
            let both_pure = chunk.src.chars().all(glyphmine_core::script::is_matra_or_mark)
                && chunk.dst.chars().all(glyphmine_core::script::is_matra_or_mark);
            prop_assert!(!both_pure);
        }
    }
}
