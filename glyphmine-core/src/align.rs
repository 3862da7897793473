//! Full alignment and diff-chunk extraction
//!
//! For a pair that passed the bounded distance filter, the full (unbanded)
//! edit-distance dynamic program is computed with a parallel choice table,
//! then walked back from the final cell to recover an ordered operation
//! list. Runs of consecutive non-match operations are collapsed into small
//! localized chunks, which is what makes the mined confusions
//! human-interpretable instead of one global diff per pair.

use crate::script::is_pure_marks;

/// A single alignment operation, in source-to-destination order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Characters agree
    Match(char),
    /// Source character replaced by destination character
    Substitute {
        /// Character in the source token
        src: char,
        /// Character in the destination token
        dst: char,
    },
    /// Source character absent from the destination
    Delete(char),
    /// Destination character absent from the source
    Insert(char),
}

/// A minimal contiguous substring-level edit between two tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Source-side substring
    pub src: String,
    /// Destination-side substring
    pub dst: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Choice {
    Match,
    Substitute,
    Delete,
    Insert,
}

/// Compute the full edit-distance alignment between `a` and `b`.
///
/// Returns the operation list in left-to-right order and the total
/// distance. Ties during backtrace follow the same preference order the
/// forward pass used to select the minimum: match, then substitution, then
/// deletion, then insertion.
pub fn align_ops(a: &str, b: &str) -> (Vec<EditOp>, usize) {
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    let (la, lb) = (ca.len(), cb.len());
    let width = lb + 1;

    let mut dp = vec![0usize; (la + 1) * width];
    let mut choice = vec![Choice::Match; (la + 1) * width];

    for i in 1..=la {
        dp[i * width] = i;
        choice[i * width] = Choice::Delete;
    }
    for j in 1..=lb {
        dp[j] = j;
        choice[j] = Choice::Insert;
    }

    for i in 1..=la {
        let ai = ca[i - 1];
        for j in 1..=lb {
            let idx = i * width + j;
            if ai == cb[j - 1] {
                dp[idx] = dp[idx - width - 1];
                choice[idx] = Choice::Match;
            } else {
                let del_cost = dp[idx - width] + 1;
                let ins_cost = dp[idx - 1] + 1;
                let sub_cost = dp[idx - width - 1] + 1;
                let best = sub_cost.min(del_cost).min(ins_cost);
                dp[idx] = best;
                choice[idx] = if best == sub_cost {
                    Choice::Substitute
                } else if best == del_cost {
                    Choice::Delete
                } else {
                    Choice::Insert
                };
            }
        }
    }

    let mut ops = Vec::with_capacity(la.max(lb));
    let (mut i, mut j) = (la, lb);
    while i > 0 || j > 0 {
        match choice[i * width + j] {
            Choice::Match => {
                ops.push(EditOp::Match(ca[i - 1]));
                i -= 1;
                j -= 1;
            }
            Choice::Substitute => {
                ops.push(EditOp::Substitute {
                    src: ca[i - 1],
                    dst: cb[j - 1],
                });
                i -= 1;
                j -= 1;
            }
            Choice::Delete => {
                ops.push(EditOp::Delete(ca[i - 1]));
                i -= 1;
            }
            Choice::Insert => {
                ops.push(EditOp::Insert(cb[j - 1]));
                j -= 1;
            }
        }
    }
    ops.reverse();

    (ops, dp[la * width + lb])
}

/// Extract the localized diff chunks between two admissible tokens.
///
/// Consecutive non-match operations accumulate into a (src, dst) buffer
/// pair; a match flushes the buffers, as does the end of the operation
/// list. A flushed chunk is discarded when either side exceeds
/// `max_chunk_len` characters, when both sides consist entirely of matras
/// and marks, or when the sides are equal after concatenation. Identical
/// tokens produce no chunks.
pub fn extract_chunks(a: &str, b: &str, max_chunk_len: usize) -> Vec<Chunk> {
    let (ops, dist) = align_ops(a, b);
    if dist == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut src_buf = String::new();
    let mut dst_buf = String::new();

    let flush = |src_buf: &mut String, dst_buf: &mut String, chunks: &mut Vec<Chunk>| {
        if src_buf.is_empty() && dst_buf.is_empty() {
            return;
        }
        let src = std::mem::take(src_buf);
        let dst = std::mem::take(dst_buf);

        if src.chars().count() > max_chunk_len || dst.chars().count() > max_chunk_len {
            return;
        }
        if is_pure_marks(&src) && is_pure_marks(&dst) {
            return;
        }
        if src == dst {
            return;
        }
        chunks.push(Chunk { src, dst });
    };

    for op in &ops {
        match *op {
            EditOp::Match(_) => flush(&mut src_buf, &mut dst_buf, &mut chunks),
            EditOp::Substitute { src, dst } => {
                src_buf.push(src);
                dst_buf.push(dst);
            }
            EditOp::Delete(src) => src_buf.push(src),
            EditOp::Insert(dst) => dst_buf.push(dst),
        }
    }
    flush(&mut src_buf, &mut dst_buf, &mut chunks);

    chunks
}
