//! Bounded edit distance
//!
//! Cheap admissibility test run on every candidate pair before the full
//! alignment. The dynamic program is restricted to a diagonal band of width
//! `2 * max_dist + 1` and abandons the pair as soon as no cell in a row can
//! still reach a distance within budget, so the per-pair cost is
//! O(len * max_dist) rather than O(len^2).

/// Levenshtein distance between `a` and `b`, cut off at `max_dist`.
///
/// Returns the exact distance when it is at most `max_dist`, otherwise the
/// sentinel `max_dist + 1`. Distances are over characters, not bytes.
pub fn bounded_levenshtein(a: &str, b: &str, max_dist: usize) -> usize {
    if a == b {
        return 0;
    }
    let sentinel = max_dist + 1;

    let mut ca: Vec<char> = a.chars().collect();
    let mut cb: Vec<char> = b.chars().collect();
    if ca.len() > cb.len() {
        std::mem::swap(&mut ca, &mut cb);
    }
    let (la, lb) = (ca.len(), cb.len());
    if lb - la > max_dist {
        return sentinel;
    }

    let mut prev: Vec<usize> = (0..=lb).collect();
    let mut cur: Vec<usize> = vec![0; lb + 1];

    for i in 1..=la {
        cur[0] = i;
        let j_start = i.saturating_sub(max_dist).max(1);
        let j_end = (i + max_dist).min(lb);

        for slot in cur.iter_mut().take(j_start).skip(1) {
            *slot = sentinel;
        }

        let mut row_min = sentinel;
        let ai = ca[i - 1];
        for j in j_start..=j_end {
            let cost = usize::from(ai != cb[j - 1]);
            let value = (prev[j] + 1)
                .min(cur[j - 1] + 1)
                .min(prev[j - 1] + cost);
            cur[j] = value;
            if value < row_min {
                row_min = value;
            }
        }

        for slot in cur.iter_mut().take(lb + 1).skip(j_end + 1) {
            *slot = sentinel;
        }

        if row_min > max_dist {
            return sentinel;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[lb]
}
