//! Devanagari character classification
//!
//! The miner only ever compares tokens written entirely in the Devanagari
//! block (U+0900–U+097F). Dependent vowel signs (matras) and combining marks
//! are treated specially: stripping them yields the skeleton used as the
//! blocking key, and a confusion whose two sides share a non-empty skeleton
//! is classified as matra-only.

/// Dependent vowel signs (matras).
const MATRAS: [char; 13] = [
    'ा', 'ि', 'ी', 'ु', 'ू', 'े', 'ै', 'ो', 'ौ', 'ृ', 'ॄ', 'ॢ', 'ॣ',
];

/// Combining marks: candrabindu, anusvara, visarga, nukta, virama,
/// anudatta, udatta.
const MARKS: [char; 7] = ['ँ', 'ं', 'ः', '़', '्', '\u{0952}', '\u{0951}'];

/// True for characters inside the Devanagari Unicode block.
pub fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// True for dependent vowel signs and combining marks.
pub fn is_matra_or_mark(ch: char) -> bool {
    MATRAS.contains(&ch) || MARKS.contains(&ch)
}

/// Remove all matras and combining marks, keeping remaining characters in
/// original order. Independent vowels are kept.
pub fn strip_marks(s: &str) -> String {
    s.chars().filter(|ch| !is_matra_or_mark(*ch)).collect()
}

/// Blocking key for candidate generation: the token with matras and marks
/// removed.
pub fn skeleton_key(token: &str) -> String {
    strip_marks(token)
}

/// True if every character is a matra or mark. The empty string counts as
/// pure, so a one-sided insertion/deletion chunk of marks is also treated
/// as informationless.
pub fn is_pure_marks(s: &str) -> bool {
    s.chars().all(is_matra_or_mark)
}

/// True if the base skeletons of both sides are identical and non-empty.
///
/// This catches matra changes (मि vs मा), matra re-ordering from OCR
/// segmentation (कु vs ुक), and anusvara/halant noise where only marks
/// differ around the same base characters.
pub fn is_matra_only_confusion(src: &str, dst: &str) -> bool {
    let base_src = strip_marks(src);
    let base_dst = strip_marks(dst);
    !base_src.is_empty() && !base_dst.is_empty() && base_src == base_dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_block_membership() {
        assert!(is_devanagari('र'));
        assert!(is_devanagari('ा'));
        assert!(is_devanagari('ं'));
        assert!(!is_devanagari('a'));
        assert!(!is_devanagari('1'));
        assert!(!is_devanagari(' '));
    }

    #[test]
    fn strip_marks_removes_matras_and_marks() {
        assert_eq!(strip_marks("राम"), "रम");
        assert_eq!(strip_marks("कुमारी"), "कमर");
        assert_eq!(strip_marks("सिंह"), "सह");
        // Independent vowels survive
        assert_eq!(strip_marks("अनिल"), "अनल");
        assert_eq!(strip_marks(""), "");
    }

    #[test]
    fn pure_marks_detection() {
        assert!(is_pure_marks("ा"));
        assert!(is_pure_marks("िं"));
        assert!(is_pure_marks(""));
        assert!(!is_pure_marks("र"));
        assert!(!is_pure_marks("रा"));
    }

    #[test]
    fn matra_only_requires_equal_nonempty_skeletons() {
        assert!(is_matra_only_confusion("मि", "मा"));
        assert!(is_matra_only_confusion("कु", "ुक"));
        // Different base characters
        assert!(!is_matra_only_confusion("मि", "ना"));
        // Empty skeleton on either side
        assert!(!is_matra_only_confusion("ा", "ी"));
        assert!(!is_matra_only_confusion("मा", "ा"));
    }
}
