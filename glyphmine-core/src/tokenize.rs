//! Normalization and tokenization of raw text fields

use crate::config::MinerConfig;
use crate::script::is_devanagari;

/// Punctuation stripped to whitespace during normalization.
fn is_stripped_punct(ch: char) -> bool {
    matches!(
        ch,
        '.' | ','
            | ';'
            | ':'
            | '|'
            | '/'
            | '\\'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '"'
            | '\''
            | '`'
            | '~'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | '_'
            | '+'
            | '='
            | '?'
            | '-'
    )
}

/// Normalize a raw field value: non-breaking spaces become ordinary spaces,
/// punctuation becomes whitespace, runs of whitespace collapse to a single
/// space, and the result is trimmed.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        let ch = if ch == '\u{00A0}' { ' ' } else { ch };
        let ch = if is_stripped_punct(ch) { ' ' } else { ch };
        if ch.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

/// Split a raw field value into script-valid tokens.
///
/// A candidate survives only if every character is inside the Devanagari
/// block and its character length lies within the configured bounds. Pure
/// function of its arguments; the empty result is common and fine.
pub fn tokenize(raw: &str, config: &MinerConfig) -> Vec<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized
        .split(' ')
        .filter(|t| {
            let len = t.chars().count();
            len >= config.min_token_len
                && len <= config.max_token_len
                && t.chars().all(is_devanagari)
        })
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_punct() {
        assert_eq!(normalize("  राम   कुमार  "), "राम कुमार");
        assert_eq!(normalize("राम.कुमार"), "राम कुमार");
        assert_eq!(normalize("राम\u{00A0}कुमार"), "राम कुमार");
        assert_eq!(normalize("(राम)"), "राम");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" .,;: "), "");
    }

    #[test]
    fn tokenize_keeps_only_devanagari_in_bounds() {
        let config = MinerConfig::default();
        assert_eq!(
            tokenize("राम कुमार", &config),
            vec!["राम".to_string(), "कुमार".to_string()]
        );
        // Latin and mixed-script tokens are rejected
        assert_eq!(tokenize("ram kumar", &config), Vec::<String>::new());
        assert_eq!(tokenize("रामkumar", &config), Vec::<String>::new());
        // Digits are outside the block
        assert_eq!(tokenize("राम 123", &config), vec!["राम".to_string()]);
    }

    #[test]
    fn tokenize_enforces_length_bounds() {
        let config = MinerConfig {
            min_token_len: 2,
            max_token_len: 4,
            ..MinerConfig::default()
        };
        // Single character: too short
        assert_eq!(tokenize("र", &config), Vec::<String>::new());
        // Five characters: too long
        assert_eq!(tokenize("कखगघङ", &config), Vec::<String>::new());
        assert_eq!(tokenize("कखगघ", &config), vec!["कखगघ".to_string()]);
    }

    #[test]
    fn tokenize_empty_and_null_like_input() {
        let config = MinerConfig::default();
        assert_eq!(tokenize("", &config), Vec::<String>::new());
        assert_eq!(tokenize("   ", &config), Vec::<String>::new());
    }
}
