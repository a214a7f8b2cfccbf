// Word segmentation for naming-convention conversion.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

lazy_static! {
    // Anything that is not a letter, digit, underscore, whitespace, hyphen or period
    static ref STRAY_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_\s.\-]").unwrap();
    static ref ACRONYM: Regex = Regex::new(r"^[A-Z]+$").unwrap();
}

/// The branch of the separator cascade used to segment a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    Space,
    Underscore,
    Hyphen,
    Period,
    /// All uppercase, kept whole instead of shredded into letters
    Acronym,
    CaseBoundary,
}

/// Strip surrounding whitespace and every character the cascade can't use.
pub fn sanitize(text: &str) -> String {
    STRAY_CHARS.replace_all(text.trim(), "").into_owned()
}

/// Pick the separator for already sanitized text. Most explicit wins:
/// space > underscore > hyphen > period > acronym > capitalization.
pub fn split_strategy(sanitized: &str) -> SplitStrategy {
    if sanitized.contains(' ') {
        SplitStrategy::Space
    } else if matches!(sanitized.rfind('_'), Some(idx) if idx > 0) {
        // Only the last underscore is inspected: "_private" falls through,
        // while "_a_b" splits and keeps a leading empty word.
        SplitStrategy::Underscore
    } else if sanitized.contains('-') {
        SplitStrategy::Hyphen
    } else if sanitized.contains('.') {
        SplitStrategy::Period
    } else if ACRONYM.is_match(sanitized) {
        SplitStrategy::Acronym
    } else {
        SplitStrategy::CaseBoundary
    }
}

/// Split a line of text into words.
///
/// Empty words produced by adjacent separators are kept; the renderer turns
/// them into no-ops. Empty or whitespace-only input yields no words.
pub fn tokenize(text: &str) -> Vec<String> {
    let sanitized = sanitize(text);
    if sanitized.is_empty() {
        return Vec::new();
    }

    let strategy = split_strategy(&sanitized);
    debug!(?strategy, input = %sanitized, "segmenting text");

    let words: Vec<String> = match strategy {
        SplitStrategy::Space => split_on(&sanitized, ' '),
        SplitStrategy::Underscore => split_on(&sanitized, '_'),
        SplitStrategy::Hyphen => split_on(&sanitized, '-'),
        SplitStrategy::Period => split_on(&sanitized, '.'),
        SplitStrategy::Acronym => vec![sanitized.clone()],
        SplitStrategy::CaseBoundary => split_before_uppercase(&sanitized),
    };

    trace!(?words, "tokenized");
    words
}

fn split_on(text: &str, separator: char) -> Vec<String> {
    text.split(separator).map(str::to_string).collect()
}

/// Start a new word at every uppercase letter after the first character.
fn split_before_uppercase(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            words.push(text[start..idx].to_string());
            start = idx;
        }
    }
    words.push(text[start..].to_string());

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_stray_characters() {
        assert_eq!(sanitize("  foo!!bar  "), "foobar");
        assert_eq!(sanitize("a.b-c_d e"), "a.b-c_d e");
        assert_eq!(sanitize("(hola)@mundo#"), "holamundo");
    }

    #[test]
    fn test_strategy_cascade_order() {
        assert_eq!(split_strategy("foo bar-baz"), SplitStrategy::Space);
        assert_eq!(split_strategy("foo_bar-baz.qux"), SplitStrategy::Underscore);
        assert_eq!(split_strategy("foo-bar.baz"), SplitStrategy::Hyphen);
        assert_eq!(split_strategy("Hola.Mundo"), SplitStrategy::Period);
        assert_eq!(split_strategy("HTTP"), SplitStrategy::Acronym);
        assert_eq!(split_strategy("holaMundo"), SplitStrategy::CaseBoundary);
        assert_eq!(split_strategy("hola"), SplitStrategy::CaseBoundary);
    }

    #[test]
    fn test_leading_underscore_quirk() {
        // A lone leading underscore is not treated as a separator
        assert_eq!(split_strategy("_private"), SplitStrategy::CaseBoundary);
        assert_eq!(tokenize("_privateField"), vec!["_private", "Field"]);

        // but any later underscore splits the whole string, leading one included
        assert_eq!(split_strategy("_a_b"), SplitStrategy::Underscore);
        assert_eq!(tokenize("_a_b"), vec!["", "a", "b"]);
    }

    #[test]
    fn test_space_wins_over_hyphen() {
        assert_eq!(tokenize("foo bar-baz"), vec!["foo", "bar-baz"]);
    }

    #[test]
    fn test_explicit_separators() {
        assert_eq!(tokenize("hola_mundo"), vec!["hola", "mundo"]);
        assert_eq!(tokenize("hola-mundo"), vec!["hola", "mundo"]);
        assert_eq!(tokenize("HOLA.MUNDO"), vec!["HOLA", "MUNDO"]);
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_case_boundary_splitting() {
        assert_eq!(tokenize("HolaMundo"), vec!["Hola", "Mundo"]);
        assert_eq!(tokenize("holaMundo"), vec!["hola", "Mundo"]);
        assert_eq!(tokenize("parseHTTPRequest"), vec!["parse", "H", "T", "T", "P", "Request"]);
    }

    #[test]
    fn test_acronym_kept_whole() {
        assert_eq!(tokenize("HOLA"), vec!["HOLA"]);
        assert_eq!(tokenize("  HTTP "), vec!["HTTP"]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("!?*").is_empty());
    }
}
