use crate::Convention;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Cleanup patterns: everything matched is removed after joining
    static ref ALPHANUMERIC_ONLY: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
    static ref SNAKE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
    static ref KEBAB_CHARS: Regex = Regex::new(r"[^A-Za-z0-9\-]").unwrap();
}

/// How each word is cased, depending on whether it is the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCasing {
    Lower,
    Upper,
    /// First word lowercased, the rest capitalized
    Camel,
    /// Every word capitalized
    Pascal,
}

impl WordCasing {
    pub fn apply(self, word: &str, is_first: bool) -> String {
        match self {
            WordCasing::Lower => word.to_lowercase(),
            WordCasing::Upper => word.to_uppercase(),
            WordCasing::Camel if is_first => word.to_lowercase(),
            WordCasing::Camel | WordCasing::Pascal => capitalize(word),
        }
    }
}

/// Casing, separator and cleanup pattern for one convention.
#[derive(Debug, Clone, Copy)]
pub struct RenderRule {
    pub casing: WordCasing,
    pub separator: &'static str,
    pub cleanup: &'static Regex,
}

impl RenderRule {
    pub fn of(convention: Convention) -> Self {
        match convention {
            Convention::Camel => Self {
                casing: WordCasing::Camel,
                separator: "",
                cleanup: &ALPHANUMERIC_ONLY,
            },
            Convention::Pascal => Self {
                casing: WordCasing::Pascal,
                separator: "",
                cleanup: &ALPHANUMERIC_ONLY,
            },
            Convention::Snake => Self {
                casing: WordCasing::Lower,
                separator: "_",
                cleanup: &SNAKE_CHARS,
            },
            Convention::ScreamingSnake => Self {
                casing: WordCasing::Upper,
                separator: "_",
                cleanup: &SNAKE_CHARS,
            },
            Convention::Kebab => Self {
                casing: WordCasing::Lower,
                separator: "-",
                cleanup: &KEBAB_CHARS,
            },
        }
    }
}

/// Join words under a convention's rule.
pub fn render<S: AsRef<str>>(words: &[S], convention: Convention) -> String {
    if words.is_empty() {
        return String::new();
    }

    let rule = RenderRule::of(convention);
    let joined = words
        .iter()
        .enumerate()
        .map(|(idx, word)| rule.casing.apply(word.as_ref(), idx == 0))
        .collect::<Vec<_>>()
        .join(rule.separator);

    rule.cleanup.replace_all(&joined, "").into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}
