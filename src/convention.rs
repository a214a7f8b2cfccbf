use crate::NamecaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Convention {
    /// `holaMundo`
    Camel,
    /// `HolaMundo`
    Pascal,
    /// `hola_mundo`
    Snake,
    /// `HOLA_MUNDO`
    ScreamingSnake,
    /// `hola-mundo`
    Kebab,
}

impl Convention {
    pub const ALL: [Convention; 5] = [
        Convention::Camel,
        Convention::Pascal,
        Convention::Snake,
        Convention::ScreamingSnake,
        Convention::Kebab,
    ];

    /// Canonical name, itself written in kebab-case
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Camel => "camel-case",
            Convention::Pascal => "pascal-case",
            Convention::Snake => "snake-case",
            Convention::ScreamingSnake => "screaming-snake-case",
            Convention::Kebab => "kebab-case",
        }
    }

    /// A sample phrase rendered in this convention, for listings.
    pub fn example(self) -> String {
        crate::convert("hola mundo", self)
    }

    fn known_names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = NamecaseError;

    /// Accepts a convention name spelled in any convention, so `camelCase`,
    /// `camel_case`, `CAMEL-CASE` and `camel` all resolve to [`Convention::Camel`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = crate::convert(s, Convention::Kebab);
        let name = normalized.strip_suffix("-case").unwrap_or(&normalized);

        match name {
            "camel" => Ok(Convention::Camel),
            "pascal" | "upper-camel" => Ok(Convention::Pascal),
            "snake" => Ok(Convention::Snake),
            "screaming-snake" | "constant" => Ok(Convention::ScreamingSnake),
            "kebab" => Ok(Convention::Kebab),
            _ => Err(NamecaseError::UnsupportedConvention {
                name: s.to_string(),
                known: Self::known_names(),
            }),
        }
    }
}

impl TryFrom<String> for Convention {
    type Error = NamecaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Convention> for String {
    fn from(convention: Convention) -> Self {
        convention.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for convention in Convention::ALL {
            assert_eq!(convention.as_str().parse::<Convention>(), Ok(convention));
        }
    }

    #[test]
    fn test_parse_any_spelling() {
        assert_eq!("camelCase".parse::<Convention>(), Ok(Convention::Camel));
        assert_eq!("camel".parse::<Convention>(), Ok(Convention::Camel));
        assert_eq!("PascalCase".parse::<Convention>(), Ok(Convention::Pascal));
        assert_eq!("upper_camel_case".parse::<Convention>(), Ok(Convention::Pascal));
        assert_eq!("snake_case".parse::<Convention>(), Ok(Convention::Snake));
        assert_eq!("SCREAMING_SNAKE_CASE".parse::<Convention>(), Ok(Convention::ScreamingSnake));
        assert_eq!("CONSTANT".parse::<Convention>(), Ok(Convention::ScreamingSnake));
        assert_eq!("Kebab Case".parse::<Convention>(), Ok(Convention::Kebab));
    }

    #[test]
    fn test_parse_unsupported() {
        for name in ["dot-case", "train-case", "", "camels"] {
            match name.parse::<Convention>() {
                Err(NamecaseError::UnsupportedConvention { name: got, known }) => {
                    assert_eq!(got, name);
                    assert_eq!(known.len(), 5);
                }
                other => panic!("expected unsupported convention for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_examples() {
        assert_eq!(Convention::Camel.example(), "holaMundo");
        assert_eq!(Convention::Pascal.example(), "HolaMundo");
        assert_eq!(Convention::Snake.example(), "hola_mundo");
        assert_eq!(Convention::ScreamingSnake.example(), "HOLA_MUNDO");
        assert_eq!(Convention::Kebab.example(), "hola-mundo");
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Convention::ScreamingSnake).unwrap();
        assert_eq!(json, "\"screaming-snake-case\"");

        let parsed: Convention = serde_json::from_str("\"snake_case\"").unwrap();
        assert_eq!(parsed, Convention::Snake);
        assert!(serde_json::from_str::<Convention>("\"dot-case\"").is_err());
    }
}
