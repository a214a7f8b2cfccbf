use thiserror::Error;

/// Errors raised around the conversion core.
///
/// Converting text never fails; these cover resolving a convention name and
/// validating the line handed to [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamecaseError {
    #[error("Unsupported naming convention '{name}'. Known conventions: {}", known.join(", "))]
    UnsupportedConvention { name: String, known: Vec<String> },

    #[error("No text selected")]
    NoTextSelected,

    #[error("Selection must be single line")]
    MultiLineSelection,
}
