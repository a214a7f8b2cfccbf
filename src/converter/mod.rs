pub mod render;
pub mod tokenizer;

use crate::Convention;
use tracing::debug;

/// Convert one line of text to the given naming convention.
///
/// Total over every input: text without recognizable words converts to an
/// empty string.
pub fn convert(text: &str, convention: Convention) -> String {
    let words = tokenizer::tokenize(text);
    let output = render::render(&words, convention);
    debug!(%convention, words = words.len(), %output, "converted");
    output
}
