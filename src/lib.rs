pub mod cli;
pub mod config;
pub mod convention;
pub mod converter;
pub mod error;

pub use config::Config;
pub use convention::Convention;
pub use converter::convert;
pub use converter::render::render;
pub use converter::tokenizer::tokenize;
pub use error::NamecaseError;

use serde::Serialize;

/// One line of text and its rendering in a convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub convention: Convention,
}

impl Conversion {
    pub fn new(input: impl Into<String>, convention: Convention) -> Self {
        let input = input.into();
        let output = convert(&input, convention);
        Self {
            input,
            output,
            convention,
        }
    }
}
