use crate::NamecaseError;
use anyhow::{Context, Result};
use std::io::Read;

/// Accept a non-empty, single-line piece of text.
pub fn validate_line(text: &str) -> Result<&str, NamecaseError> {
    if text.is_empty() {
        return Err(NamecaseError::NoTextSelected);
    }
    if text.contains(['\n', '\r']) {
        return Err(NamecaseError::MultiLineSelection);
    }
    Ok(text)
}

/// Read one line of text from a reader, dropping a single trailing line break.
pub fn read_line_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;

    let line = buffer
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&buffer);

    Ok(validate_line(line)?.to_string())
}
