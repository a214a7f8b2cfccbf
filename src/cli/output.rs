use crate::{Conversion, Convention};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    convention: Convention,
    conversions: &'a [Conversion],
}

pub fn write_conversions<W: Write>(
    out: &mut W,
    convention: Convention,
    conversions: &[Conversion],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            // Plain output so results can be piped
            for conversion in conversions {
                writeln!(out, "{}", conversion.output)?;
            }
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                convention,
                conversions,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

pub fn write_conventions<W: Write>(out: &mut W, colored_output: bool) -> Result<()> {
    if colored_output {
        writeln!(out, "{}", "Supported conventions:".bold())?;
    } else {
        writeln!(out, "Supported conventions:")?;
    }

    for convention in Convention::ALL {
        let name = format!("{:<22}", convention.as_str());
        if colored_output {
            writeln!(out, "  {} {}", name.cyan().bold(), convention.example().green())?;
        } else {
            writeln!(out, "  {} {}", name, convention.example())?;
        }
    }
    Ok(())
}
