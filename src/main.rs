use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use namecase::cli::input::{read_line_from, validate_line};
use namecase::cli::output::{write_conventions, write_conversions, OutputFormat};
use namecase::{Config, Conversion, Convention};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "namecase")]
#[command(version, about = "Convert a line of text between naming conventions", long_about = None)]
struct Cli {
    /// Text to convert, one line per argument (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Target convention (camel, pascal, snake, screaming-snake, kebab)
    #[arg(short, long, value_name = "CONVENTION")]
    to: Option<Convention>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// List supported conventions with an example each
    #[arg(long)]
    list: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log segmentation details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

/// Priority: `--verbose` > `RUST_LOG` > default (warn).
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("namecase=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "namecase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.to, cli.no_color)?;
    let mut stdout = io::stdout().lock();

    if cli.list {
        return write_conventions(&mut stdout, config.color);
    }

    let lines = if cli.text.is_empty() {
        vec![read_line_from(io::stdin().lock())?]
    } else {
        cli.text
            .iter()
            .map(|text| validate_line(text).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?
    };

    let convention = config.default_convention;
    let conversions: Vec<Conversion> = lines
        .into_iter()
        .map(|line| Conversion::new(line, convention))
        .collect();

    write_conversions(&mut stdout, convention, &conversions, cli.format)
}
