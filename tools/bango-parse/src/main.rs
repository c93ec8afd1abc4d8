//! bango-parse
//!
//! Normalizes titles and filenames given as arguments (or one per stdin
//! line) and prints the extracted number with its classification.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use bango_core::parser::NumberParser;
use bango_core::ParsedNumber;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};

/// CLI arguments
#[derive(Parser)]
#[command(name = "bango-parse")]
#[command(about = "Extract and classify content numbers from titles and filenames")]
#[command(version)]
struct Cli {
    /// Titles or filenames to parse. Reads stdin when empty.
    inputs: Vec<String>,

    /// Output format
    #[arg(short, long, env = "BANGO_FORMAT", value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Report inputs without a recognizable number as errors
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Plain,
}

#[derive(Debug, Serialize)]
struct ParseOutput {
    input: String,
    number: Option<String>,
    family: Option<String>,
    fc2: bool,
    uncensored: bool,
    special: bool,
    face_detection: bool,
    error: Option<String>,
}

impl From<ParsedNumber> for ParseOutput {
    fn from(parsed: ParsedNumber) -> Self {
        Self {
            fc2: parsed.is_fc2(),
            uncensored: parsed.is_uncensored(),
            special: parsed.is_special(),
            face_detection: parsed.requires_face_detection(),
            family: Some(parsed.family.to_string()),
            number: Some(parsed.number),
            input: parsed.input,
            error: None,
        }
    }
}

impl ParseOutput {
    fn failed(input: &str, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            number: None,
            family: None,
            fc2: false,
            uncensored: false,
            special: false,
            face_detection: false,
            error: Some(error.to_string()),
        }
    }

    fn plain(&self) -> String {
        let mut flags = Vec::new();
        if self.fc2 {
            flags.push("fc2");
        }
        if self.uncensored {
            flags.push("uncensored");
        }
        if self.special {
            flags.push("special");
        }
        if self.face_detection {
            flags.push("face");
        }

        let number = match (&self.number, &self.error) {
            (Some(number), _) => number.as_str(),
            (None, Some(error)) => error.as_str(),
            (None, None) => "",
        };
        format!("{}\t{}\t{}", self.input, number, flags.join(","))
    }
}

fn run(parser: &NumberParser, input: &str, strict: bool) -> ParseOutput {
    if strict {
        match parser.try_parse(input) {
            Ok(parsed) => parsed.into(),
            Err(e) => {
                debug!(input, error = %e, "strict parse failed");
                ParseOutput::failed(input, e)
            }
        }
    } else {
        parser.parse(input).into()
    }
}

fn emit(out: &mut impl Write, output: &ParseOutput, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, output).context("Failed to serialize output")?;
            writeln!(out)?;
        }
        Format::Plain => writeln!(out, "{}", output.plain())?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let parser = NumberParser::new().context("Failed to build number parser")?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            emit(&mut out, &run(&parser, line, cli.strict), cli.format)?;
            count += 1;
        }
    } else {
        for input in &cli.inputs {
            emit(&mut out, &run(&parser, input, cli.strict), cli.format)?;
            count += 1;
        }
    }

    out.flush()?;
    info!(count, "parsed inputs");
    Ok(())
}
