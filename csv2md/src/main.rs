//! # csv2md
//!
//! A CLI tool that converts CSV/TSV tables into aligned Markdown tables.
//!
//! ## Overview
//!
//! csv2md is built on top of csv2mdlib and provides the command-line plumbing:
//! reading the source, writing the sink, reporting diagnostics on stderr and
//! choosing the exit status.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a file, print to stdout
//! csv2md results.csv
//!
//! # Read stdin, write a file
//! cat results.tsv | csv2md -d '\t' - results.md
//!
//! # Keep the input row order
//! csv2md --no-sort results.csv
//!
//! # Emit the normalized table as JSON
//! csv2md --format json results.csv
//! ```
//!
//! Rows are sorted by the integer columns `S2` then `P2` by default. When
//! either column is missing or not an integer the table is written unsorted
//! and a warning is printed. Log verbosity follows `RUST_LOG`.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use csv2mdlib::{convert, parse_delimiter, ConvertOptions, Csv2mdError, OutputFormat, SortOutcome};
use tracing_subscriber::EnvFilter;

/// Path meaning stdin/stdout
const STDIO: &str = "-";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csv2md")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert a CSV/TSV table into a Markdown table")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .default_value(STDIO)
                .help("Input file ('-' reads stdin)"),
        )
        .arg(
            Arg::new("out")
                .value_name("OUT")
                .default_value(STDIO)
                .help("Output file ('-' writes stdout)"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .value_parser(|s: &str| parse_delimiter(s).map_err(|e| e.to_string()))
                .help("Field delimiter (single character, or '\\t' for tab)"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .overrides_with("no-sort")
                .help("Sort by S2 then P2 (default)"),
        )
        .arg(
            Arg::new("no-sort")
                .long("no-sort")
                .action(ArgAction::SetTrue)
                .overrides_with("sort")
                .help("Keep the input row order"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .default_value("markdown")
                .value_parser(|s: &str| s.parse::<OutputFormat>())
                .help("Output format: markdown (md) or json"),
        )
}

/// Build conversion options from matches
fn build_options(matches: &ArgMatches) -> ConvertOptions {
    let delimiter = matches.get_one::<u8>("delimiter").copied().unwrap_or(b',');
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();

    ConvertOptions::new()
        .delimiter(delimiter)
        .sort(!matches.get_flag("no-sort"))
        .format(format)
}

fn open_source(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == STDIO {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open '{}'", path))?;
    Ok(Box::new(io::BufReader::new(file)))
}

fn write_sink(path: &str, output: &str) -> anyhow::Result<()> {
    if path == STDIO {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    std::fs::write(path, output)
        .with_context(|| format!("failed to write '{}'", path))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches);
    let source = matches
        .get_one::<String>("source")
        .map(|s| s.as_str())
        .unwrap_or(STDIO);
    let out = matches
        .get_one::<String>("out")
        .map(|s| s.as_str())
        .unwrap_or(STDIO);

    let conversion = convert(open_source(source)?, &options)?;

    if let Some(SortOutcome::Unsorted(reason)) = &conversion.sort {
        tracing::warn!("Could not sort: {reason}");
    }

    write_sink(out, &conversion.output)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<Csv2mdError>() {
                Some(Csv2mdError::EmptyInput) => eprintln!("{e}"),
                _ => eprintln!("{} {e:#}", style("Error:").red().bold()),
            }
            ExitCode::FAILURE
        }
    }
}
