//! Command line front-end for the Bootstrap grid class generator.
//!
//! Prints the column classes for one item, or for every item of a row.

use anyhow::{Context as _, Result, anyhow};
use core::str::FromStr;
use css_bootstrap_grid::{Breakpoint, ColumnClassGenerator, ColumnRequest, GridConfig};
use std::env;
use std::io::{Write as _, stderr, stdout};
use std::path::PathBuf;

/// Options shared by both commands.
struct Options {
    /// Optional JSON grid configuration.
    config: Option<PathBuf>,
    /// Column count overriding the configuration.
    columns: Option<u32>,
    /// Spans and row context.
    request: ColumnRequest,
    /// Item count for the row context.
    count: Option<usize>,
    /// Item index for the row context.
    index: Option<usize>,
}

/// Parse a numeric flag value.
///
/// # Errors
/// Returns an error if the value is missing or not a number.
fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let raw = value.ok_or_else(|| anyhow!("{flag} needs a value"))?;
    raw.parse::<T>()
        .map_err(|_| anyhow!("{flag} expects a number, got '{raw}'"))
}

/// Parse the flags following the command name.
///
/// # Errors
/// Returns an error on unknown flags or malformed values.
fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config: None,
        columns: None,
        request: ColumnRequest::default(),
        count: None,
        index: None,
    };
    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        let value = args.get(index + 1);
        match flag {
            "--config" => {
                let path = value.ok_or_else(|| anyhow!("--config needs a value"))?;
                options.config = Some(PathBuf::from(path));
            }
            "--columns" => options.columns = Some(parse_value(flag, value)?),
            "--count" => options.count = Some(parse_value(flag, value)?),
            "--index" => options.index = Some(parse_value(flag, value)?),
            "--no-xs" => {
                options.request.xs = None;
                index += 1;
                continue;
            }
            _ => {
                let name = flag
                    .strip_prefix("--")
                    .ok_or_else(|| anyhow!("unexpected argument '{flag}'"))?;
                let breakpoint = name
                    .parse::<Breakpoint>()
                    .map_err(|_| anyhow!("unknown flag '{flag}'"))?;
                options
                    .request
                    .set_span(breakpoint, Some(parse_value(flag, value)?));
            }
        }
        index += 2;
    }
    Ok(options)
}

/// Build the generator from the configuration file and overrides.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
fn generator(options: &Options) -> Result<ColumnClassGenerator> {
    let mut config = match &options.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    if let Some(columns) = options.columns {
        config.total_columns = columns;
    }
    log::debug!("using grid configuration {config:?}");
    Ok(ColumnClassGenerator::new(config)?)
}

/// Print the classes of a single item.
///
/// # Errors
/// Returns an error if the classes cannot be computed or written.
fn cmd_item(options: &Options) -> Result<()> {
    let request = options.request.in_row(options.count, options.index);
    let classes = generator(options)?
        .col_class(&request)
        .context("failed to compute column classes")?;
    writeln!(stdout(), "{classes}")?;
    Ok(())
}

/// Print the classes of every item in a row of `--count` items.
///
/// # Errors
/// Returns an error if `--count` is missing or the classes cannot be computed.
fn cmd_row(options: &Options) -> Result<()> {
    let count = options
        .count
        .ok_or_else(|| anyhow!("--count is required"))?;
    let rows = generator(options)?
        .row_classes(&options.request, count)
        .context("failed to compute row classes")?;
    let mut out = stdout().lock();
    for classes in rows {
        writeln!(out, "{classes}")?;
    }
    Ok(())
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  gridclass [--config <FILE>] [--columns <N>] [--xs <N>|--no-xs] [--sm <N>] [--md <N>] [--lg <N>] [--count <N> --index <N>]\n  gridclass row [--config <FILE>] [--columns <N>] [--xs <N>|--no-xs] [--sm <N>] [--md <N>] [--lg <N>] --count <N>"
    ));
}

/// Main entry point for the gridclass CLI tool.
///
/// # Errors
/// Returns an error if argument parsing or class generation fails.
fn main() -> Result<()> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }
    if args.first().is_some_and(|arg| arg == "row") {
        args.remove(0);
        return cmd_row(&parse_options(&args)?);
    }
    let options = parse_options(&args).inspect_err(|_| print_usage())?;
    cmd_item(&options)
}
