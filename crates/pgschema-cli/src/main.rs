use std::path::PathBuf;

use clap::Parser;

mod config;
mod error;
mod formatter;
mod script;

use config::Config;
use error::CliError;
use formatter::{OutputFormat, SchemaFormatter};
use script::ScriptLoader;

#[derive(Parser, Debug)]
#[command(name = "pgschema")]
#[command(version)]
#[command(about = "Load CREATE TABLE statements from a PostgreSQL dump into a schema model")]
#[command(long_about = "pgschema command-line interface

USAGE MODES:
  Load a dump file:    pgschema -f schema.sql
  Load one statement:  pgschema -c \"CREATE TABLE t (id integer);\"
  Load from stdin:     pg_dump -s mydb | pgschema

Statements other than CREATE TABLE are skipped unless [input]
skip_unsupported = false is set in the configuration.

CONFIGURATION:
  Settings can be configured in ~/.pgschemarc (TOML format):
    [display]
    format = \"table\"              # table or json

    [logging]
    level = \"warn\"                # used when RUST_LOG is unset

    [input]
    skip_unsupported = true        # ignore non CREATE TABLE statements
    continue_on_error = false      # keep going after a parse failure")]
struct Args {
    /// Load DDL statements from file
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Load a DDL command given on the command line
    #[arg(short, long, value_name = "SQL")]
    command: Option<String>,

    /// Read DDL from stdin (auto-detected when piped)
    #[arg(long)]
    stdin: bool,

    /// Output format for the loaded schema
    #[arg(long, value_parser = ["table", "json"], value_name = "FORMAT")]
    format: Option<String>,

    /// Configuration file (defaults to ~/.pgschemarc)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show progress and a summary while loading
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load(Some(path))?,
        None => Config::load(None).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config file: {}", e);
            Config::default()
        }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized

    // Use command-line format if provided, otherwise use config default
    let format =
        args.format.as_deref().and_then(OutputFormat::parse).or_else(|| config.get_output_format());

    let mut loader = ScriptLoader::new(config.input.clone(), args.verbose);
    let summary = if let Some(cmd) = args.command {
        loader.load_script(&cmd)?
    } else if let Some(file_path) = args.file {
        loader.load_file(&file_path)?
    } else if args.stdin || is_stdin_piped() {
        loader.load_stdin()?
    } else {
        anyhow::bail!("No input given: use -f <FILE>, -c <SQL> or pipe DDL on stdin");
    };

    let mut formatter = SchemaFormatter::new();
    if let Some(fmt) = format {
        formatter.set_format(fmt);
    }
    formatter.print_schema(loader.schema());

    if summary.failed > 0 {
        return Err(CliError::StatementsFailed(summary.failed).into());
    }

    Ok(())
}

fn is_stdin_piped() -> bool {
    // Check if stdin is a pipe/file (not a terminal)
    !atty::is(atty::Stream::Stdin)
}
