//! CLI argument definitions for the schema normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "schema-normalizer",
    version,
    about = "Decompose a declared relational schema into a chosen normal form",
    long_about = "Decompose a declared relational schema into a chosen normal form.\n\n\
                  Reads table and dependency records from CSV, runs the staged\n\
                  1NF..5NF decomposition pipeline, and emits CREATE TABLE statements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a declared schema and emit CREATE TABLE statements.
    Normalize(NormalizeArgs),

    /// List the supported normal forms.
    Levels,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// CSV file with the table records (name, attributes, primary key,
    /// multi-valued attributes).
    #[arg(long = "tables", value_name = "FILE")]
    pub tables: PathBuf,

    /// CSV file with the declared dependency records.
    #[arg(long = "dependencies", value_name = "FILE")]
    pub dependencies: PathBuf,

    /// Target normal form: 1NF, 2NF, 3NF, BCNF, 4NF or 5NF
    /// (case-insensitive).
    #[arg(long = "level", value_name = "LEVEL")]
    pub level: String,

    /// Output path for the generated SQL script.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "normalized_tables.sql"
    )]
    pub output: PathBuf,

    /// Print the statements without writing the script file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
