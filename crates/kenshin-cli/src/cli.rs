//! CLI argument definitions for the checkup converter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kenshin",
    version,
    about = "Convert checkup result exports to the insurer's 540-column CSV",
    long_about = "Convert a Shift_JIS tab-delimited checkup export into the \
                  fixed 540-column Shift_JIS CSV expected by the health \
                  insurance society.\n\n\
                  Field problems never stop a run: each one is appended to \
                  the issue log for manual follow-up."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include record identifiers (receipt number and name) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one source file.
    Convert(ConvertArgs),

    /// List the destination columns.
    Columns,

    /// List the course classification table.
    Courses,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Tab-delimited Shift_JIS source file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination file (default: <OUTPUT_DIR>/<prefix><YYYYMMDD>.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for the default destination file name.
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Issue log, appended to on every run.
    #[arg(long = "issue-log", value_name = "PATH", default_value = "log.txt")]
    pub issue_log: PathBuf,

    /// TOML file overriding destination profile values.
    #[arg(long = "profile", value_name = "TOML")]
    pub profile: Option<PathBuf>,

    /// Run date written as creation and submission date (default: today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
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
