//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabclean_cli::pipeline::{CleanOptions, Stage};

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Clean wide indicator tables with two header rows",
    long_about = "Clean wide indicator tables with two header rows.\n\n\
                  Renames columns from the identifier row, drops confidence-interval\n\
                  and numerator/denominator columns, drops race crosstabs with\n\
                  missing values, and reports missing-value counts."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the label-to-identifier rename map of a CSV file.
    Columns(ColumnsArgs),

    /// Print missing-value counts per column.
    Nulls(NullsArgs),

    /// Rename and filter a CSV file, writing the cleaned table.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file with an identifier row followed by a descriptive label row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct NullsArgs {
    /// CSV file with an identifier row followed by a descriptive label row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Pipeline stage to inspect.
    #[arg(long = "stage", value_enum, default_value = "raw")]
    pub stage: StageArg,

    /// Only list columns with at least one missing value.
    #[arg(long = "only-missing")]
    pub only_missing: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV file with an identifier row followed by a descriptive label row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT_STEM>_clean.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report what would be dropped without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Keep confidence-interval bound and numerator/denominator columns.
    #[arg(long = "keep-redundant")]
    pub keep_redundant: bool,

    /// Keep race crosstab columns even when they contain missing values.
    #[arg(long = "keep-race")]
    pub keep_race: bool,
}

impl FilterArgs {
    pub fn options(&self) -> CleanOptions {
        CleanOptions {
            drop_redundant: !self.keep_redundant,
            drop_race_crosstabs: !self.keep_race,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StageArg {
    Raw,
    Renamed,
    Cleaned,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Raw => Stage::Raw,
            StageArg::Renamed => Stage::Renamed,
            StageArg::Cleaned => Stage::Cleaned,
        }
    }
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
