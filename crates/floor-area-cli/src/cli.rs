//! CLI argument definitions for the floor area tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "floor-area",
    version,
    about = "Estimate residential and non-residential floor area from dwelling and GVA projections",
    long_about = "Estimate residential and non-residential floor area per district and timestep.\n\n\
                  Each arc_dwellings__<key>.csv input is joined with the GVA projection of its\n\
                  economic scenario and written once per future dwelling size scenario as\n\
                  arc_floor_area__<key>__<scenario>.csv."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate floor area for every dwellings input and scenario.
    Run(RunArgs),

    /// List configured future scenarios and scenario key rules.
    Scenarios(ScenariosArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Project folder holding data_as_provided/ and data_processed/.
    #[arg(value_name = "BASE_PATH")]
    pub base_path: PathBuf,

    /// Input directory (default: <BASE_PATH>/data_as_provided).
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output directory (default: <BASE_PATH>/data_processed).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file (default: built-in scenarios and constants).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run only the named scenario (repeatable).
    #[arg(long = "scenario", value_name = "NAME")]
    pub scenarios: Vec<String>,

    /// Abort on the first failed input or scenario.
    ///
    /// By default a failure is reported and the remaining inputs still run.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Estimate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ScenariosArgs {
    /// TOML configuration file (default: built-in scenarios and constants).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
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
