// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `resizewalk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "resizewalk",
    version,
    about = "Batch-scan watched directories and hand qualifying images to an external resizer.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Resizewalk.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Resizewalk.toml")]
    pub config: String,

    /// Treat this as an interactively-observed run.
    ///
    /// Notable events go to the user-visible channel (with routine "ok"
    /// messages capped per run) instead of the durable log channel. Use this
    /// when launching the batch by hand; leave it off for scheduled runs.
    #[arg(long)]
    pub interactive: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RESIZEWALK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the resolved scan plan, but don't dispatch
    /// any files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
