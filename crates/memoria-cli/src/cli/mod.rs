//! CLI command definitions and dispatch for the `memoria` binary.
//!
//! Uses clap derive macros for argument parsing. Logging flags fall back to
//! `MEMORIA_*` environment variables.

pub mod edit;
pub mod eval;
pub mod race;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use memoria_observe::LogConfig;
use memoria_types::Key;
use memoria_types::relation::Relation;

/// Evaluate memoized integer-indexed relations.
#[derive(Parser)]
#[command(name = "memoria", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors (ignored with --json).
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log filter directive; overrides -v/--quiet (e.g. "debug").
    #[arg(long, global = true, env = "MEMORIA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also append logs to <DIR>/memoria.log.
    #[arg(long, global = true, env = "MEMORIA_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not log to stderr.
    #[arg(long, global = true, env = "MEMORIA_DISABLE_STDERR_LOG")]
    pub no_stderr_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How command handlers report their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Styled text on stdout.
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
    /// Nothing on success; computation errors go to stderr.
    Quiet,
}

impl Cli {
    pub fn output(&self) -> Output {
        if self.json {
            Output::Json
        } else if self.quiet {
            Output::Quiet
        } else {
            Output::Text
        }
    }

    /// Logging settings assembled from flags and environment.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_verbosity(self.verbose, self.quiet);
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        config.disable_stderr = self.no_stderr_log;
        config.log_dir = self.log_dir.clone();
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one key of a relation.
    Eval {
        /// fibonacci, tribonacci, catalan or partitions.
        relation: Relation,
        /// Key to evaluate.
        #[arg(allow_negative_numbers = true)]
        key: Key,
    },

    /// Evaluate a key, then dump every cached entry.
    Table {
        relation: Relation,
        #[arg(allow_negative_numbers = true)]
        key: Key,
    },

    /// Levenshtein distance between two strings.
    #[command(name = "edit-distance", alias = "lev")]
    EditDistance { a: String, b: String },

    /// Evaluate the same key from several threads sharing one engine.
    Race {
        relation: Relation,
        #[arg(allow_negative_numbers = true)]
        key: Key,
        /// Number of concurrent callers.
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        threads: u16,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
