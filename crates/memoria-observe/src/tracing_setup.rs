//! Tracing subscriber initialization with structured logging to stderr and
//! an optional log file.
//!
//! # Usage
//!
//! ```no_run
//! use memoria_observe::tracing_setup::{init_tracing, LogConfig};
//!
//! // Warnings and errors to stderr
//! init_tracing(&LogConfig::default(), "memoria").unwrap();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "warn", "info,memoria_core=debug").
    pub level: String,
    /// Skip the stderr layer entirely.
    pub disable_stderr: bool,
    /// Directory for `<app_name>.log`. No file logging when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            disable_stderr: false,
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Map CLI verbosity flags to a filter directive.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = match verbose {
            0 if quiet => "error",
            0 => "warn",
            1 => "info,memoria_core=debug,memoria_cli=debug",
            _ => "trace",
        };
        Self {
            level: level.to_string(),
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// - Installs a `fmt` layer on stderr unless `disable_stderr` is set.
/// - When `log_dir` is set, creates it if needed and appends plain-text
///   records to `<log_dir>/<app_name>.log`.
/// - `RUST_LOG` overrides `level` when present.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be opened, or if
/// the global subscriber has already been set.
pub fn init_tracing(config: &LogConfig, app_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stderr_layer = (!config.disable_stderr).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(format!("{app_name}.log")))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
