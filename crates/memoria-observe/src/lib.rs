//! Logging setup for Memoria binaries.

pub mod tracing_setup;

pub use tracing_setup::{LogConfig, init_tracing};
