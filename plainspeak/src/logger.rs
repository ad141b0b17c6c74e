// plainspeak/src/logger.rs
//! Logger initialization for the plainspeak CLI.
//!
//! Honors `RUST_LOG` by default; an explicit level from the CLI flags
//! overrides it for the plainspeak crates only.

use log::LevelFilter;

/// Initializes env_logger. Safe to call more than once; only the first
/// call wins (useful in tests).
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_module("plainspeak", level);
        builder.filter_module("plainspeak_core", level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
