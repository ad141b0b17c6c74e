// plainspeak/src/main.rs
//! Plainspeak entry point.
//!
//! Builds the rule engine from the selected configuration and dispatches to
//! the requested adapter command.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use plainspeak::cli::{Cli, Commands};
use plainspeak::commands::bulk::{run_bulk, BulkOptions};
use plainspeak::commands::json::{run_json, JsonOptions};
use plainspeak::commands::serve;
use plainspeak::commands::simplify::{run_simplify, SimplifyOptions};
use plainspeak::logger;
use plainspeak_core::{RuleEngine, SimplifyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Simplify(cmd) => {
            let engine = build_engine(cmd.config.as_deref())?;
            run_simplify(
                &engine,
                SimplifyOptions {
                    input_file: cmd.input_file,
                    output: cmd.output,
                },
            )
        }
        Commands::Bulk(cmd) => {
            let engine = build_engine(cmd.config.as_deref())?;
            run_bulk(
                &engine,
                &BulkOptions {
                    input: cmd.input,
                    output: cmd.output,
                    extensions: cmd.extensions,
                },
            )
        }
        Commands::Json(cmd) => {
            let engine = build_engine(cmd.config.as_deref())?;
            run_json(
                &engine,
                &JsonOptions {
                    input: cmd.input,
                    output: cmd.output,
                    text_field: cmd.text_field,
                    output_field: cmd.output_field,
                },
            )
        }
        Commands::Serve(cmd) => {
            let engine = Arc::new(build_engine(cmd.config.as_deref())?);
            serve::start(cmd.port, engine).await
        }
    }
}

/// Loads the rule configuration (custom file or embedded defaults) and
/// compiles it into an engine. Configuration problems are fatal here.
fn build_engine(config_path: Option<&Path>) -> Result<RuleEngine> {
    let config = match config_path {
        Some(path) => SimplifyConfig::load_from_file(path)?,
        None => SimplifyConfig::load_default_rules()?,
    };
    RuleEngine::new(config).context("Failed to construct the rule engine")
}
