//! Simplify command implementation for one-shot text rewriting.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use plainspeak_core::engine::Simplifier;

/// Options for the single-text command.
pub struct SimplifyOptions {
    pub input_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Reads one text (file or stdin), simplifies it, writes it (file or stdout).
pub fn run_simplify(engine: &dyn Simplifier, opts: SimplifyOptions) -> Result<()> {
    info!("Starting simplify operation.");

    let input = match &opts.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let simplified = engine.simplify(&input);

    debug!(
        "Content simplified. Original length: {}, Simplified length: {}",
        input.len(),
        simplified.len()
    );

    match &opts.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", simplified)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", simplified)?;
        }
    }

    info!("Simplify operation completed.");
    Ok(())
}
