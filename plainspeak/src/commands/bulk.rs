//! Bulk command implementation: recursively converts a file tree.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use plainspeak_core::engine::Simplifier;

/// Options for the bulk directory converter.
pub struct BulkOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lowercased extension allow-list, without dots.
    pub extensions: Vec<String>,
}

/// Recursively discovers allow-listed files under `input`, simplifies each,
/// and writes the result to the mirrored relative path under `output`.
/// Non-matching files and directories are skipped silently; I/O failures
/// propagate.
pub fn run_bulk(engine: &dyn Simplifier, opts: &BulkOptions) -> Result<()> {
    info!(
        "Starting bulk conversion: {} -> {}",
        opts.input.display(),
        opts.output.display()
    );

    fs::create_dir_all(&opts.output)
        .with_context(|| format!("Failed to create output directory: {}", opts.output.display()))?;

    let mut converted = 0usize;
    for entry in WalkDir::new(&opts.input) {
        let entry = entry
            .with_context(|| format!("Failed to walk input directory: {}", opts.input.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_allowed_extension(path, &opts.extensions) {
            debug!("Skipping {} (extension not in allow-list).", path.display());
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        let simplified = engine.simplify(&content);

        let relative = path
            .strip_prefix(&opts.input)
            .with_context(|| format!("File {} is outside the input directory", path.display()))?;
        let target = opts.output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, simplified)
            .with_context(|| format!("Failed to write output file: {}", target.display()))?;

        println!("Converted {} -> {}", path.display(), target.display());
        converted += 1;
    }

    info!("Bulk conversion completed. {} file(s) converted.", converted);
    Ok(())
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_is_case_insensitive() {
        let extensions = vec!["txt".to_string(), "md".to_string()];
        assert!(has_allowed_extension(Path::new("a/b/NOTES.TXT"), &extensions));
        assert!(has_allowed_extension(Path::new("readme.md"), &extensions));
        assert!(!has_allowed_extension(Path::new("image.png"), &extensions));
        assert!(!has_allowed_extension(Path::new("no_extension"), &extensions));
    }
}
