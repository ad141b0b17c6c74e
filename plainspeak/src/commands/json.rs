//! Json command implementation: rewrites the text fields of a JSON document
//! while keeping the document's shape intact.
//!
//! The walker matches exhaustively over the JSON variant: objects carrying
//! the text field gain (or overwrite) the output field, nested containers
//! recurse, scalars pass through untouched. A non-string value under the
//! text field is a data-contract violation and fails the whole invocation.

use anyhow::{anyhow, Context, Result};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use plainspeak_core::engine::Simplifier;

/// Options for the JSON document converter.
pub struct JsonOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub text_field: String,
    pub output_field: String,
}

/// Loads a JSON file, simplifies its text fields, and writes the result as
/// formatted JSON (2-space indentation; non-ASCII characters are preserved
/// unescaped by serde_json).
pub fn run_json(engine: &dyn Simplifier, opts: &JsonOptions) -> Result<()> {
    info!(
        "Starting JSON conversion: {} -> {}",
        opts.input.display(),
        opts.output.display()
    );

    let raw = fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read JSON document: {}", opts.input.display()))?;
    let mut payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON document: {}", opts.input.display()))?;

    simplify_value(&mut payload, engine, &opts.text_field, &opts.output_field)?;

    if let Some(parent) = opts.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    let formatted =
        serde_json::to_string_pretty(&payload).context("Failed to serialize simplified document")?;
    fs::write(&opts.output, formatted)
        .with_context(|| format!("Failed to write output file: {}", opts.output.display()))?;

    info!("JSON conversion completed.");
    Ok(())
}

/// Recursively simplifies every object in `value` that carries `text_field`,
/// writing the result under `output_field` on the same object.
pub fn simplify_value(
    value: &mut Value,
    engine: &dyn Simplifier,
    text_field: &str,
    output_field: &str,
) -> Result<()> {
    match value {
        Value::Array(entries) => {
            for entry in entries {
                simplify_value(entry, engine, text_field, output_field)?;
            }
        }
        Value::Object(fields) => {
            if let Some(raw) = fields.get(text_field) {
                let text = raw.as_str().ok_or_else(|| {
                    anyhow!(
                        "Expected '{}' to be a string, got {}",
                        text_field,
                        json_type_name(raw)
                    )
                })?;
                let simplified = engine.simplify(text);
                fields.insert(output_field.to_string(), Value::String(simplified));
            }
            for nested in fields.values_mut() {
                if matches!(nested, Value::Array(_) | Value::Object(_)) {
                    simplify_value(nested, engine, text_field, output_field)?;
                }
            }
        }
        // Scalars (null, bool, number, string) carry no nested text fields.
        _ => {}
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
