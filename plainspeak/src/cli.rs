// plainspeak/src/cli.rs
//! This file defines the command-line interface (CLI) for the plainspeak
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "plainspeak",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite jargon-heavy text into plain language",
    long_about = "Plainspeak is a command-line utility for rewriting technical and regulatory text into plain language. It applies an ordered set of configurable rule tables (jargon terms, tone fixes, phrase patterns, and compliance document names) followed by a sentence-length rewrite pass, while preserving the surrounding file layout or JSON shape.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'plainspeak' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `plainspeak` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simplifies a single text read from a file or stdin.
    #[command(about = "Simplifies a single text read from a file or stdin.")]
    Simplify(SimplifyCommand),

    /// Recursively simplifies every matching file under a directory.
    #[command(about = "Recursively simplifies every matching file under a directory.")]
    Bulk(BulkCommand),

    /// Simplifies the text fields of a JSON document.
    #[command(about = "Simplifies the text fields of a JSON document, preserving its shape.")]
    Json(JsonCommand),

    /// Serves the simplification engine over HTTP.
    #[command(about = "Serves the simplification engine over HTTP.")]
    Serve(ServeCommand),
}

/// Arguments for the `simplify` command.
#[derive(Parser, Debug)]
pub struct SimplifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write simplified output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `bulk` command.
#[derive(Parser, Debug)]
pub struct BulkCommand {
    /// Directory to read source files from.
    #[arg(long, short = 'i', value_name = "DIR", help = "Directory to recursively read source files from.")]
    pub input: PathBuf,

    /// Directory to write simplified files to, mirroring the input layout.
    #[arg(long, short = 'o', value_name = "DIR", help = "Directory to write simplified files to, mirroring the input layout.")]
    pub output: PathBuf,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// File extensions to convert (comma-separated, without dots).
    #[arg(
        long = "extensions",
        value_name = "EXT",
        value_delimiter = ',',
        default_values_t = ["txt".to_string(), "md".to_string(), "html".to_string()],
        help = "File extensions to convert (comma-separated, without dots)."
    )]
    pub extensions: Vec<String>,
}

/// Arguments for the `json` command.
#[derive(Parser, Debug)]
pub struct JsonCommand {
    /// Path to the source JSON document.
    #[arg(long, short = 'i', value_name = "FILE", help = "Path to the source JSON document.")]
    pub input: PathBuf,

    /// Where to write the simplified JSON document.
    #[arg(long, short = 'o', value_name = "FILE", help = "Where to write the simplified JSON document.")]
    pub output: PathBuf,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// JSON field name containing the text to simplify.
    #[arg(long = "text-field", value_name = "NAME", default_value = "text", help = "JSON field name containing the text to simplify.")]
    pub text_field: String,

    /// Field name the simplified content is written under.
    #[arg(long = "output-field", value_name = "NAME", default_value = "simplified_text", help = "Field name the simplified content is written under.")]
    pub output_field: String,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeCommand {
    /// Port for the HTTP endpoint (binds 127.0.0.1).
    #[arg(long, short = 'p', value_name = "PORT", default_value_t = 8099, help = "Port for the HTTP endpoint (binds 127.0.0.1).")]
    pub port: u16,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,
}
