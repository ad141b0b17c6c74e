// plainspeak-core/src/lib.rs
//! # Plainspeak Core Library
//!
//! `plainspeak-core` provides the fundamental, platform-independent logic for
//! rule-driven plain-language rewriting. It defines the data structures for
//! the rule tables, provides mechanisms for compiling them, and implements a
//! pluggable `Simplifier` trait for applying the rewrite pipeline.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on loaded rules, without concerns for
//! I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `SimplifyConfig` and `PatternRule` for specifying the rule tables.
//! * `rules`: Contains the logic for compiling rule tables into efficient regexes.
//! * `sentences`: Sentence splitting and the oversized-sentence rewrite pass.
//! * `engine`: Defines the `Simplifier` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `Simplifier` trait.
//! * `errors`: Structured error types for rule compilation and loading.
//!
//! ## Pipeline
//!
//! `simplify` applies seven ordered passes: whitespace normalization, jargon
//! substitution, tone substitution, pattern substitution, document-term
//! substitution, sentence rewriting, and a final whitespace normalization.
//! The jargon, tone and document-term tables match whole words only
//! (Unicode-aware boundaries, case-insensitive); the pattern table matches
//! raw substrings so it can rewrite phrases spanning punctuation. The order
//! is part of the contract: later passes see the output of earlier ones.
//!
//! ## Usage Example
//!
//! ```rust
//! use plainspeak_core::{simplify_string, SimplifyConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the default rule tables.
//!     let config = SimplifyConfig::load_default_rules()?;
//!
//!     // 2. Simplify some content in a single, one-shot call.
//!     let input = "Kindly submit your proof of identity as soon as possible.";
//!     let simplified = simplify_string(config, input)?;
//!     println!("{}", simplified);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines the
//! `PlainspeakError` enum for programmatic handling of compilation failures.
//! `simplify` itself is infallible: it never errors on any string input.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `Simplifier` trait allows alternative
//!   rewriting engines to be swapped in without touching the adapters.
//! * **Stateless:** An engine holds no mutable state after construction, so
//!   concurrent `simplify` calls are safe without locking.
//! * **Testable:** Logic is easily unit-testable in isolation.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod rules;
pub mod sentences;

/// Re-exports the public configuration types and functions for managing rule tables.
pub use config::{
    validate_config, PatternRule, SimplifyConfig, DEFAULT_SENTENCE_LENGTH_LIMIT, MAX_TERM_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::PlainspeakError;

/// Re-exports types related to the core simplification trait.
pub use engine::{simplify_string, Simplifier};

/// Re-exports the concrete `RuleEngine` implementation.
pub use engines::rule_engine::{normalize_whitespace, RuleEngine};

/// Re-exports key types from the rules::compiler module for advanced usage.
pub use rules::compiler::{compile_rules, CompiledRules, CompiledSubstitution};
