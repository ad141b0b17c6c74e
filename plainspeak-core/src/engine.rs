// plainspeak-core/src/engine.rs
//! Defines the core Simplifier trait and the one-shot convenience wrapper.
//!
//! The `Simplifier` trait provides a pluggable interface for text
//! simplification engines. This module defines the contract that all such
//! engines must adhere to, ensuring a consistent and interchangeable core
//! API for `plainspeak`.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::SimplifyConfig;
use crate::engines::rule_engine::RuleEngine;
use crate::rules::compiler::CompiledRules;

/// A trait that defines the core functionality of a simplification engine.
///
/// This trait decouples the adapters (CLI commands, HTTP endpoint, bulk and
/// JSON converters) from the specific implementation of the rewriting logic.
pub trait Simplifier: Send + Sync {
    /// Applies every rewrite pass to `text` and returns the simplified result.
    ///
    /// The call is deterministic, has no side effects, and never fails:
    /// empty input returns empty output, and input with no matches is passed
    /// through with only whitespace normalization and terminal punctuation
    /// applied.
    fn simplify(&self, text: &str) -> String;

    /// Returns a reference to the engine's rule configuration.
    fn config(&self) -> &SimplifyConfig;

    /// Returns a reference to the `CompiledRules` used by the engine.
    ///
    /// This is used by external components, such as the HTTP health
    /// endpoint, to report on the loaded rules without recompiling them.
    fn compiled_rules(&self) -> &CompiledRules;
}

/// Fully simplifies an input string in a single, one-shot call.
///
/// This is the primary entry point for non-interactive use: it builds a
/// [`RuleEngine`] from `config` (compilation errors propagate) and applies
/// it to `content`.
pub fn simplify_string(config: SimplifyConfig, content: &str) -> Result<String> {
    let engine = RuleEngine::new(config)?;
    Ok(engine.simplify(content))
}
