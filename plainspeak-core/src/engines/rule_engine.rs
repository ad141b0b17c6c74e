// plainspeak-core/src/engines/rule_engine.rs
//! A `Simplifier` implementation that applies the configured rule tables
//! as an ordered pipeline of rewrite passes.
//!
//! License: MIT OR Apache-2.0

use std::borrow::Cow;
use std::sync::Arc;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex};

use crate::config::SimplifyConfig;
use crate::engine::Simplifier;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules, CompiledSubstitution};
use crate::sentences::rewrite_sentences;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every whitespace run (including newlines and tabs) to a single
/// space and trims leading/trailing whitespace. Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// The rule-table engine.
///
/// Holds the loaded configuration plus its compiled form; both are immutable
/// after construction, so a single engine can serve concurrent `simplify`
/// calls without locking.
#[derive(Debug)]
pub struct RuleEngine {
    compiled_rules: Arc<CompiledRules>,
    config: SimplifyConfig,
}

impl RuleEngine {
    pub fn new(config: SimplifyConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile rewrite rules for RuleEngine")?;

        Ok(Self {
            compiled_rules,
            config,
        })
    }

    /// Applies one ordered substitution table to `text`.
    ///
    /// Each rule's replacement is inserted verbatim (`NoExpand` keeps `$`
    /// literal) and is not re-scanned by the rule that produced it; later
    /// rules and later passes do see it.
    fn apply_substitutions(mut text: String, rules: &[CompiledSubstitution]) -> String {
        for rule in rules {
            match rule.regex.replace_all(&text, NoExpand(&rule.replacement)) {
                Cow::Borrowed(_) => {}
                Cow::Owned(rewritten) => {
                    debug!("Term '{}' rewritten to '{}'.", rule.term, rule.replacement);
                    text = rewritten;
                }
            }
        }
        text
    }
}

impl Simplifier for RuleEngine {
    fn simplify(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let rules = &self.compiled_rules;

        // Pass order is fixed; changing it changes output.
        let mut text = normalize_whitespace(text);
        text = Self::apply_substitutions(text, &rules.jargon);
        text = Self::apply_substitutions(text, &rules.tone);
        text = Self::apply_substitutions(text, &rules.patterns);
        text = Self::apply_substitutions(text, &rules.kyc_documents);
        text = rewrite_sentences(&text, rules.sentence_length_limit);
        normalize_whitespace(&text)
    }

    fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}
