//! Configuration management for `plainspeak-core`.
//!
//! This module defines the core data structures for the rewrite rule tables
//! and handles serialization/deserialization of YAML configurations, along
//! with loading and validating them.
//!
//! Table order is semantic: entries are applied top to bottom, so the
//! string-to-string tables deserialize into `Vec<(String, String)>` rather
//! than a hash map. The `serde_with::Map` adapter keeps the on-disk shape a
//! plain YAML mapping.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a search term or pattern string.
pub const MAX_TERM_LENGTH: usize = 500;

/// Word-count threshold used when `sentence_length_limit` is absent.
pub const DEFAULT_SENTENCE_LENGTH_LIMIT: usize = 22;

/// A single literal search/replace pair, matched as a case-insensitive
/// substring (no word-boundary anchoring).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PatternRule {
    /// The literal text to search for. Never interpreted as a regex.
    pub search: String,
    /// The text to replace matches with, inserted verbatim.
    pub replace: String,
}

/// Represents the top-level rule configuration for Plainspeak.
///
/// Missing top-level keys default to empty tables; a missing
/// `sentence_length_limit` defaults to [`DEFAULT_SENTENCE_LENGTH_LIMIT`].
/// The struct is immutable after load and shared read-only by all callers.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Ordered table of technical/regulatory terms to plain-language
    /// replacements. Whole-word, case-insensitive.
    #[serde_as(as = "serde_with::Map<_, _>")]
    pub jargon_map: Vec<(String, String)>,

    /// Ordered table of stiff phrasing to friendlier phrasing. Same
    /// mechanics as `jargon_map`, applied after it.
    #[serde_as(as = "serde_with::Map<_, _>")]
    pub tone_map: Vec<(String, String)>,

    /// Ordered literal search/replace pairs, matched as substrings. This is
    /// the only table without word-boundary anchoring.
    pub patterns: Vec<PatternRule>,

    /// Ordered table of compliance document names to friendlier labels.
    /// Whole-word, case-insensitive, applied after `patterns`.
    #[serde_as(as = "serde_with::Map<_, _>")]
    pub kyc_documents: Vec<(String, String)>,

    /// Word-count threshold above which a comma-containing sentence is
    /// split in two. Must be positive.
    pub sentence_length_limit: usize,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            jargon_map: Vec::new(),
            tone_map: Vec::new(),
            patterns: Vec::new(),
            kyc_documents: Vec::new(),
            sentence_length_limit: DEFAULT_SENTENCE_LENGTH_LIMIT,
        }
    }
}

impl SimplifyConfig {
    /// Loads rule tables from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rule tables from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SimplifyConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        info!(
            "Loaded {} rule(s) from file {}.",
            config.rule_count(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the default rule tables from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: SimplifyConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rule(s).", config.rule_count());
        Ok(config)
    }

    /// Total number of entries across all four rule tables.
    pub fn rule_count(&self) -> usize {
        self.jargon_map.len() + self.tone_map.len() + self.patterns.len() + self.kyc_documents.len()
    }
}

/// Validates rule-table integrity (non-empty terms, no duplicates, sane limit).
pub fn validate_config(config: &SimplifyConfig) -> Result<()> {
    let mut errors = Vec::new();

    validate_table("jargon_map", &config.jargon_map, &mut errors);
    validate_table("tone_map", &config.tone_map, &mut errors);
    validate_table("kyc_documents", &config.kyc_documents, &mut errors);

    let mut seen_searches = HashSet::new();
    for (index, rule) in config.patterns.iter().enumerate() {
        if rule.search.is_empty() {
            errors.push(format!("`patterns[{}]` has an empty `search` field.", index));
        } else if !seen_searches.insert(rule.search.to_lowercase()) {
            errors.push(format!(
                "Duplicate search string '{}' found in `patterns`.",
                rule.search
            ));
        }
        if rule.search.len() > MAX_TERM_LENGTH {
            errors.push(format!(
                "`patterns[{}]` search length ({}) exceeds maximum allowed ({}).",
                index,
                rule.search.len(),
                MAX_TERM_LENGTH
            ));
        }
    }

    if config.sentence_length_limit == 0 {
        errors.push("`sentence_length_limit` must be a positive integer.".to_string());
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

fn validate_table(table: &str, entries: &[(String, String)], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for (term, _) in entries {
        if term.is_empty() {
            errors.push(format!("`{}` contains an entry with an empty term.", table));
        } else if !seen.insert(term.to_lowercase()) {
            errors.push(format!("Duplicate term '{}' found in `{}`.", term, table));
        }
        if term.len() > MAX_TERM_LENGTH {
            errors.push(format!(
                "`{}` term '{}' length ({}) exceeds maximum allowed ({}).",
                table,
                term,
                term.len(),
                MAX_TERM_LENGTH
            ));
        }
    }
}
