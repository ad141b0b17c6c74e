//! compiler.rs - Manages the compilation and caching of rewrite rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `SimplifyConfig` into `CompiledRules`, which are optimized for
//! efficient text rewriting. It uses a global, shared cache to avoid
//! redundant compilation.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{SimplifyConfig, MAX_TERM_LENGTH};
use crate::errors::PlainspeakError;

/// Represents a single compiled substitution rule.
///
/// This struct holds a compiled regular expression along with its associated
/// replacement text, ready for efficient application to content. The
/// replacement is always inserted verbatim; no capture-group expansion.
#[derive(Debug)]
pub struct CompiledSubstitution {
    /// The original search term or phrase, kept for logging.
    pub term: String,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The text to replace matches of this rule with.
    pub replacement: String,
}

/// Represents the full set of compiled rules for one configuration.
///
/// The four tables are stored in their application order; the sentence
/// length limit rides along so the engine needs only this struct.
#[derive(Debug)]
pub struct CompiledRules {
    /// Whole-word jargon substitutions, applied first.
    pub jargon: Vec<CompiledSubstitution>,
    /// Whole-word tone substitutions, applied after jargon.
    pub tone: Vec<CompiledSubstitution>,
    /// Substring pattern substitutions, applied after tone.
    pub patterns: Vec<CompiledSubstitution>,
    /// Whole-word document-name substitutions, applied after patterns.
    pub kyc_documents: Vec<CompiledSubstitution>,
    /// Word-count threshold for the sentence rewrite pass.
    pub sentence_length_limit: usize,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the `SimplifyConfig`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the `SimplifyConfig` to create a stable, unique key for the cache.
///
/// Table order is semantic (it changes output), so entries are hashed in
/// document order rather than sorted.
fn hash_config(config: &SimplifyConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

fn build_substitution(
    term: &str,
    replacement: &str,
    whole_word: bool,
) -> Result<CompiledSubstitution, PlainspeakError> {
    if term.len() > MAX_TERM_LENGTH {
        return Err(PlainspeakError::TermLengthExceeded(
            term.to_string(),
            term.len(),
            MAX_TERM_LENGTH,
        ));
    }

    // regex::escape guarantees the term is matched as a literal, never as a
    // pattern. Whole-word tables are additionally anchored with Unicode-aware
    // word boundaries.
    let escaped = regex::escape(term);
    let pattern = if whole_word {
        format!(r"\b{}\b", escaped)
    } else {
        escaped
    };

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| PlainspeakError::RuleCompilationError(term.to_string(), e))?;

    Ok(CompiledSubstitution {
        term: term.to_string(),
        regex,
        replacement: replacement.to_string(),
    })
}

fn compile_table(
    entries: &[(String, String)],
    whole_word: bool,
    compiled: &mut Vec<CompiledSubstitution>,
    errors: &mut Vec<PlainspeakError>,
) {
    for (term, replacement) in entries {
        debug!("Attempting to compile rule for term: '{}'", term);
        match build_substitution(term, replacement, whole_word) {
            Ok(substitution) => compiled.push(substitution),
            Err(e) => errors.push(e),
        }
    }
}

/// Compiles a `SimplifyConfig` into `CompiledRules` for efficient matching.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_rules(config: &SimplifyConfig) -> Result<CompiledRules, PlainspeakError> {
    debug!("Starting compilation of {} rule(s).", config.rule_count());

    let mut compilation_errors = Vec::new();

    let mut jargon = Vec::with_capacity(config.jargon_map.len());
    let mut tone = Vec::with_capacity(config.tone_map.len());
    let mut patterns = Vec::with_capacity(config.patterns.len());
    let mut kyc_documents = Vec::with_capacity(config.kyc_documents.len());

    compile_table(&config.jargon_map, true, &mut jargon, &mut compilation_errors);
    compile_table(&config.tone_map, true, &mut tone, &mut compilation_errors);
    for rule in &config.patterns {
        debug!("Attempting to compile pattern: '{}'", rule.search);
        match build_substitution(&rule.search, &rule.replace, false) {
            Ok(substitution) => patterns.push(substitution),
            Err(e) => compilation_errors.push(e),
        }
    }
    compile_table(
        &config.kyc_documents,
        true,
        &mut kyc_documents,
        &mut compilation_errors,
    );

    if !compilation_errors.is_empty() {
        // Collect errors into a single string for a concise error report
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(PlainspeakError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        let total = jargon.len() + tone.len() + patterns.len() + kyc_documents.len();
        debug!("Finished compiling rules. Total compiled: {}.", total);
        Ok(CompiledRules {
            jargon,
            tone,
            patterns,
            kyc_documents,
            sentence_length_limit: config.sentence_length_limit,
        })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
///
/// This is the public entry point for retrieving compiled rules. It returns an `Arc`
/// to a `CompiledRules` instance, allowing for cheap sharing.
pub fn get_or_compile_rules(config: &SimplifyConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_RULES_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(config)?;
    let compiled_arc = Arc::new(compiled);

    // Acquire a write lock to insert the new rules.
    COMPILED_RULES_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
