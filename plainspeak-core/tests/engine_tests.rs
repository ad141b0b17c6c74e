// plainspeak-core/tests/engine_tests.rs
//! End-to-end tests for the rewrite pipeline, exercising the pass order,
//! boundary semantics, and the sentence rewrite policies.

use anyhow::Result;
use plainspeak_core::{PatternRule, RuleEngine, Simplifier, SimplifyConfig};

fn word_table(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(raw, simple)| (raw.to_string(), simple.to_string()))
        .collect()
}

fn engine(config: SimplifyConfig) -> RuleEngine {
    RuleEngine::new(config).unwrap()
}

#[test]
fn empty_input_returns_empty_output() {
    let engine = engine(SimplifyConfig::default());
    assert_eq!(engine.simplify(""), "");
}

#[test]
fn whitespace_only_input_collapses_to_empty() {
    let engine = engine(SimplifyConfig::default());
    assert_eq!(engine.simplify("  \n\t "), "");
}

#[test]
fn simplify_is_deterministic() {
    let engine = engine(SimplifyConfig {
        jargon_map: word_table(&[("remittance", "payment")]),
        ..SimplifyConfig::default()
    });
    let input = "Your remittance,  once received,\nwill be processed";
    assert_eq!(engine.simplify(input), engine.simplify(input));
}

#[test]
fn whole_word_terms_do_not_match_inside_larger_words() {
    let engine = engine(SimplifyConfig {
        jargon_map: word_table(&[("id", "identity")]),
        ..SimplifyConfig::default()
    });
    assert_eq!(engine.simplify("identification id"), "identification identity.");
}

#[test]
fn word_map_matching_is_case_insensitive() {
    let engine = engine(SimplifyConfig {
        jargon_map: word_table(&[("remittance", "payment")]),
        ..SimplifyConfig::default()
    });
    assert_eq!(engine.simplify("REMITTANCE received"), "payment received.");
}

#[test]
fn patterns_replace_substrings() {
    let engine = engine(SimplifyConfig {
        patterns: vec![PatternRule {
            search: "as soon as possible".to_string(),
            replace: "right away".to_string(),
        }],
        ..SimplifyConfig::default()
    });
    assert_eq!(
        engine.simplify("Please respond as soon as possible."),
        "Please respond right away."
    );
}

#[test]
fn patterns_are_literal_not_regex() {
    let engine = engine(SimplifyConfig {
        patterns: vec![PatternRule {
            search: "terms (see appendix)".to_string(),
            replace: "terms".to_string(),
        }],
        ..SimplifyConfig::default()
    });
    // Parentheses are matched literally, not as a regex group.
    assert_eq!(
        engine.simplify("Read the terms (see appendix) first"),
        "Read the terms first."
    );
}

#[test]
fn long_comma_sentence_is_split_into_two() {
    let engine = engine(SimplifyConfig {
        sentence_length_limit: 5,
        ..SimplifyConfig::default()
    });
    assert_eq!(
        engine.simplify("This is a very long sentence with many words, and a second clause."),
        "This is a very long sentence with many words. and a second clause."
    );
}

#[test]
fn long_sentence_without_comma_stays_intact() {
    let engine = engine(SimplifyConfig {
        sentence_length_limit: 3,
        ..SimplifyConfig::default()
    });
    assert_eq!(
        engine.simplify("This sentence has no commas at all"),
        "This sentence has no commas at all."
    );
}

#[test]
fn remainder_of_split_sentence_is_not_resplit() {
    let engine = engine(SimplifyConfig {
        sentence_length_limit: 4,
        ..SimplifyConfig::default()
    });
    // The remainder is still long and still contains commas, but the split
    // is applied once per sentence.
    assert_eq!(
        engine.simplify("Alpha beta gamma delta epsilon, one two three, four five six."),
        "Alpha beta gamma delta epsilon. one two three, four five six."
    );
}

#[test]
fn jargon_runs_before_tone() {
    let engine = engine(SimplifyConfig {
        jargon_map: word_table(&[("remuneration", "compensation")]),
        tone_map: word_table(&[("compensation", "pay")]),
        ..SimplifyConfig::default()
    });
    // The tone pass sees the jargon pass's output.
    assert_eq!(engine.simplify("your remuneration"), "your pay.");
}

#[test]
fn patterns_see_jargon_output() {
    let engine = engine(SimplifyConfig {
        jargon_map: word_table(&[("remuneration", "pay")]),
        patterns: vec![PatternRule {
            search: "pay structure".to_string(),
            replace: "how you are paid".to_string(),
        }],
        ..SimplifyConfig::default()
    });
    // "remuneration structure" only becomes a pattern match after the
    // jargon pass has rewritten it.
    assert_eq!(
        engine.simplify("Details of the remuneration structure"),
        "Details of the how you are paid."
    );
}

#[test]
fn kyc_documents_run_after_patterns() {
    let engine = engine(SimplifyConfig {
        kyc_documents: word_table(&[(
            "proof of address",
            "a document showing where you live",
        )]),
        ..SimplifyConfig::default()
    });
    assert_eq!(
        engine.simplify("Send your Proof of Address"),
        "Send your a document showing where you live."
    );
}

#[test]
fn input_whitespace_is_normalized_before_matching() {
    let engine = engine(SimplifyConfig {
        patterns: vec![PatternRule {
            search: "as soon as possible".to_string(),
            replace: "right away".to_string(),
        }],
        ..SimplifyConfig::default()
    });
    // The phrase is broken across lines in the raw input; pass 1 joins it.
    assert_eq!(
        engine.simplify("Respond as soon\nas   possible please"),
        "Respond right away please."
    );
}

#[test]
fn empty_ruleset_only_normalizes_and_punctuates() {
    let engine = engine(SimplifyConfig::default());
    assert_eq!(
        engine.simplify("  nothing \n to  rewrite "),
        "nothing to rewrite."
    );
}

#[test]
fn default_rules_produce_plain_language() -> Result<()> {
    let engine = RuleEngine::new(SimplifyConfig::load_default_rules()?)?;
    let simplified =
        engine.simplify("Kindly submit your proof of identity as soon as possible.");
    assert_eq!(
        simplified,
        "please submit your a photo ID (like a passport or driving licence) right away."
    );
    Ok(())
}

#[test]
fn concurrent_simplify_calls_share_one_engine() -> Result<()> {
    use std::sync::Arc;
    use std::thread;

    let engine = Arc::new(RuleEngine::new(SimplifyConfig {
        jargon_map: word_table(&[("remittance", "payment")]),
        ..SimplifyConfig::default()
    })?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.simplify("remittance pending"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "payment pending.");
    }
    Ok(())
}
