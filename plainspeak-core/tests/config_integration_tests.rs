// plainspeak-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use plainspeak_core::config::{validate_config, PatternRule, SimplifyConfig};

#[test]
fn test_load_default_rules() {
    let config = SimplifyConfig::load_default_rules().unwrap();
    assert!(!config.jargon_map.is_empty());
    assert!(!config.kyc_documents.is_empty());
    assert!(config
        .jargon_map
        .iter()
        .any(|(term, _)| term == "remittance"));
    assert_eq!(config.sentence_length_limit, 22);
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
jargon_map:
  remuneration: pay
  expiration: expiry
tone_map:
  kindly: please
patterns:
  - search: "as soon as possible"
    replace: "right away"
kyc_documents:
  "proof of address": "a document showing where you live"
sentence_length_limit: 10
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = SimplifyConfig::load_from_file(file.path())?;

    assert_eq!(config.jargon_map.len(), 2);
    // Mapping order must survive deserialization; it is semantic.
    assert_eq!(config.jargon_map[0].0, "remuneration");
    assert_eq!(config.jargon_map[1].0, "expiration");
    assert_eq!(config.tone_map, vec![("kindly".to_string(), "please".to_string())]);
    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.patterns[0].search, "as soon as possible");
    assert_eq!(config.kyc_documents.len(), 1);
    assert_eq!(config.sentence_length_limit, 10);
    Ok(())
}

#[test]
fn test_missing_keys_default_to_empty_tables() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"jargon_map:\n  utilize: use\n")?;
    let config = SimplifyConfig::load_from_file(file.path())?;

    assert_eq!(config.jargon_map.len(), 1);
    assert!(config.tone_map.is_empty());
    assert!(config.patterns.is_empty());
    assert!(config.kyc_documents.is_empty());
    // sentence_length_limit falls back to the documented default.
    assert_eq!(config.sentence_length_limit, 22);
    Ok(())
}

#[test]
fn test_missing_file_is_a_fatal_error() {
    let result = SimplifyConfig::load_from_file("/nonexistent/rules.yaml");
    assert!(result.is_err());
}

#[test]
fn test_unparsable_file_is_a_fatal_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"jargon_map: [not, a, mapping\n")?;
    assert!(SimplifyConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_validate_rejects_empty_terms() {
    let config = SimplifyConfig {
        jargon_map: vec![(String::new(), "x".to_string())],
        ..SimplifyConfig::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("jargon_map"));
}

#[test]
fn test_validate_rejects_duplicate_terms() {
    let config = SimplifyConfig {
        tone_map: vec![
            ("kindly".to_string(), "please".to_string()),
            ("Kindly".to_string(), "please".to_string()),
        ],
        ..SimplifyConfig::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Duplicate term"));
}

#[test]
fn test_validate_rejects_zero_sentence_length_limit() {
    let config = SimplifyConfig {
        sentence_length_limit: 0,
        ..SimplifyConfig::default()
    };
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_validate_rejects_empty_pattern_search() {
    let config = SimplifyConfig {
        patterns: vec![PatternRule {
            search: String::new(),
            replace: "x".to_string(),
        }],
        ..SimplifyConfig::default()
    };
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_load_from_file_rejects_invalid_tables() -> Result<()> {
    let yaml_content = r#"
jargon_map:
  utilize: use
sentence_length_limit: 0
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(SimplifyConfig::load_from_file(file.path()).is_err());
    Ok(())
}
