//! Sentence splitting and rewriting for the final engine pass.
//!
//! Oversized sentences that contain a comma are split at their commas: the
//! first segment becomes one sentence, the remaining segments are re-joined
//! into a second. The split is applied once per sentence, never recursively,
//! so a long remainder stays intact.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A sentence boundary is `.`, `!` or `?` followed by whitespace; the
    // whitespace is consumed, the punctuation stays with its sentence.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Splits `text` into sentence candidates at terminal punctuation followed
/// by whitespace. The punctuation is retained, the whitespace is not.
pub fn split_sentence_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // `.`, `!` and `?` are single-byte, so +1 lands after the punctuation.
        let split = boundary.start() + 1;
        candidates.push(&text[start..split]);
        start = boundary.end();
    }
    candidates.push(&text[start..]);
    candidates
}

/// Ensures a sentence ends with terminal punctuation, appending a `.` when
/// it does not already end in `.`, `!` or `?`.
fn with_terminal_punctuation(sentence: &str) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{}.", sentence)
    }
}

/// Rewrites `text` sentence by sentence.
///
/// A candidate whose word count exceeds `limit` *and* which contains at
/// least one comma is split at every comma: the first segment is emitted as
/// its own sentence, the remaining segments are re-joined with `", "` and
/// emitted as a second sentence. Every other candidate is emitted with its
/// terminal punctuation ensured. Emitted sentences are joined with single
/// spaces.
pub fn rewrite_sentences(text: &str, limit: usize) -> String {
    let mut rewritten: Vec<String> = Vec::new();

    for candidate in split_sentence_candidates(text) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        let word_count = candidate.split_whitespace().count();
        if word_count > limit && candidate.contains(',') {
            let segments: Vec<&str> = candidate.split(',').map(str::trim).collect();
            rewritten.push(with_terminal_punctuation(segments[0]));
            if segments.len() > 1 {
                rewritten.push(with_terminal_punctuation(&segments[1..].join(", ")));
            }
            continue;
        }

        rewritten.push(with_terminal_punctuation(candidate));
    }

    rewritten.join(" ")
}
