//! Rule compilation for the plainspeak engine.
//!
//! This module is responsible for turning the loaded rule tables into
//! efficient, ready-to-apply regular expressions. Whole-word tables are
//! anchored with word boundaries, while pattern rules compile to bare
//! escaped literals so they can match substrings spanning punctuation.
//!
//! This module works closely with `config` (for the table definitions) and
//! the engine implementations (which consume the compiled rules).

pub mod compiler;
