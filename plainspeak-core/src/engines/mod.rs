// plainspeak-core/src/engines/mod.rs
//! This module contains simplification engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `Simplifier` trait. This modular design allows for easy addition of new
//! engine types alongside the rule-table engine.
//!
//! To add a new engine, create a new file (e.g., `glossary_engine.rs`),
//! define its logic, and declare it here using `pub mod <engine_name>;`.

pub mod rule_engine;
