// plainspeak/src/lib.rs
//! # Plainspeak CLI Application
//!
//! This crate provides the command-line surface and the thin adapters for
//! the Plainspeak rewriting engine: a single-text command, a bulk directory
//! converter, a JSON-document converter, and an HTTP endpoint.

pub mod cli;
pub mod commands;
pub mod logger;
