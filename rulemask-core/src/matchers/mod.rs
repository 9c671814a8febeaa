//! Turns literal redaction rules into concrete matchers.
//!
//! Rules carry plain text plus two modifiers (case sensitivity and whole-word
//! matching). The `compiler` module escapes that text and builds a regular
//! expression with the matching semantics the engine relies on.

pub mod compiler;
