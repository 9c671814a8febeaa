// File: rulemask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot redaction of a string without a store.

use crate::config::{EngineOptions, RedactionRule};
use crate::engine::RedactionEngine;
use crate::engines::sequential::SequentialEngine;
use crate::errors::RulemaskError;

/// Applies `rules` to `content` and returns only the redacted text.
///
/// # Arguments
///
/// * `rules` - The ordered rule list.
/// * `options` - Replacement resolution options.
/// * `content` - The string to be redacted.
pub fn headless_redact_string(
    rules: &[RedactionRule],
    options: EngineOptions,
    content: &str,
) -> Result<String, RulemaskError> {
    let engine = SequentialEngine::with_options(options);
    let outcome = engine.apply(content, rules)?;
    Ok(outcome.output)
}
