// rulemask-core/src/engine.rs
//! Defines the core RedactionEngine trait.
//!
//! The trait is the seam between front-ends (terminal, embedders, tests) and
//! the logic that applies rules to text. Front-ends hold a `&dyn RedactionEngine`
//! and never reach into matching details.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{EngineOptions, RedactionRule};
use crate::errors::RulemaskError;
use crate::redaction_match::RedactionOutcome;

/// A trait that defines the core functionality of a redaction engine.
pub trait RedactionEngine {
    /// Applies `rules`, in order, to `input`.
    ///
    /// Each rule sees the text as left by the rules before it. The returned
    /// outcome holds the final text and one report entry per rule that matched.
    ///
    /// # Errors
    /// * [`RulemaskError::EmptyInput`] if `input` is blank.
    /// * [`RulemaskError::NoRules`] if no rule has text to find.
    /// * [`RulemaskError::NoMatches`] if no rule matched; the input is unchanged.
    fn apply(&self, input: &str, rules: &[RedactionRule]) -> Result<RedactionOutcome, RulemaskError>;

    /// Returns a reference to the engine's options.
    fn options(&self) -> &EngineOptions;
}
