//! errors.rs - Custom error types for the rulemask-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `rulemask-core` library.
///
/// The first three variants are the precondition and outcome errors of a
/// redaction run and are meant to be shown to the user as-is.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RulemaskError {
    #[error("Please enter some text to redact.")]
    EmptyInput,

    #[error("Please add at least one redaction rule with text to find.")]
    NoRules,

    #[error("No matches found. Check your redaction rules.")]
    NoMatches,

    #[error("Invalid rules file format: {0}")]
    InvalidFormat(String),

    #[error("Failed to persist rules: {0}")]
    Persistence(String),

    #[error("Rule {0} has no text to find and cannot be compiled")]
    EmptyPattern(u64),

    #[error("Failed to compile redaction rule {0}: {1}")]
    RuleCompilation(u64, regex::Error),

    #[error("Preset '{0}' not found")]
    PresetNotFound(String),

    #[error("No rules to export.")]
    NothingToExport,

    #[error("Failed to serialize rules: {0}")]
    Serialization(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl RulemaskError {
    /// True for the errors a caller reports to the user instead of treating as a failure
    /// of the tool itself.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::NoRules | Self::NoMatches | Self::InvalidFormat(_) | Self::NothingToExport
        )
    }
}
