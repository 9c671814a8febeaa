//! compiler.rs - Compiles literal redaction rules into matchers.
//!
//! A `CompiledMatcher` is ephemeral: the engine builds one per rule for every
//! application pass and drops it afterwards, so no match state is shared
//! between runs.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

use crate::config::{EngineOptions, RedactionRule};
use crate::errors::RulemaskError;

/// Upper bound for the compiled program of a single rule.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single rule compiled for one application pass.
#[derive(Debug)]
pub struct CompiledMatcher {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The text written in place of each match, already resolved through `EngineOptions`.
    pub replace_with: String,
    /// The literal text of the source rule, as reported back to the user.
    pub original: String,
    /// Id of the rule this matcher was built from.
    pub rule_id: u64,
}

impl CompiledMatcher {
    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Replaces every match in `text`. The replacement is inserted verbatim,
    /// so `$` sequences in it are not treated as group references.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, NoExpand(&self.replace_with))
    }
}

/// Builds the pattern source for a rule: the escaped literal, optionally
/// wrapped in word-boundary assertions.
///
/// A literal that starts or ends with a non-word character only gets a
/// boundary at that end when a word character sits on the other side of it.
/// `"Account #"` with whole-word matching therefore needs a word character
/// right after the `#`.
pub fn build_pattern(original: &str, whole_word: bool) -> String {
    let escaped = regex::escape(original);
    if whole_word {
        format!(r"\b{}\b", escaped)
    } else {
        escaped
    }
}

/// Compiles one rule. The rule must have non-empty `original` text.
pub fn compile_matcher(rule: &RedactionRule, options: &EngineOptions) -> Result<CompiledMatcher, RulemaskError> {
    if rule.is_inert() {
        return Err(RulemaskError::EmptyPattern(rule.id));
    }

    let pattern = build_pattern(&rule.original, rule.whole_word);
    debug!(
        "Compiling rule {} (case_sensitive: {}, whole_word: {})",
        rule.id, rule.case_sensitive, rule.whole_word
    );

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(!rule.case_sensitive)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| RulemaskError::RuleCompilation(rule.id, e))?;

    log::debug!(
        target: "rulemask_core::compiler",
        "Rule {} compiled successfully.",
        rule.id
    );

    Ok(CompiledMatcher {
        regex,
        replace_with: options.resolve_replacement(rule).to_string(),
        original: rule.original.clone(),
        rule_id: rule.id,
    })
}
