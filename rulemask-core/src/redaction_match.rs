// rulemask-core/src/redaction_match.rs
//! Provides the reporting types of a redaction run and the helpers that keep
//! matched text out of debug logs.

use log::debug;
use serde::{Deserialize, Serialize};

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("RULEMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One entry of the mapping report: a rule that matched at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub original: String,
    /// The replacement text actually written, after default-token resolution.
    pub replacement: String,
    pub count: usize,
}

impl MatchReport {
    /// "match" or "matches", for display.
    pub fn noun(&self) -> &'static str {
        if self.count == 1 { "match" } else { "matches" }
    }
}

/// The result of applying an ordered rule list to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedactionOutcome {
    pub output: String,
    /// One entry per matching rule, in rule order.
    pub mappings: Vec<MatchReport>,
}

impl RedactionOutcome {
    pub fn total_matches(&self) -> usize {
        self.mappings.iter().map(|m| m.count).sum()
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_rule_applied_debug(
    module_path: &str,
    rule_id: u64,
    original_sensitive_content: &str,
    replacement: &str,
    count: usize,
) {
    debug!(
        "{} Rule {} replaced {} occurrence(s): Original='{}', Replacement='{}'",
        module_path,
        rule_id,
        count,
        get_loggable_content(original_sensitive_content),
        replacement
    );
}

pub fn log_rule_skipped_debug(module_path: &str, rule_id: u64, original_sensitive_content: &str) {
    debug!(
        "{} Rule {} found no match for '{}'",
        module_path,
        rule_id,
        get_loggable_content(original_sensitive_content)
    );
}
