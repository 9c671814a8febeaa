//! A `RedactionEngine` implementation that applies literal rules one after
//! another over the progressively redacted text.
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::config::{EngineOptions, RedactionRule};
use crate::engine::RedactionEngine;
use crate::errors::RulemaskError;
use crate::matchers::compiler::compile_matcher;
use crate::redaction_match::{
    log_rule_applied_debug, log_rule_skipped_debug, MatchReport, RedactionOutcome,
};

const MODULE_PATH: &str = "[rulemask_core::engines::sequential]";

#[derive(Debug, Clone, Default)]
pub struct SequentialEngine {
    options: EngineOptions,
}

impl SequentialEngine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl RedactionEngine for SequentialEngine {
    fn apply(&self, input: &str, rules: &[RedactionRule]) -> Result<RedactionOutcome, RulemaskError> {
        if input.trim().is_empty() {
            return Err(RulemaskError::EmptyInput);
        }
        if rules.iter().all(RedactionRule::is_inert) {
            return Err(RulemaskError::NoRules);
        }

        debug!("{} Applying {} rule(s) to {} bytes of input.", MODULE_PATH, rules.len(), input.len());

        let mut output = input.to_string();
        let mut mappings = Vec::new();

        for rule in rules.iter().filter(|r| !r.is_inert()) {
            let matcher = compile_matcher(rule, &self.options)?;
            let count = matcher.count(&output);
            if count == 0 {
                log_rule_skipped_debug(MODULE_PATH, rule.id, &rule.original);
                continue;
            }

            output = matcher.replace_all(&output).into_owned();
            log_rule_applied_debug(MODULE_PATH, rule.id, &rule.original, &matcher.replace_with, count);

            mappings.push(MatchReport {
                original: matcher.original,
                replacement: matcher.replace_with,
                count,
            });
        }

        if mappings.is_empty() {
            info!("{} No rule matched the input.", MODULE_PATH);
            return Err(RulemaskError::NoMatches);
        }

        info!(
            "{} {} rule(s) matched, {} replacement(s) in total.",
            MODULE_PATH,
            mappings.len(),
            mappings.iter().map(|m| m.count).sum::<usize>()
        );
        Ok(RedactionOutcome { output, mappings })
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmptyReplacement, RuleDefinition};

    fn rules(defs: Vec<RuleDefinition>) -> Vec<RedactionRule> {
        defs.into_iter()
            .enumerate()
            .map(|(i, d)| RedactionRule::from_definition(i as u64, d))
            .collect()
    }

    #[test]
    fn test_blank_input_is_rejected_before_rules() {
        let engine = SequentialEngine::new();
        assert!(matches!(engine.apply("  \n\t", &[]), Err(RulemaskError::EmptyInput)));
    }

    #[test]
    fn test_all_inert_rules() {
        let engine = SequentialEngine::new();
        let rs = rules(vec![RuleDefinition::default(), RuleDefinition::new("", "x")]);
        assert!(matches!(engine.apply("hello", &rs), Err(RulemaskError::NoRules)));
        assert!(matches!(engine.apply("hello", &[]), Err(RulemaskError::NoRules)));
    }

    #[test]
    fn test_inert_rules_are_skipped() {
        let engine = SequentialEngine::new();
        let rs = rules(vec![RuleDefinition::default(), RuleDefinition::new("hello", "bye")]);
        let outcome = engine.apply("hello world", &rs).unwrap();
        assert_eq!(outcome.output, "bye world");
        assert_eq!(outcome.mappings.len(), 1);
    }

    #[test]
    fn test_default_token_for_empty_replacement() {
        let engine = SequentialEngine::new();
        let rs = rules(vec![RuleDefinition::new("secret", "")]);
        let outcome = engine.apply("a secret here", &rs).unwrap();
        assert_eq!(outcome.output, "a [REDACTED] here");
        assert_eq!(outcome.mappings[0].replacement, "[REDACTED]");
    }

    #[test]
    fn test_delete_policy_for_empty_replacement() {
        let engine = SequentialEngine::with_options(
            EngineOptions::default().with_empty_replacement(EmptyReplacement::Delete),
        );
        let rs = rules(vec![RuleDefinition::new("secret ", "").whole_word(false)]);
        let outcome = engine.apply("a secret here", &rs).unwrap();
        assert_eq!(outcome.output, "a here");
        assert_eq!(outcome.mappings[0].replacement, "");
    }

    #[test]
    fn test_cascading_rules() {
        let engine = SequentialEngine::new();
        let rs = rules(vec![RuleDefinition::new("A", "B"), RuleDefinition::new("B", "C")]);
        let outcome = engine.apply("A", &rs).unwrap();
        assert_eq!(outcome.output, "C");
        assert_eq!(outcome.mappings.len(), 2);
    }
}
