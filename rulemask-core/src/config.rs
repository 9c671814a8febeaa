//! Configuration management for `rulemask-core`.
//!
//! This module defines the core data structures for redaction rules and engine options.
//! It also handles loading the optional YAML settings file that carries engine options
//! and the location of the persisted rule list.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The token substituted for a match when a rule has no replacement text.
pub const DEFAULT_REDACTION_TOKEN: &str = "[REDACTED]";

/// A single literal find/replace rule as held by the [`RuleStore`](crate::store::RuleStore).
///
/// Field names are serialized in camelCase (`caseSensitive`, `wholeWord`) so that
/// saved and exported rule lists keep the shape users already have on disk.
/// Every field is optional on input; missing ids are repaired when the list is
/// installed into a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionRule {
    #[serde(default)]
    pub id: u64,
    /// The literal text to find. An empty string makes the rule inert.
    #[serde(default)]
    pub original: String,
    /// The text written in place of each match.
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub case_sensitive: bool,
    /// If true, a match must not be embedded inside a longer word.
    #[serde(default)]
    pub whole_word: bool,
}

impl RedactionRule {
    /// Builds a rule from a definition and an already allocated id.
    pub fn from_definition(id: u64, definition: RuleDefinition) -> Self {
        Self {
            id,
            original: definition.original,
            replacement: definition.replacement,
            case_sensitive: definition.case_sensitive,
            whole_word: definition.whole_word,
        }
    }

    /// Inert rules are stored and listed but skipped by the engine.
    pub fn is_inert(&self) -> bool {
        self.original.is_empty()
    }
}

/// A rule without identity, as found in presets or supplied to `RuleStore::add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_whole_word")]
    pub whole_word: bool,
}

fn default_whole_word() -> bool {
    true
}

impl Default for RuleDefinition {
    /// A blank rule: nothing to find, case-insensitive, whole-word.
    fn default() -> Self {
        Self {
            original: String::new(),
            replacement: String::new(),
            case_sensitive: false,
            whole_word: true,
        }
    }
}

impl RuleDefinition {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }
}

/// Field edits for `RuleStore::update`. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleUpdate {
    pub original: Option<String>,
    pub replacement: Option<String>,
    pub case_sensitive: Option<bool>,
    pub whole_word: Option<bool>,
}

impl RuleUpdate {
    pub fn is_empty(&self) -> bool {
        self.original.is_none()
            && self.replacement.is_none()
            && self.case_sensitive.is_none()
            && self.whole_word.is_none()
    }

    pub(crate) fn apply_to(self, rule: &mut RedactionRule) {
        if let Some(original) = self.original {
            rule.original = original;
        }
        if let Some(replacement) = self.replacement {
            rule.replacement = replacement;
        }
        if let Some(case_sensitive) = self.case_sensitive {
            rule.case_sensitive = case_sensitive;
        }
        if let Some(whole_word) = self.whole_word {
            rule.whole_word = whole_word;
        }
    }
}

/// What an empty `replacement` means when a rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReplacement {
    /// Substitute [`EngineOptions::default_token`].
    #[default]
    Sentinel,
    /// Remove the matched text.
    Delete,
}

/// Options that shape how the engine resolves replacement text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    pub default_token: String,
    pub empty_replacement: EmptyReplacement,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_token: DEFAULT_REDACTION_TOKEN.to_string(),
            empty_replacement: EmptyReplacement::Sentinel,
        }
    }
}

impl EngineOptions {
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.default_token = token.into();
        self
    }

    pub fn with_empty_replacement(mut self, policy: EmptyReplacement) -> Self {
        self.empty_replacement = policy;
        self
    }

    /// The text actually written for a match of `rule`.
    pub fn resolve_replacement<'a>(&'a self, rule: &'a RedactionRule) -> &'a str {
        if !rule.replacement.is_empty() {
            return &rule.replacement;
        }
        match self.empty_replacement {
            EmptyReplacement::Sentinel => &self.default_token,
            EmptyReplacement::Delete => "",
        }
    }
}

/// Top-level settings for rulemask, read from an optional YAML file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RulemaskConfig {
    pub engine: EngineOptions,
    /// Where the rule list is persisted. `None` means the platform default.
    pub state_file: Option<PathBuf>,
}

impl RulemaskConfig {
    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RulemaskConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(
            "Settings loaded: default token '{}', empty replacement {:?}.",
            config.engine.default_token, config.engine.empty_replacement
        );
        Ok(config)
    }

    /// Loads the first settings file found in the usual locations, or defaults.
    pub fn load_default() -> Result<Self> {
        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("No settings file found, using defaults.");
                Ok(Self::default())
            }
        }
    }
}

/// Locations probed by [`RulemaskConfig::load_default`], in order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    vec![
        dirs::config_dir().map(|p| p.join("rulemask").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".rulemask").join("config.yaml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}
