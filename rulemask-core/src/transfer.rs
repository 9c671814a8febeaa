//! File export and import of rule lists.
//!
//! Exports are pretty-printed JSON by default (YAML on request). Imports accept
//! either format, but the top-level value must be a list of rule records;
//! anything else is rejected before the store is touched.
//!
//! License: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use log::{debug, info};
use std::path::Path;

use crate::config::RedactionRule;
use crate::errors::RulemaskError;
use crate::store::{LoadOutcome, RuleStore};

/// Structured formats a rules file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleFileFormat {
    #[default]
    Json,
    Yaml,
}

impl RuleFileFormat {
    /// YAML for `.yaml` / `.yml` files, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Serializes `rules` for download.
pub fn export_rules(rules: &[RedactionRule], format: RuleFileFormat) -> Result<String, RulemaskError> {
    if rules.is_empty() {
        return Err(RulemaskError::NothingToExport);
    }
    let text = match format {
        RuleFileFormat::Json => {
            serde_json::to_string_pretty(rules).map_err(|e| RulemaskError::Serialization(e.to_string()))?
        }
        RuleFileFormat::Yaml => {
            serde_yml::to_string(rules).map_err(|e| RulemaskError::Serialization(e.to_string()))?
        }
    };
    debug!("Exported {} rule(s) as {:?}.", rules.len(), format);
    Ok(text)
}

/// A file name carrying the export time, e.g. `rulemask-rules-1700000000000.json`.
pub fn export_file_name(at: DateTime<Utc>, format: RuleFileFormat) -> String {
    format!("rulemask-rules-{}.{}", at.timestamp_millis(), format.extension())
}

/// Parses a rules file. The top-level value must be a list.
pub fn parse_rules(text: &str, format: RuleFileFormat) -> Result<Vec<RedactionRule>, RulemaskError> {
    match format {
        RuleFileFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|e| RulemaskError::InvalidFormat(e.to_string()))?;
            if !value.is_array() {
                return Err(RulemaskError::InvalidFormat("top-level value must be a list of rules".to_string()));
            }
            serde_json::from_value(value).map_err(|e| RulemaskError::InvalidFormat(e.to_string()))
        }
        RuleFileFormat::Yaml => {
            let value: serde_yml::Value =
                serde_yml::from_str(text).map_err(|e| RulemaskError::InvalidFormat(e.to_string()))?;
            if !value.is_sequence() {
                return Err(RulemaskError::InvalidFormat("top-level value must be a list of rules".to_string()));
            }
            serde_yml::from_value(value).map_err(|e| RulemaskError::InvalidFormat(e.to_string()))
        }
    }
}

/// Replaces the store's rules with the contents of a rules file.
///
/// The text is parsed first; a malformed file leaves the store untouched.
/// `confirm` is asked only if the store already holds rules.
pub fn import_rules<F>(
    store: &mut RuleStore,
    text: &str,
    format: RuleFileFormat,
    confirm: F,
) -> Result<LoadOutcome, RulemaskError>
where
    F: FnOnce(usize) -> bool,
{
    let rules = parse_rules(text, format)?;
    if !store.confirm_replace(confirm) {
        info!("Import cancelled; keeping {} existing rule(s).", store.len());
        return Ok(LoadOutcome::Cancelled);
    }
    let count = rules.len();
    store.replace_all(rules);
    info!("Imported {} rule(s).", count);
    Ok(LoadOutcome::Replaced { count })
}
