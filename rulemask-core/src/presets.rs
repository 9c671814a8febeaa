// File: rulemask-core/src/presets.rs

//! presets.rs - Named rule bundles and the helpers that load them.
//!
//! A preset is an immutable, ordered list of rule definitions. Loading one
//! replaces the whole rule list of a store, subject to the same
//! confirm-if-non-empty policy as a file import.
//!
//! Three presets ship embedded in the library (`corporate`, `personal`,
//! `financial`). Users can add their own as YAML files in the preset
//! directories returned by [`preset_candidate_paths`].
//!
//! license: MIT OR Apache-2.0

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{RedactionRule, RuleDefinition};
use crate::errors::RulemaskError;
use crate::store::{LoadOutcome, RuleStore};

/// A named bundle of rule definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rules: Vec<RuleDefinition>,
}

impl Preset {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Preset validation failed: 'name' field cannot be empty.");
        }
        if self.rules.is_empty() {
            bail!("Preset '{}' validation failed: it defines no rules.", self.name);
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.original.is_empty() {
                warn!("Preset '{}': rule #{} has no text to find and will never match.", self.name, index);
            }
        }
        Ok(())
    }

    /// The preset's rules with ids `0..n` in definition order.
    pub fn instantiate(&self) -> Vec<RedactionRule> {
        self.rules
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, definition)| RedactionRule::from_definition(id as u64, definition))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    presets: Vec<Preset>,
}

/// The ordered set of built-in presets.
#[derive(Debug, Clone)]
pub struct PresetCatalogue {
    presets: Vec<Preset>,
}

impl PresetCatalogue {
    /// Parses the catalogue embedded in the library.
    pub fn builtin() -> Result<Self, RulemaskError> {
        debug!("Loading built-in presets from embedded string...");
        let yaml = include_str!("../config/presets.yaml");
        let file: CatalogueFile = serde_yml::from_str(yaml)
            .map_err(|e| RulemaskError::Serialization(format!("built-in presets: {}", e)))?;
        debug!("Loaded {} built-in presets.", file.presets.len());
        Ok(Self { presets: file.presets })
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }
}

/// Replaces the store's rules with `preset`, asking `confirm` first if the
/// store is not empty.
pub fn load_preset<F>(store: &mut RuleStore, preset: &Preset, confirm: F) -> LoadOutcome
where
    F: FnOnce(usize) -> bool,
{
    if !store.confirm_replace(confirm) {
        info!("Loading preset '{}' cancelled.", preset.name);
        return LoadOutcome::Cancelled;
    }
    let rules = preset.instantiate();
    let count = rules.len();
    store.replace_all(rules);
    info!("Loaded preset '{}' with {} rule(s).", preset.name, count);
    LoadOutcome::Replaced { count }
}

/// Where a user preset called `name` may live, in lookup order.
pub fn preset_candidate_paths(name: &str) -> Vec<PathBuf> {
    preset_dirs()
        .into_iter()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

fn preset_dirs() -> Vec<PathBuf> {
    vec![
        dirs::home_dir().map(|p| p.join(".rulemask").join("presets")),
        dirs::config_dir().map(|p| p.join("rulemask").join("presets")),
        Some(PathBuf::from("./presets")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Reads and validates a single preset YAML file.
pub fn load_preset_file(path: &Path) -> Result<Preset> {
    let text = fs::read_to_string(path).with_context(|| format!("reading preset file {}", path.display()))?;
    let preset: Preset =
        serde_yml::from_str(&text).with_context(|| format!("parsing preset YAML {}", path.display()))?;
    preset.validate()?;
    Ok(preset)
}

/// Resolves a built-in preset name, then a file path, then a user preset name.
pub fn load_preset_by_name(name_or_path: &str) -> Result<Preset> {
    debug!("Attempting to load preset: '{}'", name_or_path);

    if let Some(preset) = PresetCatalogue::builtin()?.get(name_or_path) {
        return Ok(preset.clone());
    }

    let path = Path::new(name_or_path);
    let path_to_load = if path.is_file() {
        Some(path.to_path_buf())
    } else {
        preset_candidate_paths(name_or_path).into_iter().find(|p| p.is_file())
    };

    match path_to_load {
        Some(p) => {
            debug!("Loading preset from file: {}", p.display());
            load_preset_file(&p)
        }
        None => Err(RulemaskError::PresetNotFound(name_or_path.to_string()).into()),
    }
}

/// A listing entry for [`list_available_presets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub name: String,
    pub description: Option<String>,
    pub rule_count: usize,
    /// `None` for built-in presets.
    pub path: Option<PathBuf>,
}

/// Built-in presets followed by any parseable user preset files.
pub fn list_available_presets() -> Vec<PresetSummary> {
    let mut out = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    match PresetCatalogue::builtin() {
        Ok(catalogue) => {
            for preset in catalogue.iter() {
                seen_names.insert(preset.name.clone());
                out.push(PresetSummary {
                    name: preset.name.clone(),
                    description: preset.description.clone(),
                    rule_count: preset.rules.len(),
                    path: None,
                });
            }
        }
        Err(e) => warn!("Failed to load built-in presets: {}", e),
    }

    for dir in preset_dirs() {
        let Ok(entries) = fs::read_dir(&dir) else {
            debug!("Candidate preset directory not found: {}", dir.display());
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("yaml") {
                continue;
            }
            match load_preset_file(&path) {
                Ok(preset) if seen_names.insert(preset.name.clone()) => out.push(PresetSummary {
                    name: preset.name,
                    description: preset.description,
                    rule_count: preset.rules.len(),
                    path: Some(path),
                }),
                Ok(preset) => debug!("Preset '{}' at {} is shadowed.", preset.name, path.display()),
                Err(e) => warn!("Skipping preset file {}: {:#}", path.display(), e),
            }
        }
    }
    out
}
