//! Persistence adapters for the rule list.
//!
//! A [`RuleStore`](crate::store::RuleStore) saves itself through a
//! [`RulePersistence`] after every mutation. Failures surface as
//! [`RulemaskError::Persistence`]; the store logs and swallows them so that
//! redaction keeps working in memory.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::RedactionRule;
use crate::errors::RulemaskError;
use crate::transfer::{parse_rules, RuleFileFormat};

const STATE_FILE_TMP_SUFFIX: &str = ".tmp";

/// Saves and loads the full rule list.
pub trait RulePersistence {
    fn save(&self, rules: &[RedactionRule]) -> Result<(), RulemaskError>;

    /// Returns the saved rules, or an empty list when nothing was saved yet.
    fn load(&self) -> Result<Vec<RedactionRule>, RulemaskError>;
}

/// Discards saves and always loads an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPersistence;

impl RulePersistence for NullPersistence {
    fn save(&self, _rules: &[RedactionRule]) -> Result<(), RulemaskError> {
        Ok(())
    }

    fn load(&self) -> Result<Vec<RedactionRule>, RulemaskError> {
        Ok(Vec::new())
    }
}

/// Keeps the last saved list in memory. Clones share the same slot, so a
/// caller can hand one clone to a store and inspect saves through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Arc<Mutex<Vec<RedactionRule>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<RedactionRule>) -> Self {
        Self { slot: Arc::new(Mutex::new(rules)) }
    }

    /// A copy of the most recently saved list.
    pub fn snapshot(&self) -> Vec<RedactionRule> {
        self.slot.lock().map(|rules| rules.clone()).unwrap_or_default()
    }
}

impl RulePersistence for MemoryPersistence {
    fn save(&self, rules: &[RedactionRule]) -> Result<(), RulemaskError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| RulemaskError::Persistence(format!("memory slot poisoned: {}", e)))?;
        *slot = rules.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<Vec<RedactionRule>, RulemaskError> {
        self.slot
            .lock()
            .map(|rules| rules.clone())
            .map_err(|e| RulemaskError::Persistence(format!("memory slot poisoned: {}", e)))
    }
}

/// Stores the rule list as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_locked(&self) -> std::io::Result<Vec<u8>> {
        let mut f = OpenOptions::new().read(true).open(&self.path)?;
        fs2::FileExt::lock_shared(&f)?;
        let mut raw = Vec::new();
        f.read_to_end(&mut raw)?;
        fs2::FileExt::unlock(&f)?;
        Ok(raw)
    }

    fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension(format!(
            "{}{}",
            self.path.extension().map(|s| s.to_string_lossy()).unwrap_or_default(),
            STATE_FILE_TMP_SUFFIX
        ));
        {
            let mut tmp = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
            fs2::FileExt::lock_exclusive(&tmp)?;
            tmp.write_all(bytes)?;
            tmp.flush()?;
            fs2::FileExt::unlock(&tmp)?;
        }
        fs::rename(&tmp_path, &self.path)
    }
}

impl RulePersistence for JsonFilePersistence {
    fn save(&self, rules: &[RedactionRule]) -> Result<(), RulemaskError> {
        let json = serde_json::to_vec_pretty(rules)
            .map_err(|e| RulemaskError::Persistence(format!("serializing rules: {}", e)))?;
        self.write_atomic(&json)
            .map_err(|e| RulemaskError::Persistence(format!("writing {}: {}", self.path.display(), e)))?;
        debug!("Saved {} rule(s) to {}", rules.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<RedactionRule>, RulemaskError> {
        if !self.path.exists() {
            debug!("No saved rules at {}", self.path.display());
            return Ok(Vec::new());
        }

        let raw = self
            .read_locked()
            .map_err(|e| RulemaskError::Persistence(format!("reading {}: {}", self.path.display(), e)))?;
        let text = String::from_utf8_lossy(&raw);
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        parse_rules(&text, RuleFileFormat::Json)
            .map_err(|e| RulemaskError::Persistence(format!("{}: {}", self.path.display(), e)))
    }
}
