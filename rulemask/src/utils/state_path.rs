// rulemask/src/utils/state_path.rs
//! Where the saved rule list lives.

use std::env;
use std::path::{Path, PathBuf};

use rulemask_core::{JsonFilePersistence, RuleStore, RulemaskConfig};

const STATE_DIR_NAME: &str = "rulemask";
const STATE_FILE_NAME: &str = "rules.json";

/// Resolves the rules file: the `--state` flag (which also carries
/// `RULEMASK_STATE_FILE`), then the settings file, then the platform data directory.
pub fn resolve_state_path(flag: Option<&Path>, config: &RulemaskConfig) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = &config.state_file {
        return path.clone();
    }
    default_state_path()
}

/// `<data_dir>/rulemask/rules.json`, or `./rulemask_rules.json` without a data directory.
pub fn default_state_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(STATE_DIR_NAME).join(STATE_FILE_NAME),
        None => env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("rulemask_rules.json"),
    }
}

/// Opens the rule store backed by the JSON file at `path`.
pub fn open_store(path: &Path) -> RuleStore {
    log::debug!("Using rules file {}", path.display());
    RuleStore::open(Box::new(JsonFilePersistence::new(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config() {
        let config = RulemaskConfig { state_file: Some(PathBuf::from("/from/config.json")), ..Default::default() };
        assert_eq!(
            resolve_state_path(Some(Path::new("/from/flag.json")), &config),
            PathBuf::from("/from/flag.json")
        );
        assert_eq!(resolve_state_path(None, &config), PathBuf::from("/from/config.json"));
    }

    #[test]
    fn default_path_ends_with_rules_file() {
        let path = resolve_state_path(None, &RulemaskConfig::default());
        assert!(path.ends_with("rules.json") || path.ends_with("rulemask_rules.json"));
    }
}
