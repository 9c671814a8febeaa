// rulemask-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use rulemask_core::config::{EmptyReplacement, EngineOptions, RulemaskConfig};

#[test]
fn test_default_settings() {
    let config = RulemaskConfig::default();
    assert_eq!(config.engine.default_token, "[REDACTED]");
    assert_eq!(config.engine.empty_replacement, EmptyReplacement::Sentinel);
    assert!(config.state_file.is_none());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
engine:
  default_token: "<hidden>"
  empty_replacement: delete
state_file: /tmp/rulemask-test/rules.json
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RulemaskConfig::load_from_file(file.path())?;
    assert_eq!(config.engine.default_token, "<hidden>");
    assert_eq!(config.engine.empty_replacement, EmptyReplacement::Delete);
    assert_eq!(
        config.state_file.as_deref(),
        Some(std::path::Path::new("/tmp/rulemask-test/rules.json"))
    );
    Ok(())
}

#[test]
fn test_load_from_file_partial_engine_section() -> Result<()> {
    let yaml_content = r#"
engine:
  default_token: "***"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RulemaskConfig::load_from_file(file.path())?;
    // empty_replacement is omitted, so it should default to Sentinel
    assert_eq!(config.engine, EngineOptions::default().with_default_token("***"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_bad_policy() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"engine:\n  empty_replacement: shred\n")?;
    let err = RulemaskConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = RulemaskConfig::load_from_file("/definitely/not/here/config.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
