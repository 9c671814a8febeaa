// rulemask-core/tests/preset_tests.rs
use anyhow::Result;
use std::fs;
use tempfile::tempdir;

use rulemask_core::presets::*;
use rulemask_core::{
    LoadOutcome, MemoryPersistence, RedactionEngine, RuleDefinition, RuleStore, SequentialEngine,
};

#[test]
fn test_load_preset_into_empty_store_without_asking() -> Result<()> {
    let catalogue = PresetCatalogue::builtin()?;
    let mut store = RuleStore::new();

    let outcome = load_preset(&mut store, catalogue.get("corporate").unwrap(), |_| {
        panic!("empty store must not ask for confirmation")
    });

    assert_eq!(outcome, LoadOutcome::Replaced { count: 4 });
    assert_eq!(store.rules()[2].original, "CEO");
    assert_eq!(store.next_id(), 4);
    Ok(())
}

#[test]
fn test_load_preset_cancelled_keeps_rules() -> Result<()> {
    let catalogue = PresetCatalogue::builtin()?;
    let mut store = RuleStore::new();
    store.add(RuleDefinition::new("keep", "me"));

    let outcome = load_preset(&mut store, catalogue.get("financial").unwrap(), |n| {
        assert_eq!(n, 1);
        false
    });

    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert_eq!(store.len(), 1);
    assert_eq!(store.rules()[0].original, "keep");
    Ok(())
}

#[test]
fn test_load_preset_confirmed_replaces_and_persists() -> Result<()> {
    let catalogue = PresetCatalogue::builtin()?;
    let persistence = MemoryPersistence::new();
    let mut store = RuleStore::with_persistence(Box::new(persistence.clone()));
    for i in 0..6 {
        store.add(RuleDefinition::new(format!("r{}", i), ""));
    }

    let outcome = load_preset(&mut store, catalogue.get("personal").unwrap(), |_| true);

    assert_eq!(outcome, LoadOutcome::Replaced { count: 4 });
    assert_eq!(store.rules().iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(store.next_id(), 4);
    assert_eq!(persistence.snapshot(), store.rules().to_vec());
    Ok(())
}

#[test]
fn test_corporate_preset_end_to_end() -> Result<()> {
    let catalogue = PresetCatalogue::builtin()?;
    let rules = catalogue.get("corporate").unwrap().instantiate();
    let engine = SequentialEngine::new();

    let outcome = engine.apply(
        "MiscellaneousCorp's CEO presented Project Phoenix; the CEOs of Q4 agreed.",
        &rules,
    )?;

    assert_eq!(
        outcome.output,
        "AnonymousCorp's CFO presented Project Parakeet; the CEOs of Period Four agreed."
    );
    let ceo = outcome.mappings.iter().find(|m| m.original == "CEO").unwrap();
    assert_eq!(ceo.count, 1);
    Ok(())
}

#[test]
fn test_financial_preset_end_to_end() -> Result<()> {
    let catalogue = PresetCatalogue::builtin()?;
    let rules = catalogue.get("financial").unwrap().instantiate();
    let engine = SequentialEngine::new();

    let outcome = engine.apply("Budget: $500 USD, Account #1234", &rules)?;

    assert_eq!(outcome.output, "Amount: £500 CURRENCY, Acct #1234");
    assert_eq!(outcome.mappings.len(), 4);
    Ok(())
}

#[test]
fn test_load_preset_file_from_path() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("legal.yaml");
    fs::write(
        &path,
        r#"
name: legal
description: Case names
rules:
  - original: Smith v. Jones
    replacement: "[CASE]"
  - original: plaintiff
    replacement: party
    caseSensitive: true
"#,
    )?;

    let preset = load_preset_by_name(path.to_str().unwrap())?;

    assert_eq!(preset.name, "legal");
    assert_eq!(preset.rules.len(), 2);
    // wholeWord is omitted, so definitions default to whole-word matching
    assert!(preset.rules[0].whole_word);
    assert!(preset.rules[1].case_sensitive);
    Ok(())
}

#[test]
fn test_load_preset_file_without_rules_fails_validation() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "name: empty\nrules: []\n")?;

    let err = load_preset_file(&path).unwrap_err();
    assert!(err.to_string().contains("defines no rules"));
    Ok(())
}

#[test]
fn test_builtin_name_wins_over_files() -> Result<()> {
    let preset = load_preset_by_name("financial")?;
    assert_eq!(preset.rules[0].original, "$");
    Ok(())
}

#[test]
fn test_list_available_presets_includes_builtins() {
    let listed = list_available_presets();
    for name in ["corporate", "personal", "financial"] {
        let summary = listed.iter().find(|p| p.name == name).unwrap();
        assert_eq!(summary.rule_count, 4);
        assert!(summary.path.is_none());
    }
}

#[test]
fn test_candidate_paths_end_with_yaml_name() {
    for path in preset_candidate_paths("team") {
        assert!(path.ends_with("team.yaml"));
    }
}
