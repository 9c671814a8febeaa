// rulemask/tests/rules_command_tests.rs
//! Command-line tests for `rulemask rules ...` and `rulemask presets ...`.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use test_log::test;

use rulemask_core::RedactionRule;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Result<Self> {
        Ok(Self { dir: tempdir()? })
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn state_file(&self) -> PathBuf {
        self.path().join("rules.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rulemask").unwrap();
        cmd.current_dir(self.path())
            .env("RULEMASK_STATE_FILE", self.state_file())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env_remove("RUST_LOG");
        cmd
    }

    fn rules(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd().arg("rules").args(args).assert()
    }

    fn listed(&self) -> Result<Vec<RedactionRule>> {
        let output = self.cmd().args(["rules", "list", "--json"]).output()?;
        assert!(output.status.success());
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

fn ids(rules: &[RedactionRule]) -> Vec<u64> {
    rules.iter().map(|r| r.id).collect()
}

#[test]
fn test_add_assigns_ids_and_persists() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "MiscellaneousCorp", "AnonymousCorp"]).success().stderr(predicate::str::contains("Added rule 0."));
    sandbox.rules(&["add", "555-", "000-", "--partial", "--case-sensitive"]).success();

    let rules = sandbox.listed()?;
    assert_eq!(ids(&rules), vec![0, 1]);
    assert!(rules[0].whole_word);
    assert!(!rules[0].case_sensitive);
    assert!(!rules[1].whole_word);
    assert!(rules[1].case_sensitive);

    let on_disk = fs::read_to_string(sandbox.state_file())?;
    assert!(on_disk.contains("\"wholeWord\""));
    Ok(())
}

#[test]
fn test_removed_ids_are_not_reused() -> Result<()> {
    let sandbox = Sandbox::new()?;
    for word in ["a", "b", "c", "d"] {
        sandbox.rules(&["add", word]).success();
    }
    sandbox.rules(&["remove", "2"]).success();
    sandbox.rules(&["add", "e"]).success().stderr(predicate::str::contains("Added rule 4."));

    assert_eq!(ids(&sandbox.listed()?), vec![0, 1, 3, 4]);
    Ok(())
}

#[test]
fn test_remove_unknown_id_warns() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "keep"]).success();
    sandbox
        .rules(&["remove", "7"])
        .success()
        .stderr(predicate::str::contains("No rule with id 7; nothing removed."));
    assert_eq!(ids(&sandbox.listed()?), vec![0]);
    Ok(())
}

#[test]
fn test_update_edits_fields() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "ceo", "cfo"]).success();
    sandbox
        .rules(&["update", "0", "--find", "CEO", "--case-sensitive", "true", "--whole-word", "false"])
        .success();

    let rules = sandbox.listed()?;
    assert_eq!(rules[0].original, "CEO");
    assert_eq!(rules[0].replacement, "cfo");
    assert!(rules[0].case_sensitive);
    assert!(!rules[0].whole_word);

    sandbox.rules(&["update", "0"]).failure().stderr(predicate::str::contains("Nothing to update"));
    sandbox
        .rules(&["update", "9", "--replace", "x"])
        .success()
        .stderr(predicate::str::contains("No rule with id 9; nothing updated."));
    assert_eq!(sandbox.listed()?[0].replacement, "cfo");
    Ok(())
}

#[test]
fn test_list_table_and_empty_list() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["list"]).success().stdout("").stderr(predicate::str::contains("No rules defined."));

    sandbox.rules(&["add", "secret"]).success();
    sandbox
        .rules(&["list"])
        .success()
        .stdout(predicate::str::contains("secret").and(predicate::str::contains("([REDACTED])")));
    Ok(())
}

#[test]
fn test_list_shows_deleted_under_delete_policy() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let config = sandbox.path().join("settings.yaml");
    fs::write(&config, "engine:\n  empty_replacement: delete\n")?;
    sandbox.rules(&["add", "secret"]).success();

    sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(deleted)").and(predicate::str::contains("[REDACTED]").not()));
    Ok(())
}

#[test]
fn test_clear_requires_confirmation() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "a"]).success();
    sandbox.rules(&["add", "b"]).success();

    sandbox
        .cmd()
        .args(["rules", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("discard your 2 current rule(s)"));
    assert_eq!(sandbox.listed()?.len(), 2);

    sandbox.cmd().args(["rules", "clear"]).write_stdin("y\n").assert().success();
    assert!(sandbox.listed()?.is_empty());

    sandbox.rules(&["add", "c"]).success().stderr(predicate::str::contains("Added rule 0."));
    Ok(())
}

#[test]
fn test_export_and_import_round_trip() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "Q4", "Period Four"]).success();
    sandbox.rules(&["add", "USD", "CURRENCY", "--case-sensitive"]).success();
    let before = sandbox.listed()?;

    let exported = sandbox.path().join("backup.yaml");
    sandbox
        .cmd()
        .args(["rules", "export", "-o"])
        .arg(&exported)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 2 rule(s)"));
    assert!(fs::read_to_string(&exported)?.contains("caseSensitive: true"));

    sandbox.cmd().args(["rules", "clear", "-y"]).assert().success();
    sandbox.cmd().args(["rules", "import"]).arg(&exported).assert().success();

    assert_eq!(sandbox.listed()?, before);
    sandbox.rules(&["add", "next"]).success().stderr(predicate::str::contains("Added rule 2."));
    Ok(())
}

#[test]
fn test_export_default_name_in_current_directory() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "x"]).success();
    sandbox.rules(&["export"]).success();

    let names: Vec<String> = fs::read_dir(sandbox.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with("rulemask-rules-"))
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with(".json"));
    Ok(())
}

#[test]
fn test_export_empty_list_fails() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["export", "-o", "out.json"]).failure().stderr(predicate::str::contains("No rules to export."));
    assert!(!sandbox.path().join("out.json").exists());
    Ok(())
}

#[test]
fn test_import_non_list_is_rejected() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "keep"]).success();
    let bad = sandbox.path().join("bad.json");
    fs::write(&bad, r#"{"original": "x", "replacement": "y"}"#)?;

    sandbox
        .cmd()
        .args(["rules", "import", "-y"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rules file format"));

    let rules = sandbox.listed()?;
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].original, "keep");
    Ok(())
}

#[test]
fn test_import_cancelled_keeps_rules() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.rules(&["add", "keep"]).success();
    let file = sandbox.path().join("other.json");
    fs::write(&file, r#"[{"id": 5, "original": "other", "replacement": "", "caseSensitive": false, "wholeWord": true}]"#)?;

    sandbox
        .cmd()
        .args(["rules", "import"])
        .arg(&file)
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Import cancelled"));
    assert_eq!(sandbox.listed()?[0].original, "keep");
    Ok(())
}

#[test]
fn test_presets_list_shows_builtins() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox
        .cmd()
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("corporate")
                .and(predicate::str::contains("personal"))
                .and(predicate::str::contains("financial")),
        );
    Ok(())
}

#[test]
fn test_presets_list_includes_user_preset() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let dir = sandbox.path().join("presets");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("legal.yaml"),
        "name: legal\ndescription: Case names\nrules:\n  - original: Plaintiff\n    replacement: Party A\n",
    )?;

    sandbox.cmd().args(["presets", "list"]).assert().success().stdout(predicate::str::contains("legal"));
    sandbox.cmd().args(["presets", "load", "legal"]).assert().success();
    assert_eq!(sandbox.listed()?[0].replacement, "Party A");
    Ok(())
}

#[test]
fn test_presets_load_replaces_rules_after_confirmation() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.cmd().args(["presets", "load", "financial"]).assert().success();

    let rules = sandbox.listed()?;
    assert_eq!(ids(&rules), vec![0, 1, 2, 3]);
    assert_eq!(rules[0].original, "$");

    sandbox
        .cmd()
        .args(["presets", "load", "corporate"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded preset 'corporate' (4 rule(s))."));
    assert_eq!(sandbox.listed()?[0].original, "MiscellaneousCorp");

    sandbox.rules(&["add", "extra"]).success().stderr(predicate::str::contains("Added rule 4."));
    Ok(())
}

#[test]
fn test_presets_load_unknown_name_fails() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox
        .cmd()
        .args(["presets", "load", "medical", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset 'medical' not found"));
    Ok(())
}
