//! `rulemask rules ...`: edit, list, export and import the saved rule list.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rulemask_core::{
    export_file_name, export_rules, import_rules, LoadOutcome, RuleDefinition, RuleFileFormat, RuleStore, RuleUpdate,
};

use crate::cli::RulesCommand;
use crate::commands::AppContext;
use crate::ui::mapping_summary::rules_table;
use crate::utils::prompt::replace_prompt;

pub fn run_rules_command(ctx: &AppContext, cmd: RulesCommand) -> Result<()> {
    let mut store = ctx.open_store();
    match cmd {
        RulesCommand::List { json } => list(ctx, &store, json),
        RulesCommand::Add { find, replace, case_sensitive, partial } => {
            let definition = RuleDefinition::new(find, replace)
                .case_sensitive(case_sensitive)
                .whole_word(!partial);
            let rule = store.add(definition);
            if rule.is_inert() {
                ctx.warn(format!("Rule {} has no text to find and will be skipped until edited.", rule.id));
            }
            ctx.success(format!("Added rule {}.", rule.id));
            Ok(())
        }
        RulesCommand::Update { id, find, replace, case_sensitive, whole_word } => {
            let update = RuleUpdate { original: find, replacement: replace, case_sensitive, whole_word };
            if update.is_empty() {
                bail!("Nothing to update; pass at least one of --find, --replace, --case-sensitive, --whole-word.");
            }
            if store.update(id, update) {
                ctx.success(format!("Updated rule {}.", id));
            } else {
                ctx.warn(format!("No rule with id {}; nothing updated.", id));
            }
            Ok(())
        }
        RulesCommand::Remove { id } => {
            if store.remove(id) {
                ctx.success(format!("Removed rule {}.", id));
            } else {
                ctx.warn(format!("No rule with id {}; nothing removed.", id));
            }
            Ok(())
        }
        RulesCommand::Clear { yes } => {
            if store.is_empty() {
                ctx.info("No rules to clear.");
                return Ok(());
            }
            if !store.confirm_replace(replace_prompt(yes, "Clearing")) {
                ctx.info("Cancelled; rules left unchanged.");
                return Ok(());
            }
            store.clear();
            ctx.success("All rules removed.");
            Ok(())
        }
        RulesCommand::Export { output, yaml } => export(ctx, &store, output, yaml),
        RulesCommand::Import { path, yes } => import(ctx, &mut store, &path, yes),
    }
}

fn list(ctx: &AppContext, store: &RuleStore, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let text = serde_json::to_string_pretty(store.rules()).context("Failed to serialize rules")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }
    if store.is_empty() {
        ctx.info("No rules defined. Add one with `rulemask rules add <FIND> [REPLACE]`.");
        return Ok(());
    }
    let table = rules_table(store.rules(), &ctx.config.engine, &ctx.theme, stdout.is_terminal());
    writeln!(out, "{}", table)?;
    Ok(())
}

/// The format and destination for `rules export`.
///
/// An explicit path decides the format by its extension; otherwise `--yaml`
/// picks YAML and the file gets a timestamped name in the current directory.
pub fn export_target(output: Option<PathBuf>, yaml: bool) -> (PathBuf, RuleFileFormat) {
    match output {
        Some(path) => {
            let format = RuleFileFormat::from_path(&path);
            (path, format)
        }
        None => {
            let format = if yaml { RuleFileFormat::Yaml } else { RuleFileFormat::Json };
            (PathBuf::from(export_file_name(Utc::now(), format)), format)
        }
    }
}

fn export(ctx: &AppContext, store: &RuleStore, output: Option<PathBuf>, yaml: bool) -> Result<()> {
    let (path, format) = export_target(output, yaml);
    let text = export_rules(store.rules(), format)?;
    fs::write(&path, text).with_context(|| format!("Failed to write rules file: {}", path.display()))?;
    ctx.success(format!("Exported {} rule(s) to {}", store.len(), path.display()));
    Ok(())
}

fn import(ctx: &AppContext, store: &mut RuleStore, path: &Path, yes: bool) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let action = format!("Importing {}", path.display());
    match import_rules(store, &text, RuleFileFormat::from_path(path), replace_prompt(yes, &action))? {
        LoadOutcome::Replaced { count } => ctx.success(format!("Imported {} rule(s) from {}", count, path.display())),
        LoadOutcome::Cancelled => ctx.info("Import cancelled; rules left unchanged."),
    }
    Ok(())
}
