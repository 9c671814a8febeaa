//! `rulemask presets ...`

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::{self, Write};

use rulemask_core::{list_available_presets, load_preset, load_preset_by_name, LoadOutcome, PresetSummary};

use crate::cli::PresetsCommand;
use crate::commands::AppContext;
use crate::utils::prompt::replace_prompt;

pub fn run_presets_command(ctx: &AppContext, cmd: PresetsCommand) -> Result<()> {
    match cmd {
        PresetsCommand::List => {
            let table = presets_table(&list_available_presets());
            writeln!(io::stdout().lock(), "{}", table)?;
            Ok(())
        }
        PresetsCommand::Load { name, yes } => {
            let preset = load_preset_by_name(&name).with_context(|| format!("Failed to load preset '{}'", name))?;
            let mut store = ctx.open_store();
            let action = format!("Loading preset '{}'", preset.name);
            match load_preset(&mut store, &preset, replace_prompt(yes, &action)) {
                LoadOutcome::Replaced { count } => {
                    ctx.success(format!("Loaded preset '{}' ({} rule(s)).", preset.name, count))
                }
                LoadOutcome::Cancelled => ctx.info("Cancelled; rules left unchanged."),
            }
            Ok(())
        }
    }
}

pub fn presets_table(presets: &[PresetSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Rules", "Description", "Source"]);
    for preset in presets {
        let source = match &preset.path {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        };
        table.add_row(vec![
            preset.name.clone(),
            preset.rule_count.to_string(),
            preset.description.clone().unwrap_or_default(),
            source,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_are_listed() {
        let rendered = presets_table(&list_available_presets()).to_string();
        for name in ["corporate", "personal", "financial"] {
            assert!(rendered.contains(name), "missing {}", name);
        }
        assert!(rendered.contains("built-in"));
    }
}
