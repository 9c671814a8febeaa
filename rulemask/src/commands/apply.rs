//! `rulemask apply`: redact text with the stored rules, a rules file or a preset.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use rulemask_core::{
    load_preset_by_name, parse_rules, EmptyReplacement, EngineOptions, MatchReport, RedactionEngine, RedactionRule,
    RuleFileFormat, RulemaskError, SequentialEngine,
};

use crate::cli::ApplyCommand;
use crate::commands::AppContext;
use crate::ui::theme::ThemeMap;
use crate::ui::{diff_viewer, mapping_summary};
use crate::utils::clipboard::copy_to_clipboard;

/// Options for a single redaction run.
pub struct ApplyOptions {
    pub input: String,
    pub clipboard: bool,
    pub diff: bool,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Where the rules for this run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    Stored,
    File(PathBuf),
    Preset(String),
}

impl RuleSource {
    fn from_args(args: &ApplyCommand) -> Self {
        if let Some(path) = &args.rules {
            RuleSource::File(path.clone())
        } else if let Some(name) = &args.preset {
            RuleSource::Preset(name.clone())
        } else {
            RuleSource::Stored
        }
    }
}

pub fn run_apply_command(ctx: &AppContext, args: ApplyCommand) -> Result<()> {
    let rules = load_rules(ctx, &RuleSource::from_args(&args))?;
    let options = engine_options(&ctx.config.engine, args.token.as_deref(), args.delete_empty);
    let engine = SequentialEngine::with_options(options);

    let input = read_input(args.input_file.as_deref())?;
    let opts = ApplyOptions {
        input,
        clipboard: args.clipboard,
        diff: args.diff,
        output_path: args.output,
        no_summary: args.no_summary,
        quiet: ctx.quiet,
    };
    run_apply_opts(&engine, &rules, opts, ctx)
}

/// Settings-file options with the command-line overrides applied.
pub fn engine_options(base: &EngineOptions, token: Option<&str>, delete_empty: bool) -> EngineOptions {
    let mut options = base.clone();
    if let Some(token) = token {
        options = options.with_default_token(token);
    }
    if delete_empty {
        options = options.with_empty_replacement(EmptyReplacement::Delete);
    }
    options
}

fn load_rules(ctx: &AppContext, source: &RuleSource) -> Result<Vec<RedactionRule>> {
    match source {
        RuleSource::Stored => Ok(ctx.open_store().rules().to_vec()),
        RuleSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
            let rules = parse_rules(&text, RuleFileFormat::from_path(path))
                .with_context(|| format!("Failed to load rules from {}", path.display()))?;
            debug!("Loaded {} rule(s) from {}", rules.len(), path.display());
            Ok(rules)
        }
        RuleSource::Preset(name) => {
            let preset = load_preset_by_name(name).with_context(|| format!("Failed to load preset '{}'", name))?;
            Ok(preset.instantiate())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Runs the engine and writes the results.
///
/// When nothing matched, the input is written through unchanged and a warning is
/// shown; the run still succeeds.
pub fn run_apply_opts(
    engine: &dyn RedactionEngine,
    rules: &[RedactionRule],
    opts: ApplyOptions,
    ctx: &AppContext,
) -> Result<()> {
    info!("Starting redaction run with {} rule(s).", rules.len());

    let (redacted, mappings) = match engine.apply(&opts.input, rules) {
        Ok(outcome) => (outcome.output, outcome.mappings),
        Err(RulemaskError::NoMatches) => {
            ctx.warn(RulemaskError::NoMatches.to_string());
            (opts.input.clone(), Vec::new())
        }
        Err(e) => return Err(e.into()),
    };

    debug!(
        "Content redacted. Original length: {}, redacted length: {}",
        opts.input.len(),
        redacted.len()
    );

    handle_primary_output(&opts, &redacted, ctx)?;

    if opts.clipboard {
        handle_clipboard_output(&redacted, ctx);
    }

    if !mappings.is_empty() {
        handle_mapping_summary(&mappings, &opts, &ctx.theme)?;
    }

    info!("Redaction run completed.");
    Ok(())
}

fn handle_primary_output(opts: &ApplyOptions, redacted: &str, ctx: &AppContext) -> Result<()> {
    if let Some(path) = &opts.output_path {
        ctx.info(format!("Writing redacted content to file: {}", path.display()));
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.diff {
            diff_viewer::print_diff(&opts.input, redacted, &mut file, &ctx.theme, false)?;
        } else {
            file.write_all(redacted.as_bytes())?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        if opts.diff {
            diff_viewer::print_diff(&opts.input, redacted, &mut writer, &ctx.theme, supports_color)?;
        } else {
            writer.write_all(redacted.as_bytes())?;
            if !redacted.ends_with('\n') {
                writeln!(writer)?;
            }
        }
        writer.flush()?;
    }
    Ok(())
}

fn handle_clipboard_output(redacted: &str, ctx: &AppContext) {
    match copy_to_clipboard(redacted) {
        Ok(()) => ctx.info("Redacted content copied to clipboard successfully."),
        Err(e) => ctx.warn(format!("Failed to copy to clipboard: {:#}", e)),
    }
}

fn handle_mapping_summary(mappings: &[MatchReport], opts: &ApplyOptions, theme: &ThemeMap) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        mapping_summary::print_summary(mappings, &mut io::stderr(), theme, stderr_supports_color)?;
    }
    Ok(())
}
