// rulemask/src/commands/mod.rs
//! Command implementations and the state they share.

pub mod apply;
pub mod presets;
pub mod rules;

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;

use rulemask_core::{RuleStore, RulemaskConfig};

use crate::cli::{Cli, Commands};
use crate::ui::output_format;
use crate::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use crate::utils::state_path::{open_store, resolve_state_path};

/// Settings, theme and rules file location resolved from the global flags.
#[derive(Debug)]
pub struct AppContext {
    pub config: RulemaskConfig,
    pub state_path: PathBuf,
    pub theme: ThemeMap,
    pub quiet: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => RulemaskConfig::load_from_file(path)?,
            None => RulemaskConfig::load_default()?,
        };
        let theme = build_theme_map(cli.theme.as_deref())?;
        let state_path = resolve_state_path(cli.state.as_deref(), &config);
        Ok(Self { config, state_path, theme, quiet: cli.quiet })
    }

    pub fn open_store(&self) -> RuleStore {
        open_store(&self.state_path)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            info_msg(msg, &self.theme);
        }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            let _ = output_format::print_success_message(
                &mut io::stderr(),
                msg.as_ref(),
                &self.theme,
                io::stderr().is_terminal(),
            );
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        warn_msg(msg, &self.theme);
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Runs the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    match cli.command {
        Commands::Apply(args) => apply::run_apply_command(&ctx, args),
        Commands::Rules(cmd) => rules::run_rules_command(&ctx, cmd),
        Commands::Presets(cmd) => presets::run_presets_command(&ctx, cmd),
    }
}

/// Prints a top-level error with the default theme.
pub fn report_error(err: &anyhow::Error) {
    error_msg(format!("{:#}", err), &ThemeStyle::default_theme_map());
}
