// rulemask/src/cli.rs
//! This file defines the command-line interface (CLI) for the rulemask application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rulemask",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact text with an ordered list of find/replace rules",
    long_about = "rulemask applies a saved, ordered list of literal find/replace rules to a block of text. Each rule can be case sensitive and can require whole-word matches. Rules run one after another, so a later rule sees the text as left by the earlier ones. A summary of which rules matched, and how often, is printed after every run.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a YAML settings file.")]
    pub config: Option<PathBuf>,

    /// Where the rule list is saved between runs.
    #[arg(long = "state", value_name = "FILE", env = "RULEMASK_STATE_FILE", global = true, help = "Where the rule list is saved between runs.")]
    pub state: Option<PathBuf>,

    /// Path to a YAML colour theme.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Path to a YAML colour theme.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rulemask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies the rules to an input file or stdin.
    #[command(about = "Applies the rules to an input file or stdin.")]
    Apply(ApplyCommand),

    /// Manages the saved rule list.
    #[command(subcommand, about = "Manages the saved rule list.")]
    Rules(RulesCommand),

    /// Lists and loads rule presets.
    #[command(subcommand, about = "Lists and loads rule presets.")]
    Presets(PresetsCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Use the rules in this file for this run instead of the saved list.
    #[arg(long = "rules", value_name = "FILE", conflicts_with = "preset", help = "Use the rules in this file for this run instead of the saved list.")]
    pub rules: Option<PathBuf>,

    /// Use a preset for this run instead of the saved list.
    #[arg(long = "preset", value_name = "NAME", help = "Use a preset (name or YAML path) for this run instead of the saved list.")]
    pub preset: Option<String>,

    /// Copy redacted output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy redacted output to the system clipboard.")]
    pub clipboard: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the mapping summary.
    #[arg(long = "no-summary", help = "Suppress the mapping summary.")]
    pub no_summary: bool,

    /// Text substituted for matches of rules without a replacement.
    #[arg(long = "token", value_name = "TEXT", help = "Text substituted for matches of rules without a replacement.")]
    pub token: Option<String>,

    /// Delete matches of rules without a replacement instead of inserting the token.
    #[arg(long = "delete-empty", help = "Delete matches of rules without a replacement instead of inserting the token.")]
    pub delete_empty: bool,
}

/// Subcommands for the `rules` command.
#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    #[command(about = "Lists the saved rules in application order.")]
    List {
        /// Print the rules as JSON.
        #[arg(long, help = "Print the rules as JSON.")]
        json: bool,
    },
    #[command(about = "Appends a new rule.")]
    Add {
        /// The literal text to find.
        #[arg(value_name = "FIND")]
        find: String,
        /// The replacement text (the redaction token if omitted).
        #[arg(value_name = "REPLACE", default_value = "")]
        replace: String,
        /// Match letter case exactly.
        #[arg(long = "case-sensitive")]
        case_sensitive: bool,
        /// Also match inside longer words.
        #[arg(long = "partial")]
        partial: bool,
    },
    #[command(about = "Edits fields of an existing rule.")]
    Update {
        #[arg(value_name = "ID")]
        id: u64,
        #[arg(long, value_name = "TEXT")]
        find: Option<String>,
        #[arg(long, value_name = "TEXT")]
        replace: Option<String>,
        #[arg(long = "case-sensitive", value_name = "BOOL")]
        case_sensitive: Option<bool>,
        #[arg(long = "whole-word", value_name = "BOOL")]
        whole_word: Option<bool>,
    },
    #[command(about = "Removes a rule by id.")]
    Remove {
        #[arg(value_name = "ID")]
        id: u64,
    },
    #[command(about = "Removes every rule.")]
    Clear {
        /// Proceed without confirmation.
        #[arg(long, short = 'y', help = "Proceed without a confirmation prompt.")]
        yes: bool,
    },
    #[command(about = "Writes the rules to a file.")]
    Export {
        /// Output path. Defaults to a timestamped file in the current directory.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
        /// Write YAML instead of JSON (when no output path decides the format).
        #[arg(long)]
        yaml: bool,
    },
    #[command(about = "Replaces the rules with the contents of a JSON or YAML file.")]
    Import {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Proceed without confirmation.
        #[arg(long, short = 'y', help = "Proceed without a confirmation prompt.")]
        yes: bool,
    },
}

/// Subcommands for the `presets` command.
#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    #[command(about = "Lists built-in and user presets.")]
    List,
    #[command(about = "Replaces the rules with a preset.")]
    Load {
        /// A built-in preset name, a user preset name, or a YAML file path.
        #[arg(value_name = "NAME")]
        name: String,
        /// Proceed without confirmation.
        #[arg(long, short = 'y', help = "Proceed without a confirmation prompt.")]
        yes: bool,
    },
}
