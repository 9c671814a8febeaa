// rulemask/src/utils/prompt.rs
//! y/N confirmation for operations that discard the current rule list.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Asks `question` on `output` and reads one line from `input`.
///
/// Only `y` or `yes` (any case) confirm. End of input counts as no.
pub fn confirm_with<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{} (y/N): ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).context("Failed to read confirmation input.")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Builds the `confirm` callback the core's bulk loaders take.
///
/// With `assume_yes` the prompt is skipped. A failed read is treated as a refusal.
pub fn replace_prompt(assume_yes: bool, action: &str) -> impl FnOnce(usize) -> bool + '_ {
    move |existing| {
        if assume_yes {
            return true;
        }
        let question = format!("{} will discard your {} current rule(s). Continue?", action, existing);
        let stdin = io::stdin();
        confirm_with(&question, &mut stdin.lock(), &mut io::stderr()).unwrap_or_else(|e| {
            log::warn!("{}", e);
            false
        })
    }
}
