//! The "what was replaced" summary printed after a redaction run, and the
//! rule listing used by `rules list`.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use rulemask_core::{EngineOptions, MatchReport, RedactionRule};

use crate::ui::output_format::write_styled;
use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// One summary line per rule that matched: `original → replacement (n match/matches)`.
pub fn format_mapping_line(report: &MatchReport) -> String {
    format!(
        "{} \u{2192} {} ({} {})",
        report.original,
        report.replacement,
        report.count,
        report.noun()
    )
}

/// Prints the mapping summary in rule order.
pub fn print_summary<W: Write + ?Sized>(
    mappings: &[MatchReport],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_styled(writer, "Redaction Summary:", ThemeEntry::Header, theme_map, supports_color)?;
    writeln!(writer)?;

    for report in mappings {
        write!(writer, "  ")?;
        if supports_color {
            write_styled(writer, &report.original, ThemeEntry::SummaryRuleName, theme_map, true)?;
            write!(writer, " \u{2192} ")?;
            write_styled(writer, &report.replacement, ThemeEntry::RedactedText, theme_map, true)?;
            write_styled(
                writer,
                &format!(" ({} {})", report.count, report.noun()),
                ThemeEntry::SummaryOccurrences,
                theme_map,
                true,
            )?;
        } else {
            write!(writer, "{}", format_mapping_line(report))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// What the "Replace with" column shows for `rule`.
///
/// An empty replacement is shown in parentheses as whatever `options` resolves
/// it to, or `(deleted)` when matches are removed.
pub fn replacement_label(rule: &RedactionRule, options: &EngineOptions) -> String {
    if !rule.replacement.is_empty() {
        return rule.replacement.clone();
    }
    match options.resolve_replacement(rule) {
        "" => "(deleted)".to_string(),
        token => format!("({})", token),
    }
}

/// Renders the stored rules as a table.
pub fn rules_table(rules: &[RedactionRule], options: &EngineOptions, theme_map: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Find", "Replace with", "Case sensitive", "Whole word"]);

    for rule in rules {
        let replacement = replacement_label(rule, options);
        let replacement_cell = match color_for(theme_map, ThemeEntry::RedactedText) {
            Some(color) if supports_color => Cell::new(replacement.color(color).to_string()),
            _ => Cell::new(replacement),
        };
        table.add_row(vec![
            Cell::new(rule.id),
            Cell::new(&rule.original),
            replacement_cell,
            Cell::new(yes_no(rule.case_sensitive)),
            Cell::new(yes_no(rule.whole_word)),
        ]);
    }
    table
}
