//! Styled status messages written to the terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Writes `text` in the colour of `entry` when `supports_color` is set.
pub fn write_styled<W: Write + ?Sized>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    match color_for(theme_map, entry) {
        Some(color) if supports_color => write!(writer, "{}", text.color(color)),
        _ => write!(writer, "{}", text),
    }
}

fn print_prefixed<W: Write + ?Sized>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_styled(writer, &format!("{}{}", prefix, message), entry, theme_map, supports_color)?;
    writeln!(writer)
}

pub fn print_info_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_prefixed(writer, "", message, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_prefixed(writer, "", message, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", message, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write + ?Sized>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Error: ", message, ThemeEntry::Error, theme_map, supports_color)
}
