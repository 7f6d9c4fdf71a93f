//! # Rendering
//!
//! Terminal output for listings, generated keys and command messages.
//! Everything renders to a `String` first so layout can be tested without a
//! terminal; color is applied only when stdout is one.
//!
//! Layout (width, truncation, padding) is computed on display width with
//! `unicode-width`, so wide titles line up with the rank and time columns.

use boardrank::api::{CmdMessage, MessageLevel};
use boardrank::index::DisplayRecord;
use boardrank::model::RecordKind;
use boardrank::rank::OrderKey;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const RANK_WIDTH: usize = 8;
const INDENT: &str = "  ";

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders records as an indented tree, one per line.
pub fn render_record_list(records: &[DisplayRecord]) -> String {
    render_record_list_internal(records, use_color())
}

fn render_record_list_internal(records: &[DisplayRecord], color: bool) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let top = records
        .iter()
        .map(|dr| dr.path.depth())
        .min()
        .unwrap_or(1);

    let mut output = String::new();
    for (i, dr) in records.iter().enumerate() {
        let level = dr.path.depth() - top;
        if i > 0 && level == 0 && dr.record.kind == RecordKind::Board {
            output.push('\n');
        }

        let prefix = format!("{}{}{}. ", INDENT, INDENT.repeat(level), dr.path);
        let rank = format!(" {:>width$}", dr.record.rank.as_str(), width = RANK_WIDTH);
        let time_ago = format_time_ago(dr.record.created_at);

        let fixed = prefix.width() + rank.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&dr.record.title, available);
        let padding = available.saturating_sub(title.width());

        let title = match dr.record.kind {
            RecordKind::Board => paint(&title, color, |s| s.bold()),
            RecordKind::List => paint(&title, color, |s| s.cyan()),
            RecordKind::Card => title,
        };

        output.push_str(&format!(
            "{}{}{}{}{}\n",
            paint(&prefix, color, |s| s.yellow()),
            title,
            " ".repeat(padding),
            paint(&rank, color, |s| s.dimmed()),
            paint(&time_ago, color, |s| s.dimmed()),
        ));
    }
    output
}

/// Renders generated keys, one per line.
pub fn render_keys(keys: &[OrderKey]) -> String {
    keys.iter().map(|k| format!("{}\n", k)).collect()
}

/// Renders `key = value` lines.
pub fn render_entries(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], color: bool) -> String {
    messages
        .iter()
        .map(|msg| {
            let line = match msg.level {
                MessageLevel::Info => paint(&msg.content, color, |s| s.dimmed()),
                MessageLevel::Success => paint(&msg.content, color, |s| s.green()),
                MessageLevel::Warning => paint(&msg.content, color, |s| s.yellow()),
            };
            format!("{}\n", line)
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
