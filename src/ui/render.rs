//! Builds the text tables shown by the CLI commands. The core supplies
//! records; all formatting decisions live here.

use crate::models::entry::Entry;
use crate::models::summary::{ContextSummary, MajorEntry};
use crate::utils::colors::colorize_flag;
use crate::utils::formatting::fmt_float;
use crate::utils::table::Table;

/// Raw sheet rows, in sheet column order.
pub fn entries_table(entries: &[Entry]) -> String {
    let mut table = Table::new(&[
        "description",
        "start_time",
        "context",
        "is_finish",
        "is_minor",
    ]);
    for e in entries {
        table.add_row(vec![
            e.description.clone(),
            e.time_str(),
            e.context.clone(),
            colorize_flag(e.is_finish),
            colorize_flag(e.is_minor),
        ]);
    }
    table.render()
}

/// One row per major entry with original and adjusted time.
pub fn majors_table(majors: &[MajorEntry]) -> String {
    let mut table = Table::new(&[
        "description",
        "original_minutes",
        "minutes",
        "hours",
        "context",
    ]);
    for m in majors {
        table.add_row(vec![
            m.description.clone(),
            m.original_minutes.to_string(),
            fmt_float(m.minutes),
            fmt_float(m.hours),
            m.context.clone(),
        ]);
    }
    table.render()
}

/// Context totals plus the distinct tasks behind each context.
pub fn contexts_table(contexts: &[ContextSummary]) -> String {
    let mut table = Table::new(&["context", "original_minutes", "minutes", "hours", "tasks"]);
    for c in contexts {
        table.add_row(vec![
            c.context.clone(),
            c.original_minutes.to_string(),
            fmt_float(c.minutes),
            fmt_float(c.hours),
            c.tasks.join(", "),
        ]);
    }
    table.render()
}
