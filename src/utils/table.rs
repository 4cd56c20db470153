//! Table rendering utilities for CLI outputs.
//!
//! Columns are sized to the widest cell, measured on the displayed text:
//! ANSI escapes are stripped and width follows Unicode display rules, so
//! colored cells do not skew the alignment.

use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(display_width(cell));
            }
        }

        let mut out = String::new();

        // Header
        for (header, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(header, *w));
            out.push(' ');
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align to `width` display columns, ANSI codes excluded from the count.
fn pad(s: &str, width: usize) -> String {
    let pad_by = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad_by))
}
