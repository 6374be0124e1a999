//! Markdown pipe-table detection and extraction.
//!
//! Finds the first pipe table in a block of text, e.g. an assistant reply:
//!
//! ```text
//! | Name  | Age |
//! | ----- | --- |
//! | Alice | 30  |
//! ```
//!
//! A table is exactly three parts, matched line by line:
//!
//! 1. a header line `| … |`
//! 2. a separator line made only of `-`, `:`, `|` and whitespace
//! 3. one or more body lines `| … |`, ending at the first line of any other
//!    shape (blank line, prose) or at end of input
//!
//! Detection, extraction and prose splitting all go through [`find_table`],
//! so they always agree on whether a table exists and where it starts and
//! ends.
//!
//! Cells are split on every `|`; there is no escaping, so a literal pipe
//! inside a cell produces an extra cell.
//!
//! # Example
//!
//! ```rust
//! use mdgrid::table::{has_table, parse_table};
//!
//! let text = "| Name | Age |\n| --- | --- |\n| Alice | 30 |\n";
//! assert!(has_table(text));
//!
//! let table = parse_table(text).unwrap();
//! assert_eq!(table.headers, ["Name", "Age"]);
//! assert_eq!(table.rows, [["Alice", "30"]]);
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Header line, separator line, then one or more body lines.
///
/// `[^\n\r\x{2028}\x{2029}]` stands in for `.` so that a cell never runs
/// across any kind of line terminator.
static TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\|([^\n\r\x{2028}\x{2029}]+)\|\n",
        r"\|[\s\-\|:]+\|\n",
        r"((?:\|[^\n\r\x{2028}\x{2029}]+\|\n?)+)",
    ))
    .expect("table pattern is valid")
});

/// A parsed markdown table.
///
/// `rows[i].len()` may differ from `headers.len()`: empty cells are dropped
/// per row, so ragged rows come through as written. Padding is left to the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Column names, trimmed, in source order. Never empty for an extracted table.
    pub headers: Vec<String>,
    /// Body rows, each a list of trimmed non-empty cells.
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Widest of the header row and every body row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// True when any body row has a different cell count than the header.
    pub fn is_ragged(&self) -> bool {
        self.rows.iter().any(|row| row.len() != self.headers.len())
    }

    /// Render this table as a normalised GitHub-flavored markdown table.
    ///
    /// Every line gets [`column_count`](Self::column_count) cells; short
    /// header and body rows are padded with empty cells.
    pub fn to_markdown(&self) -> String {
        let col_count = self.column_count();
        if col_count == 0 {
            return String::new();
        }

        let mut md = String::new();
        push_markdown_row(&mut md, &self.headers, col_count);

        md.push('|');
        for _ in 0..col_count {
            md.push_str(" --- |");
        }
        md.push('\n');

        for row in &self.rows {
            push_markdown_row(&mut md, row, col_count);
        }

        md
    }
}

fn push_markdown_row(md: &mut String, cells: &[String], col_count: usize) {
    md.push('|');
    for col in 0..col_count {
        let cell = cells.get(col).map_or("", String::as_str);
        md.push(' ');
        md.push_str(cell);
        md.push_str(" |");
    }
    md.push('\n');
}

/// The first table found in a text, with the exact bytes it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMatch<'a> {
    text: &'a str,
    span: Range<usize>,
    data: TableData,
}

impl<'a> TableMatch<'a> {
    /// Byte range of the table within the searched text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The table's source text, separator line and trailing newline included.
    pub fn as_str(&self) -> &'a str {
        &self.text[self.span.clone()]
    }

    /// Everything before the table, untrimmed.
    pub fn before(&self) -> &'a str {
        &self.text[..self.span.start]
    }

    /// Everything after the table, untrimmed.
    pub fn after(&self) -> &'a str {
        &self.text[self.span.end..]
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn into_data(self) -> TableData {
        self.data
    }
}

/// Locate and parse the first pipe table in `text`.
///
/// Only the first pattern match is considered. If its header line has no
/// non-blank cells (e.g. `|   |`) there is no table, even when a valid table
/// appears further down the text.
pub fn find_table(text: &str) -> Option<TableMatch<'_>> {
    let caps = TABLE_REGEX.captures(text)?;
    let whole = caps.get(0)?;
    let data = table_from_captures(&caps);

    if data.headers.is_empty() {
        debug!("Rejecting header-less table candidate at {}", whole.start());
        return None;
    }

    debug!(
        "Found pipe table at {}..{}: {} columns, {} rows{}",
        whole.start(),
        whole.end(),
        data.headers.len(),
        data.rows.len(),
        if data.is_ragged() { " (ragged)" } else { "" }
    );

    Some(TableMatch {
        text,
        span: whole.range(),
        data,
    })
}

/// Parse the first pipe table in `text`, or `None` when there is none.
pub fn parse_table(text: &str) -> Option<TableData> {
    find_table(text).map(TableMatch::into_data)
}

/// Check whether `text` contains a pipe table.
///
/// Always agrees with [`parse_table`]: `has_table(s) == parse_table(s).is_some()`.
pub fn has_table(text: &str) -> bool {
    find_table(text).is_some()
}

fn table_from_captures(caps: &Captures<'_>) -> TableData {
    let headers = caps.get(1).map(|m| split_cells(m.as_str())).unwrap_or_default();

    let rows = caps
        .get(2)
        .map(|m| {
            m.as_str()
                .trim()
                .split('\n')
                .map(split_cells)
                .filter(|row| !row.is_empty())
                .collect()
        })
        .unwrap_or_default();

    TableData { headers, rows }
}

/// Split one table line on `|`, trimming cells and dropping empty ones.
///
/// Dropping empties is what absorbs the leading and trailing pipes.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}
