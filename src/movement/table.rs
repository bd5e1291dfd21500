//! Vertical movement between Markdown table rows
//!
//! A pipe table is a header row, a delimiter row (`| --- | :-: |`) and any
//! number of data rows. Moving up from the start of a cell keeps the cell
//! column, skips the delimiter row and leaves the table above the header.

use super::cells::{cell_content_start, cell_index, nth_cell_content_start};
use crate::buffer::Position;
use regex::Regex;
use std::sync::LazyLock;

static DELIMITER_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|?[\s:|-]*-[\s:|-]*$").expect("delimiter row pattern"));

/// Role of a line relative to the table around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    Header,
    Delimiter,
    Data,
    NotInTable,
}

/// Line access needed to walk table rows
pub trait RowSource {
    /// Text of `line`, or `None` past the end of the document
    fn row_text(&self, line: usize) -> Option<&str>;

    /// Whether the start of `line` lies inside a table construct
    fn row_in_table(&self, line: usize) -> bool;
}

/// Where an Up press should take the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpMotion {
    /// Use the host's ordinary line-up motion
    Default,
    /// Place the cursor here
    Jump(Position),
    /// No valid destination; leave the cursor alone
    Stay,
}

/// Check whether `line` is a table delimiter row
///
/// Escaped pipes are not special here: `\` is not a delimiter character, so
/// a row containing `\|` never qualifies.
///
/// # Examples
/// ```
/// use smartnav::movement::table::is_delimiter_row;
///
/// assert!(is_delimiter_row("| --- | :---: |"));
/// assert!(!is_delimiter_row("| ab | cd |"));
/// ```
pub fn is_delimiter_row(line: &str) -> bool {
    DELIMITER_ROW.is_match(line)
}

/// Classify `line` by probing it and the line above
pub fn row_role(rows: &impl RowSource, line: usize) -> RowRole {
    if !rows.row_in_table(line) {
        return RowRole::NotInTable;
    }
    if rows.row_text(line).is_some_and(is_delimiter_row) {
        return RowRole::Delimiter;
    }
    let has_table_row_above = line.checked_sub(1).is_some_and(|l| rows.row_in_table(l));
    if has_table_row_above {
        RowRole::Data
    } else {
        RowRole::Header
    }
}

/// Resolve an Up press made at `at`, a position inside a table.
///
/// Only a cursor sitting exactly on a cell's first visible character is
/// remapped. Anywhere else, including past the pipe that closes the row,
/// the ordinary line-up motion is used.
pub fn table_row_up(rows: &impl RowSource, at: Position) -> UpMotion {
    if at.line == 0 {
        return UpMotion::Default;
    }
    let Some(current) = rows.row_text(at.line) else {
        return UpMotion::Stay;
    };
    if at.ch != cell_content_start(current, at.ch) {
        return UpMotion::Default;
    }
    let index = cell_index(current, at.ch);
    if nth_cell_content_start(current, index).is_none() {
        return UpMotion::Default;
    }

    let above = at.line - 1;
    let dest_line = match row_role(rows, above) {
        RowRole::NotInTable => return UpMotion::Jump(Position::new(above, 0)),
        RowRole::Delimiter => match above.checked_sub(1) {
            Some(header) => header,
            None => return UpMotion::Stay,
        },
        RowRole::Header | RowRole::Data => above,
    };

    rows.row_text(dest_line)
        .and_then(|text| nth_cell_content_start(text, index))
        .map_or(UpMotion::Stay, |ch| {
            UpMotion::Jump(Position::new(dest_line, ch))
        })
}
