//! Line-oriented text buffer
//!
//! `LineBuffer` is a minimal in-memory document implementing
//! [`EditorSurface`]. It stores one `String` per line plus the byte offset
//! of every line start so positions convert to document offsets without
//! rescanning the text.

use crate::constants::errors;
use crate::error::{ErrorType, NavError};
use std::fmt::{self, Display};
use std::path::Path;

pub mod api;

pub use api::{EditorSurface, Position};

/// Document stored as a vector of lines with a single cursor.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    /// Byte offset of the start of each line in the joined text
    line_starts: Vec<usize>,
    cursor: Position,
    /// Column remembered across vertical moves through shorter lines
    preferred_ch: Option<usize>,
}

impl LineBuffer {
    /// Create a buffer from text. `\r\n` and `\n` both end a line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();

        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            line_starts.push(offset);
            offset += line.len() + 1;
        }

        Self {
            lines,
            line_starts,
            cursor: Position::default(),
            preferred_ch: None,
        }
    }

    /// Load a buffer from a file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NavError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            NavError::new(
                ErrorType::Io,
                errors::LOAD_FAILED,
                format!("{}: {}", path.display(), e),
            )
        })?;
        Ok(Self::from_text(&text))
    }

    /// Document text with `\n` separators
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of line `index` in characters
    pub fn line_len(&self, index: usize) -> Option<usize> {
        self.lines.get(index).map(|l| l.chars().count())
    }

    fn check_position(&self, pos: Position) -> Result<(), NavError> {
        match self.line_len(pos.line) {
            Some(len) if pos.ch <= len => Ok(()),
            Some(len) => Err(NavError::new(
                ErrorType::Navigation,
                errors::INVALID_CURSOR,
                format!(
                    "column {} is past the end of line {} (length {})",
                    pos.ch, pos.line, len
                ),
            )),
            None => Err(NavError::new(
                ErrorType::Navigation,
                errors::INVALID_CURSOR,
                format!(
                    "line {} is out of range ({} lines)",
                    pos.line,
                    self.lines.len()
                ),
            )),
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl EditorSurface for LineBuffer {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) -> Result<(), NavError> {
        self.check_position(pos)?;
        self.cursor = pos;
        self.preferred_ch = None;
        Ok(())
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn pos_to_offset(&self, pos: Position) -> usize {
        let Some(line) = self.lines.get(pos.line) else {
            return self.line_starts.last().copied().unwrap_or(0)
                + self.lines.last().map_or(0, String::len);
        };
        let within = line
            .char_indices()
            .nth(pos.ch)
            .map_or(line.len(), |(byte, _)| byte);
        self.line_starts[pos.line] + within
    }

    fn move_up(&mut self) -> bool {
        if self.cursor.line == 0 {
            return false;
        }

        let col = self.preferred_ch.unwrap_or(self.cursor.ch);
        let prev_line = self.cursor.line - 1;
        let prev_len = self.line_len(prev_line).unwrap_or(0);

        // Target is min(col, end)
        self.cursor = Position::new(prev_line, col.min(prev_len));
        self.preferred_ch = Some(col);
        true
    }
}

impl Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
