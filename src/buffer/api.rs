//! smartnav – editing surface abstraction
//!
//! The navigation commands never own the document. They read lines and
//! move the cursor through [`EditorSurface`], which the host editor
//! implements.
//!
//! ## Indexing model
//!
//! Line indices are 0-based. Columns (`Position::ch`) are **code-point
//! based**: a column counts Unicode scalar values from the start of the
//! line, not bytes and not grapheme clusters.
//!
//! Document offsets returned by [`EditorSurface::pos_to_offset`] are
//! **byte** offsets into the whole document with `\n` line separators,
//! which is what syntax trees are indexed by.

use crate::error::NavError;

/// A cursor position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// 0-based line index
    pub line: usize,
    /// Column in characters from line start
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Host editor capabilities needed by the navigation commands.
pub trait EditorSurface {
    /// Current cursor position.
    fn cursor(&self) -> Position;

    /// Place the cursor at `pos`.
    /// Fails when `pos` does not address a character boundary in the document.
    fn set_cursor(&mut self, pos: Position) -> Result<(), NavError>;

    /// Text of line `index` without its line terminator.
    fn line(&self, index: usize) -> Option<&str>;

    /// Byte offset of `pos` in the document text.
    fn pos_to_offset(&self, pos: Position) -> usize;

    /// The host's ordinary "cursor up one line" motion.
    /// Returns `true` if the cursor moved.
    fn move_up(&mut self) -> bool;
}
