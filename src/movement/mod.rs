//! Markdown-aware cursor movement semantics
//!
//! This module holds the pure position arithmetic behind the smart Home,
//! End and Up commands. Nothing here touches an editor: every function maps
//! line text and a character offset to a target offset.
//!
//! ## Design
//!
//! - Outside tables, Home stops at the end of the line's structural prefix
//!   (list bullet, quote marker, heading marker) before going to column 0.
//! - Inside tables, Home and End stop at cell content boundaries, and Up
//!   keeps the cell column while skipping the delimiter row.
//!
//! ## Modules
//!
//! - [`prefix`] - Structural prefix detection
//! - [`cells`] - Cell boundaries on a single table row
//! - [`table`] - Row roles and the Up-arrow row walk

pub mod cells;
pub mod prefix;
pub mod table;

// Re-export commonly used items
pub use cells::{cell_end, cell_start};
pub use prefix::{home_target, match_line_start, PrefixKind, PrefixMatch};
pub use table::{is_delimiter_row, table_row_up, RowRole, RowSource, UpMotion};
