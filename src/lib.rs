//! smartnav - Markdown-aware Home, End and Up navigation

pub mod action;
pub mod buffer;
pub mod constants;
pub mod error;
pub mod key;
pub mod keymap;
pub mod movement;
pub mod navigator;
pub mod syntax;

pub use buffer::{EditorSurface, LineBuffer, Position};
pub use navigator::{execute, smart_end, smart_home, smart_up, Navigator, Outcome};
pub use syntax::{MarkdownSyntax, NoSyntax, TableProbe};
