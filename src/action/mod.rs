//! Bindable navigation commands
use crate::constants::{commands, errors};
use crate::error::{ErrorType, NavError};
use std::fmt;
use std::str::FromStr;

/// A zero-argument command a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Home that stops after list, quote and indent prefixes
    SmartHome,
    /// Like `SmartHome`, also stopping after heading and footnote markers
    SmartHomeHeadings,
    /// End that stops at table cell boundaries
    SmartEnd,
    /// Up that moves between table cells of the same column
    SmartUp,
}

impl Action {
    /// Every command, in registration order
    pub const ALL: [Action; 4] = [
        Action::SmartHome,
        Action::SmartHomeHeadings,
        Action::SmartEnd,
        Action::SmartUp,
    ];

    /// Stable identifier used in key binding files
    pub fn id(self) -> &'static str {
        match self {
            Action::SmartHome => commands::SMART_HOME,
            Action::SmartHomeHeadings => commands::SMART_HOME_HEADINGS,
            Action::SmartEnd => commands::SMART_END,
            Action::SmartUp => commands::SMART_UP,
        }
    }

    /// Human-readable title for command palettes
    pub fn title(self) -> &'static str {
        match self {
            Action::SmartHome => "Smart home (indents, lists, task lists)",
            Action::SmartHomeHeadings => "Smart home (with headings and footnotes)",
            Action::SmartEnd => "Smart end (table cells)",
            Action::SmartUp => "Smart up (table rows)",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Action {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.id() == s.trim())
            .ok_or_else(|| {
                NavError::new(
                    ErrorType::Parse,
                    errors::UNKNOWN_COMMAND,
                    format!("Unknown command: {}", s.trim()),
                )
            })
    }
}
