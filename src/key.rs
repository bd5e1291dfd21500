//! Key representation for navigation bindings

use crate::constants::errors;
use crate::error::{ErrorType, NavError};
use std::fmt;
use std::str::FromStr;

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+A)
    Ctrl(u8),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CtrlArrowUp,
    CtrlArrowDown,
    /// Navigation keys
    Home,
    End,
    CtrlHome,
    CtrlEnd,
    PageUp,
    PageDown,
}

impl FromStr for Key {
    type Err = NavError;

    /// Parse names such as `home`, `ctrl+home`, `up`, `ctrl+a` or `x`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let key = match name.as_str() {
            "home" => Key::Home,
            "end" => Key::End,
            "ctrl+home" => Key::CtrlHome,
            "ctrl+end" => Key::CtrlEnd,
            "up" => Key::ArrowUp,
            "down" => Key::ArrowDown,
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            "ctrl+up" => Key::CtrlArrowUp,
            "ctrl+down" => Key::CtrlArrowDown,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            other => {
                let trimmed = s.trim();
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => match other.strip_prefix("ctrl+").map(str::as_bytes) {
                        Some([b]) if b.is_ascii_lowercase() => Key::Ctrl(*b),
                        _ => {
                            return Err(NavError::new(
                                ErrorType::Parse,
                                errors::UNKNOWN_KEY,
                                format!("Unknown key: {}", trimmed),
                            ))
                        }
                    },
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(b) => write!(f, "ctrl+{}", *b as char),
            Key::ArrowUp => write!(f, "up"),
            Key::ArrowDown => write!(f, "down"),
            Key::ArrowLeft => write!(f, "left"),
            Key::ArrowRight => write!(f, "right"),
            Key::CtrlArrowUp => write!(f, "ctrl+up"),
            Key::CtrlArrowDown => write!(f, "ctrl+down"),
            Key::Home => write!(f, "home"),
            Key::End => write!(f, "end"),
            Key::CtrlHome => write!(f, "ctrl+home"),
            Key::CtrlEnd => write!(f, "ctrl+end"),
            Key::PageUp => write!(f, "pageup"),
            Key::PageDown => write!(f, "pagedown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("home".parse::<Key>().unwrap(), Key::Home);
        assert_eq!("Ctrl+Home".parse::<Key>().unwrap(), Key::CtrlHome);
        assert_eq!(" up ".parse::<Key>().unwrap(), Key::ArrowUp);
        assert_eq!("pagedown".parse::<Key>().unwrap(), Key::PageDown);
    }

    #[test]
    fn test_parse_chars_and_ctrl() {
        assert_eq!("x".parse::<Key>().unwrap(), Key::Char('x'));
        assert_eq!("X".parse::<Key>().unwrap(), Key::Char('X'));
        assert_eq!("ctrl+a".parse::<Key>().unwrap(), Key::Ctrl(b'a'));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hyper+space".parse::<Key>().unwrap_err();
        assert_eq!(err.code, errors::UNKNOWN_KEY);
        assert!("ctrl+1".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_display_round_trips_names() {
        for key in [Key::Home, Key::CtrlHome, Key::ArrowUp, Key::Ctrl(b'e')] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
    }
}
