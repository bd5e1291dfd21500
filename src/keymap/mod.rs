pub mod defaults;
pub mod trie;

pub use self::trie::{MatchResult, TrieNode};
use crate::action::Action;
use crate::constants::errors;
use crate::error::{ErrorType, NavError};
use crate::key::Key;
use std::str::FromStr;

/// KeyMap stores mappings from key sequences to navigation commands
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    root: TrieNode,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new single-key binding
    pub fn register(&mut self, key: Key, action: Action) {
        self.register_sequence(&[key], action);
    }

    /// Register a sequence binding
    pub fn register_sequence(&mut self, keys: &[Key], action: Action) {
        tracing::trace!(?keys, %action, "register binding");
        self.root.insert(keys, action);
    }

    /// Register a binding from textual key and command names
    pub fn register_from_str(&mut self, key: &str, action_str: &str) -> Result<(), NavError> {
        let key = Key::from_str(key)?;
        let action = Action::from_str(action_str)?;
        self.register(key, action);
        Ok(())
    }

    /// Look up a key sequence
    pub fn lookup(&self, keys: &[Key]) -> MatchResult {
        self.root.lookup(keys)
    }

    /// Action bound to a single key, if the key alone completes a binding
    pub fn get_action(&self, key: Key) -> Option<Action> {
        match self.lookup(&[key]) {
            MatchResult::Exact(action) | MatchResult::Ambiguous(action) => Some(action),
            _ => None,
        }
    }

    /// Number of registered bindings
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Parse a bindings file.
    ///
    /// One binding per line as `<key> [<key>...] = <command id>`. Blank lines
    /// and lines starting with `#` are ignored. Errors name the offending
    /// line (1-based).
    pub fn from_bindings(source: &str) -> Result<Self, NavError> {
        let mut map = Self::new();
        map.load_bindings(source)?;
        Ok(map)
    }

    /// Add the bindings in `source` on top of the existing ones
    pub fn load_bindings(&mut self, source: &str) -> Result<(), NavError> {
        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (keys, command) = line.split_once('=').ok_or_else(|| {
                NavError::new(
                    ErrorType::Settings,
                    errors::MALFORMED_BINDING,
                    format!("line {}: expected `<key> = <command>`", line_no),
                )
            })?;

            let keys = keys
                .split_whitespace()
                .map(Key::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| at_line(e, line_no))?;
            if keys.is_empty() {
                return Err(NavError::new(
                    ErrorType::Settings,
                    errors::MALFORMED_BINDING,
                    format!("line {}: binding has no key", line_no),
                ));
            }
            let action = Action::from_str(command).map_err(|e| at_line(e, line_no))?;

            self.register_sequence(&keys, action);
        }
        Ok(())
    }
}

/// Re-tag a parse error as a settings error located at `line_no`
fn at_line(err: NavError, line_no: usize) -> NavError {
    NavError {
        kind: ErrorType::Settings,
        message: format!("line {}: {}", line_no, err.message),
        ..err
    }
}
