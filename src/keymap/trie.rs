use crate::action::Action;
use crate::key::Key;
use std::collections::HashMap;

/// Result of looking up a key sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match found
    Exact(Action),
    /// Sequence is a valid prefix of longer bindings but has no action itself
    Prefix,
    /// Sequence is a valid prefix AND has an action itself
    Ambiguous(Action),
    /// No match found
    None,
}

/// A node in the key sequence trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Children nodes mapped by key
    children: HashMap<Key, TrieNode>,
    /// Action bound to the sequence ending here (if any)
    action: Option<Action>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence into the trie, replacing any previous binding
    pub fn insert(&mut self, keys: &[Key], action: Action) {
        match keys.split_first() {
            None => self.action = Some(action),
            Some((key, rest)) => self.children.entry(*key).or_default().insert(rest, action),
        }
    }

    /// Look up a sequence
    pub fn lookup(&self, keys: &[Key]) -> MatchResult {
        let Some((key, rest)) = keys.split_first() else {
            // End of input: an action here wins, but flag it if longer
            // bindings share the prefix.
            return match (self.action, self.children.is_empty()) {
                (Some(action), true) => MatchResult::Exact(action),
                (Some(action), false) => MatchResult::Ambiguous(action),
                (None, false) => MatchResult::Prefix,
                (None, true) => MatchResult::None,
            };
        };

        match self.children.get(key) {
            Some(child) => child.lookup(rest),
            None => MatchResult::None,
        }
    }

    /// Number of bound sequences at or below this node
    pub fn len(&self) -> usize {
        let below: usize = self.children.values().map(TrieNode::len).sum();
        usize::from(self.action.is_some()) + below
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
