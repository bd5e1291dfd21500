//! Default key bindings

use super::KeyMap;
use crate::action::Action;
use crate::key::Key;

/// Bind every navigation command to its conventional key
pub fn register_defaults(map: &mut KeyMap) {
    map.register(Key::Home, Action::SmartHome);
    map.register(Key::CtrlHome, Action::SmartHomeHeadings);
    map.register(Key::End, Action::SmartEnd);
    map.register(Key::ArrowUp, Action::SmartUp);
}

/// A key map holding only the default bindings
pub fn default_keymap() -> KeyMap {
    let mut map = KeyMap::new();
    register_defaults(&mut map);
    map
}
