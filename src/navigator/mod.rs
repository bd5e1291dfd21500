//! Smart Home / End / Up commands
//!
//! Each command reads the cursor and its line from an [`EditorSurface`],
//! asks a [`TableProbe`] whether the cursor sits in a table, resolves a
//! target with the pure functions in [`crate::movement`] and finally moves
//! the cursor. Moving the cursor is the only side effect.
//!
//! Commands never fail. Running out of room (column 0, line end, no cell
//! in that direction) is reported as [`Outcome::Unchanged`].

use crate::action::Action;
use crate::buffer::{EditorSurface, Position};
use crate::key::Key;
use crate::keymap::{KeyMap, MatchResult};
use crate::movement::table::{table_row_up, RowSource, UpMotion};
use crate::movement::{cell_end, cell_start, home_target};
use crate::syntax::TableProbe;
use tracing::{debug, trace, warn};

/// What a navigation command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cursor was placed at this position
    Moved(Position),
    /// The host's ordinary motion was used
    Delegated,
    /// The cursor did not move
    Unchanged,
}

/// Table classification for positions in one document
pub struct TableContext<'a, S: ?Sized, P: ?Sized> {
    surface: &'a S,
    probe: &'a P,
}

impl<'a, S, P> TableContext<'a, S, P>
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    pub fn new(surface: &'a S, probe: &'a P) -> Self {
        Self { surface, probe }
    }

    /// Whether the cursor is inside a table
    pub fn is_in_table(&self) -> bool {
        let cursor = self.surface.cursor();
        self.is_in_table_at(cursor.line, cursor.ch)
    }

    /// Whether (`line`, `ch`) is inside a table, without moving the cursor.
    ///
    /// A column at the end of a non-empty line probes the last character,
    /// since the line terminator belongs to no row.
    pub fn is_in_table_at(&self, line: usize, ch: usize) -> bool {
        let Some(text) = self.surface.line(line) else {
            return false;
        };
        let len = text.chars().count();
        let probe_ch = if ch >= len { len.saturating_sub(1) } else { ch };
        let offset = self.surface.pos_to_offset(Position::new(line, probe_ch));
        let inside = self.probe.is_within_table_construct(offset);
        trace!(line, ch = probe_ch, offset, inside, "table probe");
        inside
    }
}

impl<S, P> RowSource for TableContext<'_, S, P>
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    fn row_text(&self, line: usize) -> Option<&str> {
        self.surface.line(line)
    }

    fn row_in_table(&self, line: usize) -> bool {
        self.is_in_table_at(line, 0)
    }
}

/// Home: cell start inside tables, otherwise the end of the line's
/// structural prefix and then column 0.
///
/// `advanced` also treats heading and footnote markers as prefixes.
pub fn smart_home<S, P>(surface: &mut S, probe: &P, advanced: bool) -> Outcome
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    let cursor = surface.cursor();
    if cursor.ch == 0 {
        return Outcome::Unchanged;
    }
    let Some(line) = surface.line(cursor.line) else {
        return Outcome::Unchanged;
    };

    let in_table = TableContext::new(&*surface, probe).is_in_table();
    let ch = if in_table {
        cell_start(line, cursor.ch)
    } else {
        home_target(line, cursor.ch, advanced)
    };
    debug!(line = cursor.line, from = cursor.ch, to = ch, in_table, advanced, "smart home");

    move_to(surface, cursor, Position::new(cursor.line, ch))
}

/// End: cell end inside tables, otherwise the line end
pub fn smart_end<S, P>(surface: &mut S, probe: &P) -> Outcome
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    let cursor = surface.cursor();
    let Some(line) = surface.line(cursor.line) else {
        return Outcome::Unchanged;
    };
    let len = line.chars().count();
    if cursor.ch >= len {
        return Outcome::Unchanged;
    }

    let in_table = TableContext::new(&*surface, probe).is_in_table();
    let ch = if in_table {
        cell_end(line, cursor.ch)
    } else {
        len
    };
    debug!(line = cursor.line, from = cursor.ch, to = ch, in_table, "smart end");

    move_to(surface, cursor, Position::new(cursor.line, ch))
}

/// Up: moves between cells of the same column inside tables, otherwise
/// the host's ordinary line-up motion
pub fn smart_up<S, P>(surface: &mut S, probe: &P) -> Outcome
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    let cursor = surface.cursor();
    let motion = {
        let ctx = TableContext::new(&*surface, probe);
        if cursor.line == 0 || !ctx.is_in_table() {
            UpMotion::Default
        } else {
            table_row_up(&ctx, cursor)
        }
    };
    debug!(line = cursor.line, ch = cursor.ch, ?motion, "smart up");

    match motion {
        UpMotion::Jump(target) => move_to(surface, cursor, target),
        UpMotion::Default if surface.move_up() => Outcome::Delegated,
        UpMotion::Default | UpMotion::Stay => Outcome::Unchanged,
    }
}

/// Run a command against the surface
pub fn execute<S, P>(surface: &mut S, probe: &P, action: Action) -> Outcome
where
    S: EditorSurface + ?Sized,
    P: TableProbe + ?Sized,
{
    match action {
        Action::SmartHome => smart_home(surface, probe, false),
        Action::SmartHomeHeadings => smart_home(surface, probe, true),
        Action::SmartEnd => smart_end(surface, probe),
        Action::SmartUp => smart_up(surface, probe),
    }
}

fn move_to<S>(surface: &mut S, from: Position, target: Position) -> Outcome
where
    S: EditorSurface + ?Sized,
{
    if target == from {
        return Outcome::Unchanged;
    }
    match surface.set_cursor(target) {
        Ok(()) => Outcome::Moved(target),
        Err(err) => {
            warn!(%err, line = target.line, ch = target.ch, "cursor move rejected");
            Outcome::Unchanged
        }
    }
}

/// Result of feeding one key to a [`Navigator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The key completed a binding and the command ran
    Handled(Outcome),
    /// The key started a longer binding; waiting for more keys
    Pending,
    /// Not a navigation key; the host should handle it
    Unbound,
}

/// Key-driven front end: resolves key presses through a [`KeyMap`] and
/// runs the bound command.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    keymap: KeyMap,
    pending: Vec<Key>,
}

impl Navigator {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            pending: Vec::new(),
        }
    }

    /// Navigator with the default bindings
    pub fn with_defaults() -> Self {
        Self::new(crate::keymap::defaults::default_keymap())
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    pub fn handle_key<S, P>(&mut self, surface: &mut S, probe: &P, key: Key) -> KeyResult
    where
        S: EditorSurface + ?Sized,
        P: TableProbe + ?Sized,
    {
        self.pending.push(key);
        match self.keymap.lookup(&self.pending) {
            MatchResult::Exact(action) | MatchResult::Ambiguous(action) => {
                self.pending.clear();
                KeyResult::Handled(execute(surface, probe, action))
            }
            MatchResult::Prefix => KeyResult::Pending,
            MatchResult::None => {
                self.pending.clear();
                KeyResult::Unbound
            }
        }
    }
}
