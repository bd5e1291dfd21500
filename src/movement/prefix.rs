//! Structural prefix detection for Markdown lines
//!
//! A structural prefix is the leading block syntax of a line: heading
//! markers, footnote labels, list bullets, quote markers and plain indent.
//! Lengths are returned in characters, not bytes.

use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("heading pattern"));
static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^[^\]]+\]:\s*").expect("footnote pattern"));
static ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s").expect("ordered list pattern"));
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*>\s*").expect("quote pattern"));
static INDENT_OR_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+*]\s(\[.\]\s)?)?").expect("indent pattern")
});

/// Which pattern produced a prefix match
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PrefixKind {
    /// `#` to `######` followed by whitespace
    Heading,
    /// `[^label]:`
    Footnote,
    /// `1.` or `1)`
    OrderedList,
    /// `>`
    Quote,
    /// Leading whitespace, optionally with `-`/`+`/`*` and a task box
    #[default]
    IndentOrBullet,
}

/// A measured structural prefix
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    pub kind: PrefixKind,
    /// Length in characters
    pub len: usize,
}

/// Measure the structural prefix of `line`.
///
/// Patterns are tried in priority order and the first match wins. Headings
/// and footnotes are only considered when `advanced` is set. The indent
/// pattern always matches (possibly with length zero), so this never fails.
pub fn line_prefix(line: &str, advanced: bool) -> PrefixMatch {
    patterns(advanced)
        .find_map(|(kind, re)| {
            re.find(line).map(|m| PrefixMatch {
                kind,
                len: m.as_str().chars().count(),
            })
        })
        .unwrap_or_default()
}

fn patterns(advanced: bool) -> impl Iterator<Item = (PrefixKind, &'static Regex)> {
    let headings = [
        (PrefixKind::Heading, &*HEADING),
        (PrefixKind::Footnote, &*FOOTNOTE),
    ];
    let common = [
        (PrefixKind::OrderedList, &*ORDERED_LIST),
        (PrefixKind::Quote, &*QUOTE),
        (PrefixKind::IndentOrBullet, &*INDENT_OR_BULLET),
    ];

    headings
        .into_iter()
        .filter(move |_| advanced)
        .chain(common)
}

/// Length of the structural prefix of `line`, in characters
pub fn match_line_start(line: &str, advanced: bool) -> usize {
    line_prefix(line, advanced).len
}

/// Target column for a smart Home press from column `ch`.
///
/// Lands on the end of the structural prefix when the cursor is past it,
/// otherwise on column 0. Pressing Home twice therefore alternates between
/// the two positions.
///
/// # Examples
/// ```
/// use smartnav::movement::prefix::home_target;
///
/// assert_eq!(home_target("  - [ ] task text", 10, false), 8);
/// assert_eq!(home_target("  - [ ] task text", 8, false), 0);
/// ```
pub fn home_target(line: &str, ch: usize, advanced: bool) -> usize {
    let prefix = match_line_start(line, advanced);
    if prefix < ch {
        prefix
    } else {
        0
    }
}
