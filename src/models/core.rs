//! Core data structures for the virtual typewriter
//!
//! This module defines the stream-unit representation of the typed page:
//! a single linear sequence of units from which glyphs, caret position,
//! and line count are all derived by replay.

use serde::{Deserialize, Serialize};

/// Ink ribbon style applied to typed characters.
///
/// The typewriter has a two-color ribbon: the default black ink and a
/// single accent color. Style changes apply to subsequently typed
/// characters until changed again.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InkStyle {
    #[default]
    Default,
    Accent,
}

/// One atomic element of the raw page stream.
///
/// The stream is the authoritative state: visible characters, explicit
/// line breaks, and ink-style switches all live in one ordered sequence.
/// Replaying the stream left to right with "current style" starting at
/// [`InkStyle::Default`] and column/line starting at 0 is deterministic
/// and side-effect-free.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StreamUnit {
    /// A visible character, rendered with whatever style is current.
    Char(char),
    /// An explicit or auto-wrap line break.
    LineBreak,
    /// Switch the current style for all following characters.
    StyleSwitch(InkStyle),
}

impl StreamUnit {
    /// True for units that occupy a column when rendered.
    pub fn is_visible(&self) -> bool {
        matches!(self, StreamUnit::Char(_))
    }
}

/// A single visible character with its resolved style.
///
/// Glyphs are never stored; they are produced by decoding the stream.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: InkStyle,
}

impl Glyph {
    pub fn new(ch: char, style: InkStyle) -> Self {
        Self { ch, style }
    }
}

/// A caret position on the page (line, column), both 0-based.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Create a position at (0, 0).
    pub fn zero() -> Self {
        Self { line: 0, col: 0 }
    }
}

/// An archived note: an immutable, timestamped copy of a finalized page.
///
/// `content` holds the page's wire-encoded stream (see [`crate::text::codec`]).
/// Notes are created only on send and ordered newest first for display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Note {
    pub fn new(id: impl Into<String>, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at,
        }
    }
}
