//! Typewriter buffer state machine (Layer 0)
//!
//! Owns the unit stream for the page currently being typed, plus the
//! current ink intent. The caret is a cache: it is recomputed by full
//! replay after every mutation, so it can never be observed stale.

use serde::{Deserialize, Serialize};

use super::{codec, metrics};
use crate::models::{InkStyle, Pos, StreamUnit};

/// The typewriter page buffer.
///
/// All operations are total: they never fail, never panic, and never move
/// the caret below (0, 0). Backspace is safe to call repeatedly down to an
/// empty stream.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TypewriterBuffer {
    units: Vec<StreamUnit>,
    style: InkStyle,
    columns_per_line: usize,
    /// Derived caret, recomputed on every mutation.
    caret: Pos,
}

impl TypewriterBuffer {
    /// Create an empty buffer for a page `columns_per_line` wide.
    pub fn new(columns_per_line: usize) -> Self {
        Self {
            units: Vec::new(),
            style: InkStyle::Default,
            columns_per_line,
            caret: Pos::zero(),
        }
    }

    /// Restore a buffer from a wire string (see [`codec::from_wire`]).
    ///
    /// The ink intent resumes from the last marker in the stream, so
    /// typing continues in the same color the page left off in.
    pub fn from_wire(wire: &str, columns_per_line: usize) -> Self {
        let units = codec::from_wire(wire);
        let caret = metrics::caret_at_end(&units);
        let style = codec::trailing_style(&units);
        Self {
            units,
            style,
            columns_per_line,
            caret,
        }
    }

    /// Type one character.
    ///
    /// If the current line is already full, a line break is appended first
    /// (auto-wrap, identical in effect to [`Self::append_line_break`]).
    /// If the ink intent differs from the style in effect at the end of
    /// the stream, a style marker is appended before the character. The
    /// stream therefore grows by 1, 2, or 3 units.
    pub fn append_char(&mut self, ch: char) {
        if metrics::is_line_full(self.caret.col, self.columns_per_line) {
            self.units.push(StreamUnit::LineBreak);
        }
        if codec::trailing_style(&self.units) != self.style {
            self.units.push(StreamUnit::StyleSwitch(self.style));
        }
        self.units.push(StreamUnit::Char(ch));
        self.recompute_caret();
    }

    /// Carriage return: append a line break unconditionally.
    ///
    /// Consecutive breaks are legal and produce blank lines.
    pub fn append_line_break(&mut self) {
        self.units.push(StreamUnit::LineBreak);
        self.recompute_caret();
    }

    /// Remove the most recently typed unit. No-op on an empty stream.
    ///
    /// A trailing style marker (one the user toggled but never typed
    /// after) is removed whole, restoring the stream byte-identical to
    /// the state before the toggle took effect. Removing a line break
    /// lands the caret at the end of the previous line, recomputed by
    /// replay.
    pub fn backspace(&mut self) {
        if self.units.pop().is_none() {
            return;
        }
        self.recompute_caret();
    }

    /// Change the ink intent for subsequently typed characters.
    ///
    /// The stream is not touched here: the marker is emitted lazily by
    /// the next [`Self::append_char`] that actually needs it, so toggling
    /// back and forth without typing leaves no trace.
    pub fn set_style(&mut self, style: InkStyle) {
        self.style = style;
    }

    /// Clear the page after a note is sent.
    pub fn reset(&mut self) {
        self.units.clear();
        self.style = InkStyle::Default;
        self.caret = Pos::zero();
    }

    /// The raw unit stream.
    pub fn units(&self) -> &[StreamUnit] {
        &self.units
    }

    /// Current caret position, derived from the stream.
    pub fn caret(&self) -> Pos {
        self.caret
    }

    /// Current ink intent.
    pub fn style(&self) -> InkStyle {
        self.style
    }

    /// Page width this buffer wraps at.
    pub fn columns_per_line(&self) -> usize {
        self.columns_per_line
    }

    /// Number of lines on the page, always at least 1.
    pub fn line_count(&self) -> usize {
        metrics::line_count(&self.units)
    }

    /// Flatten the stream to its wire string for archival.
    pub fn to_wire_string(&self) -> String {
        codec::to_wire(&self.units)
    }

    /// True when the page contains no visible non-whitespace character.
    /// Blank pages are not sendable.
    pub fn is_blank(&self) -> bool {
        !self
            .units
            .iter()
            .any(|u| matches!(u, StreamUnit::Char(ch) if !ch.is_whitespace()))
    }

    fn recompute_caret(&mut self) {
        self.caret = metrics::caret_at_end(&self.units);
    }
}
