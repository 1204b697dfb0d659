//! Style-marker codec and wire format
//!
//! In memory the page stream is a sequence of [`StreamUnit`]s, so style
//! markers can never collide with typed text. At the persistence boundary
//! the stream is flattened to a string: markers become a two-character
//! sequence (sentinel + style tag), line breaks become `\n`, and every
//! other unit is the character itself.
//!
//! All functions here are pure and total: parsing never fails, and a
//! malformed marker normalizes to a no-op switch back to the default ink.

use crate::models::{Glyph, InkStyle, StreamUnit};

/// Sentinel code point that introduces a style marker in the wire string.
///
/// U+E000 is in the Private Use Area and is filtered from the input
/// surface, so it cannot appear as a typed character.
pub const MARKER_SENTINEL: char = '\u{E000}';

const TAG_ACCENT: char = 'a';
const TAG_DEFAULT: char = 'd';

/// One step of a decoded stream replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    /// A visible character with its resolved style.
    Glyph(Glyph),
    /// A line boundary (explicit break or auto-wrap).
    LineBoundary,
}

/// Encode a style switch as its two-character wire marker.
pub fn encode_switch(style: InkStyle) -> [char; 2] {
    let tag = match style {
        InkStyle::Accent => TAG_ACCENT,
        InkStyle::Default => TAG_DEFAULT,
    };
    [MARKER_SENTINEL, tag]
}

/// Flatten a unit stream into its wire string.
pub fn to_wire(units: &[StreamUnit]) -> String {
    let mut out = String::with_capacity(units.len());
    for unit in units {
        match unit {
            StreamUnit::Char(ch) => out.push(*ch),
            StreamUnit::LineBreak => out.push('\n'),
            StreamUnit::StyleSwitch(style) => out.extend(encode_switch(*style)),
        }
    }
    out
}

/// Parse a wire string back into a unit stream.
///
/// Total over any input: a dangling sentinel at end of string, or a
/// sentinel followed by an unknown tag, becomes a switch to the default
/// ink rather than an error.
pub fn from_wire(s: &str) -> Vec<StreamUnit> {
    let mut units = Vec::with_capacity(s.chars().count());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == MARKER_SENTINEL {
            let style = match chars.next() {
                Some(TAG_ACCENT) => InkStyle::Accent,
                // missing or unrecognized tag normalizes to default
                _ => InkStyle::Default,
            };
            units.push(StreamUnit::StyleSwitch(style));
        } else if ch == '\n' {
            units.push(StreamUnit::LineBreak);
        } else {
            units.push(StreamUnit::Char(ch));
        }
    }
    units
}

/// Replay a unit stream left to right into glyphs and line boundaries.
///
/// Style switches update the current style and emit nothing; line breaks
/// emit a boundary; characters emit a glyph carrying the current style.
pub fn decode(units: &[StreamUnit]) -> Vec<StreamEvent> {
    let mut style = InkStyle::Default;
    let mut events = Vec::with_capacity(units.len());
    for unit in units {
        match unit {
            StreamUnit::StyleSwitch(s) => style = *s,
            StreamUnit::LineBreak => events.push(StreamEvent::LineBoundary),
            StreamUnit::Char(ch) => events.push(StreamEvent::Glyph(Glyph::new(*ch, style))),
        }
    }
    events
}

/// The style encoded by the last marker in the stream, or the default
/// ink when no marker exists yet.
pub fn trailing_style(units: &[StreamUnit]) -> InkStyle {
    units
        .iter()
        .rev()
        .find_map(|unit| match unit {
            StreamUnit::StyleSwitch(style) => Some(*style),
            _ => None,
        })
        .unwrap_or_default()
}
