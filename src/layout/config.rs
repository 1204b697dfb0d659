//! Layout configuration
//!
//! One authoritative set of page dimensions shared by the buffer (wrap
//! width) and the presentation (pixel math). The wrap width is derived
//! from the paper's usable text width: a 450px sheet with 45px side
//! padding leaves 360px, at 12px per monospace character = 30 columns.

use serde::{Deserialize, Serialize};

/// Page and carriage dimensions used for layout computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Characters per line before auto-wrap. Single source of truth for
    /// the wrap width; the buffer is constructed from this value.
    pub columns_per_line: usize,

    /// Fixed character width in pixels (monospace).
    pub char_width: f32,

    /// Line height in pixels.
    pub line_height: f32,

    /// Carriage rest position in pixels; typing moves the carriage left
    /// from here one character width at a time.
    pub initial_carriage_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns_per_line: 30,
            char_width: 12.0,
            line_height: 24.0,
            initial_carriage_offset: 100.0,
        }
    }
}
