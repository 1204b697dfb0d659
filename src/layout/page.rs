//! Page presentation view model
//!
//! Pure mapping from the unit stream to display lines. The split happens
//! at every line boundary, explicit or auto-wrap-inserted; an empty
//! trailing line is kept as an empty glyph row so the renderer preserves
//! vertical rhythm (a blank row after a carriage return is visible paper).

use serde::{Deserialize, Serialize};

use crate::models::{Glyph, Pos, StreamUnit};
use crate::text::codec::{self, StreamEvent};

/// The rendered page: lines of styled glyphs plus the caret.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub lines: Vec<Vec<Glyph>>,
    pub caret_line: usize,
    pub caret_col: usize,
}

impl PageView {
    /// Number of lines on the page, always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Decode the stream into display lines.
///
/// `caret` is the buffer's derived caret state; it is passed through
/// untouched so the view carries everything the renderer needs in one
/// structure.
pub fn present(units: &[StreamUnit], caret: Pos) -> PageView {
    let mut lines: Vec<Vec<Glyph>> = Vec::new();
    let mut current: Vec<Glyph> = Vec::new();
    for event in codec::decode(units) {
        match event {
            StreamEvent::Glyph(glyph) => current.push(glyph),
            StreamEvent::LineBoundary => lines.push(std::mem::take(&mut current)),
        }
    }
    // the open line closes the page, even when empty
    lines.push(current);

    PageView {
        lines,
        caret_line: caret.line,
        caret_col: caret.col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InkStyle, StreamUnit::*};

    #[test]
    fn test_empty_stream_is_one_empty_line() {
        let view = present(&[], Pos::zero());
        assert_eq!(view.lines, vec![Vec::<Glyph>::new()]);
        assert_eq!(view.caret_line, 0);
        assert_eq!(view.caret_col, 0);
    }

    #[test]
    fn test_lines_split_at_boundaries() {
        let units = vec![Char('a'), Char('b'), LineBreak, Char('c')];
        let view = present(&units, Pos::new(1, 1));

        assert_eq!(view.lines.len(), 2);
        assert_eq!(
            view.lines[0],
            vec![
                Glyph::new('a', InkStyle::Default),
                Glyph::new('b', InkStyle::Default)
            ]
        );
        assert_eq!(view.lines[1], vec![Glyph::new('c', InkStyle::Default)]);
    }

    #[test]
    fn test_trailing_empty_line_is_kept() {
        let units = vec![Char('a'), LineBreak];
        let view = present(&units, Pos::new(1, 0));

        assert_eq!(view.lines.len(), 2);
        assert!(view.lines[1].is_empty());
    }

    #[test]
    fn test_blank_middle_line_is_kept() {
        let units = vec![Char('a'), LineBreak, LineBreak, Char('b')];
        let view = present(&units, Pos::new(2, 1));

        assert_eq!(view.lines.len(), 3);
        assert!(view.lines[1].is_empty());
    }

    #[test]
    fn test_styles_resolved_per_glyph() {
        let units = vec![
            Char('a'),
            StyleSwitch(InkStyle::Accent),
            Char('b'),
            LineBreak,
            Char('c'),
        ];
        let view = present(&units, Pos::new(1, 1));

        assert_eq!(view.lines[0][0].style, InkStyle::Default);
        assert_eq!(view.lines[0][1].style, InkStyle::Accent);
        // accent carries over onto the next line
        assert_eq!(view.lines[1][0].style, InkStyle::Accent);
    }
}
