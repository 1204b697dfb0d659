// Page view-model and carriage positioning

use typewriter_wasm::layout::{carriage_position, present, LayoutConfig, PaperScroll};
use typewriter_wasm::models::{InkStyle, Pos};
use typewriter_wasm::text::buffer::TypewriterBuffer;

#[test]
fn test_page_view_matches_buffer_caret() {
    let mut buffer = TypewriterBuffer::new(30);
    for ch in "hi".chars() {
        buffer.append_char(ch);
    }
    buffer.append_line_break();
    buffer.append_char('!');

    let view = present(buffer.units(), buffer.caret());
    assert_eq!(view.caret_line, 1);
    assert_eq!(view.caret_col, 1);
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.lines[0].len(), 2);
    assert_eq!(view.lines[1].len(), 1);
}

#[test]
fn test_empty_trailing_line_renders_as_blank_row() {
    let mut buffer = TypewriterBuffer::new(30);
    buffer.append_char('a');
    buffer.append_line_break();

    let view = present(buffer.units(), buffer.caret());
    assert_eq!(view.lines.len(), 2);
    assert!(view.lines[1].is_empty());
}

#[test]
fn test_auto_wrap_break_splits_lines_like_explicit_break() {
    let mut buffer = TypewriterBuffer::new(5);
    for ch in "abcdef".chars() {
        buffer.append_char(ch);
    }

    let view = present(buffer.units(), buffer.caret());
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.lines[0].len(), 5);
    assert_eq!(view.lines[1].len(), 1);
}

#[test]
fn test_accent_glyphs_carry_their_style_to_the_view() {
    let mut buffer = TypewriterBuffer::new(30);
    buffer.append_char('a');
    buffer.set_style(InkStyle::Accent);
    buffer.append_char('b');

    let view = present(buffer.units(), buffer.caret());
    assert_eq!(view.lines[0][0].style, InkStyle::Default);
    assert_eq!(view.lines[0][1].style, InkStyle::Accent);
}

#[test]
fn test_carriage_tracks_caret_pixels() {
    let config = LayoutConfig::default();

    let rest = carriage_position(Pos::zero(), &config);
    assert_eq!(rest.carriage_x, config.initial_carriage_offset);
    assert_eq!(rest.paper_y, 0.0);

    let pos = carriage_position(Pos::new(3, 7), &config);
    assert_eq!(
        pos.carriage_x,
        config.initial_carriage_offset - 7.0 * config.char_width
    );
    assert_eq!(pos.paper_y, 3.0 * config.line_height);
}

#[test]
fn test_scroll_clamps_and_resets() {
    let mut scroll = PaperScroll::new();
    for _ in 0..100 {
        scroll.apply_wheel(300.0);
    }
    assert_eq!(scroll.offset(), 500.0);

    scroll.reset();
    assert_eq!(scroll.offset(), 0.0);
}
