//! Display columns of code text.
//!
//! Code is painted with tabs expanded and wide glyphs taking two cells, so
//! screen columns and character indices differ.

use unicode_width::UnicodeWidthChar;

/// Tab stops are every this many columns.
pub const TAB_WIDTH: usize = 4;

fn char_width(ch: char, column: usize) -> usize {
    match ch {
        '\t' => TAB_WIDTH - column % TAB_WIDTH,
        c if c.is_control() => 0,
        c => c.width().unwrap_or(0),
    }
}

/// `text` as painted: tabs expanded to the next stop, control characters
/// dropped.
pub fn display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        let width = char_width(ch, column);
        match ch {
            '\t' => out.push_str(&" ".repeat(width)),
            c if c.is_control() => {}
            c => out.push(c),
        }
        column += width;
    }
    out
}

/// 1-based index of the character of `text` drawn at display `column`
/// (0-based, relative to the start of the text). `None` past the end.
pub fn character_at(text: &str, column: usize) -> Option<u32> {
    let mut start = 0;
    for (index, ch) in text.chars().enumerate() {
        let width = char_width(ch, start);
        if column < start + width {
            return u32::try_from(index + 1).ok();
        }
        start += width;
    }
    None
}
