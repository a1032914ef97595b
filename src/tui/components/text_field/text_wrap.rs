//! Text layout helpers and dimensional constants for `TextField`.
//!
//! Stateless: nothing here knows about `TextField` or `CursorState`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left + right borders of the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Visible content lines of a multi-line field before it scrolls
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// textwrap options for a multi-line field of the given inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width once the borders are removed. 0 if too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines, including the empty line after a trailing newline
/// that textwrap does not emit on its own.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Terminal columns occupied by `text`.
pub(super) fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Longest suffix of `text` starting at or after column `skip`.
pub(super) fn skip_columns(text: &str, skip: u16) -> &str {
    let mut consumed = 0u16;
    for (i, c) in text.char_indices() {
        if consumed >= skip {
            return &text[i..];
        }
        consumed = consumed.saturating_add(c.width().unwrap_or(0) as u16);
    }
    ""
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
