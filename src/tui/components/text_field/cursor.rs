//! Cursor position and scrolling for `TextField`.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset. Every
//! method takes `buffer: &str` explicitly; the text itself is owned by
//! `TextField`.
//!
//! Single-line fields scroll horizontally (`scroll_offset` is in columns).
//! Multi-line fields wrap and scroll vertically (`scroll_offset` is in lines).

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, display_width, inner_width, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Columns (single-line) or wrapped lines (multi-line) scrolled out of view
    pub scroll_offset: u16,
    /// Content width from the last render, used for vertical movement
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 60;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Move cursor one wrapped line up (`direction < 0`) or down, keeping the column.
    ///
    /// Returns `false` when already on the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Byte length of a wrapped line plus its trailing newline, if any
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < buffer.len()
                && buffer.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        let mut byte_offset = 0;
        let mut current_line_idx = lines.len() - 1;
        let mut column_in_line = 0;
        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.pos {
                current_line_idx = idx;
                column_in_line = self.pos - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        let target_line_idx = if direction < 0 {
            match current_line_idx.checked_sub(1) {
                Some(idx) => idx,
                None => return false,
            }
        } else if current_line_idx + 1 < lines.len() {
            current_line_idx + 1
        } else {
            return false;
        };

        let mut target_line_start = 0;
        for line in lines.iter().take(target_line_idx) {
            target_line_start += line_byte_span(line, target_line_start);
        }

        let target_line = &lines[target_line_idx];
        let mut target_column = column_in_line.min(target_line.len());
        while !target_line.is_char_boundary(target_column) {
            target_column -= 1;
        }
        self.pos = target_line_start + target_column;

        true
    }

    /// Wrapped line (0-based) the cursor sits on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keep the cursor inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16, multiline: bool) {
        let width = inner_width(content_width);

        if !multiline {
            let cursor_col = display_width(&buffer[..self.pos]);
            if width == 0 || cursor_col < self.scroll_offset {
                self.scroll_offset = cursor_col;
            } else if cursor_col >= self.scroll_offset + width {
                self.scroll_offset = cursor_col + 1 - width;
            }
            return;
        }

        let total_lines = wrap_line_count(buffer, width);
        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen `(column, row)` of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect, multiline: bool) -> (u16, u16) {
        let origin = (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        let width = inner_width(area.width);
        if width == 0 {
            return origin;
        }

        let text_before_cursor = &buffer[..self.pos];

        if !multiline {
            let col = display_width(text_before_cursor).saturating_sub(self.scroll_offset);
            return (origin.0 + col.min(width - 1), origin.1);
        }

        let options = wrap_options(width);
        let cursor_line = self.calculate_line(buffer, area.width);

        // Column from the last newline; textwrap trims trailing spaces so
        // wrapped line lengths can't be used directly.
        let last_newline = text_before_cursor.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let logical_line = &text_before_cursor[last_newline..];
        let wrapped = textwrap::wrap(logical_line, options);

        let cursor_col = match wrapped.split_last() {
            None => 0,
            Some((_, earlier)) => {
                let chars_before: usize = earlier.iter().map(|seg| seg.chars().count()).sum();
                logical_line.chars().count().saturating_sub(chars_before) as u16
            }
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);
        (
            origin.0 + cursor_col.min(width - 1),
            origin.1 + visible_line.min(MAX_VISIBLE_LINES - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_scrolls_to_keep_cursor_visible() {
        let buffer = "bluebill1049@hotmail.com";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        // 12 columns wide area → 10 inner columns
        cursor.update_scroll_offset(buffer, 12, false);
        assert_eq!(cursor.scroll_offset, 24 + 1 - 10);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, 12, false);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn single_line_screen_pos_tracks_text() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        let area = Rect::new(5, 2, 20, 3);
        assert_eq!(cursor.screen_pos("asdf", area, false), (5 + 1 + 3, 3));
    }

    #[test]
    fn multiline_cursor_after_newline_is_next_line() {
        let buffer = "hi\n";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        assert_eq!(cursor.calculate_line(buffer, 20), 1);
        let area = Rect::new(0, 0, 20, 6);
        assert_eq!(cursor.screen_pos(buffer, area, true), (1, 2));
    }

    #[test]
    fn move_vertically_keeps_column() {
        let buffer = "abcd\nefgh";
        let mut cursor = CursorState::new();
        cursor.pos = 7; // after "ef"
        assert!(cursor.move_vertically(buffer, -1, 20));
        assert_eq!(cursor.pos, 2);
        assert!(!cursor.move_vertically(buffer, -1, 20));
        assert!(cursor.move_vertically(buffer, 1, 20));
        assert_eq!(cursor.pos, 7);
        assert!(!cursor.move_vertically(buffer, 1, 20));
    }

    #[test]
    fn multiline_scrolls_past_visible_lines() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 20, true);
        assert_eq!(cursor.scroll_offset, 6 - MAX_VISIBLE_LINES);
    }
}
