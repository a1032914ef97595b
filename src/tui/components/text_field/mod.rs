//! # TextField Component
//!
//! One labeled input of the contact form.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Show the placeholder while empty
//! - Color the border by focus and validation status
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Every edit emits
//! `FieldEvent::Changed` with the full new value so the parent can forward
//! it to `core::update`. `focused` and `status` are props set by the parent
//! before each render.
//!
//! Single-line fields drop newlines (Enter advances focus instead).
//! The message field wraps and scrolls vertically.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::field::Field;
use crate::core::state::FieldStatus;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    skip_columns, wrap_options,
};

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Buffer content changed; carries the full new value
    Changed(String),
    /// Cursor moved without changing content
    CursorMoved,
    /// Focus should move to the next control (Enter / Down at the last line)
    FocusNext,
    /// Focus should move to the previous control (Up at the first line)
    FocusPrev,
}

/// Labeled text input.
///
/// # Props
///
/// - `focused`: whether this field receives key input (draws the cursor)
/// - `status`: validation status, drives the border color
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: cursor position and scroll offset (see `CursorState`)
pub struct TextField {
    pub field: Field,
    pub placeholder: String,
    /// Text buffer (Internal State)
    buffer: String,
    /// Whether the field has focus (Prop)
    pub focused: bool,
    /// Validation status (Prop)
    pub status: FieldStatus,
    cursor: CursorState,
}

impl TextField {
    pub fn new(field: Field, placeholder: impl Into<String>) -> Self {
        Self {
            field,
            placeholder: placeholder.into(),
            buffer: String::new(),
            focused: false,
            status: FieldStatus::Untouched,
            cursor: CursorState::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Rendered height, borders included.
    pub fn height(&self) -> u16 {
        if self.field.is_multiline() {
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        } else {
            1 + VERTICAL_OVERHEAD
        }
    }

    fn border_style(&self) -> Style {
        let base = match self.status {
            FieldStatus::Untouched => Style::default(),
            FieldStatus::Valid => Style::default().fg(Color::Green),
            FieldStatus::Invalid => Style::default().fg(Color::Red),
        };
        if self.focused {
            base.add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        }
    }

    /// Visible slice of the buffer for the current scroll offset.
    fn visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        if !self.field.is_multiline() {
            return skip_columns(&self.buffer, self.cursor.scroll_offset).to_string();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    fn insert(&mut self, text: &str) -> Option<FieldEvent> {
        let text: String = if self.field.is_multiline() {
            text.to_string()
        } else {
            text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
        };
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
        Some(FieldEvent::Changed(self.buffer.clone()))
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let multiline = self.field.is_multiline();
        self.cursor.last_content_width = area.width;
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, multiline);

        let border_style = self.border_style();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.field.label())
            .title_style(border_style);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_text(area.width))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let position = self.cursor.screen_pos(&self.buffer, area, multiline);
            frame.set_cursor_position(position);
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Enter if self.field.is_multiline() => self.insert("\n"),
            TuiEvent::Enter => Some(FieldEvent::FocusNext),
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(FieldEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    FieldEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    FieldEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => {
                let moved = self.field.is_multiline()
                    && self
                        .cursor
                        .move_vertically(&self.buffer, -1, self.cursor.last_content_width);
                Some(if moved { FieldEvent::CursorMoved } else { FieldEvent::FocusPrev })
            }
            TuiEvent::CursorDown => {
                let moved = self.field.is_multiline()
                    && self
                        .cursor
                        .move_vertically(&self.buffer, 1, self.cursor.last_content_width);
                Some(if moved { FieldEvent::CursorMoved } else { FieldEvent::FocusNext })
            }
            _ => None,
        }
    }
}
