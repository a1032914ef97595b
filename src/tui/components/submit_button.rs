//! # SubmitButton Component
//!
//! A focusable button. Enter or Space while focused emits `ButtonEvent::Pressed`.

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const BUTTON_WIDTH: u16 = 12;
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
    FocusNext,
    FocusPrev,
}

pub struct SubmitButton {
    pub label: String,
    /// Whether the button has focus (Prop)
    pub focused: bool,
}

impl SubmitButton {
    pub fn new() -> Self {
        Self {
            label: String::from("Submit"),
            focused: false,
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let button = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded));

        frame.render_widget(button, area);
    }
}

impl EventHandler for SubmitButton {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Enter | TuiEvent::InputChar(' ') => Some(ButtonEvent::Pressed),
            TuiEvent::CursorDown => Some(ButtonEvent::FocusNext),
            TuiEvent::CursorUp => Some(ButtonEvent::FocusPrev),
            _ => None,
        }
    }
}
