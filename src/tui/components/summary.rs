//! # Summary Component
//!
//! Shows the last accepted submission:
//!
//! ```text
//! ╭You Submitted:──────────╮
//! │First Name: Jessica     │
//! │Last Name: Ambrocio     │
//! │Email: asd@gmail.com    │
//! │Message: text           │   ← only when a message was given
//! ╰────────────────────────╯
//! ```
//!
//! The summary reads from `Submission`, not from the live form, so editing
//! the fields afterwards does not change what is shown.

use crate::core::form::Submission;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

pub const SUMMARY_TITLE: &str = "You Submitted:";
pub const MESSAGE_LABEL: &str = "Message: ";

pub struct Summary<'a> {
    pub submission: &'a Submission,
}

impl<'a> Summary<'a> {
    pub fn new(submission: &'a Submission) -> Self {
        Self { submission }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let row = |name: &'static str, value: &'a str| {
            Line::from(vec![Span::styled(name, label), Span::raw(value)])
        };

        let s = self.submission;
        let mut lines = vec![
            row("First Name: ", &s.first_name),
            row("Last Name: ", &s.last_name),
            row("Email: ", &s.email),
        ];
        if let Some(message) = &s.message {
            let mut parts = message.lines();
            lines.push(row(MESSAGE_LABEL, parts.next().unwrap_or_default()));
            lines.extend(parts.map(Line::raw));
        }
        lines
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: false })
    }

    /// Wrapped rows at `width` plus borders.
    pub fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1);
        let rows = self.paragraph().line_count(inner_width);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Component for Summary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(SUMMARY_TITLE);

        frame.render_widget(self.paragraph().block(block), area);
    }
}
