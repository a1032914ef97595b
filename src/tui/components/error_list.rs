//! # ErrorList Component
//!
//! Renders the visible validation errors, one per line. Every line starts
//! with `Error:` so each error is a distinct, findable element.

use crate::core::validate::ErrorSet;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

pub const ERROR_PREFIX: &str = "Error: ";

pub struct ErrorList {
    /// Errors to show (Prop)
    pub errors: ErrorSet,
}

impl ErrorList {
    pub fn new(errors: ErrorSet) -> Self {
        Self { errors }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
    }

    /// One row per error, more when a message wraps at `width`.
    pub fn height(&self, width: u16) -> u16 {
        if self.errors.is_empty() {
            return 0;
        }
        let rows = self.paragraph().line_count(width.max(1));
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.errors
            .iter()
            .map(|e| Line::from(format!("{ERROR_PREFIX}{e}")))
            .collect()
    }
}

impl Component for ErrorList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.errors.is_empty() {
            return;
        }
        frame.render_widget(self.paragraph(), area);
    }
}
