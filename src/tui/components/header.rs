//! # Header Component
//!
//! Top line showing the form title and the current status text.
//!
//! Stateless: all data comes in as props.
//!
//! ```text
//! Contact Form | 2 field(s) need attention
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct Header {
    /// Form title (e.g. "Contact Form")
    pub title: String,
    /// Status text; omitted when empty
    pub status_message: String,
}

impl Header {
    pub fn new(title: String, status_message: String) -> Self {
        Self {
            title,
            status_message,
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
