use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,      // Esc
    ForceQuit, // Ctrl+C
    Submit,    // Ctrl+S

    // TUI-local events (handled directly in TUI)
    Enter,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    FocusNext, // Tab
    FocusPrev, // Shift+Tab
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }

    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };

    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            translate_key(key_event.modifiers, key_event.code)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::Submit),
        // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
        (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Enter),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}
