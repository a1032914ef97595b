//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (key, paste, click or resize). All pending
//! events are drained before the next draw.
//!
//! ## Focus
//!
//! Exactly one control has focus: one of the four fields or the Submit
//! button. Tab / Shift+Tab cycle through them; Up/Down and Enter move
//! between single-line fields; a left click focuses whatever is under the
//! pointer. When a submit is rejected, focus jumps to the first invalid field.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::field::Field;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonEvent, FieldEvent, SubmitButton, TextField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use ui::{FORM_WIDTH, draw_ui, hit_test};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// The control that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    /// Next control in tab order, wrapping from Submit back to the first field.
    pub fn next(self) -> Focus {
        match self {
            Focus::Field(field) => field.next().map_or(Focus::Submit, Focus::Field),
            Focus::Submit => Focus::Field(Field::FirstName),
        }
    }

    /// Previous control in tab order, wrapping from the first field to Submit.
    pub fn prev(self) -> Focus {
        match self {
            Focus::Field(field) => field.prev().map_or(Focus::Submit, Focus::Field),
            Focus::Submit => Focus::Field(Field::Message),
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// One input per `Field`, indexed by `Field::index()`
    pub fields: Vec<TextField>,
    pub button: SubmitButton,
    pub focus: Focus,
    /// Screen areas of focusable controls from the last draw (for mouse clicks)
    pub hit_areas: Vec<(Focus, Rect)>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            fields: Field::ALL
                .iter()
                .map(|&field| TextField::new(field, config.placeholder(field)))
                .collect(),
            button: SubmitButton::new(),
            focus: Focus::Field(Field::FirstName),
            hit_areas: Vec::new(),
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        &mut self.fields[field.index()]
    }
}

/// Route one terminal event through the focused component and into `core::update`.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Submit => submit(app, tui),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        TuiEvent::MouseClick(col, row) => match hit_test(&tui.hit_areas, col, row) {
            Some(Focus::Submit) => {
                tui.focus = Focus::Submit;
                submit(app, tui)
            }
            Some(focus) => {
                tui.focus = focus;
                Effect::None
            }
            None => Effect::None,
        },
        event => match tui.focus {
            Focus::Field(field) => match tui.field_mut(field).handle_event(&event) {
                Some(FieldEvent::Changed(value)) => {
                    update(app, Action::FieldChanged { field, value })
                }
                Some(FieldEvent::FocusNext) => {
                    tui.focus = tui.focus.next();
                    Effect::None
                }
                Some(FieldEvent::FocusPrev) => {
                    tui.focus = tui.focus.prev();
                    Effect::None
                }
                Some(FieldEvent::CursorMoved) | None => Effect::None,
            },
            Focus::Submit => match tui.button.handle_event(&event) {
                Some(ButtonEvent::Pressed) => submit(app, tui),
                Some(ButtonEvent::FocusNext) => {
                    tui.focus = tui.focus.next();
                    Effect::None
                }
                Some(ButtonEvent::FocusPrev) => {
                    tui.focus = tui.focus.prev();
                    Effect::None
                }
                None => Effect::None,
            },
        },
    }
}

fn submit(app: &mut App, tui: &mut TuiState) -> Effect {
    let effect = update(app, Action::Submit);
    if effect == Effect::Rejected
        && let Some(field) = app.errors().iter().next().map(|e| e.field)
    {
        tui.focus = Focus::Field(field);
    }
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    // Guard lives for the loop only; modes are reset before the terminal is restored
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => Err(e),
    };

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
