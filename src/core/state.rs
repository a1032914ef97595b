//! # Application State
//!
//! Core form state. Domain logic only; cursor positions, focus and other
//! presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── form: FormState               // live field values (single owner)
//! ├── rules: Rules                  // validation parameters
//! ├── live_validation: bool         // show errors for edited fields pre-submit
//! ├── touched: [bool; 4]            // fields the user has changed
//! ├── submit_attempted: bool        // any submit so far reveals all errors
//! ├── phase: FormPhase              // Editing / Accepted / Rejected
//! ├── submission: Option<Submission>// last accepted snapshot
//! ├── title: String                 // header text
//! └── status_message: String        // status line text
//! ```
//!
//! The error set is never stored here. `errors()` recomputes it from `form`
//! every time.

use crate::core::config::ResolvedConfig;
use crate::core::field::Field;
use crate::core::form::{FormState, Submission};
use crate::core::validate::{ErrorSet, Rules, validate};

pub const DEFAULT_TITLE: &str = "Contact Form";

/// Whole-form lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Last submit passed validation.
    Accepted,
    /// Last submit was refused with this many errors.
    Rejected(usize),
}

/// Per-field status as the user sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

pub struct App {
    pub form: FormState,
    pub rules: Rules,
    pub live_validation: bool,
    pub touched: [bool; 4],
    pub submit_attempted: bool,
    pub phase: FormPhase,
    pub submission: Option<Submission>,
    pub title: String,
    pub status_message: String,
}

impl App {
    pub fn new(rules: Rules) -> Self {
        Self {
            form: FormState::new(),
            rules,
            live_validation: true,
            touched: [false; 4],
            submit_attempted: false,
            phase: FormPhase::Editing,
            submission: None,
            title: DEFAULT_TITLE.to_string(),
            status_message: String::from("Tab to move, Ctrl+S to submit, Esc to quit"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(Rules {
            first_name_min_len: config.first_name_min_len,
        });
        app.title = config.title.clone();
        app.live_validation = config.live_validation;
        app
    }

    /// Every current validation failure, recomputed from `form`.
    pub fn errors(&self) -> ErrorSet {
        validate(&self.form, &self.rules)
    }

    /// Whether errors for `field` should be shown right now.
    pub fn is_revealed(&self, field: Field) -> bool {
        self.submit_attempted || (self.live_validation && self.touched[field.index()])
    }

    /// The subset of `errors()` that the user should currently see.
    pub fn visible_errors(&self) -> ErrorSet {
        self.errors().filtered(|field| self.is_revealed(field))
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        if !self.is_revealed(field) {
            FieldStatus::Untouched
        } else if self.errors().get(field).is_some() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        }
    }
}
