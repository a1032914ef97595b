//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! A keystroke in a field? That's `Action::FieldChanged { field, value }`.
//! Ctrl+S or the Submit button? That's `Action::Submit`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what (if anything) to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::field::Field;
use crate::core::form::Submission;
use crate::core::state::{App, FormPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The full new value of a field after an edit.
    FieldChanged { field: Field, value: String },
    Submit,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A submit passed validation and `app.submission` was replaced.
    Submitted,
    /// A submit was refused; the errors are now all visible.
    Rejected,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FieldChanged { field, value } => {
            app.form.set(field, value);
            app.touched[field.index()] = true;
            app.phase = FormPhase::Editing;
            debug!(
                "{} changed ({} chars), {} error(s) now",
                field,
                app.form.get(field).chars().count(),
                app.errors().len()
            );
            Effect::None
        }
        Action::Submit => {
            app.submit_attempted = true;
            app.touched = [true; 4];
            let errors = app.errors();
            if errors.is_empty() {
                app.submission = Some(Submission::capture(&app.form));
                app.phase = FormPhase::Accepted;
                app.status_message = String::from("Submitted");
                info!("Submission accepted");
                Effect::Submitted
            } else {
                app.phase = FormPhase::Rejected(errors.len());
                app.status_message = format!("{} field(s) need attention", errors.len());
                let names: Vec<&str> = errors.iter().map(|e| e.field.name()).collect();
                info!("Submission rejected: {}", names.join(", "));
                Effect::Rejected
            }
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fill_valid, test_app, type_into};

    #[test]
    fn test_empty_submit_rejects_with_three() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit), Effect::Rejected);
        assert_eq!(app.phase, FormPhase::Rejected(3));
        assert_eq!(app.visible_errors().len(), 3);
        assert!(app.submission.is_none());
    }

    #[test]
    fn test_valid_submit_captures_snapshot() {
        let mut app = test_app();
        fill_valid(&mut app);
        assert_eq!(update(&mut app, Action::Submit), Effect::Submitted);
        assert_eq!(app.phase, FormPhase::Accepted);
        let submission = app.submission.clone().unwrap();
        assert_eq!(submission.first_name, "Jessica");
        assert!(submission.message.is_none());
    }

    #[test]
    fn test_edit_after_accept_returns_to_editing_and_keeps_snapshot() {
        let mut app = test_app();
        fill_valid(&mut app);
        update(&mut app, Action::Submit);
        type_into(&mut app, Field::FirstName, "Jo");
        assert_eq!(app.phase, FormPhase::Editing);
        assert_eq!(app.submission.as_ref().unwrap().first_name, "Jessica");
    }

    #[test]
    fn test_rejected_submit_keeps_previous_snapshot() {
        let mut app = test_app();
        fill_valid(&mut app);
        update(&mut app, Action::Submit);
        type_into(&mut app, Field::Email, "nope");
        assert_eq!(update(&mut app, Action::Submit), Effect::Rejected);
        assert_eq!(app.submission.as_ref().unwrap().email, "asd@gmail.com");
    }

    #[test]
    fn test_errors_stay_visible_while_editing_after_submit() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        type_into(&mut app, Field::FirstName, "Jessica");
        assert_eq!(app.visible_errors().len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
