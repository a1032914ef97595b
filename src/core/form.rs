//! # Form Values
//!
//! `FormState` is the live, editable data. `Submission` is the frozen copy
//! taken when a submit passes validation.

use crate::core::field::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Snapshot of a form that passed validation.
///
/// `message` is `None` when the user left it blank, so "no message" is a
/// distinct state rather than an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: Option<String>,
}

impl Submission {
    pub fn capture(form: &FormState) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            message: (!form.message.is_empty()).then(|| form.message.clone()),
        }
    }
}
