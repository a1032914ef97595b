//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::field::Field;
use crate::core::state::App;
use crate::core::validate::Rules;

/// Creates a test App with default rules.
pub fn test_app() -> App {
    App::new(Rules::default())
}

/// Types `text` into `field` one character at a time, like a user would.
pub fn type_into(app: &mut App, field: Field, text: &str) {
    let mut value = String::new();
    for c in text.chars() {
        value.push(c);
        update(
            app,
            Action::FieldChanged {
                field,
                value: value.clone(),
            },
        );
    }
}

/// Fills the three required fields with values that pass validation.
pub fn fill_valid(app: &mut App) {
    type_into(app, Field::FirstName, "Jessica");
    type_into(app, Field::LastName, "Ambrocio");
    type_into(app, Field::Email, "asd@gmail.com");
}
