//! # Validation
//!
//! A pure function from `FormState` to `ErrorSet`. Nothing here is cached:
//! callers recompute the set whenever they need it.
//!
//! ```text
//! Field      │ empty             │ non-empty but bad
//! ───────────┼───────────────────┼──────────────────────────────
//! firstName  │ MissingRequired   │ TooShort (fewer than min chars)
//! lastName   │ MissingRequired   │ n/a
//! email      │ MissingRequired   │ InvalidFormat
//! message    │ n/a               │ n/a
//! ```
//!
//! Each field yields at most one error. Every field is checked, so an empty
//! form reports all three required fields at once.

use std::fmt;

use email_address::{EmailAddress, Options};

use crate::core::field::Field;
use crate::core::form::FormState;

pub const DEFAULT_FIRST_NAME_MIN_LEN: usize = 5;

/// Tunable parts of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Minimum number of characters for firstName.
    pub first_name_min_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            first_name_min_len: DEFAULT_FIRST_NAME_MIN_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingRequired,
    TooShort { min: usize },
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingRequired => write!(f, "{} is a required field", self.field),
            ErrorKind::TooShort { min } => {
                write!(f, "{} must have at least {} characters", self.field, min)
            }
            ErrorKind::InvalidFormat => {
                write!(f, "{} must be a valid {} address", self.field, self.field)
            }
        }
    }
}

/// Ordered validation failures, at most one per field, in `Field::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(Vec<ValidationError>);

impl ErrorSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Keep only the errors whose field passes `visible`.
    pub fn filtered(&self, visible: impl Fn(Field) -> bool) -> ErrorSet {
        ErrorSet(self.0.iter().filter(|e| visible(e.field)).cloned().collect())
    }

    /// Rendered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate every field of `form`.
pub fn validate(form: &FormState, rules: &Rules) -> ErrorSet {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| {
            check_field(field, form.get(field), rules).map(|kind| ValidationError { field, kind })
        })
        .collect();
    ErrorSet(errors)
}

/// Check a single field value. Emptiness wins over any other rule.
pub fn check_field(field: Field, value: &str, rules: &Rules) -> Option<ErrorKind> {
    let required = !matches!(field, Field::Message);
    if value.is_empty() {
        return required.then_some(ErrorKind::MissingRequired);
    }

    match field {
        Field::FirstName if value.chars().count() < rules.first_name_min_len => {
            Some(ErrorKind::TooShort {
                min: rules.first_name_min_len,
            })
        }
        Field::Email if !is_valid_email(value) => Some(ErrorKind::InvalidFormat),
        _ => None,
    }
}

/// `local@domain.tld`: a bare address with a dotted domain.
///
/// Display text (`Name <a@b.c>`), domain literals (`a@[1.2.3.4]`) and quoted
/// local parts (`"a b"@c.d`) are all valid RFC 5322 but rejected here.
pub fn is_valid_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();
    let Ok(address) = EmailAddress::parse_with_options(value, options) else {
        return false;
    };
    if address.local_part().starts_with('"') {
        return false;
    }
    address.domain().split('.').all(|label| !label.is_empty())
}
