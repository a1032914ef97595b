//! # Form Fields
//!
//! The four inputs of the contact form. Each field knows its wire name
//! (used in validation messages), its label, and whether it accepts
//! multiple lines.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// Every field in display (and validation) order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Name used in error messages, e.g. `"firstName is a required field"`.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label rendered above the input. Required fields carry a `*`.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next field in tab order, or `None` after the last one.
    pub fn next(self) -> Option<Field> {
        Field::ALL.get(self.index() + 1).copied()
    }

    /// Previous field in tab order, or `None` before the first one.
    pub fn prev(self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Field::ALL[i])
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
