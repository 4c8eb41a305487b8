//! Contact form state and validation.
//!
//! Validation runs before any network call. A failed submission keeps the
//! form contents so the visitor can retry; a successful one clears them.

use std::fmt;

use serde::Serialize;

use crate::email::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "johndoe@example.com",
            Field::Message => "Write your message here...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// A required field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fill in the {} field!", self.field.label())
    }
}

impl std::error::Error for ValidationError {}

/// A validated message, ready to hand to the email client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What happened when the visitor pressed send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Valid; the caller should send this.
    Send(ContactMessage),
    /// A required field is empty; nothing is sent.
    Invalid(ValidationError),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focused: Field,
    submitting: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused;
        if c == '\n' && !field.is_multiline() {
            return;
        }
        self.value_mut(field).push(c);
    }

    /// Pastes text into the focused field. Newlines are dropped from
    /// single-line fields.
    pub fn insert_str(&mut self, text: &str) {
        let field = self.focused;
        let target = self.value_mut(field);
        if field.is_multiline() {
            target.push_str(text);
        } else {
            target.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Checks every required field, in display order.
    ///
    /// # Errors
    /// Returns the first field that is empty after trimming.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                return Err(ValidationError { field });
            }
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates and, on success, marks the form as submitting.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.submitting {
            return SubmitAttempt::Busy;
        }
        match self.validate() {
            Ok(message) => {
                self.submitting = true;
                SubmitAttempt::Send(message)
            }
            Err(err) => {
                self.focused = err.field;
                SubmitAttempt::Invalid(err)
            }
        }
    }

    /// Applies the outcome of a submission. Only success clears the fields.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        self.submitting = false;
        if result.is_ok() {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
