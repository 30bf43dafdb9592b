//! The visual tree of a contact form, independent of any output format.
//!
//! Every error and every summary region carries a test id that is unique
//! within a view, so tests can assert presence and absence without matching
//! on ordinary text.

use serde::Serialize;

use crate::form::Field;

pub const HEADER: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUMMARY_HEADER: &str = "You Submitted:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub header: &'static str,
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    pub summary: Option<SummaryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub field: Field,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: String,
    pub error: Option<ErrorView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Textarea,
}

impl From<Field> for InputKind {
    fn from(value: Field) -> Self {
        match value {
            Field::FirstName | Field::LastName => Self::Text,
            Field::Email => Self::Email,
            Field::Message => Self::Textarea,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub test_id: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub header: &'static str,
    pub entries: Vec<SummaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub test_id: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub fn error_test_id(field: Field) -> &'static str {
    match field {
        Field::FirstName => "firstNameError",
        Field::LastName => "lastNameError",
        Field::Email => "emailError",
        Field::Message => "messageError",
    }
}

pub fn display_test_id(field: Field) -> &'static str {
    match field {
        Field::FirstName => "firstnameDisplay",
        Field::LastName => "lastnameDisplay",
        Field::Email => "emailDisplay",
        Field::Message => "messageDisplay",
    }
}

pub fn display_label(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First Name",
        Field::LastName => "Last Name",
        Field::Email => "Email",
        Field::Message => "Message",
    }
}

impl ContactFormView {
    /// Returns the displayed errors in field order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorView> {
        self.inputs.iter().filter_map(|input| input.error.as_ref())
    }

    pub fn input(&self, field: Field) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.field == field)
    }

    /// Looks up the text of the error or summary region with the given test
    /// id.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&str> {
        let error = self
            .errors()
            .find(|error| error.test_id == test_id)
            .map(|error| error.message.as_str());
        let entry = || {
            self.summary
                .iter()
                .flat_map(|summary| &summary.entries)
                .find(|entry| entry.test_id == test_id)
                .map(|entry| entry.value.as_str())
        };
        error.or_else(entry)
    }
}
