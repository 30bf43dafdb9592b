use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    contact::{FirstName, LastName, Message},
    email_address::EmailAddress,
    macros::id,
};

id!(FormId);

/// One of the inputs of the contact form.
///
/// The declaration order is the order in which fields are rendered and
/// validated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];
    pub const REQUIRED: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// The name of the field as used in input names and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFieldError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field {0:?}.")]
pub struct UnknownFieldError(pub String);

/// The raw values of the inputs, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Snapshot of the values taken at the last successful submission.
///
/// A record can only be built from values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    pub message: Message,
}

/// State of a mounted contact form.
///
/// `revealed` holds the required fields whose validation result is currently
/// displayed. Validation errors themselves are never stored, they are always
/// recomputed from `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub revealed: BTreeSet<Field>,
    pub submitted: Option<SubmittedRecord>,
}

/// An event handled by a contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Change { field: Field, value: String },
    Submit,
}
