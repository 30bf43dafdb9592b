use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    contact::{FirstName, FirstNameError, LastNameError},
    form::Field,
};

/// Why a single field is invalid. These are user input problems and always
/// recoverable by further input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("is a required field")]
    MissingRequiredField,
    #[error("must have at least {min_length} characters.")]
    TooShort { min_length: usize },
    #[error("has an invalid format")]
    InvalidFormat,
}

impl FieldError {
    /// The user facing message for this error on the given field.
    ///
    /// Messages always start with the input name of the field (`firstName`,
    /// `lastName`, `email`), never with a lowercased variant like `lastname`.
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (Self::InvalidFormat, Field::Email) => {
                format!("{field} must be a valid email address")
            }
            _ => format!("{field} {self}"),
        }
    }
}

impl From<FirstNameError> for FieldError {
    fn from(value: FirstNameError) -> Self {
        match value {
            FirstNameError::NotEmptyViolated => Self::MissingRequiredField,
            FirstNameError::LenCharMinViolated => Self::TooShort {
                min_length: FirstName::MIN_LENGTH,
            },
        }
    }
}

impl From<LastNameError> for FieldError {
    fn from(value: LastNameError) -> Self {
        match value {
            LastNameError::NotEmptyViolated => Self::MissingRequiredField,
        }
    }
}

/// The invalid fields of a form, ordered by [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<(Field, FieldError)> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = (Field, FieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
