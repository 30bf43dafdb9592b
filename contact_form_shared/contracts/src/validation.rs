use contact_form_models::{
    form::{Field, FormValues, SubmittedRecord},
    validation::{FieldError, ValidationErrors},
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ValidationService: Send + Sync + 'static {
    /// Validates a single field of the form.
    ///
    /// Only the value of `field` is inspected. The message is never validated.
    fn validate_field(&self, field: Field, values: &FormValues) -> Option<FieldError>;

    /// Validates all required fields.
    fn validate(&self, values: &FormValues) -> ValidationErrors;

    /// Builds a [`SubmittedRecord`] from the given values, or returns every
    /// violation if any required field is invalid.
    fn build_record(&self, values: &FormValues) -> Result<SubmittedRecord, ValidationErrors>;
}

#[cfg(feature = "mock")]
impl MockValidationService {
    pub fn with_validate_field(
        mut self,
        field: Field,
        values: FormValues,
        result: Option<FieldError>,
    ) -> Self {
        self.expect_validate_field()
            .once()
            .with(mockall::predicate::eq(field), mockall::predicate::eq(values))
            .return_const(result);
        self
    }

    pub fn with_build_record(
        mut self,
        values: FormValues,
        result: Result<SubmittedRecord, ValidationErrors>,
    ) -> Self {
        self.expect_build_record()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(|_| result);
        self
    }
}
