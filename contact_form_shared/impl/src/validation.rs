use contact_form_models::{
    contact::{FirstName, LastName, Message},
    email_address::EmailAddress,
    form::{Field, FormValues, SubmittedRecord},
    validation::{FieldError, ValidationErrors},
};
use contact_form_shared_contracts::validation::ValidationService;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationServiceImpl;

impl ValidationService for ValidationServiceImpl {
    #[tracing::instrument(level = "trace", skip(self, values))]
    fn validate_field(&self, field: Field, values: &FormValues) -> Option<FieldError> {
        let value = values.get(field);
        if field.is_required() && value.is_empty() {
            return Some(FieldError::MissingRequiredField);
        }

        match field {
            Field::FirstName => FirstName::try_new(value.to_owned()).err().map(Into::into),
            Field::LastName => LastName::try_new(value.to_owned()).err().map(Into::into),
            Field::Email => value
                .parse::<EmailAddress>()
                .err()
                .map(|_| FieldError::InvalidFormat),
            Field::Message => None,
        }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn validate(&self, values: &FormValues) -> ValidationErrors {
        Field::REQUIRED
            .into_iter()
            .filter_map(|field| {
                self.validate_field(field, values)
                    .map(|error| (field, error))
            })
            .collect()
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn build_record(&self, values: &FormValues) -> Result<SubmittedRecord, ValidationErrors> {
        let first_name = FirstName::try_new(values.first_name.clone());
        let last_name = LastName::try_new(values.last_name.clone());
        let email = values.email.parse::<EmailAddress>();

        match (first_name, last_name, email) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(SubmittedRecord {
                first_name,
                last_name,
                email,
                message: Message::new(values.message.clone()),
            }),
            _ => Err(self.validate(values)),
        }
    }
}
