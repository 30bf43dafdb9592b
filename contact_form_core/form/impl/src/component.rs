//! The contact form component: a message handler operating on an owned
//! [`FormState`] and a pure projection of that state onto a
//! [`ContactFormView`].

use contact_form_models::{
    form::{Field, FormMessage, FormState, SubmittedRecord},
    validation::ValidationErrors,
    view::{
        display_label, display_test_id, error_test_id, ContactFormView, ErrorView, InputView,
        SummaryEntry, SummaryView, HEADER, SUBMIT_LABEL, SUMMARY_HEADER,
    },
};
use contact_form_shared_contracts::validation::ValidationService;

use crate::FormFeatureConfig;

#[derive(Debug)]
pub struct ContactForm<'a, Validation> {
    validation: &'a Validation,
    config: &'a FormFeatureConfig,
}

/// The result of applying a [`FormMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Changed,
    Submitted,
    /// The submission was aborted, the submitted record is unchanged.
    Rejected(ValidationErrors),
}

impl<'a, Validation> ContactForm<'a, Validation>
where
    Validation: ValidationService,
{
    pub fn new(validation: &'a Validation, config: &'a FormFeatureConfig) -> Self {
        Self { validation, config }
    }

    pub fn update(&self, state: &mut FormState, message: FormMessage) -> FormUpdate {
        match message {
            FormMessage::Change { field, value } => {
                self.change(state, field, value);
                FormUpdate::Changed
            }
            FormMessage::Submit => match self.submit(state) {
                Ok(()) => FormUpdate::Submitted,
                Err(errors) => FormUpdate::Rejected(errors),
            },
        }
    }

    /// Replaces the value of `field` and reveals its error, if it has one.
    pub fn change(&self, state: &mut FormState, field: Field, value: String) {
        state.values.set(field, value);
        if field.is_required() {
            state.revealed.insert(field);
        }
    }

    /// Reveals all required fields and records the current values if they are
    /// valid. On failure the previously submitted record is kept.
    pub fn submit(&self, state: &mut FormState) -> Result<(), ValidationErrors> {
        state.revealed.extend(Field::REQUIRED);
        let record = self.validation.build_record(&state.values)?;
        state.submitted = Some(record);
        if self.config.reset_on_submit {
            state.values = Default::default();
            state.revealed.clear();
        }
        Ok(())
    }

    /// Returns the errors of all revealed fields.
    pub fn errors(&self, state: &FormState) -> ValidationErrors {
        state
            .revealed
            .iter()
            .filter_map(|&field| {
                self.validation
                    .validate_field(field, &state.values)
                    .map(|error| (field, error))
            })
            .collect()
    }

    pub fn view(&self, state: &FormState) -> ContactFormView {
        let errors = self.errors(state);

        let inputs = Field::ALL
            .into_iter()
            .map(|field| InputView {
                field,
                label: field.label(),
                kind: field.into(),
                value: state.values.get(field).to_owned(),
                error: errors.get(field).map(|error| ErrorView {
                    test_id: error_test_id(field),
                    message: error.message(field),
                }),
            })
            .collect();

        ContactFormView {
            header: HEADER,
            inputs,
            submit_label: SUBMIT_LABEL,
            summary: state.submitted.as_ref().map(summary),
        }
    }
}

fn summary(record: &SubmittedRecord) -> SummaryView {
    let message = (!record.message.is_empty()).then(|| (Field::Message, (*record.message).clone()));

    let entries = [
        (Field::FirstName, (*record.first_name).clone()),
        (Field::LastName, (*record.last_name).clone()),
        (Field::Email, record.email.to_string()),
    ]
    .into_iter()
    .chain(message)
    .map(|(field, value)| SummaryEntry {
        test_id: display_test_id(field),
        label: display_label(field),
        value,
    })
    .collect();

    SummaryView {
        header: SUMMARY_HEADER,
        entries,
    }
}
