use std::future::Future;

use contact_form_models::{
    form::{Field, FormId, FormValues},
    view::ContactFormView,
};
use thiserror::Error;

/// Hosts mounted contact forms and applies user events to them.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormFeatureService: Send + Sync + 'static {
    /// Mounts a fresh, empty form and unmounts all idle forms.
    fn mount(&self) -> impl Future<Output = MountedForm> + Send;

    /// Destroys a mounted form and all of its state.
    fn unmount(&self, id: FormId) -> impl Future<Output = Result<(), FormUnmountError>> + Send;

    /// Renders the current state of a form.
    fn view(&self, id: FormId) -> impl Future<Output = Result<ContactFormView, FormViewError>> + Send;

    /// Replaces the value of a single field and re-validates that field.
    fn change(
        &self,
        id: FormId,
        field: Field,
        value: String,
    ) -> impl Future<Output = Result<ContactFormView, FormChangeError>> + Send;

    /// Validates all required fields and, if they are valid, records the
    /// current values as submitted.
    fn submit(&self, id: FormId)
        -> impl Future<Output = Result<ContactFormView, FormSubmitError>> + Send;

    /// Enters all values into their inputs and submits the form as a single
    /// update, so no other event on the same form can interleave.
    fn submit_values(
        &self,
        id: FormId,
        values: FormValues,
    ) -> impl Future<Output = Result<ContactFormView, FormSubmitError>> + Send;

    /// Returns the number of currently mounted forms, after unmounting idle
    /// ones.
    fn mounted(&self) -> impl Future<Output = usize> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedForm {
    pub id: FormId,
    pub view: ContactFormView,
}

#[derive(Debug, Error)]
pub enum FormUnmountError {
    #[error("The form does not exist.")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum FormViewError {
    #[error("The form does not exist.")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum FormChangeError {
    #[error("The form does not exist.")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum FormSubmitError {
    #[error("The form does not exist.")]
    NotFound,
    /// At least one required field is invalid. The view shows the errors.
    #[error("The form contains invalid fields.")]
    Invalid(Box<ContactFormView>),
}

#[cfg(feature = "mock")]
impl MockFormFeatureService {
    pub fn with_mount(mut self, result: MountedForm) -> Self {
        self.expect_mount()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_view(mut self, id: FormId, result: Result<ContactFormView, FormViewError>) -> Self {
        self.expect_view()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_change(
        mut self,
        id: FormId,
        field: Field,
        value: String,
        result: Result<ContactFormView, FormChangeError>,
    ) -> Self {
        self.expect_change()
            .once()
            .with(
                mockall::predicate::eq(id),
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit(
        mut self,
        id: FormId,
        result: Result<ContactFormView, FormSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit_values(
        mut self,
        id: FormId,
        values: FormValues,
        result: Result<ContactFormView, FormSubmitError>,
    ) -> Self {
        self.expect_submit_values()
            .once()
            .with(mockall::predicate::eq(id), mockall::predicate::eq(values))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
