use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use contact_form_core_form_contracts::{
    FormChangeError, FormFeatureService, FormSubmitError, FormUnmountError, FormViewError,
    MountedForm,
};
use contact_form_models::{
    form::{Field, FormId, FormState, FormValues},
    view::ContactFormView,
};
use contact_form_shared_contracts::{
    id::IdService, time::TimeService, validation::ValidationService,
};
use tokio::sync::RwLock;
use tracing::debug;

pub use crate::component::{ContactForm, FormUpdate};

mod component;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct FormFeatureServiceImpl<Time, Id, Validation> {
    time: Time,
    id: Id,
    validation: Validation,
    config: FormFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct FormFeatureConfig {
    /// Clear the inputs after a successful submission.
    pub reset_on_submit: bool,
    /// Forms that have not been accessed for this long are unmounted.
    pub idle_ttl: Duration,
}

impl Default for FormFeatureConfig {
    fn default() -> Self {
        Self {
            reset_on_submit: false,
            idle_ttl: Duration::from_secs(30 * 60),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    forms: RwLock<HashMap<FormId, MountedState>>,
}

#[derive(Debug)]
struct MountedState {
    form: FormState,
    last_access: DateTime<Utc>,
}

impl MountedState {
    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now >= self.last_access + ttl
    }
}

impl<Time, Id, Validation> FormFeatureServiceImpl<Time, Id, Validation>
where
    Time: TimeService,
    Id: IdService,
    Validation: ValidationService,
{
    pub fn new(time: Time, id: Id, validation: Validation, config: FormFeatureConfig) -> Self {
        Self {
            time,
            id,
            validation,
            config,
            state: Default::default(),
        }
    }

    fn component(&self) -> ContactForm<'_, Validation> {
        ContactForm::new(&self.validation, &self.config)
    }

    /// Looks up a form and marks it as accessed. An idle form is unmounted
    /// instead and treated as missing.
    fn access<'a>(
        &self,
        forms: &'a mut HashMap<FormId, MountedState>,
        id: FormId,
    ) -> Option<&'a mut FormState> {
        let now = self.time.now();
        if forms.get(&id)?.is_idle(now, self.config.idle_ttl) {
            forms.remove(&id);
            debug!(?id, "unmounted idle form");
            return None;
        }

        let mounted = forms.get_mut(&id)?;
        mounted.last_access = now;
        Some(&mut mounted.form)
    }

    fn evict_idle(&self, forms: &mut HashMap<FormId, MountedState>) {
        let now = self.time.now();
        let before = forms.len();
        forms.retain(|_, mounted| !mounted.is_idle(now, self.config.idle_ttl));

        let evicted = before - forms.len();
        if evicted > 0 {
            debug!(evicted, "unmounted idle forms");
        }
    }

    fn finish_submit(
        &self,
        component: &ContactForm<'_, Validation>,
        form: &mut FormState,
    ) -> Result<ContactFormView, FormSubmitError> {
        let result = component.submit(form);
        let view = component.view(form);

        match result {
            Ok(()) => {
                debug!("accepted submission");
                Ok(view)
            }
            Err(errors) => {
                debug!(invalid = errors.len(), "rejected submission");
                Err(FormSubmitError::Invalid(view.into()))
            }
        }
    }
}

impl<Time, Id, Validation> FormFeatureService for FormFeatureServiceImpl<Time, Id, Validation>
where
    Time: TimeService,
    Id: IdService,
    Validation: ValidationService,
{
    #[tracing::instrument(skip(self))]
    async fn mount(&self) -> MountedForm {
        let id = self.id.generate::<FormId>();
        let form = FormState::default();
        let view = self.component().view(&form);

        let mut forms = self.state.forms.write().await;
        self.evict_idle(&mut forms);
        forms.insert(
            id,
            MountedState {
                form,
                last_access: self.time.now(),
            },
        );
        debug!(?id, "mounted form");

        MountedForm { id, view }
    }

    #[tracing::instrument(skip(self))]
    async fn unmount(&self, id: FormId) -> Result<(), FormUnmountError> {
        let now = self.time.now();
        self.state
            .forms
            .write()
            .await
            .remove(&id)
            .filter(|mounted| !mounted.is_idle(now, self.config.idle_ttl))
            .map(|_| debug!("unmounted form"))
            .ok_or(FormUnmountError::NotFound)
    }

    async fn view(&self, id: FormId) -> Result<ContactFormView, FormViewError> {
        let mut forms = self.state.forms.write().await;
        let form = self.access(&mut forms, id).ok_or(FormViewError::NotFound)?;
        Ok(self.component().view(form))
    }

    #[tracing::instrument(skip(self, value))]
    async fn change(
        &self,
        id: FormId,
        field: Field,
        value: String,
    ) -> Result<ContactFormView, FormChangeError> {
        let mut forms = self.state.forms.write().await;
        let form = self.access(&mut forms, id).ok_or(FormChangeError::NotFound)?;

        let component = self.component();
        component.change(form, field, value);
        Ok(component.view(form))
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&self, id: FormId) -> Result<ContactFormView, FormSubmitError> {
        let mut forms = self.state.forms.write().await;
        let form = self.access(&mut forms, id).ok_or(FormSubmitError::NotFound)?;

        self.finish_submit(&self.component(), form)
    }

    #[tracing::instrument(skip(self, values))]
    async fn submit_values(
        &self,
        id: FormId,
        values: FormValues,
    ) -> Result<ContactFormView, FormSubmitError> {
        let mut forms = self.state.forms.write().await;
        let form = self.access(&mut forms, id).ok_or(FormSubmitError::NotFound)?;

        let component = self.component();
        let FormValues {
            first_name,
            last_name,
            email,
            message,
        } = values;
        for (field, value) in [
            (Field::FirstName, first_name),
            (Field::LastName, last_name),
            (Field::Email, email),
            (Field::Message, message),
        ] {
            component.change(form, field, value);
        }

        self.finish_submit(&component, form)
    }

    async fn mounted(&self) -> usize {
        let mut forms = self.state.forms.write().await;
        self.evict_idle(&mut forms);
        forms.len()
    }
}
