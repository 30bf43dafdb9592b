use contact_form_core_form_contracts::MountedForm;
use contact_form_models::{
    form::{FormId, FormValues},
    view::ContactFormView,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ApiMountedForm {
    pub id: FormId,
    pub view: ContactFormView,
}

impl From<MountedForm> for ApiMountedForm {
    fn from(value: MountedForm) -> Self {
        Self {
            id: value.id,
            view: value.view,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFieldValue {
    /// The new value of the field
    pub value: String,
}

/// The inputs of a html form post. Missing inputs are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl From<ApiFormValues> for FormValues {
    fn from(value: ApiFormValues) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            message: value.message,
        }
    }
}
