use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing, Form, Json, Router,
};
use contact_form_core_form_contracts::{
    FormChangeError, FormFeatureService, FormSubmitError, FormUnmountError, FormViewError,
};
use contact_form_models::{
    form::{Field, FormId},
    view::ContactFormView,
};
use contact_form_templates_contracts::{ContactFormTemplate, TemplateService};

use super::{form_not_found, internal_server_error};
use crate::models::form::{ApiFieldValue, ApiFormValues, ApiMountedForm};

pub fn router<F, T>(form: Arc<F>, templates: Arc<T>) -> Router<()>
where
    F: FormFeatureService,
    T: TemplateService,
{
    Router::new()
        .route("/", routing::get(index::<F, T>))
        .route("/forms", routing::post(mount::<F, T>))
        .route(
            "/forms/:id",
            routing::get(view::<F, T>).delete(unmount::<F, T>),
        )
        .route("/forms/:id/fields/:field", routing::put(change::<F, T>))
        .route("/forms/:id/submit", routing::post(submit::<F, T>))
        .route(
            "/forms/:id/html",
            routing::get(html_page::<F, T>).post(html_submit::<F, T>),
        )
        .with_state(Services { form, templates })
}

struct Services<F, T> {
    form: Arc<F>,
    templates: Arc<T>,
}

impl<F, T> Clone for Services<F, T> {
    fn clone(&self) -> Self {
        Self {
            form: Arc::clone(&self.form),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Mounts a fresh form and sends the browser to its page.
async fn index<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
) -> Response {
    let mounted = services.form.mount().await;
    Redirect::to(&html_path(mounted.id)).into_response()
}

async fn mount<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
) -> Response {
    let mounted = services.form.mount().await;
    (StatusCode::CREATED, Json(ApiMountedForm::from(mounted))).into_response()
}

async fn view<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path(id): Path<FormId>,
) -> Response {
    match services.form.view(id).await {
        Ok(view) => Json(view).into_response(),
        Err(FormViewError::NotFound) => form_not_found(),
    }
}

async fn unmount<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path(id): Path<FormId>,
) -> Response {
    match services.form.unmount(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(FormUnmountError::NotFound) => form_not_found(),
    }
}

async fn change<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path((id, field)): Path<(FormId, Field)>,
    Json(ApiFieldValue { value }): Json<ApiFieldValue>,
) -> Response {
    match services.form.change(id, field, value).await {
        Ok(view) => Json(view).into_response(),
        Err(FormChangeError::NotFound) => form_not_found(),
    }
}

async fn submit<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path(id): Path<FormId>,
) -> Response {
    match services.form.submit(id).await {
        Ok(view) => Json(view).into_response(),
        Err(FormSubmitError::Invalid(view)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response()
        }
        Err(FormSubmitError::NotFound) => form_not_found(),
    }
}

async fn html_page<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path(id): Path<FormId>,
) -> Response {
    match services.form.view(id).await {
        Ok(view) => render_page(&*services.templates, id, view, StatusCode::OK),
        Err(FormViewError::NotFound) => form_not_found(),
    }
}

/// Handles a plain html form post: every input is entered into the form,
/// which is then submitted.
async fn html_submit<F: FormFeatureService, T: TemplateService>(
    State(services): State<Services<F, T>>,
    Path(id): Path<FormId>,
    Form(values): Form<ApiFormValues>,
) -> Response {
    let (status, view) = match services.form.submit_values(id, values.into()).await {
        Ok(view) => (StatusCode::OK, view),
        Err(FormSubmitError::Invalid(view)) => (StatusCode::UNPROCESSABLE_ENTITY, *view),
        Err(FormSubmitError::NotFound) => return form_not_found(),
    };

    render_page(&*services.templates, id, view, status)
}

fn render_page(
    templates: &impl TemplateService,
    id: FormId,
    view: ContactFormView,
    status: StatusCode,
) -> Response {
    let template = ContactFormTemplate {
        action: html_path(id),
        view,
    };
    match templates.render(&template) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

fn html_path(id: FormId) -> String {
    format!("/forms/{}/html", *id)
}
