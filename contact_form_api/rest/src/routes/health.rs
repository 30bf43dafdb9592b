use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use contact_form_core_form_contracts::FormFeatureService;
use serde::Serialize;

pub fn router<Form: FormFeatureService>(service: Arc<Form>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health::<Form>))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    forms: usize,
}

async fn health<Form: FormFeatureService>(service: State<Arc<Form>>) -> Response {
    let forms = service.mounted().await;
    Json(HealthResponse { http: true, forms }).into_response()
}
