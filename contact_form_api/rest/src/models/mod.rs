use serde::Serialize;

pub mod form;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
