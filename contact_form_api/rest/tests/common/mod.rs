#![allow(dead_code, reason = "not every test binary uses every helper")]

use contact_form_api_rest::RestServer;
use contact_form_core_form_contracts::FormFeatureService;
use contact_form_core_form_impl::{FormFeatureConfig, FormFeatureServiceImpl};
use contact_form_shared_impl::{
    id::IdServiceImpl, time::TimeServiceImpl, validation::ValidationServiceImpl,
};
use contact_form_templates_contracts::TemplateService;
use contact_form_templates_impl::TemplateServiceImpl;
use tokio::net::TcpListener;

pub type Form = FormFeatureServiceImpl<TimeServiceImpl, IdServiceImpl, ValidationServiceImpl>;

/// Starts a server with the real services on a random port and returns its
/// base url.
pub async fn serve() -> String {
    serve_with_config(FormFeatureConfig::default()).await
}

pub async fn serve_with_config(config: FormFeatureConfig) -> String {
    let form = Form::new(TimeServiceImpl, IdServiceImpl, ValidationServiceImpl, config);
    serve_with(form, TemplateServiceImpl::new().unwrap()).await
}

pub async fn serve_with(
    form: impl FormFeatureService,
    templates: impl TemplateService,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(RestServer::new(form, templates).serve_with_listener(listener));
    format!("http://{addr}")
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
