use std::{net::IpAddr, sync::Arc};

use axum::Router;
use contact_form_core_form_contracts::FormFeatureService;
use contact_form_templates_contracts::TemplateService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Form, Templates> {
    form: Form,
    templates: Templates,
}

impl<Form, Templates> RestServer<Form, Templates>
where
    Form: FormFeatureService,
    Templates: TemplateService,
{
    pub fn new(form: Form, templates: Templates) -> Self {
        Self { form, templates }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve_with_listener(listener).await
    }

    pub async fn serve_with_listener(self, listener: TcpListener) -> anyhow::Result<()> {
        axum::serve(listener, self.router()).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let form = Arc::new(self.form);
        let templates = Arc::new(self.templates);

        let router = Router::new()
            .merge(routes::health::router(Arc::clone(&form)))
            .merge(routes::form::router(form, templates));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
