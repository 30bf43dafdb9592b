use contact_form_config::Config;
use contact_form_core_form_impl::FormFeatureConfig;
use contact_form_shared_impl::{
    id::IdServiceImpl, time::TimeServiceImpl, validation::ValidationServiceImpl,
};
use contact_form_templates_impl::TemplateServiceImpl;
use types::{FormFeature, RestServer, Templates};

pub mod types;

/// Wires up the services of the application from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    form_feature_config: FormFeatureConfig,
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        Self {
            form_feature_config: FormFeatureConfig {
                reset_on_submit: config.form.reset_on_submit,
                idle_ttl: config.form.idle_ttl.into(),
            },
        }
    }

    pub fn form_feature(&self) -> FormFeature {
        FormFeature::new(
            TimeServiceImpl,
            IdServiceImpl,
            ValidationServiceImpl,
            self.form_feature_config.clone(),
        )
    }

    pub fn templates(&self) -> anyhow::Result<Templates> {
        TemplateServiceImpl::new()
    }

    pub fn rest_server(&self) -> anyhow::Result<RestServer> {
        Ok(RestServer::new(self.form_feature(), self.templates()?))
    }
}
