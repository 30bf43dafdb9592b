use contact_form_core_form_impl::FormFeatureServiceImpl;
use contact_form_shared_impl::{
    id::IdServiceImpl, time::TimeServiceImpl, validation::ValidationServiceImpl,
};
use contact_form_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = contact_form_api_rest::RestServer<FormFeature, Templates>;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;
pub type Validation = ValidationServiceImpl;

// Templates
pub type Templates = TemplateServiceImpl;

// Core
pub type FormFeature = FormFeatureServiceImpl<Time, Id, Validation>;
