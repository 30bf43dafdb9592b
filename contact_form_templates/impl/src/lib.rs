use std::sync::Arc;

use anyhow::Context;
use contact_form_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE)
            .context("Failed to load base template")?;

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to load template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    #[tracing::instrument(skip_all, fields(template = T::NAME))]
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use contact_form_core_form_impl::{ContactForm, FormFeatureConfig};
    use contact_form_demo::{INVALID_EMAIL, JIMMY, JIMMY_RECORD, JIMMY_WITH_MESSAGE_RECORD};
    use contact_form_models::form::{Field, FormMessage, FormState, FormValues};
    use contact_form_shared_impl::validation::ValidationServiceImpl;
    use contact_form_templates_contracts::ContactFormTemplate;

    use super::*;

    fn render(state: &FormState) -> String {
        let view = ContactForm::new(&ValidationServiceImpl, &FormFeatureConfig::default()).view(state);
        let sut = TemplateServiceImpl::new().unwrap();
        sut.render(&ContactFormTemplate {
            action: "/forms/1/html".into(),
            view,
        })
        .unwrap()
    }

    #[test]
    fn fresh_form() {
        // Act
        let result = render(&FormState::default());

        // Assert
        assert!(result.contains("<title>Contact Form</title>"));
        assert!(result.contains(r#"<h1 data-testid="header">Contact Form</h1>"#));
        assert!(result.contains(r#"<label for="firstName">First Name*</label>"#));
        assert!(result.contains(r#"<input id="email" name="email" type="email" value="" />"#));
        assert!(result.contains(r#"<textarea id="message" name="message"></textarea>"#));
        assert!(result.contains(r#"<form method="post" action="/forms/1/html">"#));
        assert_eq!(result.matches("<button").count(), 1);
        assert!(!result.contains("class=\"error\""));
        assert!(!result.contains("data-testid=\"summary\""));
    }

    #[test]
    fn errors() {
        // Arrange
        let state = FormState {
            values: FormValues {
                email: INVALID_EMAIL.into(),
                ..Default::default()
            },
            revealed: Field::REQUIRED.into_iter().collect(),
            submitted: None,
        };

        // Act
        let result = render(&state);

        // Assert
        assert_eq!(result.matches(r#"class="error""#).count(), 3);
        assert!(result.contains(
            r#"<p class="error" data-testid="emailError">Error: email must be a valid email address</p>"#
        ));
        assert!(result.contains(r#"data-testid="firstNameError""#));
        assert!(result.contains(r#"data-testid="lastNameError""#));
    }

    #[test]
    fn summary_without_message() {
        // Arrange
        let state = FormState {
            values: JIMMY.clone(),
            submitted: Some(JIMMY_RECORD.clone()),
            ..Default::default()
        };

        // Act
        let result = render(&state);

        // Assert
        assert!(result.contains(r#"<p data-testid="firstnameDisplay">First Name: Jimmy</p>"#));
        assert!(result.contains(r#"<p data-testid="lastnameDisplay">Last Name: Neutron</p>"#));
        assert!(
            result.contains(r#"<p data-testid="emailDisplay">Email: jimmyn736@gmail.com</p>"#)
        );
        assert!(!result.contains("messageDisplay"));
    }

    #[test]
    fn summary_with_message() {
        // Arrange
        let state = FormState {
            submitted: Some(JIMMY_WITH_MESSAGE_RECORD.clone()),
            ..Default::default()
        };

        // Act
        let result = render(&state);

        // Assert
        assert!(result.contains(r#"data-testid="messageDisplay""#));
        assert!(result.contains("Message: Goddard, self destruct!"));
    }

    #[test]
    fn user_input_is_escaped() {
        // Arrange
        let validation = ValidationServiceImpl;
        let config = FormFeatureConfig::default();
        let form = ContactForm::new(&validation, &config);
        let mut state = FormState::default();
        form.update(
            &mut state,
            FormMessage::Change {
                field: Field::Message,
                value: r#"<script>alert("hi")</script>"#.into(),
            },
        );

        // Act
        let result = render(&state);

        // Assert
        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
    }
}
