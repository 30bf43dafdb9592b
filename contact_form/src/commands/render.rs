use clap::Args;
use contact_form_config::Config;
use contact_form_core_form_contracts::{FormFeatureService, FormSubmitError, MountedForm};
use contact_form_models::form::Field;
use contact_form_templates_contracts::{ContactFormTemplate, TemplateService};

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Enter a value into the first name input
    #[arg(long)]
    first_name: Option<String>,
    /// Enter a value into the last name input
    #[arg(long)]
    last_name: Option<String>,
    /// Enter a value into the email input
    #[arg(long)]
    email: Option<String>,
    /// Enter a value into the message input
    #[arg(long)]
    message: Option<String>,
    /// Press the submit button after entering the values
    #[arg(short, long)]
    submit: bool,
    /// Print the view as json instead of html
    #[arg(long)]
    json: bool,
    /// Where the rendered form posts its values to
    #[arg(long, default_value = "")]
    action: String,
}

impl RenderCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let output = self.render(&Provider::new(&config)).await?;
        println!("{output}");
        Ok(())
    }

    async fn render(self, provider: &Provider) -> anyhow::Result<String> {
        let form = provider.form_feature();
        let MountedForm { id, .. } = form.mount().await;

        let inputs = [
            (Field::FirstName, self.first_name),
            (Field::LastName, self.last_name),
            (Field::Email, self.email),
            (Field::Message, self.message),
        ];
        for (field, value) in inputs {
            if let Some(value) = value {
                form.change(id, field, value).await?;
            }
        }

        let view = if self.submit {
            match form.submit(id).await {
                Ok(view) => view,
                Err(FormSubmitError::Invalid(view)) => *view,
                Err(err) => return Err(err.into()),
            }
        } else {
            form.view(id).await?
        };

        if self.json {
            return serde_json::to_string_pretty(&view).map_err(Into::into);
        }

        provider.templates()?.render(&ContactFormTemplate {
            action: self.action,
            view,
        })
    }
}
