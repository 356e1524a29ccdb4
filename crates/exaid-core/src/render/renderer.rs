use tera::{Context, Tera};

use super::templates::{
  DEFAULT_MODULE_BODY_TEMPLATE, DEFAULT_MODULE_FOOTER_TEMPLATE, DEFAULT_MODULE_HEADER_TEMPLATE,
  DEFAULT_MODULE_WRAPPER_TEMPLATE, DEFAULT_TYPES_TEMPLATE,
};
use crate::{
  config::{ExaidConfig, ModuleTemplate},
  error::EmitError,
  generator::ast::{ModelDefinition, Module},
};

/// Renders models and modules through the configured templates.
///
/// Module artifacts use four independent slots: header, body and footer are
/// rendered from the module alone, then the wrapper combines them.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
  types: String,
  header: String,
  body: String,
  footer: String,
  wrapper: String,
}

impl Default for TemplateRenderer {
  fn default() -> Self {
    Self::new(&ModuleTemplate::default(), None)
  }
}

impl TemplateRenderer {
  pub fn new(module: &ModuleTemplate, types: Option<&str>) -> Self {
    let slot = |custom: &Option<String>, default: &str| custom.clone().unwrap_or_else(|| default.to_string());
    Self {
      types: types.unwrap_or(DEFAULT_TYPES_TEMPLATE).to_string(),
      header: slot(&module.header, DEFAULT_MODULE_HEADER_TEMPLATE),
      body: slot(&module.body, DEFAULT_MODULE_BODY_TEMPLATE),
      footer: slot(&module.footer, DEFAULT_MODULE_FOOTER_TEMPLATE),
      wrapper: slot(&module.wrapper, DEFAULT_MODULE_WRAPPER_TEMPLATE),
    }
  }

  pub fn from_config(config: &ExaidConfig) -> Self {
    Self::new(&config.module_template, config.types_template.as_deref())
  }

  pub fn render_types(&self, models: &[ModelDefinition]) -> Result<String, EmitError> {
    let mut context = Context::new();
    context.insert("models", models);
    render("types", &self.types, &context)
  }

  pub fn render_module(&self, module: &Module) -> Result<String, EmitError> {
    let mut context = Context::from_serialize(module).map_err(|source| EmitError::Template {
      template: "module",
      source,
    })?;

    let header = render("header", &self.header, &context)?;
    let body = render("body", &self.body, &context)?;
    let footer = render("footer", &self.footer, &context)?;

    context.insert("moduleHeader", &header);
    context.insert("moduleBody", &body);
    context.insert("moduleFooter", &footer);
    render("wrapper", &self.wrapper, &context)
  }
}

fn render(template: &'static str, text: &str, context: &Context) -> Result<String, EmitError> {
  if text.is_empty() {
    return Ok(String::new());
  }
  Tera::one_off(text, context, false).map_err(|source| EmitError::Template { template, source })
}
