// ABOUTME: Template engine implementation using Handlebars
// ABOUTME: Renders deployment artifacts from an assembled template context

use handlebars::Handlebars;
use serde_json::Value as JsonValue;

use super::error::{Result, TemplateError};
use super::helpers;
use crate::context::TemplateContext;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Missing keys render as empty rather than failing; many templates
        // only use a subset of the context
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Disable HTML escaping since we're generating configs and scripts, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars)
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))?;

        Ok(Self { handlebars })
    }

    /// Render a template string with the assembled context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let json_context = context.to_json();
        self.handlebars
            .render_template(template, &json_context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Render a template string with a raw JSON context
    pub fn render_with_json(&self, template: &str, context: &JsonValue) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default template engine")
    }
}
