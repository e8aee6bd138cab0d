//! Handlebars implementation of the template-engine port.
//!
//! Named-placeholder substitution plus `{{#if}}`/`{{#unless}}` conditionals
//! over the boolean flags in the data bundle. HTML escaping is disabled —
//! the output is source code, not markup.

use handlebars::{Handlebars, no_escape};

use crudgen_core::{
    application::{ApplicationError, ports::TemplateEngine},
    domain::RenderData,
    error::CrudgenResult,
};

/// Template engine backed by the `handlebars` crate.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        // Non-strict: templates may consume any subset of the bundle, and
        // unused keys are never an error.
        registry.set_strict_mode(false);
        Self { registry }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn compile(&self, template: &str, data: &RenderData) -> CrudgenResult<String> {
        self.registry
            .render_template(template, data)
            .map_err(|e| {
                ApplicationError::TemplateCompile {
                    template: first_line(template),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

/// Identify a template by its first non-empty line; templates arrive here
/// as raw text, not catalog paths.
fn first_line(template: &str) -> String {
    template
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("<empty template>")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_string_placeholders() {
        let engine = HandlebarsEngine::new();
        let data = RenderData::new()
            .with("Domain", "Invoice")
            .with("domain", "invoice");

        let out = engine
            .compile("class {{Domain}} maps /{{domain}}", &data)
            .unwrap();
        assert_eq!(out, "class Invoice maps /invoice");
    }

    #[test]
    fn conditionals_over_boolean_flags() {
        let engine = HandlebarsEngine::new();
        let template = "{{#if isPaginated}}Page<{{Domain}}>{{else}}{{Domain}}{{/if}}";

        let paginated = RenderData::new()
            .with("Domain", "Invoice")
            .with("isPaginated", true);
        assert_eq!(engine.compile(template, &paginated).unwrap(), "Page<Invoice>");

        let single = RenderData::new()
            .with("Domain", "Invoice")
            .with("isPaginated", false);
        assert_eq!(engine.compile(template, &single).unwrap(), "Invoice");
    }

    #[test]
    fn output_is_not_html_escaped() {
        let engine = HandlebarsEngine::new();
        let data = RenderData::new().with("type", "List<Invoice>");
        assert_eq!(
            engine.compile("{{type}}", &data).unwrap(),
            "List<Invoice>"
        );
    }

    #[test]
    fn missing_keys_render_empty() {
        let engine = HandlebarsEngine::new();
        let out = engine
            .compile("a{{nothing}}b", &RenderData::new())
            .unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn malformed_syntax_is_a_compile_error() {
        let engine = HandlebarsEngine::new();
        let err = engine
            .compile("{{#if isPlural}}unterminated", &RenderData::new())
            .unwrap_err();

        assert!(matches!(
            err,
            crudgen_core::error::CrudgenError::Application(
                ApplicationError::TemplateCompile { .. }
            )
        ));
    }
}
