//! Embedded template environment for the application's named templates.
//!
//! # Responsibility
//! - Preload the `app`/`item`/`stats` template sources into one environment.
//! - Render named templates with JSON data objects.

use super::{RenderError, RenderResult, TemplateRenderer};
use minijinja::{Environment, ErrorKind};

const APP_TEMPLATE_SOURCE: &str = include_str!("../../templates/app.html");
const ITEM_TEMPLATE_SOURCE: &str = include_str!("../../templates/item.html");
const STATS_TEMPLATE_SOURCE: &str = include_str!("../../templates/stats.html");

/// Application shell template name.
pub const TEMPLATE_APP: &str = "app";
/// Per-item list element template name.
pub const TEMPLATE_ITEM: &str = "item";
/// Aggregate stats template name.
pub const TEMPLATE_STATS: &str = "stats";

/// `minijinja`-backed template collaborator.
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    /// Builds the environment with all named templates registered.
    pub fn new() -> RenderResult<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_APP, APP_TEMPLATE_SOURCE)?;
        env.add_template(TEMPLATE_ITEM, ITEM_TEMPLATE_SOURCE)?;
        env.add_template(TEMPLATE_STATS, STATS_TEMPLATE_SOURCE)?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn render(&self, name: &str, data: &serde_json::Value) -> RenderResult<String> {
        let template = match self.env.get_template(name) {
            Ok(template) => template,
            Err(err) if matches!(err.kind(), ErrorKind::TemplateNotFound) => {
                return Err(RenderError::UnknownTemplate(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(template.render(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{JinjaRenderer, TEMPLATE_ITEM, TEMPLATE_STATS};
    use crate::render::{RenderError, TemplateRenderer};
    use serde_json::json;

    #[test]
    fn item_template_renders_text_and_done_class() {
        let renderer = JinjaRenderer::new().unwrap();
        let el = renderer
            .render(
                TEMPLATE_ITEM,
                &json!({
                    "id": "11111111-2222-4333-8444-555555555555",
                    "text": "buy milk",
                    "done": true,
                    "order": 1,
                    "editing": false,
                    "input": "buy milk",
                }),
            )
            .unwrap();
        assert!(el.contains("buy milk"));
        assert!(el.contains("todo done"));
        assert!(!el.contains("editing"));
    }

    #[test]
    fn stats_template_handles_singular_and_plural() {
        let renderer = JinjaRenderer::new().unwrap();

        let one_left = renderer
            .render(TEMPLATE_STATS, &json!({"total": 1, "done": 0, "remaining": 1}))
            .unwrap();
        assert!(one_left.contains("item"));
        assert!(!one_left.contains("items"));
        assert!(!one_left.contains("todo-clear"));

        let some_done = renderer
            .render(TEMPLATE_STATS, &json!({"total": 3, "done": 2, "remaining": 1}))
            .unwrap();
        assert!(some_done.contains("Clear 2 completed items"));
    }

    #[test]
    fn unknown_template_name_is_a_semantic_error() {
        let renderer = JinjaRenderer::new().unwrap();
        let err = renderer.render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(name) if name == "missing"));
    }
}
