//! Template collaborator contracts.
//!
//! # Responsibility
//! - Define the named-template rendering contract used by presenters.
//! - Keep template engine details inside adapter implementations.
//!
//! # Invariants
//! - Templates are addressed by stable names, not file paths.
//! - Unknown template names surface as semantic errors.

pub mod jinja;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering error for template lookup and substitution.
#[derive(Debug)]
pub enum RenderError {
    UnknownTemplate(String),
    Render(minijinja::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTemplate(name) => write!(f, "unknown template: {name}"),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownTemplate(_) => None,
            Self::Render(err) => Some(err),
        }
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(value: minijinja::Error) -> Self {
        Self::Render(value)
    }
}

/// Renders a named template with a data object into an element string.
pub trait TemplateRenderer {
    fn render(&self, name: &str, data: &serde_json::Value) -> RenderResult<String>;
}
