//! Page renderer port
//!
//! Defines the template-name-plus-context contract the HTTP handlers hand
//! their results to. The tera adapter lives in the infrastructure layer.

use thiserror::Error;

/// The pages this application renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Latest-questions listing
    Index,
    /// A question's choices as a voting form
    Detail,
    /// A question's vote tallies
    Results,
}

impl Template {
    /// Stable template identifier used by adapters
    pub fn name(&self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Detail => "detail",
            Template::Results => "results",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while rendering a page
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template {template} failed to render: {message}")]
    Failed { template: String, message: String },
}

impl RenderError {
    pub fn failed(template: Template, message: impl Into<String>) -> Self {
        Self::Failed {
            template: template.name().to_string(),
            message: message.into(),
        }
    }
}

/// Port for turning a template plus a context mapping into a response body
///
/// Context keys are plain JSON values; the documented keys are
/// `latest_question_list`, `question`, `choices`, and `error_message`.
pub trait PageRenderer: Send + Sync {
    fn render(&self, template: Template, context: &serde_json::Value)
        -> Result<String, RenderError>;
}
