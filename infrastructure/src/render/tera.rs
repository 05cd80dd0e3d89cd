//! Tera implementation of the page renderer port
//!
//! Templates are embedded in the binary; there is no on-disk template
//! directory to configure or get wrong at deploy time.

use pollbooth_application::{PageRenderer, RenderError, Template};
use tera::Tera;

/// Page renderer backed by embedded tera templates
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // Template names carry no .html suffix, so opt every template into
        // autoescaping explicitly.
        tera.autoescape_on(vec![""]);
        tera.add_raw_templates(vec![
            (Template::Index.name(), include_str!("templates/index.html")),
            (Template::Detail.name(), include_str!("templates/detail.html")),
            (
                Template::Results.name(),
                include_str!("templates/results.html"),
            ),
        ])?;
        Ok(Self { tera })
    }
}

impl PageRenderer for TeraRenderer {
    fn render(
        &self,
        template: Template,
        context: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let context = tera::Context::from_value(context.clone())
            .map_err(|err| RenderError::failed(template, err.to_string()))?;
        self.tera
            .render(template.name(), &context)
            .map_err(|err| RenderError::failed(template, err.to_string()))
    }
}
