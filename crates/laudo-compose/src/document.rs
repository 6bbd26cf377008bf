//! Final document assembly.
//!
//! Sections arrive as (title, body) pairs; empty bodies are dropped before
//! rendering so a header can never appear without content under it. The
//! rendered fragment uses `<p>` and `<br>` only and carries no styling of
//! its own, ready for direct insertion into the rich-text editor.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ComposeError;

/// One titled report section, already composed to its inline-HTML body.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Default document template. Callers with a customized layout pass their
/// own template through [`render_document`].
pub const DOCUMENT_TEMPLATE: &str = "<p>{{ title }}</p>\n\
{% for section in sections %}<p>{{ section.title }}:</p>\n{{ section.body | safe }}\n{% endfor %}";

/// Render a document template over the non-empty sections.
pub fn render_document(
    template_content: &str,
    title: &str,
    sections: &[Section],
) -> Result<String, ComposeError> {
    let kept: Vec<&Section> = sections.iter().filter(|s| !s.is_empty()).collect();

    let mut tera = Tera::default();
    tera.add_raw_template("document", template_content)
        .map_err(|e| ComposeError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("title", title);
    context.insert("sections", &kept);

    let rendered = tera.render("document", &context)?;
    tracing::debug!(sections = kept.len(), "assembled report document");
    Ok(rendered)
}

/// Assemble with the built-in template.
pub fn assemble(title: &str, sections: &[Section]) -> Result<String, ComposeError> {
    render_document(DOCUMENT_TEMPLATE, title, sections)
}
