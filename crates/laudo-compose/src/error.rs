use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ComposeError {
    fn from(e: tera::Error) -> Self {
        ComposeError::TemplateRender(e.to_string())
    }
}
