use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
