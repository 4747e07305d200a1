use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxomatchError {
    #[error("taxonomy error: {0}")]
    Taxonomy(String),

    #[error("feed error: {0}")]
    Feed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
