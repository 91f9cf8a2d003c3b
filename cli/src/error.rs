use crate::dataset::SortKey;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("cannot sort numbers by `{0}`")]
    KeyMismatch(SortKey),
}
