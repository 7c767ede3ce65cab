use thiserror::Error;

/// Errors raised by list state persistence.
///
/// These never reach the UI, the list state store logs them and falls back to defaults.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("State storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Stored list state is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
