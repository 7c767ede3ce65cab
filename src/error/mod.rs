//! Error types for the vehicle admin application.
//!
//! This module provides the error handling system used across the data, service, and
//! client layers. Configuration, validation and backend errors are aggregated into a single
//! [`Error`] using `thiserror`, and [`Error::user_message`] maps every error to the text shown
//! in the UI. List state [`storage::StorageError`]s never reach the UI: the list state store
//! logs them and falls back to defaults.

pub mod backend;
pub mod config;
pub mod storage;
pub mod validation;

use thiserror::Error;

use crate::{
    error::{
        backend::BackendError, config::ConfigError, validation::ValidationError,
    },
    model::vehicle::EntityKind,
};

/// Main error type for the vehicle admin application.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors convert automatically via
/// the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid build or runtime environment variables)
/// - Validation errors (blank required fields, invalid filter values), raised before any
///   backend call is made
/// - Backend errors (transport failures, non-2xx responses, undecodable bodies)
/// - Not found (edit target no longer exists)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client-side validation error, no backend call was issued.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Backend request or response error.
    #[error(transparent)]
    BackendError(#[from] BackendError),
    /// The requested record does not exist in the backend.
    #[error("{entity} ID {id} not found")]
    NotFound { entity: EntityKind, id: i64 },
}

/// The kind of action an error surfaced from, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Starting the application.
    Start,
    /// Fetching a list or a single record.
    Load(EntityKind),
    /// Creating or updating a record.
    Save,
    /// Deleting a record.
    Delete(EntityKind),
}

impl Error {
    /// Returns the message shown to the user for this error.
    ///
    /// Validation and not-found errors are shown verbatim since they describe something the
    /// user can act on, backend failures collapse into a generic message for the action that
    /// triggered them. The full error is expected to be logged by the caller.
    pub fn user_message(&self, action: Action) -> String {
        match self {
            Self::ValidationError(err) => err.to_string(),
            Self::NotFound { entity, .. } => format!("{} not found", entity),
            Self::ConfigError(err) => format!("Configuration error: {}", err),
            Self::BackendError(_) => match action {
                Action::Start => "Error starting the application.".to_string(),
                Action::Load(EntityKind::Make) => "Error loading manufacturers.".to_string(),
                Action::Load(EntityKind::Model) => "Error loading models.".to_string(),
                Action::Save => "Error saving data.".to_string(),
                Action::Delete(EntityKind::Make) => "Error deleting the manufacturer.".to_string(),
                Action::Delete(EntityKind::Model) => "Error deleting model.".to_string(),
            },
        }
    }
}
