use serde::{Deserialize, Serialize};

/// The error body returned by the backend when a request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Backend error code, e.g. `PGRST116` or a Postgres SQLSTATE
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
