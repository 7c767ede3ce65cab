use thiserror::Error;

/// Client-side validation failures.
///
/// Raised before any backend request is built, a request that fails validation never
/// reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required form field is missing or blank after trimming.
    #[error("{label} is required")]
    Required {
        field: &'static str,
        label: &'static str,
    },
    /// A form field exceeds its maximum length.
    #[error("{label} must be at most {max} characters")]
    TooLong {
        field: &'static str,
        label: &'static str,
        max: usize,
    },
    /// A foreign key filter value is not a valid ID.
    #[error("{label} filter must be a numeric ID, got {value:?}")]
    InvalidFilterValue { label: &'static str, value: String },
}

impl ValidationError {
    /// Name of the form field the error belongs to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field, .. } | Self::TooLong { field, .. } => Some(field),
            Self::InvalidFilterValue { .. } => None,
        }
    }
}
