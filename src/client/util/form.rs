use crate::{
    error::{validation::ValidationError, Action, Error},
    service::MutationState,
};

/// Settles a form submission
///
/// Field validation errors are returned for inline display and leave the form idle, every
/// other outcome goes through [`MutationState::complete`].
pub fn settle<T>(result: &Result<T, Error>, status: &mut MutationState) -> Option<ValidationError> {
    match result {
        Err(Error::ValidationError(err)) if err.field().is_some() => {
            *status = MutationState::Idle;
            Some(err.clone())
        }
        _ => {
            status.complete(result, Action::Save);
            None
        }
    }
}

/// Inline error for `field`, if the last validation failure was about it
pub fn field_error(error: &Option<ValidationError>, field: &str) -> Option<String> {
    error
        .as_ref()
        .filter(|err| err.field() == Some(field))
        .map(|err| err.to_string())
}
