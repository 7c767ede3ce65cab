//! Backend fixtures: JSON row factories and PostgREST mock endpoints.

pub mod factory;
pub mod mockito;

use crate::TestContext;

/// Mock endpoint helpers bound to a test context.
pub struct BackendFixtures<'a> {
    pub(crate) context: &'a mut TestContext,
}

impl<'a> BackendFixtures<'a> {
    pub(crate) fn new(context: &'a mut TestContext) -> Self {
        Self { context }
    }
}
