//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the mock
//! PostgREST server and the mocks registered on it.

use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_ANON_KEY, fixtures::BackendFixtures};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_make_list_endpoint(vec![], vec![factory::mock_make(1, "Toyota", "TOY")], 1)
///     .build()
///     .await;
///
/// let config: Config = test.config()?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the hosted backend
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Convert the mock server URL and test key into any type that can be constructed from them
    ///
    /// Avoids a dependency from this crate on the application crate's `Config`.
    ///
    /// # Returns
    /// - `Ok(T)` - Configuration pointing at the mock server
    /// - `Err(T::Error)` - Conversion rejected the values
    pub fn config<T>(&self) -> Result<T, T::Error>
    where
        T: TryFrom<(String, String)>,
    {
        T::try_from((self.server.url(), TEST_ANON_KEY.to_string()))
    }

    /// Access mock endpoint helpers
    pub fn backend(&mut self) -> BackendFixtures<'_> {
        BackendFixtures::new(self)
    }

    /// Assert every mock received its expected number of requests
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
