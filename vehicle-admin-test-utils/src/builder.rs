//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock backend before a test
//! runs. Endpoints are queued by the `with_*` methods and registered on the mock server during
//! the final `build()` call.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{MAKE_TABLE, MODEL_TABLE},
    TestContext,
};

/// Column list sent when selecting models with their manufacturer.
const MODEL_WITH_MAKE_SELECT: &str = "id,name,abrv,make_id,VehicleMake(name)";

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

enum Endpoint {
    Select {
        table: &'static str,
        query: Vec<(String, String)>,
        rows: Vec<Value>,
        expected: usize,
    },
    Insert {
        table: &'static str,
        request: Value,
        row: Value,
        expected: usize,
    },
    Update {
        table: &'static str,
        id: i64,
        rows: Vec<Value>,
        expected: usize,
    },
    Delete {
        table: &'static str,
        id: i64,
        expected: usize,
    },
    Error {
        method: String,
        table: String,
        status: usize,
        expected: usize,
    },
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a mock backend.
/// Endpoints are registered in the order they were added, custom mocks first.
#[derive(Default)]
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
    endpoints: Vec<Endpoint>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom mock endpoint to the test server.
    ///
    /// # Arguments
    /// - `builder` - Closure creating the mock on the server
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Add a make list endpoint.
    ///
    /// # Arguments
    /// - `query` - Query pairs the request must carry, other parameters are not checked
    /// - `rows` - Make rows to return, see [`factory::mock_make`](crate::fixtures::factory::mock_make)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_make_list_endpoint(
        self,
        query: Vec<(&str, &str)>,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.with_select(MAKE_TABLE, query, rows, expected_requests)
    }

    /// Add a make lookup endpoint matching `id=eq.{id}`.
    ///
    /// An empty `rows` vector mimics a missing make.
    pub fn with_make_find_endpoint(
        self,
        id: i64,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        let id_filter = format!("eq.{}", id);
        self.with_select(MAKE_TABLE, vec![("id", id_filter.as_str())], rows, expected_requests)
    }

    /// Add a make insert endpoint.
    ///
    /// # Arguments
    /// - `request` - Exact JSON body expected, a one-element array of the new row
    /// - `row` - Stored row to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_make_insert_endpoint(
        mut self,
        request: Value,
        row: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Insert {
            table: MAKE_TABLE,
            request,
            row,
            expected: expected_requests,
        });
        self
    }

    /// Add a make update endpoint, an empty `rows` vector mimics a missing make.
    pub fn with_make_update_endpoint(
        mut self,
        id: i64,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Update {
            table: MAKE_TABLE,
            id,
            rows,
            expected: expected_requests,
        });
        self
    }

    /// Add a make delete endpoint.
    pub fn with_make_delete_endpoint(mut self, id: i64, expected_requests: usize) -> Self {
        self.endpoints.push(Endpoint::Delete {
            table: MAKE_TABLE,
            id,
            expected: expected_requests,
        });
        self
    }

    /// Add a model list endpoint selecting models with their manufacturer.
    ///
    /// # Arguments
    /// - `query` - Query pairs the request must carry in addition to the joined `select`
    /// - `rows` - Model rows to return, see [`factory::mock_model`](crate::fixtures::factory::mock_model)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_model_list_endpoint(
        self,
        query: Vec<(&str, &str)>,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        let mut query = query;
        if !query.iter().any(|(key, _)| *key == "select") {
            query.push(("select", MODEL_WITH_MAKE_SELECT));
        }

        self.with_select(MODEL_TABLE, query, rows, expected_requests)
    }

    /// Add a model lookup endpoint matching `id=eq.{id}`.
    pub fn with_model_find_endpoint(
        self,
        id: i64,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        let id_filter = format!("eq.{}", id);
        self.with_select(
            MODEL_TABLE,
            vec![("select", MODEL_WITH_MAKE_SELECT), ("id", id_filter.as_str())],
            rows,
            expected_requests,
        )
    }

    /// Add a model insert endpoint.
    pub fn with_model_insert_endpoint(
        mut self,
        request: Value,
        row: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Insert {
            table: MODEL_TABLE,
            request,
            row,
            expected: expected_requests,
        });
        self
    }

    /// Add a model update endpoint, an empty `rows` vector mimics a missing model.
    pub fn with_model_update_endpoint(
        mut self,
        id: i64,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Update {
            table: MODEL_TABLE,
            id,
            rows,
            expected: expected_requests,
        });
        self
    }

    /// Add a model delete endpoint.
    pub fn with_model_delete_endpoint(mut self, id: i64, expected_requests: usize) -> Self {
        self.endpoints.push(Endpoint::Delete {
            table: MODEL_TABLE,
            id,
            expected: expected_requests,
        });
        self
    }

    /// Add an endpoint failing with a PostgREST error body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to fail
    /// - `table` - Table name
    /// - `status` - HTTP status to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_error_endpoint(
        mut self,
        method: &str,
        table: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Error {
            method: method.to_string(),
            table: table.to_string(),
            status,
            expected: expected_requests,
        });
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `TestContext` - Context owning the server and its mocks
    pub async fn build(self) -> TestContext {
        let mut context = TestContext::new().await;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for endpoint in self.endpoints {
            let mut backend = context.backend();

            let mock = match endpoint {
                Endpoint::Select {
                    table,
                    query,
                    rows,
                    expected,
                } => {
                    let query: Vec<(&str, &str)> = query
                        .iter()
                        .map(|(key, value)| (key.as_str(), value.as_str()))
                        .collect();
                    backend.create_select_endpoint(table, &query, rows, expected)
                }
                Endpoint::Insert {
                    table,
                    request,
                    row,
                    expected,
                } => backend.create_insert_endpoint(table, request, row, expected),
                Endpoint::Update {
                    table,
                    id,
                    rows,
                    expected,
                } => backend.create_update_endpoint(table, id, rows, expected),
                Endpoint::Delete {
                    table,
                    id,
                    expected,
                } => backend.create_delete_endpoint(table, id, expected),
                Endpoint::Error {
                    method,
                    table,
                    status,
                    expected,
                } => backend.create_error_endpoint(&method, &table, status, expected),
            };

            mocks.push(mock);
        }

        // Store mocks in the context so they live as long as the test
        context.mocks = mocks;

        context
    }

    fn with_select(
        mut self,
        table: &'static str,
        query: Vec<(&str, &str)>,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Select {
            table,
            query: query
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            rows,
            expected: expected_requests,
        });
        self
    }
}
