//! PostgREST mock endpoint creation utilities.
//!
//! Every endpoint requires the test API key in the `apikey` header and verifies it was called
//! exactly `expected_requests` times once [`TestContext::assert_mocks`](crate::TestContext::assert_mocks)
//! runs.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{REST_PREFIX, TEST_ANON_KEY},
    fixtures::{factory, BackendFixtures},
};

/// Matches a request whose query contains every given key/value pair, other parameters are ignored.
pub fn query_matcher(query: &[(&str, &str)]) -> Matcher {
    if query.is_empty() {
        return Matcher::Any;
    }

    Matcher::AllOf(
        query
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
            .collect(),
    )
}

/// Table path on the mock server.
pub fn table_path(table: &str) -> String {
    format!("{}/{}", REST_PREFIX, table)
}

impl<'a> BackendFixtures<'a> {
    /// Create a mock GET endpoint returning the given rows.
    ///
    /// # Arguments
    /// - `table` - Table name
    /// - `query` - Query pairs the request must carry, e.g. `("order", "name.asc")`
    /// - `rows` - JSON rows to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_select_endpoint(
        &mut self,
        table: &str,
        query: &[(&str, &str)],
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", table_path(table).as_str())
            .match_header("apikey", TEST_ANON_KEY)
            .match_query(query_matcher(query))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(rows).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock POST endpoint that checks the request body and echoes the stored row.
    ///
    /// # Arguments
    /// - `table` - Table name
    /// - `request` - Exact JSON body the client must send
    /// - `row` - Stored row to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_insert_endpoint(
        &mut self,
        table: &str,
        request: Value,
        row: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", table_path(table).as_str())
            .match_header("apikey", TEST_ANON_KEY)
            .match_header("prefer", "return=representation")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(request))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(vec![row]).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock PATCH endpoint for the row with the given ID.
    ///
    /// An empty `rows` vector mimics an update that matched nothing.
    pub fn create_update_endpoint(
        &mut self,
        table: &str,
        id: i64,
        rows: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let id_filter = format!("eq.{}", id);

        self.context
            .server
            .mock("PATCH", table_path(table).as_str())
            .match_header("apikey", TEST_ANON_KEY)
            .match_query(query_matcher(&[("id", &id_filter)]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(rows).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock DELETE endpoint for the row with the given ID, answering 204.
    pub fn create_delete_endpoint(
        &mut self,
        table: &str,
        id: i64,
        expected_requests: usize,
    ) -> Mock {
        let id_filter = format!("eq.{}", id);

        self.context
            .server
            .mock("DELETE", table_path(table).as_str())
            .match_header("apikey", TEST_ANON_KEY)
            .match_query(query_matcher(&[("id", &id_filter)]))
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint failing with a PostgREST error body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to fail, e.g. `"GET"` or `"DELETE"`
    /// - `table` - Table name
    /// - `status` - HTTP status to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        table: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock(method, table_path(table).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(factory::mock_error("internal error").to_string())
            .expect(expected_requests)
            .create()
    }
}
