//! Test configuration constants for the backend client.

/// Anonymous API key sent by the client under test.
///
/// Placeholder value, every mock endpoint requires it in the `apikey` header.
pub static TEST_ANON_KEY: &str = "test-anon-key";

/// Path prefix of the PostgREST API on the mock server.
pub static REST_PREFIX: &str = "/rest/v1";

/// Make table name.
pub static MAKE_TABLE: &str = "VehicleMake";

/// Model table name.
pub static MODEL_TABLE: &str = "VehicleModel";
