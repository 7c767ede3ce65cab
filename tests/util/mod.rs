use vehicle_admin::{config::Config, data::PostgrestClient, service::ListService};
use vehicle_admin_test_utils::{TestContext, TestError};

/// List service talking to the test's mock backend, with empty caches
pub fn list_service(test: &TestContext) -> Result<ListService, TestError> {
    let config: Config = test.config()?;
    Ok(ListService::new(PostgrestClient::new(&config)))
}

/// Confirmation that always accepts
pub fn accept(_: &str) -> bool {
    true
}

/// Confirmation that always declines
pub fn decline(_: &str) -> bool {
    false
}
