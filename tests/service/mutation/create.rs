//! Tests for MutationDispatcher::create_make and MutationDispatcher::create_model.
//!
//! Verifies client-side validation before any request, the inserted payload, and that a
//! successful insert invalidates the cached lists.

use serde_json::json;
use vehicle_admin::{
    error::{backend::BackendError, validation::ValidationError, Action, Error},
    model::{
        list::{MakeListState, ModelListState},
        vehicle::{MakeInput, ModelInput},
    },
};
use vehicle_admin_test_utils::{
    constant::{MAKE_TABLE, TEST_ANON_KEY},
    fixtures::mockito::table_path,
    prelude::*,
};

use crate::util::list_service;

/// Tests that a blank name is rejected without contacting the backend.
///
/// Expected: Err with "Name is required", zero insert requests
#[tokio::test]
async fn rejects_blank_make_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_insert_endpoint(json!([]), json!({}), 0)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "   ".to_string(),
        abrv: "X".to_string(),
    };
    let result = dispatcher.create_make(&input).await;

    let err = result.expect_err("blank name should be rejected");
    assert!(matches!(
        err,
        Error::ValidationError(ValidationError::Required { field: "name", .. })
    ));
    assert_eq!(err.user_message(Action::Save), "Name is required");
    test.assert_mocks();

    Ok(())
}

/// Tests that a model without a manufacturer is rejected without contacting the backend.
///
/// Expected: Err with "Manufacturer is required"
#[tokio::test]
async fn rejects_model_without_manufacturer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_insert_endpoint(json!([]), json!({}), 0)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = ModelInput {
        make_id: None,
        name: "Corolla".to_string(),
        abrv: "COR".to_string(),
    };
    let result = dispatcher.create_model(&input).await;

    let err = result.expect_err("missing manufacturer should be rejected");
    assert_eq!(err.user_message(Action::Save), "Manufacturer is required");
    test.assert_mocks();

    Ok(())
}

/// Tests that trimmed values are inserted and the make list is refetched afterwards.
///
/// Expected: the insert body carries trimmed values, the list endpoint is hit twice
#[tokio::test]
async fn creates_make_and_invalidates_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(vec![], vec![factory::mock_make(1, "BMW", "BMW")], 2)
        .with_make_insert_endpoint(
            json!([{ "name": "Toyota", "abrv": "TOY" }]),
            factory::mock_make(2, "Toyota", "TOY"),
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let state = MakeListState::default();

    service.list_makes(&state).await?;

    let input = MakeInput {
        name: "  Toyota ".to_string(),
        abrv: " TOY".to_string(),
    };
    let make = dispatcher.create_make(&input).await?;

    assert_eq!(make.id, 2);

    service.list_makes(&state).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests creating a model for a selected manufacturer.
///
/// Expected: Ok with the created model, the model list is refetched afterwards
#[tokio::test]
async fn creates_model_and_invalidates_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(vec![], vec![], 2)
        .with_model_insert_endpoint(
            json!([{ "make_id": 1, "name": "Corolla", "abrv": "COR" }]),
            factory::mock_model_row(5, 1, "Corolla", "COR"),
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let state = ModelListState::default();

    service.list_models(&state).await?;

    let input = ModelInput {
        make_id: Some(1),
        name: "Corolla".to_string(),
        abrv: "COR".to_string(),
    };
    let model = dispatcher.create_model(&input).await?;

    assert_eq!(model.make_id, 1);

    service.list_models(&state).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests an insert the backend acknowledges without returning the stored row.
///
/// Verifies that a successful status with an empty representation is treated as a failed
/// save instead of a created row.
///
/// Expected: Err with BackendError::EmptyResponse, shown as "Error saving data."
#[tokio::test]
async fn fails_when_insert_returns_no_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", table_path(MAKE_TABLE).as_str())
                .match_header("apikey", TEST_ANON_KEY)
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body("[]")
                .expect(1)
                .create()
        })
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "Toyota".to_string(),
        abrv: "TOY".to_string(),
    };
    let result = dispatcher.create_make(&input).await;

    let err = result.expect_err("empty representation should fail");
    assert!(matches!(
        err,
        Error::BackendError(BackendError::EmptyResponse(_))
    ));
    assert_eq!(err.user_message(Action::Save), "Error saving data.");
    test.assert_mocks();

    Ok(())
}

/// Tests the message for a rejected insert.
///
/// Expected: "Error saving data."
#[tokio::test]
async fn fails_with_save_message_on_backend_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "VehicleMake", 409, 1)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "Toyota".to_string(),
        abrv: "TOY".to_string(),
    };
    let result = dispatcher.create_make(&input).await;

    let err = result.expect_err("conflicting insert should fail");
    assert_eq!(err.user_message(Action::Save), "Error saving data.");
    test.assert_mocks();

    Ok(())
}
