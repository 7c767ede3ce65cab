//! Tests for MutationDispatcher::delete_make and MutationDispatcher::delete_model.
//!
//! Verifies that declining the confirmation makes no request and leaves cached lists intact,
//! and that a confirmed delete invalidates the affected lists.

use vehicle_admin::{
    error::{Action, Error},
    model::{
        list::{MakeListState, ModelListState},
        vehicle::EntityKind,
    },
    service::{mutation::DELETE_MAKE_CONFIRMATION, MutationOutcome},
};
use vehicle_admin_test_utils::prelude::*;

use crate::util::{accept, decline, list_service};

/// Tests declining the confirmation dialog.
///
/// Expected: Declined, no delete request, the list is still served from cache
#[tokio::test]
async fn declined_delete_makes_no_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(vec![], vec![factory::mock_make(3, "Lada", "LAD")], 1)
        .with_make_delete_endpoint(3, 0)
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let state = MakeListState::default();

    let before = service.list_makes(&state).await?;
    let result = dispatcher.delete_make(3, &decline).await;
    let after = service.list_makes(&state).await?;

    assert!(matches!(result, Ok(MutationOutcome::Declined)));
    assert_eq!(before, after);
    test.assert_mocks();

    Ok(())
}

/// Tests that the confirmation prompt carries the manufacturer message.
///
/// Expected: the prompt asks about deleting the manufacturer
#[tokio::test]
async fn asks_with_manufacturer_message() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let dispatcher = list_service(&test)?.dispatcher();
    let asked = std::cell::RefCell::new(String::new());

    let confirm = |message: &str| {
        *asked.borrow_mut() = message.to_string();
        false
    };
    let _ = dispatcher.delete_make(1, &confirm).await;

    assert_eq!(asked.into_inner(), DELETE_MAKE_CONFIRMATION);

    Ok(())
}

/// Tests a confirmed make delete.
///
/// Expected: Performed, make and model lists are both refetched
#[tokio::test]
async fn confirmed_make_delete_invalidates_make_and_model_lists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(vec![], vec![factory::mock_make(3, "Lada", "LAD")], 2)
        .with_model_list_endpoint(
            vec![],
            vec![factory::mock_model(1, 3, "Niva", "NIV", Some("Lada"))],
            2,
        )
        .with_make_delete_endpoint(3, 1)
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let makes = MakeListState::default();
    let models = ModelListState::default();

    service.list_makes(&makes).await?;
    service.list_models(&models).await?;

    let result = dispatcher.delete_make(3, &accept).await;

    assert!(matches!(result, Ok(MutationOutcome::Performed(3))));

    service.list_makes(&makes).await?;
    service.list_models(&models).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests a confirmed model delete.
///
/// Expected: only the model list is refetched
#[tokio::test]
async fn confirmed_model_delete_keeps_make_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(vec![], vec![factory::mock_make(1, "Toyota", "TOY")], 1)
        .with_model_list_endpoint(vec![], vec![], 2)
        .with_model_delete_endpoint(7, 1)
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let makes = MakeListState::default();
    let models = ModelListState::default();

    service.list_makes(&makes).await?;
    service.list_models(&models).await?;

    let result = dispatcher.delete_model(7, &accept).await;

    assert!(matches!(result, Ok(MutationOutcome::Performed(7))));

    service.list_makes(&makes).await?;
    service.list_models(&models).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests the message for a rejected delete.
///
/// Expected: "Error deleting the manufacturer."
#[tokio::test]
async fn fails_with_delete_message_on_backend_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("DELETE", "VehicleMake", 409, 1)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let result = dispatcher.delete_make(3, &accept).await;

    let err = result.expect_err("rejected delete should fail");

    assert!(matches!(err, Error::BackendError(_)));
    assert_eq!(
        err.user_message(Action::Delete(EntityKind::Make)),
        "Error deleting the manufacturer."
    );
    test.assert_mocks();

    Ok(())
}
