//! Tests for MutationDispatcher::update_make and MutationDispatcher::update_model.

use vehicle_admin::{
    error::{validation::ValidationError, Error},
    model::{
        list::ModelListState,
        vehicle::{EntityKind, MakeInput, ModelInput, NAME_MAX_LEN},
    },
};
use vehicle_admin_test_utils::prelude::*;

use crate::util::list_service;

/// Tests updating an existing make.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn updates_existing_make() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_update_endpoint(3, vec![factory::mock_make(3, "Mazda", "MAZ")], 1)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "Mazda".to_string(),
        abrv: "MAZ".to_string(),
    };
    let make = dispatcher.update_make(3, &input).await?;

    assert_eq!(make.name, "Mazda");
    test.assert_mocks();

    Ok(())
}

/// Tests updating a make that was deleted in the meantime.
///
/// Expected: Err with NotFound
#[tokio::test]
async fn fails_for_missing_make() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_update_endpoint(9, vec![], 1)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "Mazda".to_string(),
        abrv: String::new(),
    };
    let result = dispatcher.update_make(9, &input).await;

    assert!(matches!(
        result,
        Err(Error::NotFound {
            entity: EntityKind::Make,
            id: 9
        })
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests that an overlong name is rejected without contacting the backend.
///
/// Expected: Err with TooLong, zero update requests
#[tokio::test]
async fn rejects_overlong_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_update_endpoint(3, vec![], 0)
        .build()
        .await;
    let dispatcher = list_service(&test)?.dispatcher();

    let input = MakeInput {
        name: "x".repeat(NAME_MAX_LEN + 1),
        abrv: String::new(),
    };
    let result = dispatcher.update_make(3, &input).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TooLong { field: "name", .. }))
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests that updating a model refetches the model list.
///
/// Expected: list endpoint hit before and after the update
#[tokio::test]
async fn updates_model_and_invalidates_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(
            vec![],
            vec![factory::mock_model(5, 1, "Corolla", "COR", Some("Toyota"))],
            2,
        )
        .with_model_update_endpoint(5, vec![factory::mock_model_row(5, 2, "Corolla", "COR")], 1)
        .build()
        .await;
    let service = list_service(&test)?;
    let dispatcher = service.dispatcher();
    let state = ModelListState::default();

    service.list_models(&state).await?;

    let input = ModelInput {
        make_id: Some(2),
        name: "Corolla".to_string(),
        abrv: "COR".to_string(),
    };
    let model = dispatcher.update_model(5, &input).await?;

    assert_eq!(model.make_id, 2);

    service.list_models(&state).await?;
    test.assert_mocks();

    Ok(())
}
