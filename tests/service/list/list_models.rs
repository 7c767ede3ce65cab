//! Tests for ListService::list_models.
//!
//! Verifies the embedded manufacturer join, the numeric manufacturer filter and its rejection
//! of non-numeric values before any request is made.

use vehicle_admin::{
    error::{validation::ValidationError, Action, Error},
    model::{
        list::{ModelFilterField, ModelListState, ModelSortField},
        vehicle::EntityKind,
    },
};
use vehicle_admin_test_utils::prelude::*;

use crate::util::list_service;

/// Tests that a model whose manufacturer no longer exists is listed as "Unknown".
///
/// Expected: Ok with the dangling row's manufacturer shown as "Unknown"
#[tokio::test]
async fn lists_dangling_manufacturer_as_unknown() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(
            vec![("order", "name.asc")],
            vec![
                factory::mock_model(1, 1, "Corolla", "COR", Some("Toyota")),
                factory::mock_model_object_join(2, 99, "Orphan", "ORP", None),
            ],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let models = service.list_models(&ModelListState::default()).await?;

    assert_eq!(models[0].make_name(), "Toyota");
    assert_eq!(models[1].make_name(), "Unknown");
    test.assert_mocks();

    Ok(())
}

/// Tests filtering by manufacturer ID.
///
/// Expected: exact match `make_id=eq.3` sorted by manufacturer ID
#[tokio::test]
async fn filters_by_manufacturer_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(
            vec![("order", "make_id.asc"), ("make_id", "eq.3")],
            vec![factory::mock_model(4, 3, "Civic", "CIV", Some("Honda"))],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let mut state = ModelListState::default();
    state.set_sort_field(ModelSortField::MakeId);
    state.set_filter_field(ModelFilterField::MakeId);
    state.set_filter_value("3");

    let models = service.list_models(&state).await?;

    assert_eq!(models[0].make_id, 3);
    test.assert_mocks();

    Ok(())
}

/// Tests that a non-numeric manufacturer filter is rejected before the request.
///
/// Expected: Err with InvalidFilterValue, no request made
#[tokio::test]
async fn rejects_non_numeric_manufacturer_filter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(vec![], vec![], 0)
        .build()
        .await;
    let service = list_service(&test)?;

    let mut state = ModelListState::default();
    state.set_filter_field(ModelFilterField::MakeId);
    state.set_filter_value("abc");

    let result = service.list_models(&state).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidFilterValue { .. }))
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests a text filter on model name.
///
/// Expected: case-insensitive contains match `name=ilike.*cor*`
#[tokio::test]
async fn filters_by_name_contains() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_list_endpoint(
            vec![("name", "ilike.*cor*")],
            vec![factory::mock_model(1, 1, "Corolla", "COR", Some("Toyota"))],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let mut state = ModelListState::default();
    state.set_filter_value("cor");

    service.list_models(&state).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests the mapping of a backend failure to the model load message.
///
/// Expected: "Error loading models."
#[tokio::test]
async fn fails_with_load_message_on_backend_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "VehicleModel", 500, 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let result = service.list_models(&ModelListState::default()).await;

    let err = result.expect_err("backend failure should be returned");

    assert_eq!(
        err.user_message(Action::Load(EntityKind::Model)),
        "Error loading models."
    );
    test.assert_mocks();

    Ok(())
}
