//! Tests for ListService::find_make and ListService::find_model.

use vehicle_admin::{
    error::{Action, Error},
    model::vehicle::{EntityKind, ModelInput, UNKNOWN_MAKE_LABEL},
};
use vehicle_admin_test_utils::prelude::*;

use crate::util::list_service;

/// Tests looking up an existing make.
///
/// Expected: Ok with the make's fields
#[tokio::test]
async fn finds_existing_make() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_find_endpoint(4, vec![factory::mock_make(4, "Honda", "HON")], 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let make = service.find_make(4).await?;

    assert_eq!(make.abrv, "HON");
    test.assert_mocks();

    Ok(())
}

/// Tests looking up a make that does not exist.
///
/// Expected: Err with NotFound, shown as "Manufacturer not found"
#[tokio::test]
async fn fails_for_missing_make() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_find_endpoint(404, vec![], 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let result = service.find_make(404).await;

    let err = result.expect_err("missing make should not be found");
    assert!(matches!(
        err,
        Error::NotFound {
            entity: EntityKind::Make,
            id: 404
        }
    ));
    assert_eq!(
        err.user_message(Action::Load(EntityKind::Make)),
        "Manufacturer not found"
    );
    test.assert_mocks();

    Ok(())
}

/// Tests prefilling the model form from a found model.
///
/// Expected: form input carries the model's manufacturer ID
#[tokio::test]
async fn finds_model_for_editing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_find_endpoint(
            8,
            vec![factory::mock_model(8, 2, "Accord", "ACC", Some("Honda"))],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let model = service.find_model(8).await?;
    let input = ModelInput::from(&model);

    assert_eq!(input.make_id, Some(2));
    assert_eq!(input.name, "Accord");
    assert_eq!(model.make_name(), "Honda");
    assert_eq!(model.current_make_label(), "Honda");
    test.assert_mocks();

    Ok(())
}

/// Tests editing a model whose manufacturer was deleted, joined as an empty array.
///
/// Verifies the model is still found and its manufacturer ID kept for the form, while the
/// current manufacturer is labelled as unknown.
///
/// Expected: Ok with no embedded make and the "Unknown manufacturer" label
#[tokio::test]
async fn finds_model_with_deleted_manufacturer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_find_endpoint(
            12,
            vec![factory::mock_model(12, 77, "Orphan", "ORP", None)],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let model = service.find_model(12).await?;
    let input = ModelInput::from(&model);

    assert!(model.vehicle_make.is_none());
    assert_eq!(input.make_id, Some(77));
    assert_eq!(model.current_make_label(), UNKNOWN_MAKE_LABEL);
    test.assert_mocks();

    Ok(())
}

/// Tests editing a model whose manufacturer join comes back as `null`.
///
/// Expected: Ok with the "Unknown manufacturer" label
#[tokio::test]
async fn finds_model_with_null_manufacturer_join() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_find_endpoint(
            13,
            vec![factory::mock_model_object_join(13, 78, "Ghost", "GHO", None)],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let model = service.find_model(13).await?;

    assert!(model.vehicle_make.is_none());
    assert_eq!(model.make_id, 78);
    assert_eq!(model.current_make_label(), "Unknown manufacturer");
    test.assert_mocks();

    Ok(())
}

/// Tests looking up a model that does not exist.
///
/// Expected: "Model not found"
#[tokio::test]
async fn fails_for_missing_model() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_model_find_endpoint(11, vec![], 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let result = service.find_model(11).await;

    let err = result.expect_err("missing model should not be found");
    assert_eq!(
        err.user_message(Action::Load(EntityKind::Model)),
        "Model not found"
    );
    test.assert_mocks();

    Ok(())
}
