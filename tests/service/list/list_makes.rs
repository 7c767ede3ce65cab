//! Tests for ListService::list_makes and ListService::all_makes.
//!
//! Verifies that list state is translated into PostgREST parameters, that repeated queries are
//! served from the cache, and that backend failures map to the load error message.

use std::{future::Future, task::Poll};

use serde_json::json;
use vehicle_admin::{
    error::{Action, Error},
    model::{
        list::{MakeFilterField, MakeListState, MakeSortField, SortDirection},
        vehicle::{EntityKind, MakeInput},
    },
};
use vehicle_admin_test_utils::prelude::*;

use crate::util::list_service;

/// Tests the first page with the default list state.
///
/// Expected: ordered by name ascending with offset 0 and the default page size
#[tokio::test]
async fn returns_first_page_with_default_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(
            vec![
                ("select", "id,name,abrv"),
                ("order", "name.asc"),
                ("offset", "0"),
                ("limit", "5"),
            ],
            vec![
                factory::mock_make(2, "Audi", "AUD"),
                factory::mock_make(1, "BMW", "BMW"),
            ],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let makes = service.list_makes(&MakeListState::default()).await?;

    assert_eq!(makes.len(), 2);
    assert_eq!(makes[0].name, "Audi");
    test.assert_mocks();

    Ok(())
}

/// Tests that an identical query does not reach the backend twice.
///
/// Expected: one request for two identical calls
#[tokio::test]
async fn serves_repeated_query_from_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(vec![], vec![factory::mock_make(1, "BMW", "BMW")], 1)
        .build()
        .await;
    let service = list_service(&test)?;
    let state = MakeListState::default();

    let first = service.list_makes(&state).await?;
    let second = service.list_makes(&state).await?;

    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

/// Tests a list fetch that is still in flight when a mutation invalidates the cache.
///
/// Verifies the rows fetched before the mutation are returned to their caller but not cached,
/// so the next identical query reaches the backend again.
///
/// Expected: the list endpoint is hit twice
#[tokio::test]
async fn does_not_cache_fetch_overtaken_by_mutation() -> Result<(), TestError> {
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

    // Start the fetch and leave it waiting on the backend
    let mut fetch = std::pin::pin!(service.list_makes(&state));
    let polled = std::future::poll_fn(|cx| Poll::Ready(fetch.as_mut().poll(cx))).await;
    assert!(polled.is_pending());

    let input = MakeInput {
        name: "Toyota".to_string(),
        abrv: "TOY".to_string(),
    };
    dispatcher.create_make(&input).await?;

    let stale = fetch.await?;
    assert_eq!(stale.len(), 1);

    service.list_makes(&state).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests sorting, paging and a contains filter together.
///
/// Expected: `order=abrv.desc`, offset of the second page, `name=ilike.*yo*`
#[tokio::test]
async fn applies_sort_page_and_filter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(
            vec![
                ("order", "abrv.desc"),
                ("offset", "10"),
                ("limit", "10"),
                ("name", "ilike.*yo*"),
            ],
            vec![factory::mock_make(7, "Toyota", "TOY")],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let mut state = MakeListState::default();
    state.set_sort_field(MakeSortField::Abrv);
    state.set_sort_direction(SortDirection::Desc);
    state.set_filter_field(MakeFilterField::Name);
    state.set_filter_value("yo");
    state.set_page_size(10);
    state.set_page(2);

    service.list_makes(&state).await?;
    test.assert_mocks();

    Ok(())
}

/// Tests that a page shorter than the page size disables the next page.
///
/// Expected: 3 rows with page size 5 means no next page
#[tokio::test]
async fn short_page_disables_next() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(
            vec![("offset", "0"), ("limit", "5")],
            vec![
                factory::mock_make(1, "Audi", "AUD"),
                factory::mock_make(2, "BMW", "BMW"),
                factory::mock_make(3, "Citroen", "CIT"),
            ],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;
    let mut state = MakeListState::default();

    let makes = service.list_makes(&state).await?;

    assert!(!state.has_next_page(makes.len()));
    assert!(!state.next_page(makes.len()));
    assert_eq!(state.page(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests the mapping of a backend failure to the load error message.
///
/// Expected: Err with BackendError, shown as "Error loading manufacturers."
#[tokio::test]
async fn fails_with_load_message_on_backend_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "VehicleMake", 500, 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let result = service.list_makes(&MakeListState::default()).await;

    let err = result.expect_err("backend failure should be returned");
    assert!(matches!(err, Error::BackendError(_)));
    assert_eq!(
        err.user_message(Action::Load(EntityKind::Make)),
        "Error loading manufacturers."
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a failed fetch is not cached.
///
/// Expected: the second call reaches the backend again
#[tokio::test]
async fn does_not_cache_failures() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "VehicleMake", 503, 2)
        .build()
        .await;
    let service = list_service(&test)?;
    let state = MakeListState::default();

    assert!(service.list_makes(&state).await.is_err());
    assert!(service.list_makes(&state).await.is_err());
    test.assert_mocks();

    Ok(())
}

/// Tests the unpaginated manufacturer list used by dropdowns.
///
/// Expected: every make ordered by name
#[tokio::test]
async fn all_makes_orders_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_make_list_endpoint(
            vec![("order", "name.asc"), ("offset", "0")],
            vec![
                factory::mock_make(3, "Audi", "AUD"),
                factory::mock_make(1, "BMW", "BMW"),
                factory::mock_make(2, "Toyota", "TOY"),
            ],
            1,
        )
        .build()
        .await;
    let service = list_service(&test)?;

    let makes = service.all_makes().await?;

    let names: Vec<&str> = makes.iter().map(|make| make.name.as_str()).collect();
    assert_eq!(names, vec!["Audi", "BMW", "Toyota"]);
    test.assert_mocks();

    Ok(())
}

/// Tests the manufacturer dropdown source when the backend fails.
///
/// Verifies the failure is returned instead of an empty list so the model filter can show it.
///
/// Expected: Err shown as "Error loading manufacturers."
#[tokio::test]
async fn all_makes_returns_backend_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "VehicleMake", 502, 1)
        .build()
        .await;
    let service = list_service(&test)?;

    let result = service.all_makes().await;

    let err = result.expect_err("backend failure should be returned");
    assert_eq!(
        err.user_message(Action::Load(EntityKind::Make)),
        "Error loading manufacturers."
    );
    test.assert_mocks();

    Ok(())
}
