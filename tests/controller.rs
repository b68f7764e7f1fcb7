//! End-to-end behavior of the catalog controller over in-memory sources.

use catalogue::query::SortDirection;
use catalogue::source::{to_payload, FileSource, StaticSource};
use catalogue::{
    handle_event, initialize, Action, CatalogController, CatalogError, CategoryFilter, Config,
    Event, Record, SortColumn,
};
use std::io::Write;

fn apple_records() -> Vec<Record> {
    vec![
        Record::new(1, "Apple Phone", 500.0, "smartphones", 4.0),
        Record::new(2, "Apple Laptop", 1000.0, "laptops", 3.0),
    ]
}

fn numbered_phones(count: u64) -> Vec<Record> {
    (1..=count)
        .map(|id| Record::new(id, format!("Phone {id}"), 100.0 + id as f64, "smartphones", 4.0))
        .collect()
}

fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

async fn loaded(records: Vec<Record>) -> CatalogController {
    let mut catalog = CatalogController::new(Config::default(), StaticSource::new(records));
    catalog.initialize().await;
    catalog
}

#[tokio::test]
async fn search_and_category_compose() {
    let mut catalog = loaded(apple_records()).await;

    catalog.submit_search("Apple").await;
    assert_eq!(ids(&catalog.view().page_items), vec![1, 2]);

    catalog.change_category("smartphones").await.unwrap();
    let view = catalog.view();
    assert_eq!(ids(&view.page_items), vec![1]);
    assert_eq!(view.search_text, "Apple");
    assert_eq!(view.error_message, None);
}

#[tokio::test]
async fn category_then_search_composes_the_same_way() {
    let mut catalog = loaded(apple_records()).await;

    catalog.change_category("smartphones").await.unwrap();
    catalog.submit_search("apple").await;

    assert_eq!(ids(&catalog.view().page_items), vec![1]);
}

#[tokio::test]
async fn short_search_is_rejected_without_touching_query() {
    let mut catalog = loaded(apple_records()).await;
    catalog.submit_search("Laptop").await;

    catalog.submit_search("ab").await;
    let view = catalog.view();
    assert!(view.page_items.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(
        view.error_message.as_deref(),
        Some("Search text should be at least 3 characters long")
    );
    assert_eq!(catalog.state().query.search_text, "Laptop");

    // The next valid intent recomputes with the preserved search.
    catalog.change_category("All").await.unwrap();
    assert_eq!(ids(&catalog.view().page_items), vec![2]);
    assert_eq!(catalog.view().error_message, None);
}

#[tokio::test]
async fn empty_search_is_a_validation_error() {
    let mut catalog = loaded(apple_records()).await;

    catalog.submit_search("").await;
    assert!(catalog.view().page_items.is_empty());
    assert!(catalog.view().error_message.is_some());
}

#[tokio::test]
async fn unmatched_search_reports_no_results() {
    let mut catalog = loaded(apple_records()).await;

    catalog.submit_search("banana").await;
    let view = catalog.view();
    assert!(view.page_items.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.error_message.as_deref(), Some("No results found"));
}

#[tokio::test]
async fn unknown_category_changes_nothing() {
    let mut catalog = loaded(apple_records()).await;
    catalog.submit_search("Apple").await;
    let before = catalog.view();

    let err = catalog.change_category("shoes").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCategory(ref c) if c == "shoes"));
    assert_eq!(catalog.view(), before);
}

#[tokio::test]
async fn twelve_records_paginate_into_three_pages() {
    let mut catalog = loaded(numbered_phones(12)).await;

    let view = catalog.view();
    assert_eq!(view.total_pages, 3);
    assert_eq!(ids(&view.page_items), vec![1, 2, 3, 4, 5]);

    catalog.select_page(5).await;
    let view = catalog.view();
    assert_eq!(view.current_page, 3);
    assert_eq!(ids(&view.page_items), vec![11, 12]);
}

#[tokio::test]
async fn page_zero_clamps_to_first_page() {
    let mut catalog = loaded(numbered_phones(12)).await;

    catalog.select_page(0).await;
    assert_eq!(catalog.view().current_page, 1);
}

#[tokio::test]
async fn selecting_the_same_page_twice_is_idempotent() {
    let mut catalog = loaded(numbered_phones(12)).await;

    catalog.select_page(2).await;
    let first = catalog.view();
    catalog.select_page(2).await;
    assert_eq!(catalog.view(), first);
}

#[tokio::test]
async fn repeated_sort_reverses_direction() {
    let mut catalog = loaded(numbered_phones(7)).await;

    catalog.sort_by(SortColumn::Price).await;
    let ascending = catalog.view();
    assert_eq!(ascending.sort.map(|s| s.direction), Some(SortDirection::Ascending));
    assert_eq!(ids(&ascending.page_items), vec![1, 2, 3, 4, 5]);

    catalog.sort_by(SortColumn::Price).await;
    let descending = catalog.view();
    assert_eq!(descending.sort.map(|s| s.direction), Some(SortDirection::Descending));
    assert_eq!(ids(&descending.page_items), vec![7, 6, 5, 4, 3]);
    assert_eq!(descending.total_records, ascending.total_records);
}

#[tokio::test]
async fn sorting_keeps_the_current_page() {
    let mut catalog = loaded(numbered_phones(12)).await;

    catalog.select_page(2).await;
    catalog.sort_by(SortColumn::Rating).await;
    assert_eq!(catalog.view().current_page, 2);
}

#[tokio::test]
async fn new_search_returns_to_first_page() {
    let mut catalog = loaded(numbered_phones(12)).await;

    catalog.select_page(3).await;
    catalog.submit_search("phone").await;
    assert_eq!(catalog.view().current_page, 1);
}

#[tokio::test]
async fn failed_initialize_shows_load_failure_until_reset() {
    let mut catalog = CatalogController::new(
        Config::default(),
        StaticSource::failing("connection refused"),
    );
    catalog.initialize().await;

    let view = catalog.view();
    assert!(view.page_items.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(
        view.error_message.as_deref(),
        Some("Failed to load products: connection refused")
    );

    // Intents over an empty store keep the failure visible.
    catalog.select_page(1).await;
    assert_eq!(
        catalog.view().error_message.as_deref(),
        Some("Failed to load products: connection refused")
    );
}

#[tokio::test]
async fn load_failure_returns_after_a_rejected_search() {
    let mut catalog = CatalogController::new(Config::default(), StaticSource::failing("offline"));
    catalog.initialize().await;

    catalog.submit_search("ab").await;
    catalog.select_page(1).await;

    assert!(!catalog.state().store.is_loaded());
    assert_eq!(
        catalog.view().error_message.as_deref(),
        Some("Failed to load products: offline")
    );
}

#[tokio::test]
async fn rejected_search_keeps_the_view_consistent() {
    let mut catalog = loaded(numbered_phones(12)).await;
    catalog.select_page(3).await;

    catalog.submit_search("ab").await;
    let view = catalog.view();
    assert!(view.current_page >= 1);
    assert!(view.current_page <= view.total_pages.max(1));
    assert_eq!(view.total_records, 0);

    // the position survives for the next valid intent
    catalog.sort_by(SortColumn::Price).await;
    assert_eq!(catalog.view().current_page, 3);
}

#[tokio::test]
async fn empty_catalog_loads_without_error() {
    let mut catalog = loaded(Vec::new()).await;

    let view = catalog.view();
    assert_eq!(view.error_message, None);
    assert_eq!(view.total_pages, 0);

    catalog.submit_search("phone").await;
    assert_eq!(catalog.view().error_message.as_deref(), Some("No results found"));
}

#[tokio::test]
async fn reset_restores_default_query() {
    let mut catalog = loaded(numbered_phones(12)).await;
    catalog.submit_search("Phone 1").await;
    catalog.sort_by(SortColumn::Title).await;

    catalog.reset().await;
    let view = catalog.view();
    assert_eq!(view.search_text, "");
    assert_eq!(view.category, CategoryFilter::All);
    assert_eq!(view.sort, None);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 3);
    assert!(!view.is_loading);
}

#[tokio::test]
async fn loads_records_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", to_payload(&apple_records()).unwrap()).unwrap();

    let mut catalog = CatalogController::new(Config::default(), FileSource::new(file.path()));
    catalog.initialize().await;
    assert_eq!(catalog.view().total_records, 2);
    assert!(catalog.view().loaded_at.is_some());
}

#[test]
fn intents_during_a_load_run_after_it_in_order() {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
    let Action::FetchRecords { generation } = actions[0];

    handle_event(&mut state, &Event::SubmitSearch("Apple".into())).unwrap();
    handle_event(&mut state, &Event::ChangeCategory("laptops".into())).unwrap();
    assert_eq!(state.pending.len(), 2);

    handle_event(
        &mut state,
        &Event::RecordsLoaded {
            generation,
            records: apple_records(),
        },
    )
    .unwrap();

    let view = state.compute_view();
    assert_eq!(ids(&view.page_items), vec![2]);
    assert!(state.pending.is_empty());
}

#[test]
fn superseded_load_results_are_discarded() {
    let mut state = initialize(&Config::default());
    let (_, first) = handle_event(&mut state, &Event::Initialize).unwrap();
    let (_, second) = handle_event(&mut state, &Event::Reset).unwrap();
    let Action::FetchRecords { generation: old } = first[0];
    let Action::FetchRecords { generation: new } = second[0];

    handle_event(
        &mut state,
        &Event::RecordsLoaded {
            generation: new,
            records: apple_records(),
        },
    )
    .unwrap();
    let (render, _) = handle_event(
        &mut state,
        &Event::RecordsLoaded {
            generation: old,
            records: numbered_phones(12),
        },
    )
    .unwrap();

    assert!(!render);
    assert_eq!(state.store.len(), 2);
}
