//! The client flow end to end: fetch the full record set over HTTP, then
//! filter, sort, and paginate locally — what the `browse` binary does.

use std::sync::Arc;

use actix_web::{App, test};
use listview::{DirectoryEntry, SortDirection, SortKey, StatusFilter, ViewState};

use backend::domain::UserRecord;
use backend::example_data;
use backend::inbound::http::{self, HttpState};
use backend::outbound::persistence::InMemoryUserStore;

async fn fetch_seeded_records() -> Vec<UserRecord> {
    let store = Arc::new(InMemoryUserStore::new());
    example_data::seed_users(store.as_ref())
        .await
        .expect("seed store");
    let app = test::init_service(
        App::new().configure(|cfg| http::configure(cfg, HttpState::with_store(store))),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert!(res.status().is_success());
    test::read_body_json(res).await
}

#[actix_web::test]
async fn default_view_shows_the_first_ten_of_twenty() {
    let records = fetch_seeded_records().await;
    let view = ViewState::default();

    let page = view.derive(&records);
    assert_eq!(page.total_filtered, 20);
    assert_eq!(page.total_pages, 2);
    let ids: Vec<i64> = page.items.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[actix_web::test]
async fn inactive_filter_finds_every_third_seed_record() {
    let records = fetch_seeded_records().await;
    let mut view = ViewState::default();
    view.set_status_filter(StatusFilter::Inactive);

    let page = view.derive(&records);
    assert_eq!(page.total_filtered, 6);
    let ids: Vec<i64> = page.items.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![3, 6, 9, 12, 15, 18]);
}

#[actix_web::test]
async fn search_narrows_by_name_substring() {
    let records = fetch_seeded_records().await;
    let mut view = ViewState::default();
    view.set_search_text("user 2");

    // "User 2" and "User 20".
    let page = view.derive(&records);
    assert_eq!(page.total_filtered, 2);
    assert!(page.items.iter().all(|r| r.name().to_lowercase().contains("user 2")));
}

#[actix_web::test]
async fn descending_id_sort_paginates_from_the_top() {
    let records = fetch_seeded_records().await;
    let mut view = ViewState::default();
    view.set_sort(SortKey::Id, SortDirection::Descending);
    view.set_page(2);

    let ids: Vec<i64> = view
        .derive(&records)
        .items
        .iter()
        .map(|r| r.id.get())
        .collect();
    assert_eq!(ids, (1..=10).rev().collect::<Vec<_>>());
}
