//! End-to-end coverage of the REST surface against an in-memory store.

use std::sync::Arc;

use actix_web::{App, test};
use serde_json::{Value, json};

use backend::domain::UserRecord;
use backend::example_data;
use backend::inbound::http::{self, HttpState};
use backend::outbound::persistence::InMemoryUserStore;

macro_rules! directory_app {
    ($store:expr) => {
        test::init_service(
            App::new().configure(|cfg| http::configure(cfg, HttpState::with_store($store))),
        )
        .await
    };
}

fn ada() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "phone": "0812345678",
        "department": "Technology",
    })
}

#[actix_web::test]
async fn listing_an_empty_directory_returns_an_empty_array() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert!(res.status().is_success());
    let body: Vec<UserRecord> = test::read_body_json(res).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn creating_a_user_returns_201_with_store_assigned_fields() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(ada())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 201);

    let body: UserRecord = test::read_body_json(res).await;
    assert_eq!(body.id.get(), 1);
    assert_eq!(body.name.as_ref(), "Ada");
    // Omitted in the payload, so the default applies.
    assert!(body.active);
    assert_eq!(body.created_at, body.updated_at);
}

#[actix_web::test]
async fn malformed_fields_are_rejected_with_field_details() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let mut payload = ada();
    payload["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 400);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "email");

    let mut payload = ada();
    payload["phone"] = json!("12345");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 400);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "phone");
}

#[actix_web::test]
async fn duplicate_emails_conflict() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(ada())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

    // Same address, different case; the unique check ignores case.
    let mut payload = ada();
    payload["name"] = json!("Imposter");
    payload["email"] = json!("Ada@Example.com");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 409);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["message"], "Email already in use");
}

#[actix_web::test]
async fn fetching_a_user_by_id() {
    let store = Arc::new(InMemoryUserStore::new());
    example_data::seed_users(store.as_ref())
        .await
        .expect("seed store");
    let app = directory_app!(store);

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/users/3").to_request()).await;
    assert!(res.status().is_success());
    let body: UserRecord = test::read_body_json(res).await;
    assert_eq!(body.name.as_ref(), "User 3");
    assert!(!body.active); // every third seed record is inactive

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/users/99").to_request()).await;
    assert_eq!(res.status().as_u16(), 404);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn updating_a_user_replaces_fields_and_bumps_the_timestamp() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(ada())
        .to_request();
    let created: UserRecord = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::put()
        .uri("/users/1")
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "0812345678",
            "department": "HR",
            "active": false,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let updated: UserRecord = test::read_body_json(res).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_ref(), "Ada Lovelace");
    assert_eq!(updated.department.as_ref(), "HR");
    assert!(!updated.active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[actix_web::test]
async fn updating_an_unknown_user_is_not_found() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let req = test::TestRequest::put()
        .uri("/users/7")
        .set_json(ada())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 404);
}

#[actix_web::test]
async fn updating_onto_a_neighbours_email_conflicts() {
    let store = Arc::new(InMemoryUserStore::new());
    example_data::seed_users(store.as_ref())
        .await
        .expect("seed store");
    let app = directory_app!(store);

    let req = test::TestRequest::put()
        .uri("/users/1")
        .set_json(json!({
            "name": "User 1",
            "email": "user2@example.com",
            "phone": "0812345678",
            "department": "HR",
            "active": true,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status().as_u16(), 409);
}

#[actix_web::test]
async fn deleting_a_user_returns_the_record_in_an_envelope() {
    let app = directory_app!(Arc::new(InMemoryUserStore::new()));

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(ada())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

    let res =
        test::call_service(&app, test::TestRequest::delete().uri("/users/1").to_request()).await;
    assert!(res.status().is_success());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "User deleted successfully");
    assert_eq!(body["user"]["email"], "ada@example.com");

    // The record is gone: a repeat delete and a fetch both miss.
    let res =
        test::call_service(&app, test::TestRequest::delete().uri("/users/1").to_request()).await;
    assert_eq!(res.status().as_u16(), 404);
    let res =
        test::call_service(&app, test::TestRequest::get().uri("/users/1").to_request()).await;
    assert_eq!(res.status().as_u16(), 404);
}

#[actix_web::test]
async fn a_seeded_directory_lists_every_record_in_id_order() {
    let store = Arc::new(InMemoryUserStore::new());
    example_data::seed_users(store.as_ref())
        .await
        .expect("seed store");
    let app = directory_app!(store);

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    let body: Vec<UserRecord> = test::read_body_json(res).await;
    assert_eq!(body.len(), example_data::SEED_COUNT);
    let ids: Vec<i64> = body.iter().map(|u| u.id.get()).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}
