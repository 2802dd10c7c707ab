//! HTTP-level integration tests for item reporting, listing and search.

mod common;

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use common::{body_json, get, post_json, post_json_auth, report_item, signup};
use sqlx::PgPool;

fn wallet_report() -> serde_json::Value {
    serde_json::json!({
        "name": "Wallet",
        "description": "Black leather",
        "category": "Accessories",
        "location": "Gate 3",
        "date_lost": "2025-06-01",
    })
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Reporting returns 201 with the stored row, owned by the caller and active.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_lost_item(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;

    let response =
        post_json_auth(app, "/api/v1/items/lost", wallet_report(), &user.token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let item = &json["data"];
    assert_eq!(item["kind"], "lost");
    assert_eq!(item["user_id"], user.id);
    assert_eq!(item["status"], "active");
    assert_eq!(item["date_lost"], "2025-06-01");
    assert!(item.get("date_found").is_none());
    assert_eq!(item["reporter_name"], "Owner");
    assert!(item.get("reporter_email").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/items/found", wallet_report()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_rejects_blank_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;

    let mut body = wallet_report();
    body["location"] = serde_json::json!("   ");
    let response = post_json_auth(app, "/api/v1/items/lost", body, &user.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// A report without its date is rejected like any other missing field.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_rejects_missing_date(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;

    let mut body = wallet_report();
    body.as_object_mut().unwrap().remove("date_lost");
    let response = post_json_auth(app, "/api/v1/items/lost", body, &user.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "date_lost is required");
}

/// The date key must match the kind in the path.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_rejects_other_kinds_date(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;

    let response =
        post_json_auth(app.clone(), "/api/v1/items/found", wallet_report(), &user.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let json = body_json(get(app, "/api/v1/items/found").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

/// Bodies that do not deserialize get the JSON error envelope, not a
/// plain-text 422.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_report_body_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;

    let mut missing_name = wallet_report();
    missing_name.as_object_mut().unwrap().remove("name");
    let mut bad_date = wallet_report();
    bad_date["date_lost"] = serde_json::json!("last tuesday");

    for body in [missing_name, bad_date] {
        let response =
            post_json_auth(app.clone(), "/api/v1/items/lost", body, &user.token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["error"].is_string());
    }
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

/// Listings are public, newest first, and limited to the requested kind.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_items_is_public_and_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;
    let first = report_item(&app, &user.token, "lost", "Umbrella", "Red", "Library").await;
    let second = report_item(&app, &user.token, "lost", "Keys", "Three keys", "Cafeteria").await;
    report_item(&app, &user.token, "found", "Scarf", "Wool", "Gym").await;

    let json = body_json(get(app, "/api/v1/items/lost").await).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![second, first]);
}

/// `?q=` matches name, description or location case-insensitively.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_items_filters_by_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;
    let by_name = report_item(&app, &user.token, "found", "Blue Wallet", "Leather", "Gym").await;
    let by_location =
        report_item(&app, &user.token, "found", "Phone", "Cracked", "Wallet Street").await;
    report_item(&app, &user.token, "found", "Scarf", "Wool", "Library").await;

    let json = body_json(get(app, "/api/v1/items/found?q=WALLET").await).await;
    let mut ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    ids.sort();

    assert_eq!(ids, vec![by_name, by_location]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_kind_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/items/stolen").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Search returns both kinds; an empty query matches everything.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_covers_both_kinds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = signup(&app, "Owner", "owner@test.com").await;
    report_item(&app, &user.token, "lost", "Laptop", "Silver", "Lab 2").await;
    report_item(&app, &user.token, "found", "Charger", "For a laptop", "Lab 2").await;
    report_item(&app, &user.token, "found", "Mitten", "Green", "Bus stop").await;

    let json = body_json(get(app.clone(), "/api/v1/search?q=laptop").await).await;
    assert_eq!(json["data"]["lost"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["found"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["found"][0]["name"], "Charger");

    let json = body_json(get(app.clone(), "/api/v1/search?q=").await).await;
    assert_eq!(json["data"]["lost"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["found"].as_array().unwrap().len(), 2);

    let json = body_json(get(app, "/api/v1/search?q=zeppelin").await).await;
    assert!(json["data"]["lost"].as_array().unwrap().is_empty());
    assert!(json["data"]["found"].as_array().unwrap().is_empty());
}
