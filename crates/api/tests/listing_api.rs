//! HTTP-level tests for the shared list-query contract: result windows,
//! the `Content-Range` header, filtering, sorting, and rejection of
//! malformed parameters.
//!
//! Query parameters are JSON-encoded and percent-escaped the way browser
//! clients send them; the decoded form is noted next to each URI.

mod common;

use axum::http::StatusCode;
use common::{body_json, content_range, get, post_json};
use sqlx::PgPool;

async fn seed_bids(pool: &PgPool, count: usize) {
    for i in 0..count {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/bids",
            serde_json::json!({
                "name": format!("Client {i}"),
                "phone": "+7 900 000-00-00",
                "email": format!("client{i}@example.com"),
                "form": "ООО",
                "inn": format!("77000000{i:02}"),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

// ---------------------------------------------------------------------------
// Result windows and the Content-Range header
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn explicit_window_sets_header_and_row_count(pool: PgPool) {
    seed_bids(&pool, 25).await;

    // range=[0,9]
    let app = common::build_test_app(pool);
    let response = get(app, "/api/bids?range=%5B0,9%5D").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_range(&response), "bids 0-9/25");

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn window_past_the_end_returns_remaining_rows(pool: PgPool) {
    seed_bids(&pool, 5).await;

    // range=[3,9]
    let app = common::build_test_app(pool);
    let response = get(app, "/api/bids?range=%5B3,9%5D").await;

    assert_eq!(content_range(&response), "bids 3-4/5");
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_table_preserves_degenerate_header_form(pool: PgPool) {
    // range=[0,9] against an empty table
    let app = common::build_test_app(pool);
    let response = get(app, "/api/bids?range=%5B0,9%5D").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_range(&response), "bids 0--1/0");

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rangeless_request_serves_the_default_page(pool: PgPool) {
    seed_bids(&pool, 12).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/bids").await;

    assert_eq!(content_range(&response), "bids 0-9/12");
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rangeless_maps_request_serves_every_region(pool: PgPool) {
    for i in 0..12 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/maps",
            serde_json::json!({"title": format!("Region {i}"), "ip": i, "ul": i, "smsp": i}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/maps").await;

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 12);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn text_filter_matches_substring_case_insensitively(pool: PgPool) {
    for title in ["Foobar", "Другая новость"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/news", serde_json::json!({"title": title})).await;
    }

    // filter={"title":"foo"}
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?filter=%7B%22title%22:%22foo%22%7D").await;

    assert_eq!(content_range(&response), "news 0-0/1");
    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Foobar");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sequence_filter_matches_membership_exactly(pool: PgPool) {
    for name in ["alpha", "beta", "gamma"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/bids",
            serde_json::json!({
                "name": name,
                "phone": "1",
                "email": "a@b.c",
                "form": "ИП",
                "inn": "1",
            }),
        )
        .await;
    }

    // filter={"name":["alpha","beta"]}
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/bids?filter=%7B%22name%22:%5B%22alpha%22,%22beta%22%5D%7D",
    )
    .await;

    assert_eq!(content_range(&response), "bids 0-1/2");
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"alpha"));
    assert!(names.contains(&"beta"));
    assert!(!names.contains(&"gamma"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn count_and_rows_use_the_same_predicate(pool: PgPool) {
    for i in 0..15 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/news",
            serde_json::json!({"title": if i % 3 == 0 { format!("match {i}") } else { format!("other {i}") }}),
        )
        .await;
    }

    // filter={"title":"match"} range=[0,2]
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/news?range=%5B0,2%5D&filter=%7B%22title%22:%22match%22%7D",
    )
    .await;

    // 5 titles match; the window returns 3 of them and the header totals 5.
    assert_eq!(content_range(&response), "news 0-2/5");
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sort_orders_rows_case_insensitively_on_direction(pool: PgPool) {
    for title in ["b-news", "c-news", "a-news"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/news", serde_json::json!({"title": title})).await;
    }

    // sort=["title","asc"] (lower case on purpose)
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?sort=%5B%22title%22,%22asc%22%5D").await;

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["a-news", "b-news", "c-news"]);
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_filter_is_a_400_naming_the_parameter(pool: PgPool) {
    // filter={not valid json
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?filter=%7Bnot%20valid%20json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("filter"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_range_is_a_400(pool: PgPool) {
    // range=[9,0]
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?range=%5B9,0%5D").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("range"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_sort_field_is_rejected(pool: PgPool) {
    // sort=["password","ASC"]
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?sort=%5B%22password%22,%22ASC%22%5D").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_sort_order_is_rejected(pool: PgPool) {
    // sort=["title","sideways"]
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?sort=%5B%22title%22,%22sideways%22%5D").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_filter_field_is_rejected(pool: PgPool) {
    // filter={"secret":"x"}
    let app = common::build_test_app(pool);
    let response = get(app, "/api/news?filter=%7B%22secret%22:%22x%22%7D").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
