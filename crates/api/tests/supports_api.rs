//! HTTP-level tests for `/supports`, `/typeSupports` and `/tagsSupports`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

async fn create_type(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, "/api/typeSupports", serde_json::json!({"title": title})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

async fn create_tag(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, "/api/tagsSupports", serde_json::json!({"title": title})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_support_embeds_type_and_tags(pool: PgPool) {
    let type_id = create_type(&pool, "Финансовая поддержка").await;
    let tag_a = create_tag(&pool, "гранты").await;
    let tag_b = create_tag(&pool, "субсидии").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/supports",
        serde_json::json!({
            "title": "Грант для ИТ-компаний",
            "description": "До 500 тыс. рублей",
            "typeId": type_id,
            "tagIds": [tag_a, tag_b],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["type"]["title"], "Финансовая поддержка");
    assert_eq!(json["tags"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn type_detail_embeds_its_supports(pool: PgPool) {
    let type_id = create_type(&pool, "Имущественная поддержка").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/supports",
        serde_json::json!({
            "title": "Аренда помещений",
            "typeId": type_id,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/typeSupports/{type_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["supports"][0]["title"], "Аренда помещений");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tag_detail_embeds_its_supports(pool: PgPool) {
    let tag_id = create_tag(&pool, "обучение").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/supports",
        serde_json::json!({
            "title": "Курсы для самозанятых",
            "tagIds": [tag_id],
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tagsSupports/{tag_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["supports"][0]["title"], "Курсы для самозанятых");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_tag_ids_replaces_links(pool: PgPool) {
    let tag_a = create_tag(&pool, "старый тег").await;
    let tag_b = create_tag(&pool, "новый тег").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/supports",
            serde_json::json!({"title": "Мера", "tagIds": [tag_a]}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/supports/{id}"),
        serde_json::json!({"tagIds": [tag_b]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tags = json["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["title"], "новый тег");
}
