//! HTTP-level tests for `/services` and `/forms`, covering the embedded
//! relations (centers, form, attached services).

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_center(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, "/api/centers", serde_json::json!({"title": title})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

async fn create_form(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, "/api/forms", serde_json::json!({"title": title})).await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_service_embeds_centers_and_form(pool: PgPool) {
    let center_a = create_center(&pool, "Центр А").await;
    let center_b = create_center(&pool, "Центр Б").await;
    let form_id = create_form(&pool, "Заявка на консультацию").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/services",
        serde_json::json!({
            "title": "Консультация",
            "description": "Первичная консультация предпринимателя",
            "centerIds": [center_a, center_b],
            "formId": form_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["centers"].as_array().unwrap().len(), 2);
    assert_eq!(json["form"]["title"], "Заявка на консультацию");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn service_list_embeds_relations(pool: PgPool) {
    let center = create_center(&pool, "Центр").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/services",
        serde_json::json!({
            "title": "Услуга",
            "description": "Описание",
            "centerIds": [center],
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/services").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["centers"][0]["title"], "Центр");
    assert!(json[0]["form"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_center_ids_replaces_links(pool: PgPool) {
    let center_a = create_center(&pool, "Старый центр").await;
    let center_b = create_center(&pool, "Новый центр").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/services",
            serde_json::json!({
                "title": "Услуга",
                "description": "Описание",
                "centerIds": [center_a],
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/services/{id}"),
        serde_json::json!({"centerIds": [center_b]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let centers = json["centers"].as_array().unwrap();
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0]["title"], "Новый центр");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_service_requires_title_and_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/services",
        serde_json::json!({"title": "Без описания", "description": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_service_keeps_its_centers(pool: PgPool) {
    let center = create_center(&pool, "Выживший центр").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/services",
            serde_json::json!({
                "title": "Временная услуга",
                "description": "Описание",
                "centerIds": [center],
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/services/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/centers/{center}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_detail_embeds_attached_services(pool: PgPool) {
    let form_id = create_form(&pool, "Форма").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/services",
        serde_json::json!({
            "title": "Привязанная услуга",
            "description": "Описание",
            "formId": form_id,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/forms/{form_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["services"][0]["title"], "Привязанная услуга");
}
