//! HTTP-level integration tests for the `/activities` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, count_rows, delete, get, post_json, seed_activity, seed_camper,
    seed_signup,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_returns_201(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/activities",
        serde_json::json!({"name": "Archery", "difficulty": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Archery");
    assert_eq!(json["difficulty"], 2);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_with_empty_name_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/activities",
        serde_json::json!({"name": "", "difficulty": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"errors": ["validation errors"]})
    );
    assert_eq!(count_rows(&pool, "activities").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_with_bad_shape_returns_400(pool: PgPool) {
    let bodies = [
        serde_json::json!({"name": "Archery"}),
        serde_json::json!({"name": "Archery", "difficulty": 2, "signups": []}),
        serde_json::json!({"name": "Archery", "difficulty": "hard"}),
    ];
    for body in bodies {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/activities",
            body.clone(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["errors"][0], "validation errors");
    }
    assert_eq!(count_rows(&pool, "activities").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_activities(pool: PgPool) {
    let archery = seed_activity(&pool, "Archery", 2).await;
    let camper = seed_camper(&pool, "Ana", 10).await;
    seed_signup(&pool, camper, archery, 9).await;
    let canoe = seed_activity(&pool, "Canoe", 4).await;

    let response = get(common::build_test_app(pool), "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": archery, "name": "Archery", "difficulty": 2},
            {"id": canoe, "name": "Canoe", "difficulty": 4},
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_activity_cascades_to_signups(pool: PgPool) {
    let ana = seed_camper(&pool, "Ana", 10).await;
    let bo = seed_camper(&pool, "Bo", 12).await;
    let archery = seed_activity(&pool, "Archery", 2).await;
    let canoe = seed_activity(&pool, "Canoe", 4).await;
    seed_signup(&pool, ana, archery, 9).await;
    seed_signup(&pool, bo, archery, 10).await;
    seed_signup(&pool, ana, archery, 16).await;
    seed_signup(&pool, bo, canoe, 11).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/activities/{archery}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    assert_eq!(count_rows(&pool, "activities").await, 1);
    assert_eq!(count_rows(&pool, "signups").await, 1);
    assert_eq!(count_rows(&pool, "campers").await, 2);

    let response = get(common::build_test_app(pool), &format!("/campers/{ana}")).await;
    let json = body_json(response).await;
    assert_eq!(json["signups"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_activity_returns_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/activities/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "Activity not found"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_non_integer_activity_id_returns_json_404(pool: PgPool) {
    seed_activity(&pool, "Archery", 2).await;

    let response = delete(common::build_test_app(pool.clone()), "/activities/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Activity not found"})
    );
    assert_eq!(count_rows(&pool, "activities").await, 1);
}
