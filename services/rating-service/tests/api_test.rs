//! 评分接口测试

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rating_service::api::{router, AppState};
use rating_service::infrastructure::InMemoryRatingRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryRatingRepository::seeded())))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ratings")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/api/ratings/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_get_rating_without_ratings() {
    let (status, body) = send(app(), get("/api/ratings/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "product_id": 5, "avg_rating": null, "count": 0 }));
}

#[tokio::test]
async fn test_get_rating_average() {
    let (status, body) = send(app(), get("/api/ratings/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "product_id": 2, "avg_rating": 3.5, "count": 1 }));
}

#[tokio::test]
async fn test_non_numeric_product_id_is_not_found() {
    let (status, _) = send(app(), get("/api/ratings/abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_rating_then_read_back() {
    let app = app();

    let (status, body) = send(
        app.clone(),
        post_json(json!({ "product_id": 3, "user_id": 8, "rating": 4.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Rating added successfully!" }));

    send(
        app.clone(),
        post_json(json!({ "product_id": 3, "user_id": 9, "rating": 5.0, "comment": "Nice" })),
    )
    .await;

    let (_, body) = send(app, get("/api/ratings/3")).await;
    assert_eq!(body, json!({ "product_id": 3, "avg_rating": 4.5, "count": 2 }));
}

#[tokio::test]
async fn test_add_rating_missing_rating_field() {
    let (status, body) = send(app(), post_json(json!({ "product_id": 1, "user_id": 2 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_add_rating_malformed_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/ratings")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_add_rating_array_body_is_rejected() {
    let app = app();
    for payload in [json!([1, 2, 3]), json!([4, 2, 1.0, null])] {
        let (status, body) = send(app.clone(), post_json(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));
    }

    let (_, body) = send(app, get("/api/ratings/4")).await;
    assert_eq!(body, json!({ "product_id": 4, "avg_rating": null, "count": 0 }));
}

#[tokio::test]
async fn test_rejected_rating_is_not_stored() {
    let app = app();
    send(app.clone(), post_json(json!({ "product_id": 4, "rating": 1.0 }))).await;

    let (_, body) = send(app, get("/api/ratings/4")).await;
    assert_eq!(body["count"], 0);
}
