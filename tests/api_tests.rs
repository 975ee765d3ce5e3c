//! Integration tests for the auth, catalog and review endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use reelhub::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let state = reelhub::api::create_app_state_from_config(Config::default(), None)
        .await
        .expect("Failed to create app state");
    reelhub::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_register_and_login() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/api/auth/register",
        json!({ "username": "ana", "password": "pw", "email": "ana@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "ana");
    assert!(body["user"].get("password").is_none());

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "ana", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "ana@example.com");

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "ana", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Invalid credentials" }));

    let (status, _) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "missing", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_invalid_payloads() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/auth/register", json!({ "username": "ana" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid data");
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let (status, _) = post_raw(&app, "/api/auth/register", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/api/auth/register",
        json!({ "username": 5, "password": "pw", "email": "x@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = spawn_app().await;
    let payload = json!({ "username": "ana", "password": "pw", "email": "ana@example.com" });

    let (status, _) = post(&app, "/api/auth/register", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/api/auth/register", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_movies_and_tv_shows_partition_catalog() {
    let app = spawn_app().await;

    let (status, movies) = get(&app, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);
    let movies = movies.as_array().unwrap().clone();
    assert_eq!(movies.len(), 17);
    assert!(movies.iter().all(|m| m["isMovie"] == true));

    let (status, shows) = get(&app, "/api/tv-shows").await;
    assert_eq!(status, StatusCode::OK);
    let shows = shows.as_array().unwrap().clone();
    assert_eq!(shows.len(), 8);
    assert!(shows.iter().all(|s| s["isMovie"] == false));

    let mut ids: Vec<i64> = movies
        .iter()
        .chain(&shows)
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_genre_filter() {
    let app = spawn_app().await;

    let (_, body) = get(&app, "/api/movies?genre=Thriller").await;
    let thrillers = body.as_array().unwrap();
    assert!(!thrillers.is_empty());
    assert!(thrillers.iter().all(|m| m["genre"] == "Thriller"));

    let (_, body) = get(&app, "/api/tv-shows?genre=Fantasy").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_movie_by_id() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/movies/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Cosmic Horizon");
    assert_eq!(body["cast"].as_array().unwrap().len(), 4);

    let (status, body) = get(&app, "/api/movies/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Movie not found" }));

    let (status, _) = get(&app, "/api/movies/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trending_and_recommended_are_bounded_movie_samples() {
    let app = spawn_app().await;

    for uri in [
        "/api/movies/trending",
        "/api/movies/recommended",
        "/api/movies/recommended?userId=1",
        "/api/movies/recommended?userId=abc",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let titles = body.as_array().unwrap();
        assert_eq!(titles.len(), 10, "{uri}");
        assert!(titles.iter().all(|t| t["isMovie"] == true), "{uri}");
    }
}

#[tokio::test]
async fn test_sample_limit_above_ten_is_rejected() {
    let mut config = Config::default();
    config.catalog.trending_limit = 50;

    let result = reelhub::api::create_app_state_from_config(config, None).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_similar_movies() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/movies/1/similar").await;
    assert_eq!(status, StatusCode::OK);
    let similar = body.as_array().unwrap();
    assert!(!similar.is_empty());
    assert!(similar.len() <= 6);
    assert!(
        similar
            .iter()
            .all(|t| t["genre"] == "Sci-Fi" && t["id"] != 1 && t["isMovie"] == true)
    );

    let (status, alias) = get(&app, "/api/movies/similar/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alias, body);

    // "Echoes of Time" is a Sci-Fi series; similar titles are still movies
    let (_, body) = get(&app, "/api/movies/18/similar").await;
    let similar = body.as_array().unwrap();
    assert!(!similar.is_empty());
    assert!(similar.iter().all(|t| t["isMovie"] == true));

    let (status, _) = get(&app, "/api/movies/999/similar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_movie() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/api/movies",
        json!({
            "title": "Late Arrival",
            "year": "2024",
            "genre": "Drama",
            "duration": "1h 40m",
            "posterUrl": "https://example.com/late.jpg"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 26);
    assert_eq!(body["isMovie"], true);

    let (status, _) = post(&app, "/api/movies", json!({ "title": "Incomplete" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reviews() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/api/movies/3/reviews",
        json!({ "userId": 1, "rating": 9, "comment": "Loved it" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["movieId"], 3);

    let (status, _) = post(
        &app,
        "/api/movies/3/reviews",
        json!({ "userId": 2, "rating": 4, "movieId": 99 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post(&app, "/api/movies/3/reviews", json!({ "rating": 4 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/api/movies/3/reviews").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["movieId"] == 3));

    let (_, body) = get(&app, "/api/movies/4/reviews").await;
    assert_eq!(body, json!([]));

    let (status, body) = get(&app, "/api/movies/abc/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
    assert_eq!(body["titles"], 25);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/movies/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let request_id = response.headers().get("x-request-id").unwrap();
    assert_eq!(request_id.to_str().unwrap().len(), 36);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
