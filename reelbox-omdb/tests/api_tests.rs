//! Integration tests for the reelbox-omdb HTTP surface
//!
//! Drives the full router with `oneshot` requests against a mocked OMDb
//! server, covering normalization, the no-results signal, shape errors,
//! and upstream failure propagation.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use mockito::{mock, Matcher};
use serial_test::serial;
use reelbox_omdb::{build_router, AppState, OmdbClient};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: app wired to the mockito server
fn setup_app() -> axum::Router {
    let omdb = OmdbClient::new(mockito::server_url(), "test_key".to_string())
        .expect("client should build");
    build_router(AppState::new(omdb))
}

fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn omdb_search_body() -> String {
    json!({
        "Search": [
            { "Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093",
              "Type": "movie", "Poster": "https://x/y.jpg" },
            { "Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215",
              "Type": "movie", "Poster": "N/A" }
        ],
        "totalResults": "153",
        "Response": "True"
    })
    .to_string()
}

#[tokio::test]
#[serial]
async fn test_movies_normalizes_omdb_payload() {
    let _m = mock("GET", "/")
        .match_query(Matcher::UrlEncoded("s".into(), "Matrix".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(omdb_search_body())
        .create();

    let response = setup_app().oneshot(test_request("/movies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "items": [
                { "imdbID": "tt0133093", "title": "The Matrix", "year": "1999",
                  "type": "movie", "posterUrl": "https://x/y.jpg" },
                { "imdbID": "tt0234215", "title": "The Matrix Reloaded", "year": "2003",
                  "type": "movie", "posterUrl": null }
            ]
        })
    );
}

#[tokio::test]
#[serial]
async fn test_movies_reloaded_queries_its_dataset() {
    let _m = mock("GET", "/")
        .match_query(Matcher::UrlEncoded("s".into(), "Matrix Reloaded".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(omdb_search_body())
        .create();

    let response = setup_app()
        .oneshot(test_request("/movies-reloaded"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["items"].is_array());
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_upstream_http_failure_becomes_502() {
    let _m = mock("GET", "/")
        .match_query(Matcher::UrlEncoded("s".into(), "Matrix Revolutions".into()))
        .with_status(401)
        .with_body(json!({ "Response": "False", "Error": "Invalid API key" }).to_string())
        .create();

    let response = setup_app()
        .oneshot(test_request("/movies-revolutions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Upstream 401");
}

#[tokio::test]
#[serial]
async fn test_bad_upstream_shape_becomes_502() {
    let _m = mock("GET", "/")
        .match_query(Matcher::UrlEncoded("s".into(), "Matrix".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "foo": "bar", "Response": "True" }).to_string())
        .create();

    let response = setup_app().oneshot(test_request("/movies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"]
        .as_str()
        .expect("error message present")
        .starts_with("Bad data from upstream"));
}

#[tokio::test]
#[serial]
async fn test_no_results_flag_yields_empty_items() {
    let _m = mock("GET", "/")
        .match_query(Matcher::UrlEncoded("s".into(), "Matrix".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "Response": "False", "Error": "Movie not found!" }).to_string())
        .create();

    let response = setup_app().oneshot(test_request("/movies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "items": [] }));
}

#[tokio::test]
#[serial]
async fn test_health_endpoint() {
    let response = setup_app().oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "reelbox-omdb");
    assert!(body["version"].is_string());
}

#[tokio::test]
#[serial]
async fn test_responses_are_marked_no_store() {
    let response = setup_app().oneshot(test_request("/health")).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .expect("cache-control header present"),
        "no-store"
    );
}
