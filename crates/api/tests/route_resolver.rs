//! Integration tests for route precedence and reserved-segment handling.
//!
//! The gallery prefix mixes fixed endpoints with parameterized item routes.
//! These tests pin the dispatch policy: fixed names always win, reserved
//! names are never treated as identifiers, and unmatched paths under the
//! prefix get a diagnostic 404.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, build_test_app, delete, get, post_empty, put_json};
use sqlx::PgPool;

fn item_payload() -> serde_json::Value {
    serde_json::json!({
        "title": "Anything",
        "description": null,
        "media_url": "/media/anything.jpg",
        "taken_at": "2025-06-01T10:00:00Z",
        "term": 1,
    })
}

// ---------------------------------------------------------------------------
// Fixed routes win over the parameterized item routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn fixed_endpoints_never_reach_the_item_handler(pool: PgPool) {
    // Each of these would be a VALIDATION_ERROR (bad uuid) if the request
    // had reached the parameterized handler.
    let response = get(build_test_app(pool.clone()), "/api/v1/gallery/valid-terms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool.clone()), "/api/v1/gallery/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool), "/api/v1/gallery/thumbnails").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Reserved names are refused as identifiers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn put_on_a_reserved_name_is_a_diagnostic_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/api/v1/gallery/thumbnails",
        item_payload(),
    )
    .await;
    let json = assert_error(response, StatusCode::NOT_FOUND, "RESERVED_SEGMENT").await;
    assert!(json["error"].as_str().unwrap().contains("thumbnails"));
    assert!(json["endpoints"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_on_reserved_names_is_a_diagnostic_404(pool: PgPool) {
    for segment in ["valid-terms", "health"] {
        let response = delete(
            build_test_app(pool.clone()),
            &format!("/api/v1/gallery/{segment}"),
        )
        .await;
        let json = assert_error(response, StatusCode::NOT_FOUND, "RESERVED_SEGMENT").await;
        assert!(json["error"].as_str().unwrap().contains(segment));
    }
}

// ---------------------------------------------------------------------------
// Term segment resolution on the generate route
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_with_non_numeric_term_is_a_400(pool: PgPool) {
    let response = post_empty(
        build_test_app(pool),
        "/api/v1/gallery/thumbnails/generate/autumn",
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_for_empty_term_carries_valid_terms(pool: PgPool) {
    let response = post_empty(
        build_test_app(pool),
        "/api/v1/gallery/thumbnails/generate/42",
    )
    .await;
    let json = assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_TERM").await;
    assert_eq!(json["validTerms"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Unmatched paths under the prefix
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_gallery_path_lists_fixed_endpoints(pool: PgPool) {
    let response = get(
        build_test_app(pool),
        "/api/v1/gallery/nested/path/that/does/not/exist",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    let endpoints = json["endpoints"].as_array().unwrap();
    assert!(endpoints
        .iter()
        .any(|e| e.as_str().unwrap().contains("valid-terms")));
}
