// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! End-to-end tests driving the router through the full authorization
//! pipeline in shared-secret mode, plus one remote-JWKS failure case.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use tower::ServiceExt;

use casting_api::{api::router, config::AppConfig, state::AppState};

const SECRET: &str = "shared-test-secret";
const FAR_FUTURE: i64 = 9_999_999_999;

const FULL_RIGHTS: &[&str] = &[
    "movies:list",
    "movies:create",
    "movies:update",
    "movies:delete",
    "actors:list",
    "actors:create",
    "actors:update",
    "actors:delete",
];

fn config(testing_secret: Option<&str>, domain: &str) -> AppConfig {
    AppConfig {
        base_url: "http://localhost:8000".to_string(),
        auth_domain: domain.to_string(),
        auth_client_id: "client123".to_string(),
        auth_audience: "casting".to_string(),
        testing_secret: testing_secret.map(String::from),
        host: "0.0.0.0".to_string(),
        port: 8080,
    }
}

fn app() -> Router {
    router(AppState::new(config(Some(SECRET), "casting.example.auth0.com")))
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    iat: i64,
    exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<Vec<String>>,
}

fn token_with(permissions: Option<&[&str]>, exp: i64) -> String {
    let claims = TestClaims {
        sub: "auth0|tester".to_string(),
        iat: 1_600_000_000,
        exp,
        permissions: permissions.map(|p| p.iter().map(|s| s.to_string()).collect()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn token(permissions: &[&str]) -> String {
    token_with(Some(permissions), FAR_FUTURE)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn protected_routes() -> Vec<(Method, &'static str)> {
    vec![
        (Method::GET, "/movies"),
        (Method::POST, "/movies"),
        (Method::PATCH, "/movies/1"),
        (Method::DELETE, "/movies/1"),
        (Method::GET, "/actors"),
        (Method::POST, "/actors"),
        (Method::PATCH, "/actors/1"),
        (Method::DELETE, "/actors/1"),
    ]
}

// -----------------------------------------------------------------------------
// Failure modes
// -----------------------------------------------------------------------------

#[tokio::test]
async fn missing_header_rejects_every_protected_route() {
    for (method, uri) in protected_routes() {
        let (status, body) = send(app(), method.clone(), uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["success"], false);
        assert!(body["error"].is_u64(), "error must be an integer");
        assert_eq!(body["error"], 401);
        assert!(body["message"].is_string(), "message must be a string");
    }
}

#[tokio::test]
async fn wrong_scheme_is_malformed_header() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/movies")
        .header("authorization", "Basic abc123")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected_despite_valid_signature() {
    let jwt = token_with(Some(FULL_RIGHTS), 1_600_000_001);
    let (status, body) = send(app(), Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "token has expired");
}

#[tokio::test]
async fn tampered_signature_never_verifies() {
    let mut jwt = token(FULL_RIGHTS);
    jwt.pop();
    jwt.push('A');
    let (status, _) = send(app(), Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_permissions_claim_is_400() {
    let jwt = token_with(None, FAR_FUTURE);
    let (status, body) = send(app(), Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "permissions not included in token");
}

#[tokio::test]
async fn denied_permission_blocks_handler_and_side_effects() {
    let app = app();
    let jwt = token(&["movies:list"]);

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/movies",
        Some(&jwt),
        Some(serde_json::json!({"title": "Heat", "release_date": "1995-12-15"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "permission not found");

    // The wrapped operation never ran: nothing was inserted.
    let (status, body) = send(app, Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"], 0);
}

#[tokio::test]
async fn unreachable_jwks_is_401_not_500() {
    // Remote mode pointed at a closed port; the key-set fetch fails fast.
    let app = router(AppState::new(config(None, "127.0.0.1:9")));

    // RS256-shaped token with a kid so the pipeline reaches key resolution.
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT","kid":"k1"}"#);
    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"x","exp":9999999999}"#);
    let jwt = format!("{header}.{payload}.c2ln");

    let (status, body) = send(app, Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "unable to find an appropriate signing key");
}

#[tokio::test]
async fn invalid_json_body_is_400_with_message() {
    let jwt = token(FULL_RIGHTS);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies")
        .header("authorization", format!("Bearer {jwt}"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert!(body["message"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn empty_title_is_unprocessable() {
    let jwt = token(FULL_RIGHTS);
    let (status, body) = send(
        app(),
        Method::POST,
        "/movies",
        Some(&jwt),
        Some(serde_json::json!({"title": "  ", "release_date": "2005-05-25"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);
}

#[tokio::test]
async fn unknown_records_and_routes_are_404() {
    let app = app();
    let jwt = token(FULL_RIGHTS);

    let (status, _) = send(
        app.clone(),
        Method::PATCH,
        "/movies/999",
        Some(&jwt),
        Some(serde_json::json!({"title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app, Method::GET, "/no-such-route", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

// -----------------------------------------------------------------------------
// Success paths
// -----------------------------------------------------------------------------

#[tokio::test]
async fn public_routes_require_no_token() {
    let app = app();

    let (status, body) = send(app.clone(), Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Healthy");

    let (status, body) = send(app.clone(), Method::GET, "/auth/login-url", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["url"]
        .as_str()
        .unwrap()
        .starts_with("https://casting.example.auth0.com/authorize?"));

    let (status, body) = send(app, Method::GET, "/auth/logout-url", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["url"]
        .as_str()
        .unwrap()
        .starts_with("https://casting.example.auth0.com/v2/logout?"));
}

#[tokio::test]
async fn full_rights_token_completes_every_operation() {
    let app = app();
    let jwt = token(FULL_RIGHTS);

    // Create.
    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/movies",
        Some(&jwt),
        Some(serde_json::json!({"title": "Heat", "release_date": "1995-12-15"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let movie_id = body["movie"]["id"].as_u64().unwrap();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/actors",
        Some(&jwt),
        Some(serde_json::json!({"name": "Ada", "age": 36, "gender": "female"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let actor_id = body["actor"]["id"].as_u64().unwrap();

    // List.
    let (status, body) = send(app.clone(), Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 1);

    let (status, body) = send(app.clone(), Method::GET, "/actors", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actors"].as_array().unwrap().len(), 1);

    // Update.
    let (status, body) = send(
        app.clone(),
        Method::PATCH,
        &format!("/movies/{movie_id}"),
        Some(&jwt),
        Some(serde_json::json!({"release_date": "1996-01-12"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movie"]["title"], "Heat");
    assert_eq!(body["movie"]["release_date"], "1996-01-12");

    let (status, body) = send(
        app.clone(),
        Method::PATCH,
        &format!("/actors/{actor_id}"),
        Some(&jwt),
        Some(serde_json::json!({"age": 37})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actor"]["age"], 37);

    // Delete, consistently 200 with the removed id.
    let (status, body) = send(
        app.clone(),
        Method::DELETE,
        &format!("/movies/{movie_id}"),
        Some(&jwt),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], movie_id);

    let (status, body) = send(
        app.clone(),
        Method::DELETE,
        &format!("/actors/{actor_id}"),
        Some(&jwt),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], actor_id);

    // Catalog is empty again.
    let (_, body) = send(app, Method::GET, "/", None, None).await;
    assert_eq!(body["movies"], 0);
    assert_eq!(body["actors"], 0);
}

#[tokio::test]
async fn listing_permission_does_not_grant_writes() {
    let app = app();
    let jwt = token(&["movies:list", "actors:list"]);

    let (status, _) = send(app.clone(), Method::GET, "/movies", Some(&jwt), None).await;
    assert_eq!(status, StatusCode::OK);

    for (method, uri) in [
        (Method::POST, "/movies"),
        (Method::PATCH, "/movies/1"),
        (Method::DELETE, "/movies/1"),
    ] {
        let (status, _) = send(
            app.clone(),
            method,
            uri,
            Some(&jwt),
            Some(serde_json::json!({"title": "x", "release_date": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}
