use super::*;
use crate::test_helpers::{spawn_login_server, unreachable_login_url};
use axum::Json;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

fn endpoint(url: String) -> HttpAuthEndpoint {
    HttpAuthEndpoint::new(url, LoginTimeouts { request_secs: 1, connect_secs: 1 }).unwrap()
}

// =============================================================================
// request shape
// =============================================================================

#[tokio::test]
async fn authenticate_posts_json_credentials() {
    // `Json` rejects the request unless Content-Type is application/json.
    let router = axum::Router::new().route(
        "/backend/login.php",
        post(|Json(body): Json<Value>| async move {
            Json(json!({ "success": true, "user": { "echo": body }, "jwt": "T" }))
        }),
    );
    let url = spawn_login_server(router).await;

    let reply = endpoint(url)
        .authenticate(&Credentials::new("alice", "pw"))
        .await
        .unwrap();
    assert!(reply.status_ok);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.result.user, Some(json!({ "echo": { "username": "alice", "password": "pw" } })));
    assert_eq!(reply.result.jwt.as_deref(), Some("T"));
}

// =============================================================================
// status handling
// =============================================================================

#[tokio::test]
async fn authenticate_non_2xx_with_body_is_not_an_error() {
    let router = axum::Router::new().route(
        "/backend/login.php",
        post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "message": "bad password" }))) }),
    );
    let url = spawn_login_server(router).await;

    let reply = endpoint(url)
        .authenticate(&Credentials::new("alice", "wrong"))
        .await
        .unwrap();
    assert!(!reply.status_ok);
    assert_eq!(reply.status, 401);
    assert_eq!(reply.result.message.as_deref(), Some("bad password"));
}

#[tokio::test]
async fn authenticate_non_json_body_is_decode_error() {
    let router = axum::Router::new().route(
        "/backend/login.php",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
    );
    let url = spawn_login_server(router).await;

    let err = endpoint(url)
        .authenticate(&Credentials::new("alice", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::Decode(_)));
}

// =============================================================================
// transport failures
// =============================================================================

#[tokio::test]
async fn authenticate_unreachable_is_transport_error() {
    let url = unreachable_login_url().await;
    let err = endpoint(url)
        .authenticate(&Credentials::new("alice", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::Transport(_)));
}

#[tokio::test]
async fn authenticate_timeout_is_transport_error() {
    let router = axum::Router::new().route(
        "/backend/login.php",
        post(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            Json(json!({ "success": true }))
        }),
    );
    let url = spawn_login_server(router).await;

    let err = endpoint(url)
        .authenticate(&Credentials::new("alice", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::Transport(_)));
}

#[test]
fn url_is_kept_verbatim() {
    let client = endpoint("https://shop.test/backend/login.php".to_owned());
    assert_eq!(client.url(), "https://shop.test/backend/login.php");
}
