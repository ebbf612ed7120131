//! Shared fixtures for unit tests.

use axum::Router;

/// Serve `router` on an ephemeral localhost port and return the login URL.
pub async fn spawn_login_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/backend/login.php")
}

/// A localhost URL with nothing listening behind it.
pub async fn unreachable_login_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/backend/login.php")
}
