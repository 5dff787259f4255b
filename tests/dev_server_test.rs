//! Dev server integration tests
//!
//! Boots the asset server on an ephemeral port and exercises the federation
//! surface a host would touch: the remote entry manifest, cross-origin headers,
//! and the host page fallback.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use remote_ui::bundle::config::BundleConfig;
use remote_ui::services::dev_server;

/// Start the server on a random port and return the address
async fn start_test_server() -> SocketAddr {
    let config = BundleConfig::default();
    let app = dev_server::build_router(&config).expect("router builds");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    addr
}

#[tokio::test]
async fn test_remote_entry_manifest() {
    let addr = start_test_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/remote-entry.json", addr))
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .expect("content type")
            .to_str()
            .expect("ascii header"),
        "application/json"
    );

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["name"], "remote");
    assert_eq!(
        body["modules"],
        serde_json::json!(["./App", "./Button"])
    );
    assert_eq!(body["shared"]["gpui"]["singleton"], true);
    assert_eq!(body["shared"]["gpui"]["required_version"], "^0.2.2");
    assert_eq!(body["shared"]["gpui-component"]["singleton"], true);
    assert_eq!(
        body["shared"]["gpui-component"]["required_version"],
        "^0.5.0"
    );
}

#[tokio::test]
async fn test_manifest_allows_any_origin() {
    let addr = start_test_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/remote-entry.json", addr))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("cors header")
            .to_str()
            .expect("ascii header"),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_host_page() {
    let addr = start_test_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/some/unknown/route", addr))
        .send()
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("text body");
    assert!(body.contains("Remote Microfrontend"));
}
