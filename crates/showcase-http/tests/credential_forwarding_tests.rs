//! Integration tests for automatic session-cookie forwarding.

use showcase_http::{ApiClient, ClientConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "session=abc123; Path=/"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn session_cookie_replayed_when_forwarding() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiClient::new(ClientConfig::new(server.uri()).with_forward_credentials(true)).unwrap();

    client.post("/login").send().await.unwrap();
    client.get("/me").send().await.unwrap();
}

#[tokio::test]
async fn no_cookie_attached_without_forwarding() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig::new(server.uri())).unwrap();

    client.post("/login").send().await.unwrap();
    client.get("/me").send().await.unwrap();

    let received = server.received_requests().await.unwrap();
    let me_request = received
        .iter()
        .find(|request| request.url.path() == "/me")
        .expect("GET /me should have been received");
    assert!(!me_request.headers.contains_key("cookie"));
}

#[tokio::test]
async fn identical_handles_do_not_share_sessions() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_forward_credentials(true);
    let first = ApiClient::new(config.clone()).unwrap();
    let second = ApiClient::new(config).unwrap();

    // Only the first handle establishes a session.
    first.post("/login").send().await.unwrap();
    second.get("/me").send().await.unwrap();

    let received = server.received_requests().await.unwrap();
    let me_request = received
        .iter()
        .find(|request| request.url.path() == "/me")
        .expect("GET /me should have been received");
    assert!(!me_request.headers.contains_key("cookie"));
}
