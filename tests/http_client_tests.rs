//! Integration tests for the `reqwest` transport.
//!
//! These tests send [`HttpRequest`]s straight through [`HttpClient`] and
//! verify default headers, header overrides and response parsing.

use simple_api_client::clients::SDK_VERSION;
use simple_api_client::{
    ClientConfig, Host, HttpClient, HttpMethod, HttpRequest, RequestBody, Transport,
};
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(http_method: HttpMethod, server: &MockServer, route: &str) -> HttpRequest {
    HttpRequest::new(http_method, format!("{}{route}", server.uri()))
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coupon_types"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let response = client
        .send(request(HttpMethod::Get, &server, "/coupon_types"))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_user_agent_prefix_is_sent() {
    let server = MockServer::start().await;
    let expected = format!(
        "CouponSync/2.0 | Simple API Client v{} | Rust {}",
        SDK_VERSION,
        env!("CARGO_PKG_RUST_VERSION")
    );
    Mock::given(method("GET"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .host(Host::new(format!("{}/", server.uri())).unwrap())
        .user_agent_prefix("CouponSync/2.0")
        .build()
        .unwrap();
    let client = HttpClient::new(Some(&config)).unwrap();
    let response = client
        .send(request(HttpMethod::Get, &server, "/"))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_request_header_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("accept", "text/csv"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let mut req = request(HttpMethod::Get, &server, "/export");
    req.headers
        .insert("ACCEPT".to_string(), "text/csv".to_string());

    client.send(req).await.unwrap();
}

#[tokio::test]
async fn test_byte_body_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/blobs/1"))
        .and(body_bytes(vec![0_u8, 159, 146, 150]))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let mut req = request(HttpMethod::Patch, &server, "/blobs/1");
    req.body = Some(RequestBody::Bytes(vec![0, 159, 146, 150]));

    let response = client.send(req).await.unwrap();
    assert_eq!(response.code, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_binary_response_body_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blobs/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(vec![0xff_u8, 0xfe, 0x00, 0x41]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let response = client
        .send(request(HttpMethod::Get, &server, "/blobs/1"))
        .await
        .unwrap();

    assert_eq!(response.body, vec![0xff_u8, 0xfe, 0x00, 0x41]);
}

#[tokio::test]
async fn test_response_headers_are_lowercased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_string("ok"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let response = client
        .send(request(HttpMethod::Get, &server, "/"))
        .await
        .unwrap();

    assert_eq!(
        response.headers.get("x-request-id"),
        Some(&vec!["abc-123".to_string()])
    );
    assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_server_error_is_a_response_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let response = client
        .send(request(HttpMethod::Delete, &server, "/coupons/1"))
        .await
        .unwrap();

    assert_eq!(response.code, 500);
    assert_eq!(response.text(), "boom");
}
