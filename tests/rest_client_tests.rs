//! Integration tests for the transport layer.
//!
//! These tests run the client against a local mock server and check request
//! shaping (paths, auth, bodies) and how each response status is classified.

use serde_json::{json, Value};
use shopify_rest::{
    AccessToken, ApiKey, ApiPassword, ApiVersion, ClientConfig, Credentials, HostUrl, HttpError,
    InvalidHttpRequestError, RestClient, ShopDomain,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let config = ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_version(ApiVersion::V2024_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// ============================================================================
// Successful requests
// ============================================================================

#[tokio::test]
async fn test_get_sends_token_and_versioned_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/shop.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client.get("/shop", None).await.unwrap();

    assert_eq!(body["shop"]["id"], 1);
}

#[tokio::test]
async fn test_basic_credentials_send_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/shop.json"))
        .and(header("Authorization", "Basic a2V5OnNlY3JldA=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::Basic {
            api_key: ApiKey::new("key").unwrap(),
            password: ApiPassword::new("secret").unwrap(),
        })
        .api_version(ApiVersion::V2024_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let result: Result<Value, HttpError> = client.get("shop.json", None).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/redirects.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"redirect": {"path": "/old", "target": "/new"}})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"redirect": {"id": 7, "path": "/old", "target": "/new"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client
        .post(
            "redirects",
            &json!({"redirect": {"path": "/old", "target": "/new"}}),
        )
        .await
        .unwrap();

    assert_eq!(body["redirect"]["id"], 7);
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2024-10/redirects/7.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete("redirects/7").await.unwrap();
}

#[tokio::test]
async fn test_unversioned_admin_path_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/oauth/access_scopes.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_scopes": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get_response("admin/oauth/access_scopes", None)
        .await
        .unwrap();
    assert_eq!(response.code, 200);
}

// ============================================================================
// Error classification
// ============================================================================

#[tokio::test]
async fn test_429_is_rate_limit_error_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/orders.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "2.0")
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "40/40")
                .insert_header("X-Request-Id", "req-429")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<Value>("orders", None).await.unwrap_err();

    match error {
        HttpError::RateLimit(e) => {
            assert_eq!(e.retry_after.as_secs(), 2);
            assert_eq!(e.api_call_limit.map(|l| l.remaining()), Some(0));
            assert_eq!(e.request_id.as_deref(), Some("req-429"));
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_429_without_retry_after_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<Value>("orders", None).await.unwrap_err();

    assert!(matches!(
        error,
        HttpError::RateLimit(ref e) if e.retry_after == shopify_rest::RateLimitError::DEFAULT_RETRY_AFTER
    ));
    assert_eq!(error.status(), Some(429));
}

#[tokio::test]
async fn test_429_with_oversized_retry_after_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1e300"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<Value>("orders", None).await.unwrap_err();

    assert!(matches!(
        error,
        HttpError::RateLimit(ref e) if e.retry_after == shopify_rest::RateLimitError::DEFAULT_RETRY_AFTER
    ));
}

#[tokio::test]
async fn test_422_carries_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/blogs/1/articles.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .post::<_, Value>("blogs/1/articles", &json!({"article": {}}))
        .await
        .unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.status, 422);
            assert_eq!(e.errors["title"], vec!["can't be blank".to_string()]);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_404_and_500_are_response_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/orders/1.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/orders/2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let not_found = client.get::<Value>("orders/1", None).await.unwrap_err();
    assert!(matches!(
        not_found,
        HttpError::Response(ref e) if e.status == 404 && e.message == "Not Found"
    ));

    let server_error = client.get::<Value>("orders/2", None).await.unwrap_err();
    assert!(matches!(
        server_error,
        HttpError::Response(ref e) if e.status == 500 && e.message == "upstream failure"
    ));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<Value>("orders", None).await.unwrap_err();

    assert!(matches!(error, HttpError::Decode(_)));
}

#[tokio::test]
async fn test_empty_path_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get::<Value>("/", None).await.unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::InvalidPath { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    let config = ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("t").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = client.get::<Value>("orders", None).await.unwrap_err();
    assert!(matches!(error, HttpError::Request(_)));
    assert_eq!(error.status(), None);
}
