//! Integration tests for cursor pagination.
//!
//! Pages are chained through `Link` headers served by a mock server; the
//! query of each follow-up request must be exactly the cursor's parameters.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::json;
use shopify_rest::rest::{list_all, list_page, Page};
use shopify_rest::{AccessToken, ApiVersion, ClientConfig, HostUrl, HttpError, RestClient, ShopDomain};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const ARTICLES: &str = "/admin/api/2024-10/blogs/1/articles.json";

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct Record {
    id: u64,
}

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

fn link(server: &MockServer, query: &str, rel: &str) -> String {
    format!(r#"<{}{ARTICLES}?{query}>; rel="{rel}""#, server.uri())
}

/// Matches a request whose query parameters are exactly `expected`, in any order.
fn query_is(expected: &'static [(&'static str, &'static str)]) -> impl Fn(&Request) -> bool + Send + Sync {
    move |request: &Request| {
        let actual: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let expected: HashMap<String, String> = expected
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        actual == expected
    }
}

fn no_query(request: &Request) -> bool {
    request.url.query().is_none()
}

fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn test_list_page_without_link_header_has_no_cursors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "3/40")
                .set_body_json(json!({"articles": [{"id": 1}, {"id": 2}]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page: Page<Record> = list_page(&client, "blogs/1/articles", "articles", None)
        .await
        .unwrap();

    assert_eq!(ids(&page.items), vec![1, 2]);
    assert!(page.next_cursor().is_none());
    assert!(page.previous_cursor().is_none());
    assert_eq!(page.api_call_limit.map(|l| l.remaining()), Some(37));
}

#[tokio::test]
async fn test_next_cursor_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(query_is(&[("page_info", "abc")]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": [{"id": 3}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(no_query)
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link(&server, "page_info=abc", "next"))
                .set_body_json(json!({"articles": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first: Page<Record> = list_page(&client, "blogs/1/articles", "articles", None)
        .await
        .unwrap();
    let cursor = first.next_cursor().unwrap();
    assert_eq!(cursor.params().len(), 1);
    assert_eq!(cursor.page_info(), Some("abc"));

    let second: Page<Record> = list_page(
        &client,
        "blogs/1/articles",
        "articles",
        Some(cursor.params().clone()),
    )
    .await
    .unwrap();
    assert_eq!(ids(&second.items), vec![3]);
}

#[tokio::test]
async fn test_list_all_follows_next_links_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(query_is(&[("limit", "2"), ("page_info", "p3")]))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link(&server, "limit=2&page_info=p2", "previous"))
                .set_body_json(json!({"articles": [{"id": 5}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(query_is(&[("limit", "2"), ("page_info", "p2")]))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(
                        "{}, {}",
                        link(&server, "limit=2&page_info=p1", "previous"),
                        link(&server, "limit=2&page_info=p3", "next")
                    ),
                )
                .set_body_json(json!({"articles": [{"id": 3}, {"id": 4}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(query_is(&[("limit", "2")]))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link(&server, "limit=2&page_info=p2", "next"))
                .set_body_json(json!({"articles": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = [("limit".to_string(), "2".to_string())].into_iter().collect();
    let records: Vec<Record> = list_all(&client, "blogs/1/articles", "articles", Some(query))
        .await
        .unwrap();

    assert_eq!(ids(&records), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_list_all_returns_partial_results_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(query_is(&[("page_info", "broken")]))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": "Internal error"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .and(no_query)
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link(&server, "page_info=broken", "next"))
                .set_body_json(json!({"articles": [{"id": 1}, {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = list_all::<Record>(&client, "blogs/1/articles", "articles", None)
        .await
        .unwrap_err();

    assert_eq!(ids(&error.items), vec![1, 2]);
    assert!(matches!(error.source, HttpError::Response(ref e) if e.status == 500));
    assert!(error.to_string().contains("2"));

    let as_http: HttpError = error.into();
    assert_eq!(as_http.status(), Some(500));
}

#[tokio::test]
async fn test_list_page_without_envelope_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTICLES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blogs": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = list_page::<Record>(&client, "blogs/1/articles", "articles", None)
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Decode(_)));
}
