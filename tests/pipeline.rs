//! End-to-end tests: actions composed into requests and sent through the
//! default `reqwest` transport to a local echo backend.

mod common;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;
use webapi_client::attributes::{FormContentAttribute, HeaderAttribute, JsonContentAttribute};
use webapi_client::{ApiActionDescriptor, ApiError, HttpApiClient, HttpApiConfig};

#[derive(Debug, Deserialize)]
struct Echo {
    method: String,
    target: String,
    headers: serde_json::Map<String, Value>,
    body: String,
}

#[derive(Serialize)]
struct Search {
    q: &'static str,
    page: u32,
}

async fn client() -> HttpApiClient {
    let addr = common::start_echo_backend().await;
    let config = HttpApiConfig::new();
    config.set_http_host(Some(Url::parse(&format!("http://{}", addr)).unwrap()));
    HttpApiClient::new(Arc::new(config)).with_metrics(false)
}

#[tokio::test]
async fn test_path_and_query_reach_the_server() {
    let client = client().await;
    let action = Arc::new(
        ApiActionDescriptor::new("get_user", Method::GET, "/users/{id}")
            .parameter::<u64>("id")
            .parameter::<str>("q"),
    );

    let echo: Echo = client
        .execute_json(&action, vec![json!(42), json!("cats")])
        .await
        .unwrap();

    assert_eq!(echo.method, "GET");
    assert_eq!(echo.target, "/users/42?q=cats");
    assert!(echo.headers.contains_key("x-request-id"));
    client.config().dispose();
}

#[tokio::test]
async fn test_struct_parameter_expands_to_query() {
    let client = client().await;
    let action = Arc::new(
        ApiActionDescriptor::new("search", Method::GET, "/search?").parameter::<Search>("filter"),
    );

    let echo: Echo = client
        .execute_json(
            &action,
            vec![serde_json::to_value(Search { q: "rust", page: 2 }).unwrap()],
        )
        .await
        .unwrap();

    assert_eq!(echo.target, "/search?q=rust&page=2");
}

#[tokio::test]
async fn test_json_body_and_header() {
    let client = client().await;
    let action = Arc::new(
        ApiActionDescriptor::new("create_user", Method::POST, "/users")
            .parameter_with::<str>("token", HeaderAttribute::named("X-Token"))
            .parameter_with::<Value>("user", JsonContentAttribute),
    );

    let echo: Echo = client
        .execute_json(&action, vec![json!("secret"), json!({ "name": "ann" })])
        .await
        .unwrap();

    assert_eq!(echo.method, "POST");
    assert_eq!(echo.headers["x-token"], "secret");
    assert_eq!(echo.headers["content-type"], "application/json; charset=utf-8");
    assert_eq!(echo.body, r#"{"name":"ann"}"#);
}

#[tokio::test]
async fn test_form_body() {
    let client = client().await;
    let action = Arc::new(
        ApiActionDescriptor::new("login", Method::POST, "/login")
            .parameter_with::<str>("user", FormContentAttribute)
            .parameter_with::<str>("password", FormContentAttribute),
    );

    let echo: Echo = client
        .execute_json(&action, vec![json!("ann"), json!("p&ss word")])
        .await
        .unwrap();

    assert_eq!(echo.headers["content-type"], "application/x-www-form-urlencoded");
    assert_eq!(echo.body, "user=ann&password=p%26ss+word");
}

#[tokio::test]
async fn test_error_status_surfaces() {
    let client = client().await;
    let action = Arc::new(ApiActionDescriptor::new("teapot", Method::GET, "/status/418"));

    let response = client.execute(&action, Vec::new()).await.unwrap();
    assert_eq!(response.status, StatusCode::IM_A_TEAPOT);

    let err = client.execute_json::<Echo>(&action, Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status == StatusCode::IM_A_TEAPOT));
}

#[tokio::test]
async fn test_transport_shared_across_calls_until_dispose() {
    let client = client().await;
    let action = Arc::new(ApiActionDescriptor::new("ping", Method::GET, "/ping"));

    client.execute(&action, Vec::new()).await.unwrap();
    let first = client.config().transport().unwrap();
    client.execute(&action, Vec::new()).await.unwrap();
    let second = client.config().transport().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    client.config().dispose();
    client.config().dispose();

    assert!(first.is_closed());
    let fallback = Arc::new(
        ApiActionDescriptor::new("ping", Method::GET, "/ping")
            .with_host(Url::parse("http://127.0.0.1:9").unwrap()),
    );
    let err = client.execute(&fallback, Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Disposed));
}
