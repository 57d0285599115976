use std::time::Duration;

use http::Method;

use super::*;
use crate::client::parameters::{CallPath, CallQuery, ParamValue};
use crate::client::{Authentication, RequestOptions};

// Helper to create a basic ApiCall for testing
fn create_test_api_call() -> ApiCall {
    let client = reqwest::Client::new();
    let base_uri = "http://localhost:8080".parse().expect("valid uri");

    ApiCall::build(
        client,
        base_uri,
        Method::GET,
        CallPath::from("/pet/findByStatus"),
        None,
    )
}

#[test]
fn test_api_call_build_defaults() {
    let call = create_test_api_call();

    assert_eq!(call.method, Method::GET);
    assert_eq!(call.path.path, "/pet/findByStatus");
    assert!(call.query.is_empty());
    assert!(call.headers.is_none());
    assert!(call.body.is_none());
    assert!(call.authentication.is_none());
    assert!(call.timeout.is_none());
}

#[test]
fn test_build_url_joins_base_and_path() {
    let base_uri = "http://localhost:8080/api/v3".parse().expect("valid uri");
    let path = CallPath::from("/pet/{petId}").add_param("petId", ParamValue::new(5));

    let url = ApiCall::build_url(&base_uri, &path, &CallQuery::default()).expect("valid url");

    assert_eq!(url.as_str(), "http://localhost:8080/api/v3/pet/5");
}

#[test]
fn test_build_url_appends_query_string() {
    let base_uri = "http://localhost:8080".parse().expect("valid uri");
    let path = CallPath::from("/pet/findByStatus");
    let query =
        CallQuery::new().add_param("status", ParamValue::new(vec!["available", "pending"]));

    let url = ApiCall::build_url(&base_uri, &path, &query).expect("valid url");

    assert_eq!(
        url.as_str(),
        "http://localhost:8080/pet/findByStatus?status=available&status=pending"
    );
}

#[test]
fn test_build_url_fails_on_unresolved_path() {
    let base_uri = "http://localhost:8080".parse().expect("valid uri");
    let path = CallPath::from("/pet/{petId}");

    let result = ApiCall::build_url(&base_uri, &path, &CallQuery::default());

    assert!(matches!(
        result,
        Err(crate::ApiClientError::PathUnresolved { .. })
    ));
}

#[test]
fn test_with_options_none_is_a_no_op() {
    let call = create_test_api_call().with_options(None);

    assert_eq!(call.base_uri, "http://localhost:8080".parse::<http::Uri>().expect("valid uri"));
    assert!(call.headers.is_none());
    assert!(call.authentication.is_none());
    assert!(call.timeout.is_none());
}

#[test]
fn test_with_options_overrides_base_uri_and_timeout() {
    let options = RequestOptions::new()
        .with_base_uri("http://staging:9090".parse().expect("valid uri"))
        .with_timeout(Duration::from_secs(5));

    let call = create_test_api_call().with_options(Some(options));

    assert_eq!(call.base_uri, "http://staging:9090".parse::<http::Uri>().expect("valid uri"));
    assert_eq!(call.timeout, Some(Duration::from_secs(5)));
}

#[test]
fn test_with_options_replaces_authentication() {
    let client = reqwest::Client::new();
    let base_uri = "http://localhost:8080".parse().expect("valid uri");
    let default_auth = Authentication::Bearer("default-token".into());
    let call = ApiCall::build(
        client,
        base_uri,
        Method::GET,
        CallPath::from("/pet"),
        Some(default_auth),
    );

    let override_auth = Authentication::ApiKey {
        header_name: "api_key".to_string(),
        key: "per-call-key".into(),
    };
    let call = call.with_options(Some(
        RequestOptions::new().with_authentication(override_auth.clone()),
    ));

    assert_eq!(call.authentication, Some(override_auth));
}

#[test]
fn test_with_options_merges_headers_over_call_headers() {
    let call = create_test_api_call()
        .with_header("x-tenant", "default")
        .with_options(Some(RequestOptions::new().with_header("x-tenant", "override")));

    let map = call
        .headers
        .expect("headers present")
        .to_header_map()
        .expect("valid headers");
    assert_eq!(map.get("x-tenant").expect("present"), "override");
}

#[test]
fn test_options_do_not_leak_between_calls() {
    let client = reqwest::Client::new();
    let base_uri: http::Uri = "http://localhost:8080".parse().expect("valid uri");

    let overridden = ApiCall::build(
        client.clone(),
        base_uri.clone(),
        Method::GET,
        CallPath::from("/pet"),
        None,
    )
    .with_options(Some(
        RequestOptions::new().with_base_uri("http://staging:9090".parse().expect("valid uri")),
    ));
    assert_eq!(
        overridden.base_uri,
        "http://staging:9090".parse::<http::Uri>().expect("valid uri")
    );

    // A fresh call built from the same inputs keeps the original base URI.
    let fresh = ApiCall::build(client, base_uri, Method::GET, CallPath::from("/pet"), None);
    assert_eq!(
        fresh.base_uri,
        "http://localhost:8080".parse::<http::Uri>().expect("valid uri")
    );
}

#[test]
fn test_expected_status_codes_chaining() {
    let call = create_test_api_call()
        .with_status_range(200..300)
        .add_expected_status(404);

    assert!(call.expected_status_codes.contains(200));
    assert!(call.expected_status_codes.contains(404));
    assert!(!call.expected_status_codes.contains(500));
}
