//! End-to-end tests for the request executor and error classification,
//! driven against a local mock server.

use paymenter_client::types::users::{CreateUserRequest, UserListParams};
use paymenter_client::{
    ApiRequest, HttpClient, PaymenterClient, PaymenterConfig, PaymenterError,
};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PaymenterClient {
    let config = PaymenterConfig::new(server.uri(), "test-key").unwrap();
    PaymenterClient::new(config).unwrap()
}

fn executor_for(server: &MockServer) -> HttpClient {
    let config = PaymenterConfig::new(server.uri(), "test-key").unwrap();
    HttpClient::new(config).unwrap()
}

#[tokio::test]
async fn successful_response_round_trips_body_status_and_headers() {
    let server = MockServer::start().await;
    let body = json!({"data": {"id": "1", "type": "users"}});

    Mock::given(method("GET"))
        .and(path("/v1/admin/users/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&body)
                .append_header("X-Request-Id", "abc-123"),
        )
        .mount(&server)
        .await;

    let response: paymenter_client::ApiResponse<Value> = executor_for(&server)
        .request(ApiRequest::new(Method::GET, "/v1/admin/users/1"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data, Some(body));
    // header keys are lower-cased
    assert_eq!(response.headers.get("x-request-id").map(String::as_str), Some("abc-123"));
}

#[tokio::test]
async fn repeated_response_headers_are_combined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .append_header("X-Flavor", "vanilla")
                .append_header("X-Flavor", "chocolate"),
        )
        .mount(&server)
        .await;

    let response: paymenter_client::ApiResponse<Value> = executor_for(&server)
        .request(ApiRequest::new(Method::GET, "/v1/admin/users"))
        .await
        .unwrap();
    assert_eq!(
        response.headers.get("x-flavor").map(String::as_str),
        Some("vanilla, chocolate")
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_resolves_identically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&server)
        .await;

    for base in [server.uri(), format!("{}/", server.uri())] {
        let config = PaymenterConfig::new(base, "test-key").unwrap();
        let executor = HttpClient::new(config).unwrap();
        let response: paymenter_client::ApiResponse<Value> = executor
            .request(ApiRequest::new(Method::GET, "/v1/admin/orders"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }
}

#[tokio::test]
async fn default_headers_are_sent_and_overrides_win() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    // the Accept default is overridden by the caller
    let request = ApiRequest::new(Method::GET, "/v1/admin/users").header("Accept", "application/json");
    let response: paymenter_client::ApiResponse<Value> =
        executor_for(&server).request(request).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn query_arrays_fan_out_and_nulls_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/tickets"))
        .and(query_param("status", "open"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let request = ApiRequest::new(Method::GET, "/v1/admin/tickets")
        .query(&json!({"status": ["open"], "page": 2, "include": null}))
        .unwrap();
    let response: paymenter_client::ApiResponse<Value> =
        executor_for(&server).request(request).await.unwrap();
    assert_eq!(response.status, 200);

    let received = &server.received_requests().await.unwrap()[0];
    let query = received.url.query().unwrap();
    assert!(!query.contains("include"));
}

#[tokio::test]
async fn get_requests_never_send_a_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    // body supplied but method is GET, so it must be dropped
    let request = ApiRequest::new(Method::GET, "/v1/admin/users")
        .body(&json!({"ignored": true}))
        .unwrap();
    let response: paymenter_client::ApiResponse<Value> =
        executor_for(&server).request(request).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn status_204_yields_absent_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/admin/users/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client_for(&server).users().delete(5).await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn non_json_success_yields_absent_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("plain text", "text/plain"))
        .mount(&server)
        .await;

    let response: paymenter_client::ApiResponse<Value> = executor_for(&server)
        .request(ApiRequest::new(Method::GET, "/v1/admin/orders"))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn status_401_raises_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let err = client_for(&server).users().list(None).await.unwrap_err();
    match err {
        PaymenterError::Authentication { message, status, details } => {
            assert_eq!(message, "Unauthorized");
            assert_eq!(status, 401);
            assert_eq!(details.unwrap().message.as_deref(), Some("Unauthorized"));
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn status_403_raises_authorization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/invoices/9"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Forbidden"})))
        .mount(&server)
        .await;

    let err = client_for(&server).invoices().get(9, None).await.unwrap_err();
    assert!(matches!(err, PaymenterError::Authorization { status: 403, .. }));
}

#[tokio::test]
async fn status_404_raises_not_found_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/services/123"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).services().get(123, None).await.unwrap_err();
    assert!(matches!(err, PaymenterError::NotFound { status: 404, .. }));
}

#[tokio::test]
async fn status_422_with_field_errors_raises_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/admin/affiliates"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid data",
            "errors": {"code": ["Code is required"]}
        })))
        .mount(&server)
        .await;

    let data = paymenter_client::types::affiliates::CreateAffiliateRequest {
        user_id: 1,
        code: String::new(),
        enabled: None,
        reward: None,
    };
    let err = client_for(&server).affiliates().create(&data).await.unwrap_err();
    match err {
        PaymenterError::Validation { message, status, validation_errors, .. } => {
            assert_eq!(message, "Invalid data");
            assert_eq!(status, 422);
            assert_eq!(
                validation_errors.get("code"),
                Some(&vec!["Code is required".to_string()])
            );
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn status_422_without_field_errors_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/admin/orders"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "oops"})))
        .mount(&server)
        .await;

    let data = paymenter_client::types::orders::CreateOrderRequest {
        user_id: 1,
        currency_code: "USD".to_string(),
    };
    let err = client_for(&server).orders().create(&data).await.unwrap_err();
    match err {
        PaymenterError::Api { message, status, .. } => {
            assert_eq!(message, "oops");
            assert_eq!(status, Some(422));
        }
        other => panic!("expected Api, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_status_with_unparsable_body_is_generic_unknown_error() {
    let server = MockServer::start().await;
    // 599 has no canonical reason phrase
    Mock::given(method("GET"))
        .and(path("/v1/admin/credits"))
        .respond_with(ResponseTemplate::new(599).set_body_raw("<garbage>", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server).credits().list(None).await.unwrap_err();
    match err {
        PaymenterError::Api { message, status, details } => {
            assert_eq!(message, "Unknown error");
            assert_eq!(status, Some(599));
            assert!(details.is_none());
        }
        other => panic!("expected Api, got {:?}", other),
    }
}

#[tokio::test]
async fn timeout_aborts_the_request_and_raises_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = PaymenterConfig::new(server.uri(), "test-key")
        .unwrap()
        .with_timeout(Duration::from_millis(100))
        .unwrap();
    let client = PaymenterClient::new(config).unwrap();

    let err = client.users().list(None).await.unwrap_err();
    assert!(matches!(err, PaymenterError::Network { .. }));
}

#[tokio::test]
async fn connection_failure_raises_network_error() {
    // nothing listens on this port
    let config = PaymenterConfig::new("http://127.0.0.1:9", "test-key").unwrap();
    let client = PaymenterClient::new(config).unwrap();

    let err = client.users().list(None).await.unwrap_err();
    match err {
        PaymenterError::Network { source, .. } => assert!(source.is_some()),
        other => panic!("expected Network, got {:?}", other),
    }
}

#[tokio::test]
async fn list_params_flatten_into_filter_query_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/users"))
        .and(query_param("filter[email]", "a@b.com"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": {"prev": null, "next": null},
            "meta": {"current_page": 1, "from": null, "path": null, "per_page": 25, "to": null}
        })))
        .mount(&server)
        .await;

    let params = UserListParams {
        per_page: Some(25),
        filter_email: Some("a@b.com".to_string()),
        ..Default::default()
    };
    let response = client_for(&server).users().list(Some(&params)).await.unwrap();
    let list = response.data.unwrap();
    assert!(list.data.is_empty());
    assert_eq!(list.meta.per_page, 25);
}

#[tokio::test]
async fn create_sends_the_json_body() {
    let server = MockServer::start().await;
    let expected = json!({"email": "a@b.com", "password": "secret"});
    Mock::given(method("POST"))
        .and(path("/v1/admin/users"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "1", "type": "users", "attributes": {
                "id": 1, "first_name": null, "last_name": null,
                "email": "a@b.com", "email_verified_at": null,
                "updated_at": null, "created_at": null
            }}
        })))
        .mount(&server)
        .await;

    let data = CreateUserRequest {
        email: "a@b.com".to_string(),
        password: "secret".to_string(),
        first_name: None,
        last_name: None,
        email_verified_at: None,
        role_id: None,
    };
    let response = client_for(&server).users().create(&data).await.unwrap();
    assert_eq!(response.status, 201);
    let user = response.data.unwrap().data;
    assert_eq!(user.id, "1");
    assert_eq!(user.attributes.unwrap().email, "a@b.com");
}

#[tokio::test]
async fn update_uses_put_on_the_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/admin/tickets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "7", "type": "tickets"}
        })))
        .mount(&server)
        .await;

    let data = paymenter_client::types::tickets::UpdateTicketRequest {
        subject: Some("Updated subject".to_string()),
        ..Default::default()
    };
    let response = client_for(&server).tickets().update(7, &data).await.unwrap();
    assert_eq!(response.data.unwrap().data.id, "7");
}

#[tokio::test]
async fn get_passes_include_as_a_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/admin/tickets/3"))
        .and(query_param("include", "messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "3", "type": "tickets"}
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .tickets()
        .get(3, Some("messages"))
        .await
        .unwrap();
    assert_eq!(response.data.unwrap().data.id, "3");
}
