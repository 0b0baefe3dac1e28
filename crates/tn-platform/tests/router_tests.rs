//! Router-Level Validation Tests
//!
//! Exercise the HTTP surface with in-process requests. Only paths that are
//! rejected by validation are driven here: those must return 400 before any
//! lookup happens, so no database needs to be running behind the lazily
//! connecting client.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tn_platform::api::{phone_numbers_router, PhoneNumbersState};
use tn_platform::{ActivatePhoneNumberUseCase, CustomerRepository, PhoneNumberRepository};

async fn test_app() -> Router {
    // The driver connects lazily; validation failures return before any
    // query is issued.
    let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .unwrap();
    let db = client.database("tn_router_tests");

    let phone_number_repo = Arc::new(PhoneNumberRepository::new(&db));
    let customer_repo = Arc::new(CustomerRepository::new(&db));
    let activate_use_case = Arc::new(ActivatePhoneNumberUseCase::new(phone_number_repo.clone()));

    let state = PhoneNumbersState {
        phone_number_repo,
        customer_repo,
        activate_use_case,
    };

    let (router, _openapi) = phone_numbers_router(state).split_for_parts();
    router
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_customer_id_too_long_is_rejected_before_lookup() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/customers/customer123/phone-numbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errorId"], "Bad Request");
    assert_eq!(
        body["errorMessage"],
        "customerId length must be at most 8 characters"
    );
    assert!(body["informationLink"].is_null());
}

#[tokio::test]
async fn test_customer_id_with_symbols_is_rejected_before_lookup() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/customers/cust-12/phone-numbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errorMessage"], "customerId must be alphanumeric only");
}

#[tokio::test]
async fn test_malformed_phone_number_is_rejected_before_lookup() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/phone-numbers/abcdef/activate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errorId"], "Bad Request");
    assert_eq!(body["errorMessage"], "Invalid phone number format");
}

#[tokio::test]
async fn test_overlong_phone_number_is_rejected_before_lookup() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/phone-numbers/123456789012345678901/activate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["errorMessage"],
        "Phone number must be at most 20 characters"
    );
}
