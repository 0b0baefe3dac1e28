//! Activation Flow Tests (require MongoDB)
//!
//! End-to-end coverage of the lookup and activation paths against a real
//! database. Ignored by default; run with a local MongoDB via:
//!
//! ```text
//! TN_TEST_MONGO_URL=mongodb://127.0.0.1:27017 cargo test -- --ignored
//! ```

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tn_platform::api::{phone_numbers_router, PhoneNumbersState};
use tn_platform::{
    ActivatePhoneNumberCommand, ActivatePhoneNumberUseCase, Customer, CustomerRepository,
    PhoneNumber, PhoneNumberRepository, PlatformError,
};

struct TestContext {
    db: mongodb::Database,
    phone_number_repo: Arc<PhoneNumberRepository>,
    customer_repo: Arc<CustomerRepository>,
    activate_use_case: Arc<ActivatePhoneNumberUseCase>,
}

impl TestContext {
    async fn new() -> Self {
        let url = std::env::var("TN_TEST_MONGO_URL")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();

        // One database per test run so tests never see each other's data
        let db = client.database(&format!("tn_test_{}", uuid::Uuid::new_v4().simple()));

        let phone_number_repo = Arc::new(PhoneNumberRepository::new(&db));
        let customer_repo = Arc::new(CustomerRepository::new(&db));
        let activate_use_case =
            Arc::new(ActivatePhoneNumberUseCase::new(phone_number_repo.clone()));

        Self {
            db,
            phone_number_repo,
            customer_repo,
            activate_use_case,
        }
    }

    /// Seed the scenario fixture: cust123 owns 1234567890 (inactive) and
    /// 9876543210 (active); cust456 owns 5556665556 (inactive); cust000
    /// owns nothing.
    async fn seed(&self) {
        for (id, name) in [
            ("cust123", "Acme Telecom"),
            ("cust456", "Globex Mobile"),
            ("cust000", "Initech Wireless"),
        ] {
            self.customer_repo.insert(&Customer::new(id, name)).await.unwrap();
        }

        self.phone_number_repo
            .insert(&PhoneNumber::new("1234567890", "cust123"))
            .await
            .unwrap();
        self.phone_number_repo
            .insert(&PhoneNumber::new("9876543210", "cust123").activated())
            .await
            .unwrap();
        self.phone_number_repo
            .insert(&PhoneNumber::new("5556665556", "cust456"))
            .await
            .unwrap();
    }

    fn app(&self) -> Router {
        let state = PhoneNumbersState {
            phone_number_repo: self.phone_number_repo.clone(),
            customer_repo: self.customer_repo.clone(),
            activate_use_case: self.activate_use_case.clone(),
        };
        let (router, _openapi) = phone_numbers_router(state).split_for_parts();
        router
    }

    async fn teardown(self) {
        self.db.drop().await.ok();
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_list_all_numbers_returns_every_number() {
    let ctx = TestContext::new().await;
    ctx.seed().await;

    let response = ctx
        .app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/phoneNumbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(numbers.len(), 3);
    for expected in ["1234567890", "9876543210", "5556665556"] {
        assert!(numbers.contains(&expected), "missing {expected}");
    }

    ctx.teardown().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_list_customer_numbers_and_absence_promotion() {
    let ctx = TestContext::new().await;
    ctx.seed().await;
    let app = ctx.app();

    // Known customer with two numbers
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/customers/cust123/phone-numbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Known customer with zero numbers is promoted to 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/customers/cust000/phone-numbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["errorMessage"], "No phone numbers linked to this customer");

    // Unknown customer
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/customers/cust999/phone-numbers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["errorMessage"], "Customer ID cust999 not found.");

    ctx.teardown().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_activate_then_reactivate_yields_success_then_error() {
    let ctx = TestContext::new().await;
    ctx.seed().await;
    let app = ctx.app();

    // First activation succeeds
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/phone-numbers/1234567890/activate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["phoneNumber"], "1234567890");
    assert_eq!(body["active"], true);

    // Round-trip: the store reflects the transition
    let stored = ctx
        .phone_number_repo
        .find_by_number("1234567890")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_active);

    // Second activation is a guarded error, not a silent no-op
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/phone-numbers/1234567890/activate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errorId"], "Bad Request");
    assert_eq!(body["errorMessage"], "Phone number is already activated");

    ctx.teardown().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_activate_unknown_number_returns_not_found() {
    let ctx = TestContext::new().await;
    ctx.seed().await;

    let response = ctx
        .app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/phone-numbers/0000000000/activate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["errorId"], "Not Found");
    assert_eq!(body["errorMessage"], "Phone Number not found.");

    ctx.teardown().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_use_case_contract_directly() {
    let ctx = TestContext::new().await;
    ctx.seed().await;

    let activated = ctx
        .activate_use_case
        .execute(ActivatePhoneNumberCommand {
            phone_number: "5556665556".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(activated.number, "5556665556");
    assert!(activated.active);

    let err = ctx
        .activate_use_case
        .execute(ActivatePhoneNumberCommand {
            phone_number: "5556665556".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::AlreadyActive));

    ctx.teardown().await;
}
