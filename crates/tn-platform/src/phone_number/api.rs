//! Phone Numbers API
//!
//! REST endpoints for listing and activating phone numbers. Path
//! parameters are validated here, before any lookup happens; domain
//! failures bubble up as `PlatformError` and are mapped to statuses by its
//! `IntoResponse` impl.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::customer::repository::CustomerRepository;
use crate::phone_number::operations::{ActivatePhoneNumberCommand, ActivatePhoneNumberUseCase};
use crate::phone_number::repository::PhoneNumberRepository;
use crate::shared::error::PlatformError;
use crate::shared::validation::{validate_customer_id, validate_phone_number};

/// Activation response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberResponse {
    pub phone_number: String,
    pub active: bool,
}

/// Phone numbers service state
#[derive(Clone)]
pub struct PhoneNumbersState {
    pub phone_number_repo: Arc<PhoneNumberRepository>,
    pub customer_repo: Arc<CustomerRepository>,
    pub activate_use_case: Arc<ActivatePhoneNumberUseCase>,
}

/// List all phone numbers
#[utoipa::path(
    get,
    path = "/v{version}/phoneNumbers",
    tag = "phone-numbers",
    operation_id = "getAllPhoneNumbers",
    params(
        ("version" = String, Path, description = "API version")
    ),
    responses(
        (status = 200, description = "All phone numbers in the store", body = Vec<String>)
    )
)]
pub async fn list_phone_numbers(
    State(state): State<PhoneNumbersState>,
    Path(_version): Path<String>,
) -> Result<Json<Vec<String>>, PlatformError> {
    tracing::info!("Fetching all phone numbers");

    let numbers = state.phone_number_repo.find_all().await?;
    Ok(Json(numbers.into_iter().map(|p| p.number).collect()))
}

/// List the phone numbers owned by a customer
///
/// A known customer with zero numbers is reported as not-found rather than
/// as an empty list.
#[utoipa::path(
    get,
    path = "/v{version}/customers/{customerId}/phone-numbers",
    tag = "phone-numbers",
    operation_id = "getAllPhoneNumbersByCustomerId",
    params(
        ("version" = String, Path, description = "API version"),
        ("customerId" = String, Path, description = "Customer identifier (≤8 alphanumeric characters)")
    ),
    responses(
        (status = 200, description = "Phone numbers for the customer", body = Vec<String>),
        (status = 400, description = "Malformed customer id", body = crate::shared::api_common::ApiError),
        (status = 404, description = "Customer unknown or owns no numbers", body = crate::shared::api_common::ApiError)
    )
)]
pub async fn list_customer_phone_numbers(
    State(state): State<PhoneNumbersState>,
    Path((_version, customer_id)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, PlatformError> {
    validate_customer_id(&customer_id)?;

    tracing::info!(customer_id = %customer_id, "Fetching phone numbers by customerId");

    if !state.customer_repo.exists(&customer_id).await? {
        return Err(PlatformError::customer_not_found(&customer_id));
    }

    let numbers = state
        .phone_number_repo
        .find_by_customer_id(&customer_id)
        .await?;
    if numbers.is_empty() {
        return Err(PlatformError::NoNumbersLinked);
    }

    Ok(Json(numbers.into_iter().map(|p| p.number).collect()))
}

/// Activate a phone number
#[utoipa::path(
    patch,
    path = "/v{version}/phone-numbers/{phoneNumber}/activate",
    tag = "phone-numbers",
    operation_id = "activatePhoneNumber",
    params(
        ("version" = String, Path, description = "API version"),
        ("phoneNumber" = String, Path, description = "Phone number string (≤20 characters)")
    ),
    responses(
        (status = 200, description = "Phone number activated", body = PhoneNumberResponse),
        (status = 400, description = "Malformed number or already active", body = crate::shared::api_common::ApiError),
        (status = 404, description = "Phone number unknown", body = crate::shared::api_common::ApiError)
    )
)]
pub async fn activate_phone_number(
    State(state): State<PhoneNumbersState>,
    Path((_version, phone_number)): Path<(String, String)>,
) -> Result<Json<PhoneNumberResponse>, PlatformError> {
    validate_phone_number(&phone_number)?;

    tracing::info!(number = %phone_number, "Activating phone number");

    let activated = state
        .activate_use_case
        .execute(ActivatePhoneNumberCommand { phone_number })
        .await?;

    Ok(Json(PhoneNumberResponse {
        phone_number: activated.number,
        active: activated.active,
    }))
}

/// Create the phone numbers router
pub fn phone_numbers_router(state: PhoneNumbersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_phone_numbers))
        .routes(routes!(list_customer_phone_numbers))
        .routes(routes!(activate_phone_number))
        .with_state(state)
}
