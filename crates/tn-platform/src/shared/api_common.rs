//! Common API types

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Standard API error response.
///
/// `errorId` carries the HTTP reason phrase, `informationLink` is always
/// null on the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_id: String,
    pub error_message: String,
    pub information_link: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error_id: status.canonical_reason().unwrap_or("Error").to_string(),
            error_message: message.into(),
            information_link: None,
        }
    }
}
