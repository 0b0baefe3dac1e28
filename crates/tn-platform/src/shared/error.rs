//! Platform Error Types
//!
//! The closed set of domain failures. The `IntoResponse` impl is the only
//! place failure kinds are mapped to HTTP statuses and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::shared::api_common::ApiError;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Customer ID {customer_id} not found.")]
    CustomerNotFound { customer_id: String },

    #[error("No phone numbers linked to this customer")]
    NoNumbersLinked,

    #[error("Phone Number not found.")]
    PhoneNumberNotFound,

    #[error("Phone number is already activated")]
    AlreadyActive,

    #[error("{message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlatformError {
    pub fn customer_not_found(customer_id: impl Into<String>) -> Self {
        Self::CustomerNotFound {
            customer_id: customer_id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PlatformError::CustomerNotFound { .. }
            | PlatformError::NoNumbersLinked
            | PlatformError::PhoneNumberNotFound => StatusCode::NOT_FOUND,
            PlatformError::AlreadyActive | PlatformError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx bodies carry a fixed message; the underlying cause goes to the
        // log only.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };

        let body = ApiError::new(status, message);
        (status, Json(body)).into_response()
    }
}
