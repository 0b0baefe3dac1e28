//! Telco Numbers Platform
//!
//! Phone-number records tied to customers, exposed over a small REST
//! surface:
//! - list all phone numbers
//! - list the numbers owned by one customer
//! - activate a number (one-way inactive -> active transition)
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate contains:
//! - `entity` - Domain entities
//! - `repository` - Data access
//! - `api` - REST endpoints
//! - `operations` - Use case operations (where applicable)

// Core aggregates
pub mod customer;
pub mod phone_number;

// Shared infrastructure
pub mod shared;

// Development tooling
pub mod seed;

// Re-export common types from shared
pub use shared::error::{PlatformError, Result};

// Re-export main entity types for convenience
pub use customer::entity::Customer;
pub use phone_number::entity::PhoneNumber;

// Re-export repositories
pub use customer::repository::CustomerRepository;
pub use phone_number::repository::PhoneNumberRepository;

// Re-export operations
pub use phone_number::operations::{
    ActivatePhoneNumberCommand, ActivatePhoneNumberUseCase, ActivatedPhoneNumber,
};

/// API state and router re-exports
pub mod api {
    pub use crate::phone_number::api::{phone_numbers_router, PhoneNumberResponse, PhoneNumbersState};
    pub use crate::shared::api_common::ApiError;
    pub use crate::shared::health_api::{health_router, HealthState};
}
