//! Phone Number Operations
//!
//! Use cases that mutate phone number state.

pub mod activate;

pub use activate::{ActivatePhoneNumberCommand, ActivatePhoneNumberUseCase, ActivatedPhoneNumber};
