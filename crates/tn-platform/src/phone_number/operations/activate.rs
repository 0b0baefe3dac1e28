//! Activate Phone Number Use Case

use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::phone_number::repository::PhoneNumberRepository;
use crate::shared::error::{PlatformError, Result};

/// Command for activating a phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePhoneNumberCommand {
    /// The number string to activate
    pub phone_number: String,
}

/// Post-transition view of an activated number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedPhoneNumber {
    pub number: String,
    pub active: bool,
}

/// Use case for the one-way `inactive -> active` transition.
pub struct ActivatePhoneNumberUseCase {
    phone_number_repo: Arc<PhoneNumberRepository>,
}

impl ActivatePhoneNumberUseCase {
    pub fn new(phone_number_repo: Arc<PhoneNumberRepository>) -> Self {
        Self { phone_number_repo }
    }

    pub async fn execute(&self, command: ActivatePhoneNumberCommand) -> Result<ActivatedPhoneNumber> {
        // Fetch existing record
        let phone_number = self
            .phone_number_repo
            .find_by_number(&command.phone_number)
            .await?
            .ok_or(PlatformError::PhoneNumberNotFound)?;

        // Business rule: re-activation is an error, not a silent no-op
        if phone_number.is_active {
            return Err(PlatformError::AlreadyActive);
        }

        // Conditional update: the filter requires isActive=false, so a
        // concurrent activation that won the race leaves nothing to modify.
        let transitioned = self.phone_number_repo.activate(&command.phone_number).await?;
        if !transitioned {
            return Err(PlatformError::AlreadyActive);
        }

        Ok(ActivatedPhoneNumber {
            number: phone_number.number,
            active: true,
        })
    }
}
