//! Path Parameter Validation
//!
//! Pure predicates over the two external identifiers. Rejections happen
//! before any repository access.

use regex::Regex;

use crate::shared::error::{PlatformError, Result};

const CUSTOMER_ID_MAX_LEN: usize = 8;
const PHONE_NUMBER_MAX_LEN: usize = 20;

/// Optional leading `+`, optional 1-3 digit country code, digit groups
/// optionally separated by space/dot/dash/parentheses.
fn phone_number_pattern() -> &'static Regex {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+]?\d{1,3}?[- .()]?\d+([- .()]?\d+)*$").unwrap())
}

pub fn validate_customer_id(customer_id: &str) -> Result<()> {
    if customer_id.len() > CUSTOMER_ID_MAX_LEN {
        return Err(PlatformError::validation(
            "customerId length must be at most 8 characters",
        ));
    }
    if !customer_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PlatformError::validation(
            "customerId must be alphanumeric only",
        ));
    }
    Ok(())
}

pub fn validate_phone_number(phone_number: &str) -> Result<()> {
    if phone_number.len() > PHONE_NUMBER_MAX_LEN {
        return Err(PlatformError::validation(
            "Phone number must be at most 20 characters",
        ));
    }
    if !phone_number_pattern().is_match(phone_number) {
        return Err(PlatformError::validation("Invalid phone number format"));
    }
    Ok(())
}
