//! Phone Number Entity

use serde::{Deserialize, Serialize};

/// Phone number entity.
///
/// A number belongs to exactly one customer and starts out inactive.
/// Activation is one-way: nothing in this service flips an active number
/// back to inactive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Generated opaque identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// The number string itself (globally unique, ≤20 characters)
    pub number: String,

    /// Whether the number has been activated
    #[serde(default)]
    pub is_active: bool,

    /// Owning customer reference
    pub customer_id: String,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            number: number.into(),
            is_active: false,
            customer_id: customer_id.into(),
        }
    }

    pub fn activated(mut self) -> Self {
        self.is_active = true;
        self
    }
}
