//! Customer Entity

use serde::{Deserialize, Serialize};

/// Customer entity - the owner of zero or more phone numbers.
///
/// The customer id doubles as the document key: an externally assigned
/// identifier of at most 8 alphanumeric characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// External customer identifier (≤8 alphanumeric characters)
    #[serde(rename = "_id")]
    pub customer_id: String,

    /// Display name
    pub name: String,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
        }
    }
}
