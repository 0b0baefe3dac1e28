//! Customer Repository

use mongodb::{bson::doc, Collection, Database};
use super::entity::Customer;
use crate::shared::error::Result;

pub struct CustomerRepository {
    collection: Collection<Customer>,
}

impl CustomerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("customers"),
        }
    }

    pub async fn exists(&self, customer_id: &str) -> Result<bool> {
        let count = self
            .collection
            .count_documents(doc! { "_id": customer_id })
            .await?;
        Ok(count > 0)
    }

    /// Used by the dev seeder only; customers are provisioned externally.
    pub async fn insert(&self, customer: &Customer) -> Result<()> {
        self.collection.insert_one(customer).await?;
        Ok(())
    }
}
