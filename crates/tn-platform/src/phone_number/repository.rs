//! Phone Number Repository

use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use super::entity::PhoneNumber;
use crate::shared::error::Result;

pub struct PhoneNumberRepository {
    collection: Collection<PhoneNumber>,
}

impl PhoneNumberRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("phone_numbers"),
        }
    }

    /// All phone numbers in persistence order (no guaranteed sort).
    pub async fn find_all(&self) -> Result<Vec<PhoneNumber>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<PhoneNumber>> {
        let cursor = self
            .collection
            .find(doc! { "customerId": customer_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_number(&self, number: &str) -> Result<Option<PhoneNumber>> {
        Ok(self.collection.find_one(doc! { "number": number }).await?)
    }

    /// Flip `isActive` to true with a single conditional update.
    ///
    /// The filter requires `isActive: false`, so two racing activations of
    /// the same number can only produce one modified document. Returns
    /// whether this call performed the transition.
    pub async fn activate(&self, number: &str) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "number": number, "isActive": false },
                doc! { "$set": { "isActive": true } },
            )
            .await?;
        Ok(result.modified_count > 0)
    }

    /// Used by the dev seeder only; numbers are provisioned externally.
    pub async fn insert(&self, phone_number: &PhoneNumber) -> Result<()> {
        self.collection.insert_one(phone_number).await?;
        Ok(())
    }
}
