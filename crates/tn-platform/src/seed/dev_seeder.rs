//! Development Data Seeder
//!
//! Seeds a small fixture set on startup when dev mode is enabled:
//!
//!   cust123: 1234567890 (inactive), 9876543210 (active)
//!   cust456: 5556665556 (inactive)
//!   cust000: no numbers

use mongodb::Database;
use tracing::info;

use crate::customer::{Customer, CustomerRepository};
use crate::phone_number::{PhoneNumber, PhoneNumberRepository};

/// Development data seeder
pub struct DevDataSeeder {
    db: Database,
}

impl DevDataSeeder {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Seed all development data, skipping records that already exist.
    pub async fn seed(&self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Seeding development data...");

        self.seed_customers().await?;
        self.seed_phone_numbers().await?;

        info!("Development data seeded");
        Ok(())
    }

    async fn seed_customers(&self) -> Result<(), Box<dyn std::error::Error>> {
        let repo = CustomerRepository::new(&self.db);

        self.create_customer_if_not_exists(&repo, "cust123", "Acme Telecom").await?;
        self.create_customer_if_not_exists(&repo, "cust456", "Globex Mobile").await?;
        self.create_customer_if_not_exists(&repo, "cust000", "Initech Wireless").await?;

        Ok(())
    }

    async fn create_customer_if_not_exists(
        &self,
        repo: &CustomerRepository,
        customer_id: &str,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if repo.exists(customer_id).await? {
            return Ok(());
        }

        repo.insert(&Customer::new(customer_id, name)).await?;
        info!("Created customer: {} ({})", name, customer_id);

        Ok(())
    }

    async fn seed_phone_numbers(&self) -> Result<(), Box<dyn std::error::Error>> {
        let repo = PhoneNumberRepository::new(&self.db);

        self.create_number_if_not_exists(&repo, "1234567890", "cust123", false).await?;
        self.create_number_if_not_exists(&repo, "9876543210", "cust123", true).await?;
        self.create_number_if_not_exists(&repo, "5556665556", "cust456", false).await?;

        Ok(())
    }

    async fn create_number_if_not_exists(
        &self,
        repo: &PhoneNumberRepository,
        number: &str,
        customer_id: &str,
        active: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if repo.find_by_number(number).await?.is_some() {
            return Ok(());
        }

        let mut phone_number = PhoneNumber::new(number, customer_id);
        if active {
            phone_number = phone_number.activated();
        }
        repo.insert(&phone_number).await?;
        info!("Created phone number: {} -> {}", number, customer_id);

        Ok(())
    }
}
