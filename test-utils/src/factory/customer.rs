//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    phone: Option<String>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Guest {id}"`
    /// - email: `"guest{id}@example.com"`
    /// - phone: `Some("0712345678")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Guest {}", id),
            email: format!("guest{}@example.com", id),
            phone: Some("0712345678".to_string()),
        }
    }

    /// Sets the customer's full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the customer's email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            address: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
