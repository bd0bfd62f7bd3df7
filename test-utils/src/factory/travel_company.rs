//! Travel company factory for creating test travel company entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test travel companies with customizable fields.
pub struct TravelCompanyFactory<'a> {
    db: &'a DatabaseConnection,
    company_name: String,
    email: String,
    discount_rate: Decimal,
}

impl<'a> TravelCompanyFactory<'a> {
    /// Creates a new TravelCompanyFactory with default values.
    ///
    /// Defaults:
    /// - company_name: `"Tours {id}"`
    /// - email: `"tours{id}@example.com"`
    /// - discount_rate: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            company_name: format!("Tours {}", id),
            email: format!("tours{}@example.com", id),
            discount_rate: Decimal::ZERO,
        }
    }

    /// Sets the discount percentage applied to blocked bookings.
    pub fn discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Builds and inserts the travel company entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::travel_company::Model)` - Created travel company entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::travel_company::Model, DbErr> {
        entity::travel_company::ActiveModel {
            company_name: ActiveValue::Set(self.company_name),
            contact_person: ActiveValue::Set("Front Office".to_string()),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("0112345678".to_string()),
            discount_rate: ActiveValue::Set(self.discount_rate),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a travel company with no discount.
pub async fn create_travel_company(
    db: &DatabaseConnection,
) -> Result<entity::travel_company::Model, DbErr> {
    TravelCompanyFactory::new(db).build().await
}
