//! Billing factory for creating test billing entities.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test billing records with customizable fields.
///
/// Defaults to a paid bill whose total equals `amount` plus 10% tax.
pub struct BillingFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    billing_date: NaiveDate,
    total_amount: Decimal,
    tax_amount: Decimal,
    other_charges: Decimal,
    status: BillingStatus,
}

impl<'a> BillingFactory<'a> {
    /// Creates a new BillingFactory for a reservation and billing date.
    ///
    /// Defaults:
    /// - total_amount: `110.00`
    /// - tax_amount: `10.00`
    /// - other_charges: `0`
    /// - status: `Paid`
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32, billing_date: NaiveDate) -> Self {
        Self {
            db,
            reservation_id,
            billing_date,
            total_amount: Decimal::new(11000, 2),
            tax_amount: Decimal::new(1000, 2),
            other_charges: Decimal::ZERO,
            status: BillingStatus::Paid,
        }
    }

    /// Sets the total, tax and other charges in one go.
    pub fn amounts(mut self, total: Decimal, tax: Decimal, other_charges: Decimal) -> Self {
        self.total_amount = total;
        self.tax_amount = tax;
        self.other_charges = other_charges;
        self
    }

    /// Sets the billing status.
    pub fn status(mut self, status: BillingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the billing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::billing::Model)` - Created billing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::billing::Model, DbErr> {
        entity::billing::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            total_amount: ActiveValue::Set(self.total_amount),
            tax_amount: ActiveValue::Set(self.tax_amount),
            other_charges: ActiveValue::Set(self.other_charges),
            billing_date: ActiveValue::Set(self.billing_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a paid bill with default amounts.
pub async fn create_billing(
    db: &DatabaseConnection,
    reservation_id: i32,
    billing_date: NaiveDate,
) -> Result<entity::billing::Model, DbErr> {
    BillingFactory::new(db, reservation_id, billing_date).build().await
}
