//! Billing records and the pricing arithmetic shared by reservations and blocked bookings.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::ActiveEnum;

use crate::model::reservation::BillingDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub id: i32,
    pub reservation_id: i32,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub other_charges: Decimal,
    pub billing_date: NaiveDate,
    pub status: BillingStatus,
}

impl Billing {
    pub fn from_entity(entity: entity::billing::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            total_amount: to_cents(entity.total_amount),
            tax_amount: to_cents(entity.tax_amount),
            other_charges: to_cents(entity.other_charges),
            billing_date: entity.billing_date,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> BillingDto {
        BillingDto {
            id: self.id,
            reservation_id: self.reservation_id,
            total_amount: self.total_amount,
            tax_amount: self.tax_amount,
            other_charges: self.other_charges,
            billing_date: self.billing_date,
            status: self.status.to_value(),
        }
    }
}

/// Rounds a money amount to cents, half away from zero.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of every nightly rate multiplied by the number of nights.
pub fn room_charge<'a>(nightly_rates: impl IntoIterator<Item = &'a Decimal>, nights: i64) -> Decimal {
    let per_night: Decimal = nightly_rates.into_iter().copied().sum();
    to_cents(per_night * Decimal::from(nights))
}

/// Tax owed on `taxable` at `rate`, rounded to cents.
pub fn tax(taxable: Decimal, rate: Decimal) -> Decimal {
    to_cents(taxable * rate)
}
