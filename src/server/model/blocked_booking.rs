//! Travel-company blocked bookings.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;

use crate::{
    model::blocked_booking::BlockedBookingDto,
    server::model::{
        billing::{room_charge, tax, to_cents},
        date_range::DateRange,
    },
};

/// Parameters for holding a block of rooms for a travel company.
#[derive(Debug, Clone)]
pub struct CreateBlockedBookingParams {
    pub company_id: i32,
    pub branch_id: i32,
    pub room_type_id: i32,
    pub range: DateRange,
    pub number_of_rooms: i32,
}

/// Price of a block, stored on the block itself.
///
/// The company discount applies to the room charge and tax is levied on the discounted
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuote {
    pub room_charge: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

impl BlockQuote {
    /// # Arguments
    /// - `nightly_rates` - Rate of every held room
    /// - `nights` - Length of the hold
    /// - `discount_rate` - Company discount in percent (0-100)
    /// - `tax_rate` - Flat tax rate, e.g. `0.10`
    pub fn compute(
        nightly_rates: &[Decimal],
        nights: i64,
        discount_rate: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        let room_charge = room_charge(nightly_rates, nights);
        let discount_amount = to_cents(room_charge * discount_rate / Decimal::ONE_HUNDRED);
        let discounted = room_charge - discount_amount;
        let tax_amount = tax(discounted, tax_rate);

        Self {
            room_charge,
            discount_amount,
            tax_amount,
            total_amount: discounted + tax_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockedBooking {
    pub id: i32,
    pub company_id: i32,
    pub branch_id: i32,
    pub room_type_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_rooms: i32,
    pub room_ids: Vec<i32>,
    pub quote: BlockQuote,
    pub billing_status: BillingStatus,
    pub created_at: DateTime<Utc>,
}

impl BlockedBooking {
    /// Converts a block entity and its room links into a domain model.
    pub fn from_entity(entity: entity::blocked_booking::Model, room_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            branch_id: entity.branch_id,
            room_type_id: entity.room_type_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            number_of_rooms: entity.number_of_rooms,
            room_ids,
            quote: BlockQuote {
                room_charge: to_cents(entity.room_charge),
                discount_amount: to_cents(entity.discount_amount),
                tax_amount: to_cents(entity.tax_amount),
                total_amount: to_cents(entity.total_amount),
            },
            billing_status: entity.billing_status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BlockedBookingDto {
        BlockedBookingDto {
            id: self.id,
            company_id: self.company_id,
            branch_id: self.branch_id,
            room_type_id: self.room_type_id,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_rooms: self.number_of_rooms,
            room_ids: self.room_ids,
            room_charge: self.quote.room_charge,
            discount_amount: self.quote.discount_amount,
            tax_amount: self.quote.tax_amount,
            total_amount: self.quote.total_amount,
            billing_status: self.billing_status.to_value(),
        }
    }
}
