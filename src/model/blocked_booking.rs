use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BlockedBookingDto {
    pub id: i32,
    pub company_id: i32,
    pub branch_id: i32,
    pub room_type_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_rooms: i32,
    pub room_ids: Vec<i32>,
    pub room_charge: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub billing_status: String,
}
