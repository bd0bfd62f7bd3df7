use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub branch_id: i32,
    pub customer_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_occupants: i32,
    pub number_of_rooms: i32,
    pub payment_status: String,
    pub reservation_status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BookedRoomDto {
    pub room_id: i32,
    pub room_number: String,
    pub room_type_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationDetailDto {
    pub reservation: ReservationDto,
    pub customer_name: String,
    pub customer_email: String,
    pub branch_name: String,
    pub rooms: Vec<BookedRoomDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationDetailDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BillingDto {
    pub id: i32,
    pub reservation_id: i32,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub other_charges: Decimal,
    pub billing_date: NaiveDate,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CheckoutSummaryDto {
    pub reservation_id: i32,
    pub nights: i64,
    pub room_charge: Decimal,
    pub tax_amount: Decimal,
    pub other_charges: Decimal,
    pub total_amount: Decimal,
    pub billing_date: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct InvoiceDto {
    pub reservation: ReservationDetailDto,
    pub billing: BillingDto,
}
