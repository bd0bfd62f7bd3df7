//! Reservation domain models and operation parameters.
//!
//! Covers who owns a booking (`ReservationOwner`), how its rooms are picked
//! (`RoomSelection`), the filters used for staff listings, and the results of
//! check-out and invoicing.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationStatus};
use sea_orm::ActiveEnum;

use crate::{
    model::reservation::{
        CheckoutSummaryDto, InvoiceDto, PaginatedReservationsDto, ReservationDetailDto,
        ReservationDto,
    },
    server::{
        error::AppError,
        model::{billing::Billing, date_range::DateRange, room::Room},
    },
};

/// Contact details for a front-desk booking.
///
/// The customer record is matched by email and created when no match exists.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestDetails {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Who a reservation is made for.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationOwner {
    /// An authenticated customer booking for themselves.
    ///
    /// Starts in `No_show` until payment details are submitted.
    Customer(i32),
    /// A guest booked by the front desk. Starts `Confirmed`.
    Guest(GuestDetails),
}

impl ReservationOwner {
    pub fn initial_status(&self) -> ReservationStatus {
        match self {
            Self::Customer(_) => ReservationStatus::NoShow,
            Self::Guest(_) => ReservationStatus::Confirmed,
        }
    }
}

/// How the rooms of a new reservation are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomSelection {
    /// Let the availability checker pick `count` rooms of a room type.
    ByType { room_type_id: i32, count: usize },
    /// Book exactly these rooms.
    Explicit(Vec<i32>),
}

impl RoomSelection {
    /// Number of rooms the selection asks for.
    pub fn requested(&self) -> usize {
        match self {
            Self::ByType { count, .. } => *count,
            Self::Explicit(room_ids) => room_ids.len(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.requested() == 0 {
            return Err(AppError::Validation(
                "At least one room must be requested".to_string(),
            ));
        }

        if let Self::Explicit(room_ids) = self {
            let mut sorted = room_ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            if sorted.len() != room_ids.len() {
                return Err(AppError::Validation(
                    "The same room cannot be booked twice in one reservation".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub owner: ReservationOwner,
    pub branch_id: i32,
    pub range: DateRange,
    pub number_of_occupants: i32,
    pub selection: RoomSelection,
}

impl CreateReservationParams {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.number_of_occupants <= 0 {
            return Err(AppError::Validation(
                "Number of occupants must be greater than zero".to_string(),
            ));
        }

        if let ReservationOwner::Guest(guest) = &self.owner {
            if guest.full_name.trim().is_empty() || !guest.email.contains('@') {
                return Err(AppError::Validation(
                    "Guest name and a valid email are required".to_string(),
                ));
            }
        }

        self.selection.validate()
    }
}

/// A reservation as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub branch_id: i32,
    pub customer_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_occupants: i32,
    pub number_of_rooms: i32,
    pub payment_status: PaymentStatus,
    pub reservation_status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            branch_id: entity.branch_id,
            customer_id: entity.customer_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            number_of_occupants: entity.number_of_occupants,
            number_of_rooms: entity.number_of_rooms,
            payment_status: entity.payment_status,
            reservation_status: entity.reservation_status,
            created_at: entity.created_at,
        }
    }

    /// The stay interval of the reservation.
    pub fn stay(&self) -> Result<DateRange, AppError> {
        DateRange::new(self.check_in_date, self.check_out_date)
    }

    /// Cancelled and Completed reservations accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.reservation_status,
            ReservationStatus::Cancelled | ReservationStatus::Completed
        )
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            branch_id: self.branch_id,
            customer_id: self.customer_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            number_of_occupants: self.number_of_occupants,
            number_of_rooms: self.number_of_rooms,
            payment_status: self.payment_status.to_value(),
            reservation_status: self.reservation_status.to_value(),
        }
    }
}

/// A reservation joined with its customer, branch and rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    pub customer_name: String,
    pub customer_email: String,
    pub branch_name: String,
    pub rooms: Vec<Room>,
}

impl ReservationDetail {
    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            reservation: self.reservation.into_dto(),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            branch_name: self.branch_name,
            rooms: self.rooms.into_iter().map(Room::into_dto).collect(),
        }
    }
}

/// Filters for the staff reservation listing.
#[derive(Debug, Clone)]
pub struct ReservationFilter {
    /// Substring matched against customer name or email.
    pub search: Option<String>,
    pub status: Option<ReservationStatus>,
    /// Inclusive lower bound on check-in date.
    pub check_in_from: Option<NaiveDate>,
    /// Inclusive upper bound on check-in date.
    pub check_in_to: Option<NaiveDate>,
    /// Page number, 0-indexed: page 0 holds the latest check-ins. Transports exposing
    /// 1-based pages subtract one before building the filter.
    pub page: u64,
    pub per_page: u64,
}

impl Default for ReservationFilter {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            check_in_from: None,
            check_in_to: None,
            page: 0,
            per_page: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReservations {
    pub reservations: Vec<ReservationDetail>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedReservations {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        PaginatedReservationsDto {
            reservations: self
                .reservations
                .into_iter()
                .map(ReservationDetail::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Amounts settled at check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub reservation_id: i32,
    pub nights: i64,
    pub room_charge: rust_decimal::Decimal,
    pub tax_amount: rust_decimal::Decimal,
    pub other_charges: rust_decimal::Decimal,
    pub total_amount: rust_decimal::Decimal,
    pub billing_date: NaiveDate,
}

impl CheckoutSummary {
    pub fn into_dto(self) -> CheckoutSummaryDto {
        CheckoutSummaryDto {
            reservation_id: self.reservation_id,
            nights: self.nights,
            room_charge: self.room_charge,
            tax_amount: self.tax_amount,
            other_charges: self.other_charges,
            total_amount: self.total_amount,
            billing_date: self.billing_date,
        }
    }
}

/// Card details submitted by a guest.
///
/// Only the card type, the last four digits and the expiry are ever stored.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub card_type: String,
    pub card_number: String,
    pub exp_month: i32,
    pub exp_year: i32,
}

impl CardDetails {
    /// Validates the card and returns the last four digits.
    ///
    /// Spaces and dashes in the card number are ignored. Expiry is checked against `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<String, AppError> {
        use chrono::Datelike;

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if self.card_type.trim().is_empty() {
            return Err(AppError::Validation("Card type is required".to_string()));
        }
        if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation("Card number is invalid".to_string()));
        }
        if !(1..=12).contains(&self.exp_month) {
            return Err(AppError::Validation(
                "Card expiry month must be between 1 and 12".to_string(),
            ));
        }
        let expired = self.exp_year < today.year()
            || (self.exp_year == today.year() && (self.exp_month as u32) < today.month());
        if expired {
            return Err(AppError::Validation("Card has expired".to_string()));
        }

        Ok(digits[digits.len() - 4..].to_string())
    }
}

/// A settled or running bill together with the reservation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub reservation: ReservationDetail,
    pub billing: Billing,
}

impl Invoice {
    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            reservation: self.reservation.into_dto(),
            billing: self.billing.into_dto(),
        }
    }
}
