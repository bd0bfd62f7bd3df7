//! Reservation factory for creating test reservations with their booked rooms.
//!
//! The factory writes rows directly and performs no availability checks, which makes it
//! suitable for arranging pre-existing bookings (including deliberately conflicting
//! ones) before exercising the services.

use crate::factory::helpers::date;
use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, branch.id, customer.id)
///     .dates(date(2026, 2, 10), date(2026, 2, 15))
///     .rooms(vec![room.id])
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    branch_id: i32,
    customer_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    number_of_occupants: i32,
    room_ids: Vec<i32>,
    payment_status: PaymentStatus,
    reservation_status: ReservationStatus,
    created_at: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - dates: `2026-03-01` to `2026-03-05`
    /// - number_of_occupants: `2`
    /// - rooms: none
    /// - payment_status: `Pending`
    /// - reservation_status: `Confirmed`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, branch_id: i32, customer_id: i32) -> Self {
        Self {
            db,
            branch_id,
            customer_id,
            check_in_date: date(2026, 3, 1),
            check_out_date: date(2026, 3, 5),
            number_of_occupants: 2,
            room_ids: Vec::new(),
            payment_status: PaymentStatus::Pending,
            reservation_status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    /// Sets the check-in and check-out dates.
    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    /// Sets the rooms linked through booked-room rows.
    pub fn rooms(mut self, room_ids: Vec<i32>) -> Self {
        self.room_ids = room_ids;
        self
    }

    /// Sets the reservation status.
    pub fn status(mut self, reservation_status: ReservationStatus) -> Self {
        self.reservation_status = reservation_status;
        self
    }

    /// Sets the payment status.
    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the reservation and its booked-room links.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            branch_id: ActiveValue::Set(self.branch_id),
            customer_id: ActiveValue::Set(self.customer_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            number_of_occupants: ActiveValue::Set(self.number_of_occupants),
            number_of_rooms: ActiveValue::Set(self.room_ids.len() as i32),
            payment_status: ActiveValue::Set(self.payment_status),
            reservation_status: ActiveValue::Set(self.reservation_status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for room_id in self.room_ids {
            entity::booked_room::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                room_id: ActiveValue::Set(room_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(reservation)
    }
}

/// Creates a confirmed reservation for the given rooms and dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    branch_id: i32,
    customer_id: i32,
    room_ids: Vec<i32>,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, branch_id, customer_id)
        .dates(check_in_date, check_out_date)
        .rooms(room_ids)
        .build()
        .await
}
