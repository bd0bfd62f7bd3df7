use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationStatus, RoomStatus};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::server::{
    config::BookingPolicy,
    data::{
        billing::{BillingRepository, Settlement},
        booking::BookingRepository,
        customer::CustomerRepository,
        payment_details::PaymentDetailsRepository,
        reservation::{NewReservation, ReservationRepository},
        room::RoomRepository,
    },
    error::AppError,
    model::{
        billing::{self, Billing},
        date_range::DateRange,
        reservation::{
            CardDetails, CheckoutSummary, CreateReservationParams, Invoice,
            PaginatedReservations, Reservation, ReservationDetail, ReservationFilter,
            ReservationOwner, RoomSelection,
        },
        room::BookingRef,
    },
    service::availability::AvailabilityService,
};

const MAX_PER_PAGE: u64 = 100;

/// Reservation lifecycle: create, check-in, check-out, changes, cancellation and listing.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a BookingPolicy,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a BookingPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a reservation and holds its rooms.
    ///
    /// Customer resolution, the reservation row, its room links and the room status flip are
    /// written in one transaction. If a concurrent booking claims the same rooms first, the
    /// attempt is rolled back and retried up to the policy's attempt limit.
    ///
    /// # Arguments
    /// - `params` - Owner, branch, dates, occupants and room selection
    ///
    /// # Returns
    /// - `Ok(ReservationDetail)` - The created reservation with customer, branch and rooms
    /// - `Err(AppError::Validation)` - Bad occupant count, empty or duplicate room selection
    /// - `Err(AppError::NotFound)` - Unknown branch, customer, room type or room
    /// - `Err(AppError::InsufficientAvailability)` - Not enough conflict-free rooms
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<ReservationDetail, AppError> {
        params.validate()?;

        for attempt in 1..=self.policy.max_booking_attempts {
            match self
                .try_create(&params)
                .await
                .map_err(AppError::classify_booking_error)
            {
                Err(AppError::Conflict(detail)) => {
                    tracing::warn!(
                        "Booking attempt {} in branch {} lost a race: {}",
                        attempt,
                        params.branch_id,
                        detail
                    );
                }
                Ok(reservation) => return self.load_detail(self.db, reservation).await,
                Err(err) => return Err(err),
            }
        }

        Err(AppError::InsufficientAvailability {
            requested: params.selection.requested(),
            available: self.selectable_count(&params).await?,
        })
    }

    async fn try_create(&self, params: &CreateReservationParams) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        if entity::prelude::Branch::find_by_id(params.branch_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Branch {} not found",
                params.branch_id
            )));
        }

        let customers = CustomerRepository::new(&txn);
        let customer_id = match &params.owner {
            ReservationOwner::Customer(id) => {
                customers
                    .get_by_id(*id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?
                    .id
            }
            ReservationOwner::Guest(guest) => customers.find_or_create(guest).await?.id,
        };

        let room_ids = match &params.selection {
            RoomSelection::ByType {
                room_type_id,
                count,
            } => {
                if entity::prelude::RoomType::find_by_id(*room_type_id)
                    .one(&txn)
                    .await?
                    .is_none()
                {
                    return Err(AppError::NotFound(format!(
                        "Room type {} not found",
                        room_type_id
                    )));
                }

                AvailabilityService::new(&txn)
                    .find_available_rooms(params.branch_id, *room_type_id, &params.range, *count)
                    .await?
                    .into_iter()
                    .map(|room| room.id)
                    .collect::<Vec<_>>()
            }
            RoomSelection::Explicit(room_ids) => {
                check_explicit_rooms(&txn, params.branch_id, room_ids, &params.range).await?;
                room_ids.clone()
            }
        };

        let reservation = ReservationRepository::new(&txn)
            .create(NewReservation {
                branch_id: params.branch_id,
                customer_id,
                range: params.range,
                number_of_occupants: params.number_of_occupants,
                reservation_status: params.owner.initial_status(),
                room_ids: &room_ids,
            })
            .await?;

        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Occupied)
            .await?;

        let conflicts = BookingRepository::new(&txn)
            .conflicting_room_ids(
                &room_ids,
                &params.range,
                Some(BookingRef::Reservation(reservation.id)),
            )
            .await?;
        if !conflicts.is_empty() {
            return Err(AppError::Conflict(format!(
                "Rooms {:?} were booked concurrently",
                conflicts
            )));
        }

        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for customer {} with rooms {:?} ({} to {})",
            reservation.id,
            customer_id,
            room_ids,
            params.range.start(),
            params.range.end()
        );

        Ok(reservation)
    }

    /// Number of requested rooms that could currently be booked, for shortfall reports.
    ///
    /// Read outside the last attempt's transaction, so the result is capped below the
    /// requested count.
    async fn selectable_count(&self, params: &CreateReservationParams) -> Result<usize, AppError> {
        let availability = AvailabilityService::new(self.db);
        let requested = params.selection.requested();

        let available = match &params.selection {
            RoomSelection::ByType { room_type_id, .. } => {
                availability
                    .availability_summary(params.branch_id, *room_type_id, &params.range)
                    .await?
                    .available_rooms as usize
            }
            RoomSelection::Explicit(room_ids) => {
                let bookable: Vec<i32> = RoomRepository::new(self.db)
                    .get_by_ids(room_ids, false)
                    .await?
                    .into_iter()
                    .filter(|room| {
                        room.branch_id == params.branch_id
                            && room.status != RoomStatus::Maintenance
                    })
                    .map(|room| room.id)
                    .collect();
                let conflicts = availability
                    .conflicting_room_ids(&bookable, &params.range, None)
                    .await?;
                bookable.len().saturating_sub(conflicts.len())
            }
        };

        Ok(available.min(requested.saturating_sub(1)))
    }

    /// Marks the linked rooms occupied for a confirmed reservation.
    ///
    /// Checked-in guests keep the `Confirmed` status.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation, unchanged apart from its rooms
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Reservation is not `Confirmed`
    pub async fn check_in(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.reservation_status != ReservationStatus::Confirmed {
            return Err(AppError::InvalidState(format!(
                "Reservation {} must be confirmed before check-in",
                id
            )));
        }

        let room_ids = ReservationRepository::new(&txn).room_ids(id).await?;
        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Occupied)
            .await?;

        txn.commit().await?;

        tracing::info!("Checked in reservation {}", id);

        Ok(reservation)
    }

    /// Settles the bill, frees the rooms and completes the reservation.
    ///
    /// `room_charge` is every room's nightly rate times the number of nights; tax is levied
    /// on the room charge only. Charges added earlier with
    /// [`add_optional_charge`](Self::add_optional_charge) are kept and included in the
    /// total.
    ///
    /// # Returns
    /// - `Ok(CheckoutSummary)` - Settled amounts
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Reservation is not checked in
    pub async fn check_out(&self, id: i32) -> Result<CheckoutSummary, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.reservation_status != ReservationStatus::Confirmed {
            return Err(AppError::InvalidState(format!(
                "Reservation {} is not checked in",
                id
            )));
        }

        let stay = reservation.stay()?;
        let room_ids = ReservationRepository::new(&txn).room_ids(id).await?;
        let rooms = RoomRepository::new(&txn).get_by_ids(&room_ids, false).await?;

        let nights = stay.nights();
        let room_charge = billing::room_charge(rooms.iter().map(|r| &r.nightly_rate), nights);
        let tax_amount = billing::tax(room_charge, self.policy.tax_rate);

        let billings = BillingRepository::new(&txn);
        let other_charges = billings
            .get_by_reservation(id)
            .await?
            .map(|b| b.other_charges)
            .unwrap_or(Decimal::ZERO);
        let total_amount = room_charge + tax_amount + other_charges;
        let billing_date = Utc::now().date_naive();

        billings
            .settle(
                id,
                Settlement {
                    total_amount,
                    tax_amount,
                    other_charges,
                    billing_date,
                },
            )
            .await?;

        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Available)
            .await?;
        ReservationRepository::new(&txn)
            .set_statuses(id, ReservationStatus::Completed, PaymentStatus::Paid)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Checked out reservation {}: {} night(s), total {}",
            id,
            nights,
            total_amount
        );

        Ok(CheckoutSummary {
            reservation_id: id,
            nights,
            room_charge,
            tax_amount,
            other_charges,
            total_amount,
            billing_date,
        })
    }

    /// Extends a stay to a later check-out date.
    ///
    /// The linked rooms are re-checked against every other booking over the extended
    /// window; the reservation's own links are ignored.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation with the new check-out date
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Reservation is cancelled or completed
    /// - `Err(AppError::Validation)` - New date is not after the current check-out date
    /// - `Err(AppError::InsufficientAvailability)` - A linked room is booked in the extension
    pub async fn update_checkout_date(
        &self,
        id: i32,
        new_check_out: NaiveDate,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "Reservation {} can no longer be changed",
                id
            )));
        }
        if new_check_out <= reservation.check_out_date {
            return Err(AppError::Validation(format!(
                "New check-out date {} must be after the current check-out date {}",
                new_check_out, reservation.check_out_date
            )));
        }

        let extended = reservation.stay()?.extended_to(new_check_out)?;
        let repo = ReservationRepository::new(&txn);
        let room_ids = repo.room_ids(id).await?;

        let conflicts = AvailabilityService::new(&txn)
            .conflicting_room_ids(&room_ids, &extended, Some(BookingRef::Reservation(id)))
            .await?;
        if !conflicts.is_empty() {
            return Err(AppError::InsufficientAvailability {
                requested: room_ids.len(),
                available: room_ids.len() - conflicts.len(),
            });
        }

        let updated = repo.set_check_out_date(id, new_check_out).await?;

        txn.commit().await?;

        tracing::info!(
            "Extended reservation {} to check out on {}",
            id,
            new_check_out
        );

        Ok(updated)
    }

    /// Adds an extra charge (minibar, laundry, ...) to the reservation's bill.
    ///
    /// # Returns
    /// - `Ok(Billing)` - The bill after the charge
    /// - `Err(AppError::Validation)` - Non-positive amount or empty description
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Reservation is cancelled
    pub async fn add_optional_charge(
        &self,
        id: i32,
        amount: Decimal,
        description: &str,
    ) -> Result<Billing, AppError> {
        if amount <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Charge amount must be greater than zero".to_string(),
            ));
        }
        if description.trim().is_empty() {
            return Err(AppError::Validation(
                "Charge description is required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.reservation_status == ReservationStatus::Cancelled {
            return Err(AppError::InvalidState(format!(
                "Reservation {} is cancelled",
                id
            )));
        }

        let billing = BillingRepository::new(&txn)
            .add_charge(id, billing::to_cents(amount), Utc::now().date_naive())
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Added charge {} ({}) to reservation {}",
            amount,
            description.trim(),
            id
        );

        Ok(billing)
    }

    /// Cancels a reservation and frees its rooms.
    ///
    /// Booked-room links are kept as history.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The cancelled reservation
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Already cancelled or completed
    pub async fn cancel(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        match reservation.reservation_status {
            ReservationStatus::Cancelled => {
                return Err(AppError::InvalidState(format!(
                    "Reservation {} is already cancelled",
                    id
                )))
            }
            ReservationStatus::Completed => {
                return Err(AppError::InvalidState(format!(
                    "Reservation {} is completed and cannot be cancelled",
                    id
                )))
            }
            ReservationStatus::NoShow | ReservationStatus::Confirmed => {}
        }

        let repo = ReservationRepository::new(&txn);
        let room_ids = repo.room_ids(id).await?;
        let cancelled = repo
            .set_reservation_status(id, ReservationStatus::Cancelled)
            .await?;
        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Available)
            .await?;

        txn.commit().await?;

        tracing::info!("Cancelled reservation {}", id);

        Ok(cancelled)
    }

    /// Guest-initiated completion of a paid reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The completed reservation
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Cancelled, already completed, or not paid
    pub async fn complete(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "Reservation {} is already {}",
                id,
                if reservation.reservation_status == ReservationStatus::Cancelled {
                    "cancelled"
                } else {
                    "completed"
                }
            )));
        }
        if reservation.payment_status != PaymentStatus::Paid {
            return Err(AppError::InvalidState(format!(
                "Reservation {} must be paid before it can be completed",
                id
            )));
        }

        let completed = ReservationRepository::new(&txn)
            .set_reservation_status(id, ReservationStatus::Completed)
            .await?;

        txn.commit().await?;

        tracing::info!("Completed reservation {}", id);

        Ok(completed)
    }

    /// Closes a stay whose check-out date has passed, freeing its rooms.
    ///
    /// Used by the completion sweep; unlike [`complete`](Self::complete) it does not
    /// require payment.
    pub async fn close_stay(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "Reservation {} is already closed",
                id
            )));
        }

        let repo = ReservationRepository::new(&txn);
        let room_ids = repo.room_ids(id).await?;
        let completed = repo
            .set_reservation_status(id, ReservationStatus::Completed)
            .await?;
        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Available)
            .await?;

        txn.commit().await?;

        Ok(completed)
    }

    /// Stores masked card details and confirms the reservation.
    ///
    /// Only the card type, last four digits and expiry are kept. Payment status moves to
    /// `Confirmed` and so does the reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The confirmed reservation
    /// - `Err(AppError::Validation)` - Malformed or expired card
    /// - `Err(AppError::NotFound)` - Unknown reservation
    /// - `Err(AppError::InvalidState)` - Closed reservation or details already submitted
    pub async fn submit_payment_details(
        &self,
        id: i32,
        card: CardDetails,
    ) -> Result<Reservation, AppError> {
        let last_four = card.validate(Utc::now().date_naive())?;

        let txn = self.db.begin().await?;

        let reservation = get_reservation(&txn, id).await?;
        if reservation.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "Reservation {} can no longer be paid",
                id
            )));
        }

        let details = PaymentDetailsRepository::new(&txn);
        if details.exists_for_reservation(id).await? {
            return Err(AppError::InvalidState(format!(
                "Payment details for reservation {} were already submitted",
                id
            )));
        }

        details
            .create(
                id,
                card.card_type.trim().to_string(),
                last_four,
                card.exp_month,
                card.exp_year,
            )
            .await?;
        let confirmed = ReservationRepository::new(&txn)
            .set_statuses(id, ReservationStatus::Confirmed, PaymentStatus::Confirmed)
            .await?;

        txn.commit().await?;

        tracing::info!("Payment details received for reservation {}", id);

        Ok(confirmed)
    }

    /// Gets a reservation with its customer, branch and rooms.
    pub async fn get_by_id(&self, id: i32) -> Result<ReservationDetail, AppError> {
        let reservation = get_reservation(self.db, id).await?;
        self.load_detail(self.db, reservation).await
    }

    /// Gets a page of reservations for the staff listing, latest check-in first.
    ///
    /// Pages are 0-indexed; a page past the end is empty but still reports the total.
    ///
    /// # Returns
    /// - `Ok(PaginatedReservations)` - Page of reservations and total matching count
    /// - `Err(AppError::Validation)` - `per_page` outside 1-100 or inverted date bounds
    pub async fn list(&self, filter: ReservationFilter) -> Result<PaginatedReservations, AppError> {
        if filter.per_page == 0 || filter.per_page > MAX_PER_PAGE {
            return Err(AppError::Validation(format!(
                "Page size must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        if let (Some(from), Some(to)) = (filter.check_in_from, filter.check_in_to) {
            if from > to {
                return Err(AppError::Validation(
                    "Check-in range start must not be after its end".to_string(),
                ));
            }
        }

        let (reservations, total) = ReservationRepository::new(self.db)
            .get_paginated(&filter)
            .await?;

        let mut details = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            details.push(self.load_detail(self.db, reservation).await?);
        }

        Ok(PaginatedReservations {
            reservations: details,
            total,
            page: filter.page,
            per_page: filter.per_page,
        })
    }

    /// Gets every reservation of a customer, latest check-in first.
    pub async fn list_for_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<ReservationDetail>, AppError> {
        if CustomerRepository::new(self.db)
            .get_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Customer {} not found",
                customer_id
            )));
        }

        let reservations = ReservationRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;

        let mut details = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            details.push(self.load_detail(self.db, reservation).await?);
        }

        Ok(details)
    }

    /// Gets every bill across a customer's reservations, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Billing>)` - At least one bill
    /// - `Err(AppError::NotFound)` - Unknown customer, or a customer with no bills yet
    pub async fn list_bills_for_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<Billing>, AppError> {
        if CustomerRepository::new(self.db)
            .get_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Customer {} not found",
                customer_id
            )));
        }

        let bills = BillingRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;
        if bills.is_empty() {
            return Err(AppError::NotFound(format!(
                "No billing records for customer {}",
                customer_id
            )));
        }

        Ok(bills)
    }

    /// Gets the bill of a reservation together with the reservation itself.
    ///
    /// # Returns
    /// - `Ok(Invoice)` - Reservation and its bill
    /// - `Err(AppError::NotFound)` - Unknown reservation or no bill yet
    pub async fn get_invoice(&self, id: i32) -> Result<Invoice, AppError> {
        let reservation = get_reservation(self.db, id).await?;

        let billing = BillingRepository::new(self.db)
            .get_by_reservation(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No billing record for reservation {}", id))
            })?;

        Ok(Invoice {
            reservation: self.load_detail(self.db, reservation).await?,
            billing,
        })
    }

    async fn load_detail<C: ConnectionTrait>(
        &self,
        db: &C,
        reservation: Reservation,
    ) -> Result<ReservationDetail, AppError> {
        let customer = CustomerRepository::new(db)
            .get_by_id(reservation.customer_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Customer {} of reservation {} is missing",
                    reservation.customer_id, reservation.id
                ))
            })?;
        let branch = entity::prelude::Branch::find_by_id(reservation.branch_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Branch {} of reservation {} is missing",
                    reservation.branch_id, reservation.id
                ))
            })?;

        let room_ids = ReservationRepository::new(db).room_ids(reservation.id).await?;
        let rooms = RoomRepository::new(db).get_by_ids(&room_ids, false).await?;

        Ok(ReservationDetail {
            reservation,
            customer_name: customer.full_name,
            customer_email: customer.email,
            branch_name: branch.name,
            rooms,
        })
    }
}

async fn get_reservation<C: ConnectionTrait>(db: &C, id: i32) -> Result<Reservation, AppError> {
    ReservationRepository::new(db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
}

/// Checks customer-chosen rooms: they must exist in the branch, not be under maintenance,
/// and be free for the range. Locks the rows where the backend supports it.
async fn check_explicit_rooms<C: ConnectionTrait>(
    db: &C,
    branch_id: i32,
    room_ids: &[i32],
    range: &DateRange,
) -> Result<(), AppError> {
    let rooms = RoomRepository::new(db).get_by_ids(room_ids, true).await?;

    if rooms.len() != room_ids.len() || rooms.iter().any(|r| r.branch_id != branch_id) {
        return Err(AppError::NotFound(format!(
            "One or more rooms were not found in branch {}",
            branch_id
        )));
    }

    let conflicts = AvailabilityService::new(db)
        .conflicting_room_ids(room_ids, range, None)
        .await?;
    let unavailable = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Maintenance || conflicts.contains(&r.id))
        .count();

    if unavailable > 0 {
        return Err(AppError::InsufficientAvailability {
            requested: room_ids.len(),
            available: room_ids.len() - unavailable,
        });
    }

    Ok(())
}
