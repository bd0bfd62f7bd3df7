use chrono::NaiveDate;
use entity::sea_orm_active_enums::{BillingStatus, RoomStatus};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::server::{
    config::BookingPolicy,
    data::{
        blocked_booking::BlockedBookingRepository, booking::BookingRepository,
        room::RoomRepository,
    },
    error::AppError,
    model::{
        blocked_booking::{BlockQuote, BlockedBooking, CreateBlockedBookingParams},
        room::BookingRef,
    },
    service::availability::AvailabilityService,
};

/// Bulk room holds made by travel companies.
pub struct BlockedBookingService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a BookingPolicy,
}

impl<'a> BlockedBookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a BookingPolicy) -> Self {
        Self { db, policy }
    }

    /// Holds a block of rooms of one type for a travel company.
    ///
    /// Rooms are picked by the same rules as reservations, and the block's price (with the
    /// company discount) is stored on it. Retries like reservation creation when a
    /// concurrent booking wins the rooms.
    ///
    /// # Returns
    /// - `Ok(BlockedBooking)` - The created block with its rooms and quote
    /// - `Err(AppError::Validation)` - Block not larger than the configured minimum
    /// - `Err(AppError::NotFound)` - Unknown company, branch or room type
    /// - `Err(AppError::InsufficientAvailability)` - Not enough conflict-free rooms
    pub async fn create(
        &self,
        params: CreateBlockedBookingParams,
    ) -> Result<BlockedBooking, AppError> {
        if params.number_of_rooms <= self.policy.min_block_rooms {
            return Err(AppError::Validation(format!(
                "A blocked booking must hold more than {} rooms",
                self.policy.min_block_rooms
            )));
        }

        for attempt in 1..=self.policy.max_booking_attempts {
            match self
                .try_create(&params)
                .await
                .map_err(AppError::classify_booking_error)
            {
                Err(AppError::Conflict(detail)) => {
                    tracing::warn!(
                        "Blocked booking attempt {} for company {} lost a race: {}",
                        attempt,
                        params.company_id,
                        detail
                    );
                }
                result => return result,
            }
        }

        let summary = AvailabilityService::new(self.db)
            .availability_summary(params.branch_id, params.room_type_id, &params.range)
            .await?;

        Err(AppError::InsufficientAvailability {
            requested: params.number_of_rooms as usize,
            available: summary.available_rooms as usize,
        })
    }

    async fn try_create(
        &self,
        params: &CreateBlockedBookingParams,
    ) -> Result<BlockedBooking, AppError> {
        let txn = self.db.begin().await?;

        let company = entity::prelude::TravelCompany::find_by_id(params.company_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Travel company {} not found", params.company_id))
            })?;
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
        if entity::prelude::RoomType::find_by_id(params.room_type_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Room type {} not found",
                params.room_type_id
            )));
        }

        let rooms = AvailabilityService::new(&txn)
            .find_available_rooms(
                params.branch_id,
                params.room_type_id,
                &params.range,
                params.number_of_rooms as usize,
            )
            .await?;
        let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        let rates: Vec<Decimal> = rooms.iter().map(|r| r.nightly_rate).collect();

        let quote = BlockQuote::compute(
            &rates,
            params.range.nights(),
            company.discount_rate,
            self.policy.tax_rate,
        );

        let block = BlockedBookingRepository::new(&txn)
            .create(params, quote, &room_ids)
            .await?;
        RoomRepository::new(&txn)
            .set_status(&room_ids, RoomStatus::Occupied)
            .await?;

        let conflicts = BookingRepository::new(&txn)
            .conflicting_room_ids(
                &room_ids,
                &params.range,
                Some(BookingRef::BlockedBooking(block.id)),
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
            "Created blocked booking {} for company {} with {} rooms ({} to {})",
            block.id,
            company.id,
            room_ids.len(),
            params.range.start(),
            params.range.end()
        );

        Ok(block)
    }

    /// Cancels a block before its end date, freeing and unlinking its rooms.
    ///
    /// # Arguments
    /// - `id` - Blocked booking ID
    /// - `today` - Current date; cancellation is refused once the end date is reached
    ///
    /// # Returns
    /// - `Ok(())` - Block deleted
    /// - `Err(AppError::NotFound)` - Unknown block
    /// - `Err(AppError::InvalidState)` - `today` is on or after the end date
    pub async fn cancel(&self, id: i32, today: NaiveDate) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = BlockedBookingRepository::new(&txn);
        let block = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blocked booking {} not found", id)))?;

        if today >= block.end_date {
            return Err(AppError::InvalidState(format!(
                "Blocked booking {} ended on {} and can no longer be cancelled",
                id, block.end_date
            )));
        }

        RoomRepository::new(&txn)
            .set_status(&block.room_ids, RoomStatus::Available)
            .await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Cancelled blocked booking {}", id);

        Ok(())
    }

    /// Settles a block's bill and frees its rooms.
    ///
    /// # Returns
    /// - `Ok(BlockedBooking)` - The settled block
    /// - `Err(AppError::NotFound)` - Unknown block
    /// - `Err(AppError::InvalidState)` - Already settled
    pub async fn check_out(&self, id: i32) -> Result<BlockedBooking, AppError> {
        let txn = self.db.begin().await?;

        let repo = BlockedBookingRepository::new(&txn);
        let mut block = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blocked booking {} not found", id)))?;

        if block.billing_status == BillingStatus::Paid {
            return Err(AppError::InvalidState(format!(
                "Blocked booking {} is already settled",
                id
            )));
        }

        repo.set_billing_status(id, BillingStatus::Paid).await?;
        RoomRepository::new(&txn)
            .set_status(&block.room_ids, RoomStatus::Available)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Checked out blocked booking {}, total {}",
            id,
            block.quote.total_amount
        );

        block.billing_status = BillingStatus::Paid;
        Ok(block)
    }

    pub async fn get(&self, id: i32) -> Result<BlockedBooking, AppError> {
        BlockedBookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blocked booking {} not found", id)))
    }

    /// Gets every block of a travel company, latest start date first.
    pub async fn list_for_company(&self, company_id: i32) -> Result<Vec<BlockedBooking>, AppError> {
        if entity::prelude::TravelCompany::find_by_id(company_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Travel company {} not found",
                company_id
            )));
        }

        Ok(BlockedBookingRepository::new(self.db)
            .get_by_company(company_id)
            .await?)
    }
}
