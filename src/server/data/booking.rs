//! Overlap queries across both booking kinds.
//!
//! A room is committed for a date range when a non-cancelled reservation or any blocked
//! booking links it over an intersecting `[start, end)` interval.

use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};
use std::collections::BTreeSet;

use crate::server::model::{date_range::DateRange, room::BookingRef};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the subset of `room_ids` already committed for an overlapping range.
    ///
    /// # Arguments
    /// - `room_ids` - Rooms to check
    /// - `range` - Requested stay
    /// - `exclude` - Booking whose own links are ignored (used when a booking re-checks itself)
    ///
    /// # Returns
    /// - `Ok(BTreeSet<i32>)` - Conflicting room IDs, empty when all are free
    /// - `Err(DbErr)` - Database error
    pub async fn conflicting_room_ids(
        &self,
        room_ids: &[i32],
        range: &DateRange,
        exclude: Option<BookingRef>,
    ) -> Result<BTreeSet<i32>, DbErr> {
        if room_ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let mut reserved = entity::prelude::BookedRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::booked_room::Relation::Reservation.def(),
            )
            .filter(entity::booked_room::Column::RoomId.is_in(room_ids.iter().copied()))
            .filter(entity::reservation::Column::ReservationStatus.ne(ReservationStatus::Cancelled))
            .filter(entity::reservation::Column::CheckInDate.lt(range.end()))
            .filter(entity::reservation::Column::CheckOutDate.gt(range.start()));

        if let Some(BookingRef::Reservation(id)) = exclude {
            reserved = reserved.filter(entity::reservation::Column::Id.ne(id));
        }

        let mut held = entity::prelude::BlockedBookingRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::blocked_booking_room::Relation::BlockedBooking.def(),
            )
            .filter(entity::blocked_booking_room::Column::RoomId.is_in(room_ids.iter().copied()))
            .filter(entity::blocked_booking::Column::StartDate.lt(range.end()))
            .filter(entity::blocked_booking::Column::EndDate.gt(range.start()));

        if let Some(BookingRef::BlockedBooking(id)) = exclude {
            held = held.filter(entity::blocked_booking::Column::Id.ne(id));
        }

        let mut conflicts: BTreeSet<i32> = reserved
            .select_only()
            .column(entity::booked_room::Column::RoomId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        conflicts.extend(
            held.select_only()
                .column(entity::blocked_booking_room::Column::RoomId)
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
        );

        Ok(conflicts)
    }
}
