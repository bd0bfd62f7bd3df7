use sea_orm::ConnectionTrait;
use std::collections::BTreeSet;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::{
        date_range::DateRange,
        room::{AvailabilitySummary, BookingRef, Room},
    },
};

/// Answers which rooms can take a booking for a date range.
///
/// Generic over the connection so booking services can run it inside their transaction,
/// where the candidate rows stay locked until commit.
pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Picks `count` conflict-free rooms of a type in a branch.
    ///
    /// The candidate pool is every `Available` room of the branch and type in ascending ID
    /// order; rooms under maintenance or flagged occupied never qualify. The first `count`
    /// candidates with no overlapping reservation or blocked booking are accepted.
    ///
    /// # Arguments
    /// - `branch_id` - Branch to book in
    /// - `room_type_id` - Requested room type
    /// - `range` - Requested stay
    /// - `count` - Number of rooms wanted
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Exactly `count` rooms
    /// - `Err(AppError::InsufficientAvailability)` - Fewer than `count` rooms qualify
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_available_rooms(
        &self,
        branch_id: i32,
        room_type_id: i32,
        range: &DateRange,
        count: usize,
    ) -> Result<Vec<Room>, AppError> {
        let free = self.free_candidates(branch_id, room_type_id, range, true).await?;

        if free.len() < count {
            return Err(AppError::InsufficientAvailability {
                requested: count,
                available: free.len(),
            });
        }

        Ok(free.into_iter().take(count).collect())
    }

    /// Whether any of `room_ids` is already committed for an overlapping range.
    pub async fn has_conflict(
        &self,
        room_ids: &[i32],
        range: &DateRange,
        exclude: Option<BookingRef>,
    ) -> Result<bool, AppError> {
        Ok(!self
            .conflicting_room_ids(room_ids, range, exclude)
            .await?
            .is_empty())
    }

    /// The subset of `room_ids` already committed for an overlapping range.
    pub async fn conflicting_room_ids(
        &self,
        room_ids: &[i32],
        range: &DateRange,
        exclude: Option<BookingRef>,
    ) -> Result<BTreeSet<i32>, AppError> {
        Ok(BookingRepository::new(self.db)
            .conflicting_room_ids(room_ids, range, exclude)
            .await?)
    }

    /// Every `Available` room of a branch that is free for the whole range.
    pub async fn available_rooms_in_branch(
        &self,
        branch_id: i32,
        range: &DateRange,
    ) -> Result<Vec<Room>, AppError> {
        let rooms = RoomRepository::new(self.db)
            .get_available_in_branch(branch_id)
            .await?;

        self.without_conflicts(rooms, range).await
    }

    /// Total rooms of a type in a branch and how many of them could be booked for the range.
    pub async fn availability_summary(
        &self,
        branch_id: i32,
        room_type_id: i32,
        range: &DateRange,
    ) -> Result<AvailabilitySummary, AppError> {
        let total_rooms = RoomRepository::new(self.db)
            .count(Some(branch_id), Some(room_type_id))
            .await?;
        let available = self
            .free_candidates(branch_id, room_type_id, range, false)
            .await?;

        Ok(AvailabilitySummary {
            total_rooms,
            available_rooms: available.len() as u64,
        })
    }

    async fn free_candidates(
        &self,
        branch_id: i32,
        room_type_id: i32,
        range: &DateRange,
        lock: bool,
    ) -> Result<Vec<Room>, AppError> {
        let candidates = RoomRepository::new(self.db)
            .get_candidates(branch_id, room_type_id, lock)
            .await?;

        self.without_conflicts(candidates, range).await
    }

    async fn without_conflicts(
        &self,
        rooms: Vec<Room>,
        range: &DateRange,
    ) -> Result<Vec<Room>, AppError> {
        let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        let conflicts = self.conflicting_room_ids(&ids, range, None).await?;

        Ok(rooms
            .into_iter()
            .filter(|room| !conflicts.contains(&room.id))
            .collect())
    }
}
