//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on an invalid one.
///
/// Test-only shorthand so fixtures can read `date(2026, 2, 10)`.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Creates a branch and a room type with default values.
///
/// # Returns
/// - `Ok((branch, room_type))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel(
    db: &DatabaseConnection,
) -> Result<(entity::branch::Model, entity::room_type::Model), DbErr> {
    let branch = crate::factory::branch::create_branch(db).await?;
    let room_type = crate::factory::room_type::create_room_type(db).await?;

    Ok((branch, room_type))
}

/// Creates `count` available rooms of one type in one branch.
///
/// Rooms are created in order, so their IDs ascend in the returned vector.
///
/// # Arguments
/// - `db` - Database connection
/// - `branch_id` - Branch owning the rooms
/// - `room_type_id` - Room type of the rooms
/// - `count` - Number of rooms to create
///
/// # Returns
/// - `Ok(Vec<entity::room::Model>)` - Created rooms in ascending ID order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rooms(
    db: &DatabaseConnection,
    branch_id: i32,
    room_type_id: i32,
    count: usize,
) -> Result<Vec<entity::room::Model>, DbErr> {
    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        rooms.push(crate::factory::room::create_room(db, branch_id, room_type_id).await?);
    }
    Ok(rooms)
}
