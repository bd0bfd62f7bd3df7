//! Room factory for creating test room entities.
//!
//! Rooms default to `Available` with no price of their own, so the room type's base
//! price applies unless `price_per_night` is set.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, branch.id, room_type.id)
///     .room_number("101")
///     .price_per_night(Some(Decimal::new(15000, 2)))
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    branch_id: i32,
    room_type_id: i32,
    room_number: String,
    status: RoomStatus,
    price_per_night: Option<Decimal>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"{id}"` where id is auto-incremented
    /// - status: `Available`
    /// - price_per_night: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `branch_id` - Branch owning the room
    /// - `room_type_id` - Type of the room
    pub fn new(db: &'a DatabaseConnection, branch_id: i32, room_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            branch_id,
            room_type_id,
            room_number: id.to_string(),
            status: RoomStatus::Available,
            price_per_night: None,
        }
    }

    /// Sets the room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the room status.
    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the room's own nightly price.
    pub fn price_per_night(mut self, price_per_night: Option<Decimal>) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            branch_id: ActiveValue::Set(self.branch_id),
            room_type_id: ActiveValue::Set(self.room_type_id),
            room_number: ActiveValue::Set(self.room_number),
            status: ActiveValue::Set(self.status),
            price_per_night: ActiveValue::Set(self.price_per_night),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    branch_id: i32,
    room_type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, branch_id, room_type_id).build().await
}
