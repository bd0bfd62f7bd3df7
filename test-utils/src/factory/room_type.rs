//! Room type factory for creating test room type entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room types with customizable fields.
pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    type_name: String,
    description: Option<String>,
    base_price: Decimal,
}

impl<'a> RoomTypeFactory<'a> {
    /// Creates a new RoomTypeFactory with default values.
    ///
    /// Defaults:
    /// - type_name: `"Type {id}"` where id is auto-incremented
    /// - description: `None`
    /// - base_price: `100.00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            type_name: format!("Type {}", id),
            description: None,
            base_price: Decimal::new(10000, 2),
        }
    }

    /// Sets the room type name.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Sets the room type description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the base nightly price used by rooms without their own price.
    pub fn base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = base_price;
        self
    }

    /// Builds and inserts the room type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room_type::Model)` - Created room type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            type_name: ActiveValue::Set(self.type_name),
            description: ActiveValue::Set(self.description),
            base_price: ActiveValue::Set(self.base_price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room type with default values.
pub async fn create_room_type(
    db: &DatabaseConnection,
) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
