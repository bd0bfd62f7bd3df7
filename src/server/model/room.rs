use entity::sea_orm_active_enums::RoomStatus;
use rust_decimal::Decimal;

use crate::model::report::AvailabilitySummaryDto;

/// A physical room with its nightly rate resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub room_type_id: i32,
    pub branch_id: i32,
    pub status: RoomStatus,
    /// The room's own price, or the room type's base price when the room has none.
    pub nightly_rate: Decimal,
}

impl Room {
    /// Converts a room entity and its room type into a domain model.
    ///
    /// # Arguments
    /// - `entity` - Room row
    /// - `room_type` - Room type row used for the fallback price, if loaded
    pub fn from_entity(
        entity: entity::room::Model,
        room_type: Option<&entity::room_type::Model>,
    ) -> Self {
        let nightly_rate = entity
            .price_per_night
            .or_else(|| room_type.map(|rt| rt.base_price))
            .unwrap_or(Decimal::ZERO);

        Self {
            id: entity.id,
            room_number: entity.room_number,
            room_type_id: entity.room_type_id,
            branch_id: entity.branch_id,
            status: entity.status,
            nightly_rate,
        }
    }

    pub fn into_dto(self) -> crate::model::reservation::BookedRoomDto {
        crate::model::reservation::BookedRoomDto {
            room_id: self.id,
            room_number: self.room_number,
            room_type_id: self.room_type_id,
        }
    }
}

/// Room counts for a branch and room type over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilitySummary {
    pub total_rooms: u64,
    pub available_rooms: u64,
}

impl AvailabilitySummary {
    pub fn into_dto(self) -> AvailabilitySummaryDto {
        AvailabilitySummaryDto {
            total_rooms: self.total_rooms,
            available_rooms: self.available_rooms,
        }
    }
}

/// A booking whose own room links must be ignored by an overlap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRef {
    Reservation(i32),
    BlockedBooking(i32),
}
