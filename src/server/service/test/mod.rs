use chrono::NaiveDate;
use entity::sea_orm_active_enums::RoomStatus;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::{
    date_range::DateRange,
    reservation::{CreateReservationParams, GuestDetails, ReservationOwner, RoomSelection},
};


fn stay(check_in: NaiveDate, check_out: NaiveDate) -> DateRange {
    DateRange::new(check_in, check_out).unwrap()
}

fn guest(email: &str) -> ReservationOwner {
    ReservationOwner::Guest(GuestDetails {
        full_name: "Front Desk Guest".to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
    })
}

/// Front-desk booking of `count` rooms of a type.
fn by_type(
    branch_id: i32,
    room_type_id: i32,
    count: usize,
    range: DateRange,
) -> CreateReservationParams {
    CreateReservationParams {
        owner: guest("guest@example.com"),
        branch_id,
        range,
        number_of_occupants: 2,
        selection: RoomSelection::ByType {
            room_type_id,
            count,
        },
    }
}

/// Front-desk booking of specific rooms.
fn explicit(branch_id: i32, room_ids: Vec<i32>, range: DateRange) -> CreateReservationParams {
    CreateReservationParams {
        owner: guest("guest@example.com"),
        branch_id,
        range,
        number_of_occupants: 2,
        selection: RoomSelection::Explicit(room_ids),
    }
}

async fn room_statuses(db: &DatabaseConnection, ids: &[i32]) -> Result<Vec<RoomStatus>, DbErr> {
    let mut statuses = Vec::with_capacity(ids.len());
    for id in ids {
        let room = entity::prelude::Room::find_by_id(*id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("room {}", id)))?;
        statuses.push(room.status);
    }
    Ok(statuses)
}
