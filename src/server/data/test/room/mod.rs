use crate::server::data::room::RoomRepository;
use entity::sea_orm_active_enums::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, room::RoomFactory, room_type::RoomTypeFactory},
};
