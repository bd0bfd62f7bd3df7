use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_room_table::Room,
    m20260101_000009_create_blocked_booking_table::BlockedBooking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockedBookingRoom::Table)
                    .if_not_exists()
                    .col(integer(BlockedBookingRoom::BlockedBookingId))
                    .col(integer(BlockedBookingRoom::RoomId))
                    .primary_key(
                        Index::create()
                            .col(BlockedBookingRoom::BlockedBookingId)
                            .col(BlockedBookingRoom::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_booking_room_blocked_booking_id")
                            .from(BlockedBookingRoom::Table, BlockedBookingRoom::BlockedBookingId)
                            .to(BlockedBooking::Table, BlockedBooking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_booking_room_room_id")
                            .from(BlockedBookingRoom::Table, BlockedBookingRoom::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockedBookingRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlockedBookingRoom {
    Table,
    BlockedBookingId,
    RoomId,
}
