use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_room_table::Room,
    m20260101_000006_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookedRoom::Table)
                    .if_not_exists()
                    .col(integer(BookedRoom::ReservationId))
                    .col(integer(BookedRoom::RoomId))
                    .primary_key(
                        Index::create()
                            .col(BookedRoom::ReservationId)
                            .col(BookedRoom::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_room_reservation_id")
                            .from(BookedRoom::Table, BookedRoom::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_room_room_id")
                            .from(BookedRoom::Table, BookedRoom::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booked_room_room_id")
                    .table(BookedRoom::Table)
                    .col(BookedRoom::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookedRoom {
    Table,
    ReservationId,
    RoomId,
}
