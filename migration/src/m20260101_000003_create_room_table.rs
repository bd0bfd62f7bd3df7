use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_branch_table::Branch,
    m20260101_000002_create_room_type_table::RoomType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string(Room::RoomNumber))
                    .col(integer(Room::RoomTypeId))
                    .col(integer(Room::BranchId))
                    .col(string_len(Room::Status, 20).default("Available"))
                    .col(decimal_len_null(Room::PricePerNight, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type_id")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_branch_id")
                            .from(Room::Table, Room::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Room numbers are only unique within a branch
        manager
            .create_index(
                Index::create()
                    .name("idx_room_branch_room_number")
                    .table(Room::Table)
                    .col(Room::BranchId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_branch_type_status")
                    .table(Room::Table)
                    .col(Room::BranchId)
                    .col(Room::RoomTypeId)
                    .col(Room::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomNumber,
    RoomTypeId,
    BranchId,
    Status,
    PricePerNight,
}
