use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_branch_table::Branch,
    m20260101_000002_create_room_type_table::RoomType,
    m20260101_000005_create_travel_company_table::TravelCompany,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockedBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(BlockedBooking::Id))
                    .col(integer(BlockedBooking::CompanyId))
                    .col(integer(BlockedBooking::BranchId))
                    .col(integer(BlockedBooking::RoomTypeId))
                    .col(date(BlockedBooking::StartDate))
                    .col(date(BlockedBooking::EndDate))
                    .col(integer(BlockedBooking::NumberOfRooms))
                    .col(decimal_len(BlockedBooking::RoomCharge, 12, 2).default(0))
                    .col(decimal_len(BlockedBooking::DiscountAmount, 12, 2).default(0))
                    .col(decimal_len(BlockedBooking::TaxAmount, 12, 2).default(0))
                    .col(decimal_len(BlockedBooking::TotalAmount, 12, 2).default(0))
                    .col(string_len(BlockedBooking::BillingStatus, 20).default("Unpaid"))
                    .col(
                        timestamp(BlockedBooking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(Expr::col(BlockedBooking::EndDate).gt(Expr::col(BlockedBooking::StartDate)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_booking_company_id")
                            .from(BlockedBooking::Table, BlockedBooking::CompanyId)
                            .to(TravelCompany::Table, TravelCompany::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_booking_branch_id")
                            .from(BlockedBooking::Table, BlockedBooking::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_booking_room_type_id")
                            .from(BlockedBooking::Table, BlockedBooking::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockedBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlockedBooking {
    Table,
    Id,
    CompanyId,
    BranchId,
    RoomTypeId,
    StartDate,
    EndDate,
    NumberOfRooms,
    RoomCharge,
    DiscountAmount,
    TaxAmount,
    TotalAmount,
    BillingStatus,
    CreatedAt,
}
