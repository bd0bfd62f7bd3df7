use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_branch_table::Branch,
    m20260101_000004_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::BranchId))
                    .col(integer(Reservation::CustomerId))
                    .col(date(Reservation::CheckInDate))
                    .col(date(Reservation::CheckOutDate))
                    .col(integer(Reservation::NumberOfOccupants))
                    .col(integer(Reservation::NumberOfRooms))
                    .col(string_len(Reservation::PaymentStatus, 20).default("Pending"))
                    .col(string_len(Reservation::ReservationStatus, 20).default("No_show"))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(Expr::col(Reservation::CheckOutDate).gt(Expr::col(Reservation::CheckInDate)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_branch_id")
                            .from(Reservation::Table, Reservation::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer_id")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_dates")
                    .table(Reservation::Table)
                    .col(Reservation::CheckInDate)
                    .col(Reservation::CheckOutDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    BranchId,
    CustomerId,
    CheckInDate,
    CheckOutDate,
    NumberOfOccupants,
    NumberOfRooms,
    PaymentStatus,
    ReservationStatus,
    CreatedAt,
}
