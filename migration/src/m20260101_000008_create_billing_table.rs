use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000006_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billing::Table)
                    .if_not_exists()
                    .col(pk_auto(Billing::Id))
                    .col(integer_uniq(Billing::ReservationId))
                    .col(decimal_len(Billing::TotalAmount, 12, 2).default(0))
                    .col(decimal_len(Billing::TaxAmount, 12, 2).default(0))
                    .col(decimal_len(Billing::OtherCharges, 12, 2).default(0))
                    .col(date(Billing::BillingDate))
                    .col(string_len(Billing::Status, 20).default("Unpaid"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_reservation_id")
                            .from(Billing::Table, Billing::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_billing_billing_date")
                    .table(Billing::Table)
                    .col(Billing::BillingDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Billing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Billing {
    Table,
    Id,
    ReservationId,
    TotalAmount,
    TaxAmount,
    OtherCharges,
    BillingDate,
    Status,
}
