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
                    .table(ReservationPaymentDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationPaymentDetails::Id))
                    .col(integer_uniq(ReservationPaymentDetails::ReservationId))
                    .col(string(ReservationPaymentDetails::CardType))
                    .col(string_len(ReservationPaymentDetails::CardLastFour, 4))
                    .col(integer(ReservationPaymentDetails::CardExpMonth))
                    .col(integer(ReservationPaymentDetails::CardExpYear))
                    .col(
                        timestamp(ReservationPaymentDetails::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_payment_details_reservation_id")
                            .from(
                                ReservationPaymentDetails::Table,
                                ReservationPaymentDetails::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReservationPaymentDetails::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationPaymentDetails {
    Table,
    Id,
    ReservationId,
    CardType,
    CardLastFour,
    CardExpMonth,
    CardExpYear,
    CreatedAt,
}
