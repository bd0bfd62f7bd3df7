use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelCompany::Table)
                    .if_not_exists()
                    .col(pk_auto(TravelCompany::Id))
                    .col(string(TravelCompany::CompanyName))
                    .col(string(TravelCompany::ContactPerson))
                    .col(string_uniq(TravelCompany::Email))
                    .col(string(TravelCompany::Phone))
                    .col(decimal_len(TravelCompany::DiscountRate, 5, 2).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelCompany::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TravelCompany {
    Table,
    Id,
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    DiscountRate,
}
