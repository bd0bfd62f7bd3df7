use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomType::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomType::Id))
                    .col(string_uniq(RoomType::TypeName))
                    .col(text_null(RoomType::Description))
                    .col(decimal_len(RoomType::BasePrice, 10, 2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomType {
    Table,
    Id,
    TypeName,
    Description,
    BasePrice,
}
