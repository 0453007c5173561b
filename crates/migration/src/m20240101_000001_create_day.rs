//! Create `days` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Day::Table)
                    .if_not_exists()
                    .col(pk_auto(Day::Id))
                    .col(string_len(Day::Name, 64).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Day::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Day {
    #[sea_orm(iden = "days")]
    Table,
    Id,
    Name,
}
