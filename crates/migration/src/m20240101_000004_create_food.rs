//! Create `foods` table with FKs to `users`, `days`, and `categories`.
//!
//! `day_id` and `category_id` are optional; a food may exist without being
//! scheduled or categorized.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(pk_auto(Food::Id))
                    .col(string_len(Food::Name, 255).not_null())
                    .col(double(Food::Price).not_null())
                    .col(string_null(Food::Description))
                    .col(integer(Food::CreatorId).not_null())
                    .col(integer_null(Food::DayId))
                    .col(integer_null(Food::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_creator")
                            .from(Food::Table, Food::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_day")
                            .from(Food::Table, Food::DayId)
                            .to(Day::Table, Day::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_category")
                            .from(Food::Table, Food::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Food::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Food {
    #[sea_orm(iden = "foods")]
    Table,
    Id,
    Name,
    Price,
    Description,
    CreatorId,
    DayId,
    CategoryId,
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Day {
    #[sea_orm(iden = "days")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Category {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
}
