//! Create `food_availability` table mapping foods onto days.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodAvailability::Id))
                    .col(integer(FoodAvailability::FoodId).not_null())
                    .col(integer(FoodAvailability::DayId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_availability_food")
                            .from(FoodAvailability::Table, FoodAvailability::FoodId)
                            .to(Food::Table, Food::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_availability_day")
                            .from(FoodAvailability::Table, FoodAvailability::DayId)
                            .to(Day::Table, Day::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoodAvailability {
    #[sea_orm(iden = "food_availability")]
    Table,
    Id,
    FoodId,
    DayId,
}

#[derive(DeriveIden)]
enum Food {
    #[sea_orm(iden = "foods")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Day {
    #[sea_orm(iden = "days")]
    Table,
    Id,
}
