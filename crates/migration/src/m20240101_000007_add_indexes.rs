//! Secondary indexes.
//!
//! One availability slot per (food, day) pair; the unique index makes the
//! domain rule a hard constraint instead of a convention.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("uq_food_availability_food_day")
                    .table(FoodAvailability::Table)
                    .col(FoodAvailability::FoodId)
                    .col(FoodAvailability::DayId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_food_creator")
                    .table(Food::Table)
                    .col(Food::CreatorId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_food")
                    .table(Vote::Table)
                    .col(Vote::FoodId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_user")
                    .table(Vote::Table)
                    .col(Vote::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uq_food_availability_food_day").table(FoodAvailability::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_food_creator").table(Food::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vote_food").table(Vote::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vote_user").table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoodAvailability {
    #[sea_orm(iden = "food_availability")]
    Table,
    FoodId,
    DayId,
}

#[derive(DeriveIden)]
enum Food {
    #[sea_orm(iden = "foods")]
    Table,
    CreatorId,
}

#[derive(DeriveIden)]
enum Vote {
    #[sea_orm(iden = "votes")]
    Table,
    UserId,
    FoodId,
}
