//! Create `votes` table with FKs to `users` and `foods`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::UserId).not_null())
                    .col(integer(Vote::FoodId).not_null())
                    .col(integer(Vote::VoteValue).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_food")
                            .from(Vote::Table, Vote::FoodId)
                            .to(Food::Table, Food::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vote::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vote {
    #[sea_orm(iden = "votes")]
    Table,
    Id,
    UserId,
    FoodId,
    VoteValue,
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Food {
    #[sea_orm(iden = "foods")]
    Table,
    Id,
}
