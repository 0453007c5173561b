//! Migrator registering entity-specific migrations in FK dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_day;
mod m20240101_000002_create_category;
mod m20240101_000003_create_user;
mod m20240101_000004_create_food;
mod m20240101_000005_create_food_availability;
mod m20240101_000006_create_vote;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_day::Migration),
            Box::new(m20240101_000002_create_category::Migration),
            Box::new(m20240101_000003_create_user::Migration),
            Box::new(m20240101_000004_create_food::Migration),
            Box::new(m20240101_000005_create_food_availability::Migration),
            Box::new(m20240101_000006_create_vote::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
