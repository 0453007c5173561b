#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect to the test database and bring the schema up to date.
/// Returns None when no database is reachable so DB-backed tests skip
/// instead of failing on developer machines without Postgres.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
