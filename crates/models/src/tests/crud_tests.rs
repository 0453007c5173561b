use crate::{category, day, db, food, food_availability, user, vote};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Setup test database with migrations; None when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match db::connect().await {
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

#[tokio::test]
async fn test_day_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let day_name = format!("test_day_{}", Uuid::new_v4());
    let created = day::create(&db, &day_name).await?;
    assert_eq!(created.name, day_name);

    let found = day::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|d| d.id), Some(created.id));

    // Unique name constraint
    assert!(day::create(&db, &day_name).await.is_err());

    day::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let username = format!("user_{}", Uuid::new_v4());
    let email = format!("{}@example.com", username);
    let created = user::create(&db, &username, &email, "plaintext").await?;
    assert_eq!(created.username, username);
    assert_eq!(created.email, email);
    assert_eq!(created.hashed_password, "plaintext");

    // Duplicate username rejected by the unique constraint
    let other_email = format!("other_{}@example.com", Uuid::new_v4());
    assert!(user::create(&db, &username, &other_email, "x").await.is_err());

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_food_with_relations() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let creator = user::create(
        &db,
        &format!("cook_{}", Uuid::new_v4()),
        &format!("cook_{}@example.com", Uuid::new_v4()),
        "pw",
    )
    .await?;
    let monday = day::create(&db, &format!("day_{}", Uuid::new_v4())).await?;
    let soups = category::create(&db, &format!("cat_{}", Uuid::new_v4())).await?;

    let soup = food::create(
        &db,
        "Soup",
        5.0,
        Some("hot".into()),
        creator.id,
        Some(monday.id),
        Some(soups.id),
    )
    .await?;
    assert_eq!(soup.creator_id, creator.id);
    assert_eq!(soup.day_id, Some(monday.id));

    let slot = food_availability::create(&db, soup.id, monday.id).await?;
    assert_eq!(slot.food_id, soup.id);

    // Second identical slot violates the unique (food_id, day_id) index
    assert!(food_availability::create(&db, soup.id, monday.id).await.is_err());

    let v = vote::create(&db, creator.id, soup.id, 1).await?;
    assert_eq!(v.vote_value, 1);

    // Cascades clean up availability and votes
    food::Entity::delete_by_id(soup.id).exec(&db).await?;
    assert!(food_availability::Entity::find_by_id(slot.id).one(&db).await?.is_none());
    user::Entity::delete_by_id(creator.id).exec(&db).await?;
    day::Entity::delete_by_id(monday.id).exec(&db).await?;
    category::Entity::delete_by_id(soups.id).exec(&db).await?;
    Ok(())
}
