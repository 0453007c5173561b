use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Ensure models prefer env over config file
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { db };
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_missing_user_is_404_with_detail() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client()
        .get(format!("{}/users/999999999", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["detail"], "User not found");
    Ok(())
}

#[tokio::test]
async fn e2e_user_crud_roundtrip() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();
    let username = format!("bob_{}", Uuid::new_v4());
    let email = format!("{}@example.com", username);

    let res = c
        .post(format!("{}/users", app.base_url))
        .json(&json!({"username": username, "email": email, "password": "pw"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: serde_json::Value = res.json().await?;
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["username"], username.as_str());
    // Password never comes back over the wire
    assert!(created.get("hashed_password").is_none());

    // Partial update: only email changes
    let new_email = format!("new_{}", email);
    let res = c
        .put(format!("{}/users/{}", app.base_url, id))
        .json(&json!({"email": new_email}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: serde_json::Value = res.json().await?;
    assert_eq!(updated["email"], new_email.as_str());
    assert_eq!(updated["username"], username.as_str());

    let res = c.delete(format!("{}/users/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let deleted: serde_json::Value = res.json().await?;
    assert_eq!(deleted["id"], id);

    let res = c.get(format!("{}/users/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_day_food_availability_chain() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c
        .post(format!("{}/users", app.base_url))
        .json(&json!({
            "username": format!("cook_{}", Uuid::new_v4()),
            "email": format!("cook_{}@example.com", Uuid::new_v4()),
            "password": "pw"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let user: serde_json::Value = res.json().await?;
    let user_id = user["id"].as_i64().unwrap();

    let res = c
        .post(format!("{}/days", app.base_url))
        .json(&json!({"name": format!("Monday_{}", Uuid::new_v4())}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let day: serde_json::Value = res.json().await?;
    let day_id = day["id"].as_i64().unwrap();

    let res = c
        .post(format!("{}/foods", app.base_url))
        .json(&json!({
            "name": "Soup",
            "price": 5.0,
            "creator_id": user_id,
            "day_id": day_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let food: serde_json::Value = res.json().await?;
    let food_id = food["id"].as_i64().unwrap();
    assert_eq!(food["price"], 5.0);
    assert!(food["description"].is_null());

    let res = c
        .post(format!("{}/food_availabilities", app.base_url))
        .json(&json!({"food_id": food_id, "day_id": day_id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let slot: serde_json::Value = res.json().await?;
    let slot_id = slot["id"].as_i64().unwrap();

    let res = c
        .get(format!("{}/food_availabilities/{}", app.base_url, slot_id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched: serde_json::Value = res.json().await?;
    assert_eq!(fetched["food_id"], food_id);
    assert_eq!(fetched["day_id"], day_id);

    // Duplicate (food_id, day_id) slot violates the unique index -> 500
    let res = c
        .post(format!("{}/food_availabilities", app.base_url))
        .json(&json!({"food_id": food_id, "day_id": day_id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["detail"], "Internal Server Error");

    // Vote: create, then flip its value; subject stays put
    let res = c
        .post(format!("{}/votes", app.base_url))
        .json(&json!({"user_id": user_id, "food_id": food_id, "vote_value": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let vote: serde_json::Value = res.json().await?;
    let vote_id = vote["id"].as_i64().unwrap();

    let res = c
        .put(format!("{}/votes/{}", app.base_url, vote_id))
        .json(&json!({"vote_value": -1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let flipped: serde_json::Value = res.json().await?;
    assert_eq!(flipped["vote_value"], -1);
    assert_eq!(flipped["user_id"], user_id);
    assert_eq!(flipped["food_id"], food_id);

    // Cleanup via the API; food cascade removes the vote and the slot
    let res = c.delete(format!("{}/foods/{}", app.base_url, food_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/votes/{}", app.base_url, vote_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    c.delete(format!("{}/days/{}", app.base_url, day_id)).send().await?;
    c.delete(format!("{}/users/{}", app.base_url, user_id)).send().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_negative_price_is_rejected() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client()
        .post(format!("{}/foods", app.base_url))
        .json(&json!({"name": "Bad", "price": -1.0, "creator_id": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
