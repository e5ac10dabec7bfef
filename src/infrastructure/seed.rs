//! Demo data for a fresh database: one user and two ideas it owns.
use crate::application::ports::{ClockPort, PasswordHasherPort};
use crate::domain::user::UserRepository;
use anyhow::{Context, Result};
use sqlx::SqlitePool;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";

const DEMO_IDEAS: [(&str, &str); 2] = [
    ("First Idea", "An awesome concept"),
    ("Second Idea", "Another innovation"),
];

/// Seed the store when it has no users yet. Returns whether anything was
/// written. All rows go in one transaction so a failure leaves no partial
/// seed behind.
pub async fn seed_demo_data(
    pool: &SqlitePool,
    users: &dyn UserRepository,
    password_hasher: &PasswordHasherPort,
    clock: &ClockPort,
) -> Result<bool> {
    let existing = users.count().await.context("counting users")?;
    if existing > 0 {
        return Ok(false);
    }

    let password_hash = password_hasher
        .hash(DEMO_PASSWORD)
        .await
        .context("hashing demo password")?;
    let now = clock.now();

    let mut tx = pool.begin().await?;

    let owner_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(DEMO_USERNAME)
    .bind(&password_hash)
    .bind(now)
    .fetch_one(&mut *tx)
    .await
    .context("inserting demo user")?;

    for (title, description) in DEMO_IDEAS {
        sqlx::query(
            "INSERT INTO ideas (title, description, owner_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(owner_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("inserting demo idea '{title}'"))?;
    }

    tx.commit().await?;
    tracing::info!(username = DEMO_USERNAME, ideas = DEMO_IDEAS.len(), "seeded demo data");
    Ok(true)
}
