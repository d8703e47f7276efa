//! Shared helpers for the database-backed tests.
//!
//! The tests run against the PostgreSQL named by `TEST_DATABASE_URL`. When the
//! variable is not set they return early, so `cargo test` stays green on
//! machines without a database.

use std::sync::atomic::{AtomicU64, Ordering};

use client_manager::{db, logging};
use sqlx::{Connection, PgConnection};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Connect to the test database and make sure the schema exists.
pub async fn connect() -> Option<PgConnection> {
    logging::init_test();
    dotenvy::dotenv().ok();

    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping database test");
        return None;
    };

    let mut conn = PgConnection::connect(&url)
        .await
        .expect("failed to connect to TEST_DATABASE_URL");
    db::create_db(&mut conn).await.expect("failed to create schema");
    Some(conn)
}

/// A 12 digit token that differs between calls and between test runs.
pub fn token() -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .expect("timestamp out of range") as u64;
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:012}", nanos.wrapping_add(n.wrapping_mul(7_919)) % 1_000_000_000_000)
}

pub fn email(tag: &str, token: &str) -> String {
    format!("{tag}-{token}@example.com")
}

/// A phone number unique to `token`; `n` distinguishes phones of one client.
pub fn phone(token: &str, n: u8) -> String {
    format!("+{n}{token}")
}
