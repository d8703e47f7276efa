mod query;

use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::models::{Client, ClientRow, NewClient, Phone};

pub use query::{find_query, update_query, ClientFilter, ClientUpdate, FilterField, UpdateField};

/// Key of the transaction-scoped advisory lock taken while creating tables,
/// so that concurrent initializers do not race on the catalog.
const SCHEMA_LOCK_KEY: i64 = 0x636c_6965_6e74;

const CREATE_CLIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS clients (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50) NOT NULL,
        email VARCHAR(100) UNIQUE NOT NULL
    )
"#;

const CREATE_PHONES: &str = r#"
    CREATE TABLE IF NOT EXISTS phones (
        id SERIAL PRIMARY KEY,
        client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
        phone VARCHAR(20) UNIQUE NOT NULL
    )
"#;

/// Open the single connection every operation runs on.
pub async fn connect(config: &Config) -> Result<PgConnection> {
    let conn = PgConnection::connect(config.database_url()).await?;
    info!("database connection established");

    Ok(conn)
}

/// Create the `clients` and `phones` tables if they do not exist yet.
pub async fn create_db(conn: &mut PgConnection) -> Result<()> {
    let mut tx = conn.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(CREATE_CLIENTS).execute(&mut *tx).await?;
    sqlx::query(CREATE_PHONES).execute(&mut *tx).await?;

    tx.commit().await?;
    info!("schema ready");

    Ok(())
}

/// Insert a client together with its phones and return the new id.
///
/// Runs in one transaction: a duplicate email or phone leaves nothing behind.
pub async fn create_client(conn: &mut PgConnection, client: &NewClient) -> Result<i32> {
    let mut tx = conn.begin().await?;

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO clients (first_name, last_name, email)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&client.first_name)
    .bind(&client.last_name)
    .bind(&client.email)
    .fetch_one(&mut *tx)
    .await?;

    for phone in &client.phones {
        insert_phone(&mut *tx, id, phone).await?;
    }

    tx.commit().await?;
    debug!(client_id = id, phones = client.phones.len(), "client created");

    Ok(id)
}

pub async fn add_phone(conn: &mut PgConnection, client_id: i32, phone: &str) -> Result<()> {
    insert_phone(conn, client_id, phone).await?;
    debug!(client_id, phone, "phone added");

    Ok(())
}

async fn insert_phone(conn: &mut PgConnection, client_id: i32, phone: &str) -> Result<()> {
    sqlx::query("INSERT INTO phones (client_id, phone) VALUES ($1, $2)")
        .bind(client_id)
        .bind(phone)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Apply the supplied field changes and return the number of rows touched.
pub async fn update_client(
    conn: &mut PgConnection,
    client_id: i32,
    update: &ClientUpdate,
) -> Result<u64> {
    let Some(mut query) = update_query(client_id, update) else {
        debug!(client_id, "nothing to update");
        return Ok(0);
    };

    let rows = query.build().execute(&mut *conn).await?.rows_affected();
    debug!(client_id, rows, "client updated");

    Ok(rows)
}

/// Remove one phone of a client. A pair that does not exist removes nothing.
pub async fn delete_phone(conn: &mut PgConnection, client_id: i32, phone: &str) -> Result<u64> {
    let rows = sqlx::query("DELETE FROM phones WHERE client_id = $1 AND phone = $2")
        .bind(client_id)
        .bind(phone)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    debug!(client_id, phone, rows, "phone deleted");

    Ok(rows)
}

/// Remove a client; its phones go with it through the cascade.
pub async fn delete_client(conn: &mut PgConnection, client_id: i32) -> Result<u64> {
    let rows = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(client_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    debug!(client_id, rows, "client deleted");

    Ok(rows)
}

pub async fn find_client(conn: &mut PgConnection, filter: &ClientFilter) -> Result<Vec<ClientRow>> {
    let mut query = find_query(filter);
    let rows = query
        .build_query_as::<ClientRow>()
        .fetch_all(&mut *conn)
        .await?;
    debug!(rows = rows.len(), "clients found");

    Ok(rows)
}

pub async fn get_client(conn: &mut PgConnection, client_id: i32) -> Result<Option<Client>> {
    let client = sqlx::query_as::<_, Client>(
        "SELECT id, first_name, last_name, email FROM clients WHERE id = $1",
    )
    .bind(client_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(client)
}

pub async fn list_phones(conn: &mut PgConnection, client_id: i32) -> Result<Vec<Phone>> {
    let phones = sqlx::query_as::<_, Phone>(
        "SELECT id, client_id, phone FROM phones WHERE client_id = $1 ORDER BY id ASC",
    )
    .bind(client_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(phones)
}
