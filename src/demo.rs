use sqlx::PgConnection;

use crate::db::{self, ClientFilter, ClientUpdate};
use crate::error::Result;
use crate::models::NewClient;

/// The scripted walk through every operation, printing a status line after
/// each step. Expects the schema to exist already.
pub async fn run(conn: &mut PgConnection) -> Result<()> {
    let client = NewClient::new("Ivan", "Ivanov", "ivan@example.com").with_phones(["+79161234567"]);
    let client_id = db::create_client(conn, &client).await?;
    println!("Added client with ID {}", client_id);

    db::add_phone(conn, client_id, "+79161112233").await?;
    println!("Added phone for client");

    db::update_client(conn, client_id, &ClientUpdate::new().first_name("Petr")).await?;
    println!("Changed client first name");

    let found = db::find_client(conn, &ClientFilter::new().first_name("Petr")).await?;
    println!("Found clients:");
    for row in &found {
        println!("  {}", row);
    }

    db::delete_phone(conn, client_id, "+79161234567").await?;
    println!("Phone deleted");

    db::delete_client(conn, client_id).await?;
    println!("Client deleted");

    Ok(())
}
