use anyhow::Result;
use clap::Parser;
use sqlx::PgConnection;

use client_manager::cli::{Cli, Command};
use client_manager::{config, db, demo, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::init()?;
    logging::init(config.log_filter());

    // Initialize database connection
    let mut conn = db::connect(&config).await?;
    db::create_db(&mut conn).await?;

    run(&mut conn, cli.command.unwrap_or(Command::Demo)).await
}

async fn run(conn: &mut PgConnection, command: Command) -> Result<()> {
    match command {
        Command::Demo => demo::run(conn).await?,
        Command::Init => println!("Schema ready"),
        Command::Add(args) => {
            let id = db::create_client(conn, &args.into()).await?;
            println!("Added client with ID {}", id);
        }
        Command::AddPhone { client_id, phone } => {
            db::add_phone(conn, client_id, &phone).await?;
            println!("Added phone {} for client {}", phone, client_id);
        }
        Command::Update { client_id, fields } => {
            let rows = db::update_client(conn, client_id, &fields.into()).await?;
            println!("Updated {} client(s)", rows);
        }
        Command::Find(args) => {
            let rows = db::find_client(conn, &args.into()).await?;
            if rows.is_empty() {
                println!("No clients found");
            }
            for row in rows {
                println!("{}", row);
            }
        }
        Command::DeletePhone { client_id, phone } => {
            let rows = db::delete_phone(conn, client_id, &phone).await?;
            println!("Deleted {} phone(s)", rows);
        }
        Command::Delete { client_id } => {
            let rows = db::delete_client(conn, client_id).await?;
            println!("Deleted {} client(s)", rows);
        }
    }

    Ok(())
}
