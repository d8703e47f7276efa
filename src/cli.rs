use clap::{Args, Parser, Subcommand};

use crate::db::{ClientFilter, ClientUpdate};
use crate::models::NewClient;

/// Manage clients and their phone numbers in PostgreSQL.
///
/// The connection is read from `DATABASE_URL` (a `.env` file is honoured).
/// Without a command the demonstration script runs.
#[derive(Parser, Debug)]
#[command(name = "client_manager", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the scripted create/update/find/delete sequence
    Demo,
    /// Create the tables and exit
    Init,
    /// Add a client, optionally with phone numbers
    Add(AddArgs),
    /// Add a phone number to an existing client
    AddPhone { client_id: i32, phone: String },
    /// Change any of a client's name or email
    Update {
        client_id: i32,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Look clients up; every supplied filter must match
    Find(FindArgs),
    /// Remove one phone number of a client
    DeletePhone { client_id: i32, phone: String },
    /// Remove a client and all of its phone numbers
    Delete { client_id: i32 },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    /// Phone number; repeat for several
    #[arg(long = "phone")]
    pub phones: Vec<String>,
}

impl From<AddArgs> for NewClient {
    fn from(args: AddArgs) -> Self {
        NewClient::new(args.first_name, args.last_name, args.email).with_phones(args.phones)
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<UpdateArgs> for ClientUpdate {
    fn from(args: UpdateArgs) -> Self {
        ClientUpdate {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
        }
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct FindArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<FindArgs> for ClientFilter {
    fn from(args: FindArgs) -> Self {
        ClientFilter {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
        }
    }
}
