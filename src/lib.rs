//! Client contact management over PostgreSQL.
//!
//! Two tables, `clients` and `phones`, and a handful of async operations
//! that take the caller's connection explicitly:
//!
//! - [`db::create_db`] creates the schema.
//! - [`db::create_client`], [`db::update_client`], [`db::delete_client`],
//!   [`db::get_client`] manage clients.
//! - [`db::add_phone`], [`db::delete_phone`], [`db::list_phones`] manage
//!   phone numbers.
//! - [`db::find_client`] looks clients up by optional filters.

pub mod cli;
pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod logging;
pub mod models;

pub use error::{Error, Result};
