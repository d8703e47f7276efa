mod client;
mod client_row;
mod phone;

pub use client::{Client, NewClient};
pub use client_row::ClientRow;
pub use phone::Phone;
