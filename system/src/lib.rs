pub mod ballot;
pub mod ballot_state;
pub mod config;
pub mod connection;
pub mod errors;
pub mod notification;

mod tests;
