pub mod ballot;
pub mod ballots_manager;
pub mod notifier;
pub mod permission_store;
pub mod transaction;
pub mod wallet_provider;
