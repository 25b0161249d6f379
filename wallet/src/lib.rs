mod permission_store;
mod web3_manager;

pub use permission_store::{FilePermissionStore, MemoryPermissionStore};
pub use web3_manager::{ConnectionState, Web3Manager};
