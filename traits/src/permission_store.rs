use anyhow::Error;

/// Small persistent key/value store, the client's local storage
pub trait PermissionStore: Send + Sync {
	fn get(&self, key: &str) -> Result<Option<String>, Error>;
	fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
