use anyhow::{anyhow, Context, Error};
use std::{
	collections::BTreeMap,
	fs,
	path::{Path, PathBuf},
	sync::Mutex,
};
use traits::permission_store::PermissionStore;

/// JSON file of string entries
pub struct FilePermissionStore {
	path: PathBuf,
	lock: Mutex<()>,
}

impl FilePermissionStore {
	pub fn new(path: impl Into<PathBuf>) -> FilePermissionStore {
		FilePermissionStore { path: path.into(), lock: Mutex::new(()) }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_entries(&self) -> Result<BTreeMap<String, String>, Error> {
		if !self.path.exists() {
			return Ok(BTreeMap::new())
		}
		let contents = fs::read_to_string(&self.path)
			.with_context(|| format!("Failed to read {}", self.path.to_string_lossy()))?;
		if contents.trim().is_empty() {
			return Ok(BTreeMap::new())
		}
		serde_json::from_str(&contents)
			.with_context(|| format!("Failed to deserialize {}", self.path.to_string_lossy()))
	}
}

impl PermissionStore for FilePermissionStore {
	fn get(&self, key: &str) -> Result<Option<String>, Error> {
		let _guard = self.lock.lock().map_err(|_| anyhow!("permission store lock poisoned"))?;
		Ok(self.read_entries()?.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), Error> {
		let _guard = self.lock.lock().map_err(|_| anyhow!("permission store lock poisoned"))?;
		let mut entries = self.read_entries()?;
		entries.insert(key.to_string(), value.to_string());

		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}
		fs::write(&self.path, serde_json::to_string_pretty(&entries)?)
			.with_context(|| format!("Failed to write {}", self.path.to_string_lossy()))?;
		Ok(())
	}
}

#[derive(Default)]
pub struct MemoryPermissionStore {
	entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPermissionStore {
	pub fn new() -> MemoryPermissionStore {
		MemoryPermissionStore::default()
	}

	pub fn with_entry(key: &str, value: &str) -> MemoryPermissionStore {
		let store = MemoryPermissionStore::default();
		if let Ok(mut entries) = store.entries.lock() {
			entries.insert(key.to_string(), value.to_string());
		}
		store
	}
}

impl PermissionStore for MemoryPermissionStore {
	fn get(&self, key: &str) -> Result<Option<String>, Error> {
		let entries = self.entries.lock().map_err(|_| anyhow!("permission store lock poisoned"))?;
		Ok(entries.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), Error> {
		let mut entries = self.entries.lock().map_err(|_| anyhow!("permission store lock poisoned"))?;
		entries.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
