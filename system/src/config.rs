use crate::errors::ClientError;
use anyhow::{anyhow, Error};
use primitives::{Address, ChainId};
use serde::{Deserialize, Serialize};
use std::{
	fmt,
	fs::read_to_string,
	path::{Path, PathBuf},
	sync::Arc,
};
use tokio::sync::RwLock;

/// Cached configuration
lazy_static::lazy_static! {
	pub static ref CACHED_CONFIG: Arc<RwLock<Option<Arc<Config>>>> = Arc::new(RwLock::new(None));
}

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_PAGINATION_SIZE: u64 = 5;
pub const DEFAULT_WALLET_INSTALL_URL: &str =
	"https://chromewebstore.google.com/detail/metamask/nkbihfbeogaeaoehlefnkodbefgpgknn?hl=en";

fn default_pagination_size() -> u64 {
	DEFAULT_PAGINATION_SIZE
}

fn default_permission_store_path() -> PathBuf {
	PathBuf::from(".ballot-voter/permission.json")
}

fn default_wallet_install_url() -> String {
	DEFAULT_WALLET_INSTALL_URL.to_string()
}

/// Startup configuration of the ballot client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	/// Websocket endpoint of the wallet provider. Absent means no wallet is installed.
	pub provider_rpc: Option<String>,
	pub ballots_manager_address: Address,
	pub chain_id: Option<ChainId>,
	#[serde(default = "default_permission_store_path")]
	pub permission_store_path: PathBuf,
	#[serde(default = "default_pagination_size")]
	pub pagination_size: u64,
	#[serde(default = "default_wallet_install_url")]
	pub wallet_install_url: String,
}

impl Config {
	/// Create a new configuration instance and store it in CACHED_CONFIG.
	pub async fn new(config: Config) {
		let mut lock = CACHED_CONFIG.write().await;
		*lock = Some(Arc::new(config));
	}

	pub async fn get_config() -> Result<Config, Error> {
		let lock = CACHED_CONFIG.read().await;
		if let Some(config) = &*lock {
			Ok(<Config as Clone>::clone(&(*Arc::clone(config))))
		} else {
			Err(anyhow!("Config not initialized!"))
		}
	}

	pub fn load(config_path: &Path) -> Result<Config, Error> {
		match read_to_string(config_path) {
			Ok(contents) => Self::from_toml_str(&contents)
				.map_err(|e| anyhow!("Could not parse '{}': {:?}", config_path.to_string_lossy(), e)),
			Err(e) => Err(anyhow!("Could not read '{}': {:?}", config_path.to_string_lossy(), e)),
		}
	}

	pub fn from_toml_str(contents: &str) -> Result<Config, Error> {
		let config = toml::from_str::<Config>(contents)?;
		if config.pagination_size == 0 {
			return Err(ClientError::ConfigError("pagination_size must be greater than zero".to_string()).into())
		}
		Ok(config)
	}
}

impl fmt::Display for Config {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}", self)
	}
}
