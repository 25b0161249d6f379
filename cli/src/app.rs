use crate::listing::viewed_item;
use anyhow::{anyhow, Error};
use ballots::{BallotItem, BallotsRegistry};
use evm::{EvmBallotFactory, EvmBallotsManager, EvmWallet, WsClient};
use log::{info, warn};
use primitives::*;
use std::sync::Arc;
use system::{config::Config, connection::Web3ConnectionStatus, errors::ClientError};
use traits::{notifier::Notifier, wallet_provider::WalletProvider};
use ui::LogNotifier;
use wallet::{FilePermissionStore, Web3Manager};

/// Everything a command needs, wired from the configuration
pub struct App {
	pub config: Config,
	pub web3: Web3Manager,
	pub notifier: Arc<dyn Notifier>,
	client: Option<Arc<WsClient>>,
}

impl App {
	pub async fn build(config: Config) -> Result<App, Error> {
		let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
		let permission_store = Arc::new(FilePermissionStore::new(config.permission_store_path.clone()));

		let wallet = match &config.provider_rpc {
			Some(url) => Some(Arc::new(EvmWallet::connect(url).await?)),
			None => None,
		};
		if let (Some(wallet), Some(expected)) = (&wallet, config.chain_id) {
			if wallet.chain_id() != expected {
				warn!("Wallet is on chain {}, configured chain is {expected}", wallet.chain_id());
			}
		}

		let client = wallet.as_ref().map(|wallet| wallet.client());
		let provider = wallet.map(|wallet| wallet as Arc<dyn WalletProvider>);
		let web3 = Web3Manager::new(provider, permission_store, notifier.clone(), config.wallet_install_url.clone());

		Ok(App { config, web3, notifier, client })
	}

	/// Reuses a stored permission when there is one, otherwise asks the wallet.
	/// `account_index` then picks among the wallet's accounts.
	pub async fn connect(&self, account_index: Option<usize>) -> Result<Address, Error> {
		let status = match self.web3.restore().await? {
			Some(status) => status,
			None => self.web3.connect().await?,
		};
		if status != Web3ConnectionStatus::Accepted {
			return Err(anyhow!("Wallet permission is {status}"))
		}

		if let Some(index) = account_index {
			self.web3.select_address_by_index(index).await?;
		}
		let account = self.web3.selected_account().await.ok_or(ClientError::NotConnected)?;
		info!("Using account {account:?}");
		Ok(account)
	}

	fn client(&self) -> Result<Arc<WsClient>, Error> {
		match &self.client {
			Some(client) => Ok(client.clone()),
			None => Err(ClientError::WalletNotInstalled(self.config.wallet_install_url.clone()).into()),
		}
	}

	pub fn ballots_manager(&self) -> Result<Arc<EvmBallotsManager>, Error> {
		Ok(Arc::new(EvmBallotsManager::new(self.config.ballots_manager_address, self.client()?)))
	}

	pub fn ballot_factory(&self) -> Result<Arc<EvmBallotFactory>, Error> {
		Ok(Arc::new(EvmBallotFactory::new(self.client()?)))
	}

	pub fn registry(&self) -> Result<BallotsRegistry, Error> {
		Ok(BallotsRegistry::new(self.ballots_manager()?, self.ballot_factory()?, self.config.pagination_size))
	}

	/// A ballot item ready to load, as if scrolled into view
	pub async fn ballot_item(&self, address: Address) -> Result<BallotItem, Error> {
		Ok(viewed_item(address, self.ballot_factory()?, self.notifier.clone()).await)
	}
}
