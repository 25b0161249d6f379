use anyhow::{anyhow, Error};
use log::{debug, error, info, warn};
use primitives::*;
use std::sync::{Arc, Mutex};
use system::{
	connection::{Web3ConnectionStatus, LOCAL_STORAGE_PERMISSION_KEY},
	errors::{ClientError, ProviderRpcError},
	notification::Notification,
};
use tokio::{
	sync::{broadcast::error::RecvError, RwLock},
	task::JoinHandle,
};
use traits::{
	notifier::Notifier,
	permission_store::PermissionStore,
	wallet_provider::{ProviderEvent, WalletProvider},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
	pub status: Web3ConnectionStatus,
	pub selected_account: Option<Address>,
	pub wallet_accounts: Vec<Address>,
}

/// Tracks wallet availability, permission and account selection
pub struct Web3Manager {
	provider: Option<Arc<dyn WalletProvider>>,
	permission_store: Arc<dyn PermissionStore>,
	notifier: Arc<dyn Notifier>,
	install_url: String,
	state: Arc<RwLock<ConnectionState>>,
	listener: Mutex<Option<JoinHandle<()>>>,
}

impl Web3Manager {
	pub fn new(
		provider: Option<Arc<dyn WalletProvider>>,
		permission_store: Arc<dyn PermissionStore>,
		notifier: Arc<dyn Notifier>,
		install_url: impl Into<String>,
	) -> Web3Manager {
		Web3Manager {
			provider,
			permission_store,
			notifier,
			install_url: install_url.into(),
			state: Arc::new(RwLock::new(ConnectionState::default())),
			listener: Mutex::new(None),
		}
	}

	pub fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
		self.provider.clone()
	}

	pub async fn status(&self) -> Web3ConnectionStatus {
		self.state.read().await.status
	}

	pub async fn selected_account(&self) -> Option<Address> {
		self.state.read().await.selected_account
	}

	pub async fn wallet_accounts(&self) -> Vec<Address> {
		self.state.read().await.wallet_accounts.clone()
	}

	pub async fn snapshot(&self) -> ConnectionState {
		self.state.read().await.clone()
	}

	/// Asks the wallet for account access.
	///
	/// A user rejection and a still pending request are reported through the
	/// returned status; a missing wallet and unexpected failures are errors.
	pub async fn connect(&self) -> Result<Web3ConnectionStatus, Error> {
		let provider = match &self.provider {
			Some(provider) => provider.clone(),
			None => {
				self.fire_install_wallet_warn();
				return Err(ClientError::WalletNotInstalled(self.install_url.clone()).into())
			},
		};

		self.set_status(Web3ConnectionStatus::Connecting).await;

		if let Err(rpc_error) = provider.request_accounts().await {
			return self.handle_rpc_failure(rpc_error).await
		}

		let accounts = match provider.accounts().await {
			Ok(accounts) => accounts,
			Err(e) => return self.handle_failure(e).await,
		};

		{
			let mut state = self.state.write().await;
			// default account first, then the first available one, if any
			state.selected_account = provider.default_account().or_else(|| accounts.first().copied());
			state.wallet_accounts = accounts;
		}

		self.store_permission(Web3ConnectionStatus::Accepted);
		self.set_status(Web3ConnectionStatus::Accepted).await;
		self.listen(provider.as_ref());

		info!("Wallet connected, selected account {:?}", self.selected_account().await);
		Ok(Web3ConnectionStatus::Accepted)
	}

	/// Silent reconnection: only a previously accepted permission reconnects.
	pub async fn restore(&self) -> Result<Option<Web3ConnectionStatus>, Error> {
		if self.status().await != Web3ConnectionStatus::None {
			return Ok(None)
		}

		let stored = match self.permission_store.get(LOCAL_STORAGE_PERMISSION_KEY) {
			Ok(value) => value.and_then(|v| Web3ConnectionStatus::from_stored(&v)),
			Err(e) => {
				warn!("Failed to read stored wallet permission: {e:?}");
				None
			},
		};

		if stored != Some(Web3ConnectionStatus::Accepted) {
			debug!("No accepted wallet permission stored ({stored:?}), not reconnecting");
			return Ok(None)
		}

		self.connect().await.map(Some)
	}

	pub async fn select_address_by_index(&self, index: usize) -> Result<Address, Error> {
		let mut state = self.state.write().await;
		let available = state.wallet_accounts.len();
		let selected = *state
			.wallet_accounts
			.get(index)
			.ok_or(ClientError::AccountIndexOutOfRange { index, available })?;
		state.selected_account = Some(selected);
		Ok(selected)
	}

	pub async fn handle_provider_event(&self, event: ProviderEvent) {
		apply_provider_event(&self.state, event).await
	}

	fn listen(&self, provider: &dyn WalletProvider) {
		let mut events = provider.subscribe();
		let state = self.state.clone();

		let handle = tokio::spawn(async move {
			loop {
				match events.recv().await {
					Ok(event) => apply_provider_event(&state, event).await,
					Err(RecvError::Lagged(skipped)) => warn!("Wallet listener skipped {skipped} events"),
					Err(RecvError::Closed) => break,
				}
			}
			debug!("Wallet event stream closed");
		});

		match self.listener.lock() {
			Ok(mut listener) => {
				if let Some(previous) = listener.replace(handle) {
					previous.abort();
				}
			},
			Err(_) => {
				error!("Wallet listener lock poisoned");
				handle.abort();
			},
		}
	}

	async fn handle_rpc_failure(&self, rpc_error: ProviderRpcError) -> Result<Web3ConnectionStatus, Error> {
		if rpc_error.is_request_pending() {
			info!("Wallet permission request already pending: {}", rpc_error.message);
			return Ok(self.status().await)
		}

		if rpc_error.is_user_rejection() {
			info!("Wallet permission rejected by the user");
			self.set_status(Web3ConnectionStatus::Rejected).await;
			self.store_permission(Web3ConnectionStatus::Rejected);
			return Ok(Web3ConnectionStatus::Rejected)
		}

		self.handle_failure(rpc_error.into()).await
	}

	async fn handle_failure(&self, e: Error) -> Result<Web3ConnectionStatus, Error> {
		error!("Failed to load web3 or accounts: {e:?}");
		self.set_status(Web3ConnectionStatus::None).await;
		self.store_permission(Web3ConnectionStatus::None);
		self.notifier.notify(Notification::error("Wallet connection failed", e.to_string()));
		Err(anyhow!("Failed to connect to the wallet: {e}"))
	}

	fn fire_install_wallet_warn(&self) {
		warn!("No wallet provider available, install one from {}", self.install_url);
		self.notifier.notify(Notification::warning(
			"Install MetaMask in order to use this app!",
			self.install_url.clone(),
		));
	}

	async fn set_status(&self, status: Web3ConnectionStatus) {
		self.state.write().await.status = status;
	}

	fn store_permission(&self, status: Web3ConnectionStatus) {
		if let Err(e) = self.permission_store.set(LOCAL_STORAGE_PERMISSION_KEY, &status.as_stored()) {
			warn!("Failed to store wallet permission {status}: {e:?}");
		}
	}
}

impl Drop for Web3Manager {
	fn drop(&mut self) {
		if let Ok(mut listener) = self.listener.lock() {
			if let Some(handle) = listener.take() {
				handle.abort();
			}
		}
	}
}

async fn apply_provider_event(state: &RwLock<ConnectionState>, event: ProviderEvent) {
	match event {
		ProviderEvent::AccountsChanged(accounts) => {
			let mut state = state.write().await;
			state.selected_account = accounts.first().copied();
			state.wallet_accounts = accounts;
			info!("Wallet accounts changed, selected account {:?}", state.selected_account);
		},
		ProviderEvent::Connect { chain_id } => info!("Wallet connected to chain {chain_id}"),
		ProviderEvent::ChainChanged(chain_id) => info!("Wallet chain changed to {chain_id}"),
		ProviderEvent::Disconnect(e) => warn!("Wallet disconnected: {e}"),
		ProviderEvent::Message { kind, data } => debug!("Wallet message {kind}: {data}"),
	}
}
