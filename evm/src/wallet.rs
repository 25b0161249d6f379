use crate::{WsClient, EVENT_CHANNEL_SIZE};
use anyhow::{Context, Error};
use async_trait::async_trait;
use ethers::providers::{JsonRpcClient, Middleware, Provider, ProviderError, RpcError, Ws};
use log::{debug, info, warn};
use primitives::*;
use std::{sync::Arc, time::Duration};
use system::errors::ProviderRpcError;
use tokio::{sync::broadcast, task::JoinHandle};
use traits::wallet_provider::{ProviderEvent, WalletProvider};

/// JSON-RPC code of a method the node does not implement
const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC code used for failures that carried no error response
const INTERNAL_ERROR: i64 = -32603;
const ACCOUNTS_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Wallet provider backed by a websocket JSON-RPC endpoint.
///
/// Nodes do not push `accountsChanged`/`chainChanged`, so a background task polls
/// `eth_accounts` and `eth_chainId` and emits the events on change.
pub struct EvmWallet {
	client: Arc<WsClient>,
	chain_id: ChainId,
	events: broadcast::Sender<ProviderEvent>,
	poller: JoinHandle<()>,
}

impl EvmWallet {
	pub async fn connect(url: &str) -> Result<EvmWallet, Error> {
		let client = Provider::<Ws>::connect(url).await.with_context(|| format!("Failed to connect to {url}"))?;
		let client = Arc::new(client);
		let chain_id = client.get_chainid().await.context("eth_chainId failed")?.as_u64();
		let accounts = client.get_accounts().await.unwrap_or_default();
		info!("Connected to {url}, chain {chain_id}");

		let (events, _) = broadcast::channel(EVENT_CHANNEL_SIZE);
		let poller = tokio::spawn(poll_wallet(client.clone(), events.clone(), chain_id, accounts));

		Ok(EvmWallet { client, chain_id, events, poller })
	}

	pub fn client(&self) -> Arc<WsClient> {
		self.client.clone()
	}

	pub fn chain_id(&self) -> ChainId {
		self.chain_id
	}
}

impl Drop for EvmWallet {
	fn drop(&mut self) {
		self.poller.abort();
	}
}

#[async_trait]
impl WalletProvider for EvmWallet {
	async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError> {
		request_accounts_from(&*self.client).await
	}

	async fn accounts(&self) -> Result<Vec<Address>, Error> {
		Ok(self.client.get_accounts().await?)
	}

	fn default_account(&self) -> Option<Address> {
		self.client.default_sender()
	}

	async fn gas_price(&self) -> Result<GasPrice, Error> {
		Ok(self.client.get_gas_price().await?)
	}

	fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
		let receiver = self.events.subscribe();
		let _ = self.events.send(ProviderEvent::Connect { chain_id: self.chain_id });
		receiver
	}
}

/// `eth_requestAccounts`, falling back to `eth_accounts` when the node does not know the method
pub(crate) async fn request_accounts_from<P: JsonRpcClient>(
	client: &Provider<P>,
) -> Result<Vec<Address>, ProviderRpcError> {
	match client.request::<_, Vec<Address>>("eth_requestAccounts", ()).await {
		Ok(accounts) => Ok(accounts),
		Err(e) => {
			let rpc_error = to_rpc_error(e);
			if rpc_error.code != METHOD_NOT_FOUND {
				return Err(rpc_error)
			}
			// plain nodes expose their unlocked accounts without a permission prompt
			debug!("eth_requestAccounts not supported, using eth_accounts");
			client.get_accounts().await.map_err(to_rpc_error)
		},
	}
}

pub(crate) fn to_rpc_error(e: ProviderError) -> ProviderRpcError {
	match e.as_error_response() {
		Some(response) => ProviderRpcError::new(response.code, response.message.clone()),
		None => ProviderRpcError::new(INTERNAL_ERROR, e.to_string()),
	}
}

/// Last accounts and chain seen by the poller
#[derive(Debug)]
pub(crate) struct WalletPoll {
	accounts: Vec<Address>,
	chain_id: ChainId,
	connected: bool,
}

impl WalletPoll {
	pub(crate) fn new(chain_id: ChainId, accounts: Vec<Address>) -> WalletPoll {
		WalletPoll { accounts, chain_id, connected: true }
	}

	/// Events for one `eth_accounts` result. `Disconnect` and `Connect` are only
	/// emitted when the connection state flips.
	pub(crate) fn accounts_polled(
		&mut self,
		polled: Result<Vec<Address>, ProviderRpcError>,
	) -> Vec<ProviderEvent> {
		let mut events = vec![];
		match polled {
			Ok(current) => {
				if !self.connected {
					info!("Wallet reachable again on chain {}", self.chain_id);
					self.connected = true;
					events.push(ProviderEvent::Connect { chain_id: self.chain_id });
				}
				if current != self.accounts {
					self.accounts = current;
					events.push(ProviderEvent::AccountsChanged(self.accounts.clone()));
				}
			},
			Err(e) => {
				warn!("eth_accounts poll failed: {e}");
				if self.connected {
					self.connected = false;
					events.push(ProviderEvent::Disconnect(e));
				}
			},
		}
		events
	}

	pub(crate) fn chain_polled(&mut self, chain_id: ChainId) -> Option<ProviderEvent> {
		if chain_id == self.chain_id {
			return None
		}
		self.chain_id = chain_id;
		Some(ProviderEvent::ChainChanged(chain_id))
	}

	pub(crate) fn connected(&self) -> bool {
		self.connected
	}
}

async fn poll_wallet(
	client: Arc<WsClient>,
	events: broadcast::Sender<ProviderEvent>,
	chain_id: ChainId,
	accounts: Vec<Address>,
) {
	let mut poll = WalletPoll::new(chain_id, accounts);
	let mut interval = tokio::time::interval(ACCOUNTS_POLL_INTERVAL);
	loop {
		interval.tick().await;

		let polled = client.get_accounts().await.map_err(to_rpc_error);
		for event in poll.accounts_polled(polled) {
			let _ = events.send(event);
		}
		if !poll.connected() {
			continue
		}

		match client.get_chainid().await {
			Ok(current) => {
				if let Some(event) = poll.chain_polled(current.as_u64()) {
					let _ = events.send(event);
				}
			},
			Err(e) => warn!("eth_chainId poll failed: {e:?}"),
		}
	}
}
