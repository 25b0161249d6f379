use anyhow::Error;
use async_trait::async_trait;
use primitives::*;
use system::errors::ProviderRpcError;
use tokio::sync::broadcast;

/// Events a wallet provider emits, following EIP-1193
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
	AccountsChanged(Vec<Address>),
	ChainChanged(ChainId),
	Connect { chain_id: ChainId },
	Disconnect(ProviderRpcError),
	Message { kind: String, data: String },
}

#[async_trait]
pub trait WalletProvider: Send + Sync {
	/// `eth_requestAccounts`: asks the user to grant account access
	async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError>;
	async fn accounts(&self) -> Result<Vec<Address>, Error>;
	fn default_account(&self) -> Option<Address>;
	async fn gas_price(&self) -> Result<GasPrice, Error>;
	fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}
