pub mod bindings;
mod ballot;
mod ballots_manager;
mod tests;
mod wallet;

pub use ballot::{EvmBallot, EvmBallotFactory};
pub use ballots_manager::EvmBallotsManager;
pub use wallet::EvmWallet;

use ethers::providers::{Provider, Ws};
use system::errors::ClientError;

/// Websocket JSON-RPC client shared by the wallet and the contract bindings
pub type WsClient = Provider<Ws>;

/// Buffered events per subscription before the forwarder waits on the consumer
pub(crate) const EVENT_CHANNEL_SIZE: usize = 64;

pub(crate) fn contract_error(method: &str, e: impl std::fmt::Display) -> ClientError {
	ClientError::ContractCallFailed(format!("{method}: {e}"))
}
