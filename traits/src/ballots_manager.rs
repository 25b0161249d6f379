use crate::transaction::{CreatedBallot, TxOptions};
use anyhow::Error;
use async_trait::async_trait;
use primitives::*;
use tokio::sync::mpsc;

/// Registry contract tracking every ballot
#[async_trait]
pub trait BallotsManagerContract: Send + Sync {
	async fn create_ballot(
		&self,
		options: TxOptions,
		title: &str,
		description: &str,
	) -> Result<CreatedBallot, Error>;
	/// Returns the page of addresses starting at `start_at`
	async fn paginate_ballots(&self, from: Address, start_at: u64) -> Result<Vec<Address>, Error>;
	async fn ballot_id_address_map(&self, from: Address, id: BallotId) -> Result<Address, Error>;
	async fn current_ballot_id_array_like_length(&self, from: Address) -> Result<u64, Error>;
	/// Ids carried by `NewBallot` events. The subscription ends when the receiver is dropped.
	async fn subscribe_new_ballots(&self) -> Result<mpsc::Receiver<BallotId>, Error>;
}
