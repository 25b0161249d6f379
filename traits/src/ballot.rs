use crate::transaction::TxOptions;
use anyhow::Error;
use async_trait::async_trait;
use primitives::*;
use std::sync::Arc;
use system::ballot::{BallotData, VotingResults};
use tokio::sync::mpsc;

#[async_trait]
pub trait BallotContract: Send + Sync {
	fn address(&self) -> Address;
	async fn get_data(&self, from: Address) -> Result<BallotData, Error>;
	async fn cast_accept_vote(&self, options: TxOptions) -> Result<TransactionHash, Error>;
	async fn cast_reject_vote(&self, options: TxOptions) -> Result<TransactionHash, Error>;
	/// Tallies carried by `VoteCast` events. The subscription ends when the receiver is dropped.
	async fn subscribe_vote_cast(&self) -> Result<mpsc::Receiver<VotingResults>, Error>;
}

pub trait BallotContractFactory: Send + Sync {
	fn instantiate_ballot(&self, address: Address) -> Arc<dyn BallotContract>;
}
