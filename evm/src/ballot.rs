use crate::{
	bindings::ballot::{Ballot, BallotData as AbiBallotData, VoteCastFilter, VotingResults as AbiVotingResults},
	contract_error, WsClient, EVENT_CHANNEL_SIZE,
};
use anyhow::Error;
use async_trait::async_trait;
use ethers::providers::StreamExt;
use log::{debug, info, warn};
use primitives::*;
use std::sync::Arc;
use system::{
	ballot::{BallotData, RawVotingResults, VotingResults},
	errors::ClientError,
};
use tokio::sync::{mpsc, oneshot};
use traits::{
	ballot::{BallotContract, BallotContractFactory},
	transaction::TxOptions,
};

/// Single ballot contract reached through the websocket client
pub struct EvmBallot {
	contract: Ballot<WsClient>,
}

impl EvmBallot {
	pub fn new(address: Address, client: Arc<WsClient>) -> EvmBallot {
		EvmBallot { contract: Ballot::new(address, client) }
	}
}

fn raw_results(results: AbiVotingResults) -> RawVotingResults {
	RawVotingResults { accept: results.accept, reject: results.reject, total: results.total }
}

impl From<AbiBallotData> for BallotData {
	fn from(data: AbiBallotData) -> Self {
		BallotData {
			state: U256::from(data.state),
			can_vote: data.can_vote,
			created_at: data.created_at,
			closes_at: data.closes_at,
			is_creator: data.is_creator,
			title: data.title,
			description: data.description,
			results: raw_results(data.results),
		}
	}
}

#[async_trait]
impl BallotContract for EvmBallot {
	fn address(&self) -> Address {
		self.contract.address()
	}

	async fn get_data(&self, from: Address) -> Result<BallotData, Error> {
		let data = self.contract.get_data().from(from).call().await.map_err(|e| contract_error("getData", e))?;
		Ok(data.into())
	}

	async fn cast_accept_vote(&self, options: TxOptions) -> Result<TransactionHash, Error> {
		let call = self.contract.cast_accept_vote().from(options.from).gas_price(options.gas_price);
		let pending = call.send().await.map_err(|e| contract_error("castAcceptVote", e))?;
		let hash = pending.tx_hash();
		match pending.await? {
			Some(receipt) if receipt.status == Some(0u64.into()) =>
				Err(contract_error("castAcceptVote", format!("reverted in {hash:?}")).into()),
			Some(_) => Ok(hash),
			None => Err(contract_error("castAcceptVote", "transaction dropped from the mempool").into()),
		}
	}

	async fn cast_reject_vote(&self, options: TxOptions) -> Result<TransactionHash, Error> {
		let call = self.contract.cast_reject_vote().from(options.from).gas_price(options.gas_price);
		let pending = call.send().await.map_err(|e| contract_error("castRejectVote", e))?;
		let hash = pending.tx_hash();
		match pending.await? {
			Some(receipt) if receipt.status == Some(0u64.into()) =>
				Err(contract_error("castRejectVote", format!("reverted in {hash:?}")).into()),
			Some(_) => Ok(hash),
			None => Err(contract_error("castRejectVote", "transaction dropped from the mempool").into()),
		}
	}

	async fn subscribe_vote_cast(&self) -> Result<mpsc::Receiver<VotingResults>, Error> {
		let (sender, receiver) = mpsc::channel::<VotingResults>(EVENT_CHANNEL_SIZE);
		let (ready, subscribed) = oneshot::channel::<Result<(), String>>();
		let contract = self.contract.clone();

		tokio::spawn(async move {
			let event = contract.vote_cast_filter();
			let mut stream = match event.subscribe().await {
				Ok(stream) => {
					let _ = ready.send(Ok(()));
					stream
				},
				Err(e) => {
					let _ = ready.send(Err(e.to_string()));
					return
				},
			};

			loop {
				tokio::select! {
					_ = sender.closed() => break,
					next = stream.next() => match next {
						Some(Ok(VoteCastFilter { results })) => {
							if sender.send(raw_results(results).into()).await.is_err() {
								break
							}
						},
						Some(Err(e)) => warn!("Undecodable VoteCast log: {e:?}"),
						None => break,
					},
				}
			}
			debug!("VoteCast forwarder of {:?} stopped", contract.address());
		});

		subscribed
			.await
			.map_err(|_| ClientError::SubscriptionFailed("VoteCast forwarder stopped".to_string()))?
			.map_err(ClientError::SubscriptionFailed)?;
		info!("Subscribed to VoteCast of {:?}", self.contract.address());
		Ok(receiver)
	}
}

/// Instantiates ballot contracts on the shared client
pub struct EvmBallotFactory {
	client: Arc<WsClient>,
}

impl EvmBallotFactory {
	pub fn new(client: Arc<WsClient>) -> EvmBallotFactory {
		EvmBallotFactory { client }
	}
}

impl BallotContractFactory for EvmBallotFactory {
	fn instantiate_ballot(&self, address: Address) -> Arc<dyn BallotContract> {
		Arc::new(EvmBallot::new(address, self.client.clone()))
	}
}
