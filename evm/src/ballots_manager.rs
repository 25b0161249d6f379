use crate::{
	bindings::ballots_manager::{BallotsManager, NewBallotFilter},
	contract_error, WsClient, EVENT_CHANNEL_SIZE,
};
use anyhow::Error;
use async_trait::async_trait;
use ethers::{contract::parse_log, providers::StreamExt};
use log::{debug, info, warn};
use primitives::*;
use std::sync::Arc;
use system::{ballot::saturating_u64, errors::ClientError};
use tokio::sync::{mpsc, oneshot};
use traits::{
	ballots_manager::BallotsManagerContract,
	transaction::{CreatedBallot, TxOptions},
};

/// Registry contract reached through the websocket client
pub struct EvmBallotsManager {
	contract: BallotsManager<WsClient>,
}

impl EvmBallotsManager {
	pub fn new(address: Address, client: Arc<WsClient>) -> EvmBallotsManager {
		EvmBallotsManager { contract: BallotsManager::new(address, client) }
	}

	pub fn address(&self) -> Address {
		self.contract.address()
	}
}

#[async_trait]
impl BallotsManagerContract for EvmBallotsManager {
	async fn create_ballot(
		&self,
		options: TxOptions,
		title: &str,
		description: &str,
	) -> Result<CreatedBallot, Error> {
		let call = self
			.contract
			.create_ballot(title.to_string(), description.to_string())
			.from(options.from)
			.gas_price(options.gas_price);
		let pending = call.send().await.map_err(|e| contract_error("createBallot", e))?;
		let receipt = pending
			.await?
			.ok_or_else(|| contract_error("createBallot", "transaction dropped from the mempool"))?;

		if receipt.status == Some(0u64.into()) {
			return Err(contract_error("createBallot", format!("reverted in {:?}", receipt.transaction_hash)).into())
		}

		let new_ballot_id =
			receipt.logs.iter().find_map(|log| parse_log::<NewBallotFilter>(log.clone()).ok()).map(|event| event.id);
		let ballot_address = match new_ballot_id {
			Some(id) => Some(self.ballot_id_address_map(options.from, id).await?),
			None => {
				warn!("createBallot receipt {:?} carries no NewBallot log", receipt.transaction_hash);
				None
			},
		};

		Ok(CreatedBallot { transaction_hash: receipt.transaction_hash, ballot_address })
	}

	async fn paginate_ballots(&self, from: Address, start_at: u64) -> Result<Vec<Address>, Error> {
		let page = self
			.contract
			.paginate_ballots(U256::from(start_at))
			.from(from)
			.call()
			.await
			.map_err(|e| contract_error("paginateBallots", e))?;
		Ok(page)
	}

	async fn ballot_id_address_map(&self, from: Address, id: BallotId) -> Result<Address, Error> {
		let address = self
			.contract
			.ballot_id_address_map(id)
			.from(from)
			.call()
			.await
			.map_err(|e| contract_error("ballotIdAddressMap", e))?;
		Ok(address)
	}

	async fn current_ballot_id_array_like_length(&self, from: Address) -> Result<u64, Error> {
		let length = self
			.contract
			.current_ballot_id_array_like_length()
			.from(from)
			.call()
			.await
			.map_err(|e| contract_error("currentBallotIdArrayLikeLength", e))?;
		Ok(saturating_u64(length))
	}

	async fn subscribe_new_ballots(&self) -> Result<mpsc::Receiver<BallotId>, Error> {
		let (sender, receiver) = mpsc::channel(EVENT_CHANNEL_SIZE);
		let (ready, subscribed) = oneshot::channel::<Result<(), String>>();
		let contract = self.contract.clone();

		tokio::spawn(async move {
			let event = contract.new_ballot_filter();
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
						Some(Ok(NewBallotFilter { id })) => {
							if sender.send(id).await.is_err() {
								break
							}
						},
						Some(Err(e)) => warn!("Undecodable NewBallot log: {e:?}"),
						None => break,
					},
				}
			}
			debug!("NewBallot forwarder stopped");
		});

		subscribed
			.await
			.map_err(|_| ClientError::SubscriptionFailed("NewBallot forwarder stopped".to_string()))?
			.map_err(ClientError::SubscriptionFailed)?;
		info!("Subscribed to NewBallot of {:?}", self.contract.address());
		Ok(receiver)
	}
}
