use crate::listener::ListenerHandle;
use anyhow::Error;
use log::{debug, error, info, warn};
use primitives::*;
use std::sync::Arc;
use system::{
	ballot::{Ballot, VoteChoice},
	notification::Notification,
};
use tokio::sync::RwLock;
use traits::{
	ballot::{BallotContract, BallotContractFactory},
	notifier::Notifier,
	transaction::TxOptions,
	wallet_provider::WalletProvider,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotItemState {
	pub data: Option<Ballot>,
	pub was_viewed: bool,
	pub loading: bool,
	pub loading_vote: bool,
}

/// Content of a ballot's action area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePanel {
	ConnectWallet,
	CastVote,
	AlreadyVoted,
}

/// One ballot of the list, fetched lazily once it has been viewed
pub struct BallotItem {
	address: Address,
	factory: Arc<dyn BallotContractFactory>,
	notifier: Arc<dyn Notifier>,
	contract: RwLock<Option<Arc<dyn BallotContract>>>,
	state: Arc<RwLock<BallotItemState>>,
}

impl BallotItem {
	pub fn new(
		address: Address,
		factory: Arc<dyn BallotContractFactory>,
		notifier: Arc<dyn Notifier>,
	) -> BallotItem {
		BallotItem {
			address,
			factory,
			notifier,
			contract: RwLock::new(None),
			state: Arc::new(RwLock::new(BallotItemState::default())),
		}
	}

	pub fn address(&self) -> Address {
		self.address
	}

	pub async fn mark_viewed(&self) {
		self.state.write().await.was_viewed = true;
	}

	pub async fn ballot(&self) -> Option<Ballot> {
		self.state.read().await.data.clone()
	}

	pub async fn snapshot(&self) -> BallotItemState {
		self.state.read().await.clone()
	}

	/// Fetches `getData()` once the item was viewed and an account is selected.
	/// Returns whether a request was made.
	pub async fn load(&self, account: Option<Address>) -> Result<bool, Error> {
		let account = match account {
			Some(account) => account,
			None => return Ok(false),
		};
		{
			let mut state = self.state.write().await;
			if !state.was_viewed {
				return Ok(false)
			}
			state.loading = true;
		}

		let contract = self.contract().await;
		let data = contract.get_data(account).await;

		let mut state = self.state.write().await;
		state.loading = false;
		let ballot = data.and_then(|data| Ballot::new(self.address, data));
		match ballot {
			Ok(ballot) => {
				debug!("Loaded {ballot}");
				state.data = Some(ballot);
				Ok(true)
			},
			Err(e) => {
				error!("getData error for {:?}: {e:?}", self.address);
				Err(e)
			},
		}
	}

	/// Follows `VoteCast` tallies. Returns `None` until the contract is instantiated.
	pub async fn listen(&self) -> Result<Option<ListenerHandle>, Error> {
		let contract = match self.contract.read().await.clone() {
			Some(contract) => contract,
			None => return Ok(None),
		};
		let mut tallies = contract.subscribe_vote_cast().await?;
		let state = self.state.clone();
		let address = self.address;

		let handle = tokio::spawn(async move {
			while let Some(results) = tallies.recv().await {
				let mut state = state.write().await;
				match state.data.as_mut() {
					Some(ballot) => {
						ballot.apply_vote_cast(results);
						info!("VoteCast on {address:?}: {}", ballot.state);
					},
					None => debug!("VoteCast on {address:?} before data was loaded, dropped"),
				}
			}
			debug!("VoteCast subscription of {address:?} closed");
		});

		Ok(Some(ListenerHandle::new(handle)))
	}

	/// Reads the gas price and sends the vote transaction. Without an account or a
	/// loaded contract nothing is sent.
	pub async fn cast_vote(
		&self,
		choice: VoteChoice,
		account: Option<Address>,
		provider: &dyn WalletProvider,
	) -> Result<Option<TransactionHash>, Error> {
		let account = match account {
			Some(account) => account,
			None => {
				warn!("Cannot vote on {:?} without an account", self.address);
				return Ok(None)
			},
		};
		let contract = match self.contract.read().await.clone() {
			Some(contract) => contract,
			None => {
				warn!("Cannot vote on {:?} before it was loaded", self.address);
				return Ok(None)
			},
		};

		self.state.write().await.loading_vote = true;
		let sent: Result<TransactionHash, Error> = async {
			let options = TxOptions::new(account, provider.gas_price().await?);
			match choice {
				VoteChoice::Accept => contract.cast_accept_vote(options).await,
				VoteChoice::Reject => contract.cast_reject_vote(options).await,
			}
		}
		.await;

		let mut state = self.state.write().await;
		state.loading_vote = false;
		match sent {
			Ok(hash) => {
				info!("{choice} vote on {:?} mined in {hash:?}", self.address);
				if let Some(ballot) = state.data.as_mut() {
					ballot.mark_voted();
				}
				self.notifier
					.notify(Notification::success("Success!", format!("Your {choice} vote was cast successfully")));
				Ok(Some(hash))
			},
			Err(e) => {
				error!("{choice} vote on {:?} failed: {e:?}", self.address);
				self.notifier.notify(Notification::error("Error!", "Something went wrong"));
				Err(e)
			},
		}
	}

	pub async fn cast_accept_vote(
		&self,
		account: Option<Address>,
		provider: &dyn WalletProvider,
	) -> Result<Option<TransactionHash>, Error> {
		self.cast_vote(VoteChoice::Accept, account, provider).await
	}

	pub async fn cast_reject_vote(
		&self,
		account: Option<Address>,
		provider: &dyn WalletProvider,
	) -> Result<Option<TransactionHash>, Error> {
		self.cast_vote(VoteChoice::Reject, account, provider).await
	}

	pub async fn vote_panel(&self, account: Option<Address>) -> VotePanel {
		if account.is_none() {
			return VotePanel::ConnectWallet
		}
		match &self.state.read().await.data {
			Some(ballot) if !ballot.can_vote => VotePanel::AlreadyVoted,
			_ => VotePanel::CastVote,
		}
	}

	async fn contract(&self) -> Arc<dyn BallotContract> {
		let mut contract = self.contract.write().await;
		match contract.as_ref() {
			Some(existing) => existing.clone(),
			None => {
				let created = self.factory.instantiate_ballot(self.address);
				*contract = Some(created.clone());
				created
			},
		}
	}
}
