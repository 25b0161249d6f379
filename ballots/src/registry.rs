use crate::listener::ListenerHandle;
use anyhow::Error;
use log::{debug, error, info};
use primitives::*;
use std::sync::Arc;
use tokio::sync::RwLock;
use traits::{
	ballot::{BallotContract, BallotContractFactory},
	ballots_manager::BallotsManagerContract,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
	pub current_page_index: Option<PageIndex>,
	pub max_page_index: Option<PageIndex>,
}

impl Pagination {
	pub fn all_paginated(&self) -> bool {
		match (self.current_page_index, self.max_page_index) {
			(Some(current), Some(max)) => current > max,
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryState {
	pub addresses: Vec<Address>,
	pub loading: bool,
	pub pagination: Pagination,
}

/// Index of the last page holding `total` ballots, `None` for an empty registry
pub fn max_page_index(total: u64, page_size: u64) -> Option<PageIndex> {
	if total == 0 || page_size == 0 {
		return None
	}
	Some((total - 1) / page_size)
}

/// Paginated, event-updated list of ballot addresses held by the registry contract
pub struct BallotsRegistry {
	contract: Arc<dyn BallotsManagerContract>,
	factory: Arc<dyn BallotContractFactory>,
	page_size: u64,
	state: Arc<RwLock<RegistryState>>,
}

impl BallotsRegistry {
	pub fn new(
		contract: Arc<dyn BallotsManagerContract>,
		factory: Arc<dyn BallotContractFactory>,
		page_size: u64,
	) -> BallotsRegistry {
		BallotsRegistry { contract, factory, page_size, state: Arc::new(RwLock::new(RegistryState::default())) }
	}

	pub fn contract(&self) -> Arc<dyn BallotsManagerContract> {
		self.contract.clone()
	}

	pub fn page_size(&self) -> u64 {
		self.page_size
	}

	pub async fn addresses(&self) -> Vec<Address> {
		self.state.read().await.addresses.clone()
	}

	pub async fn loading(&self) -> bool {
		self.state.read().await.loading
	}

	pub async fn pagination(&self) -> Pagination {
		self.state.read().await.pagination
	}

	pub async fn all_paginated(&self) -> bool {
		self.state.read().await.pagination.all_paginated()
	}

	pub async fn snapshot(&self) -> RegistryState {
		self.state.read().await.clone()
	}

	pub fn instantiate_ballot(&self, address: Address) -> Arc<dyn BallotContract> {
		self.factory.instantiate_ballot(address)
	}

	/// Reads the registry length and loads the first page. An empty registry
	/// leaves pagination unset and requests nothing else.
	pub async fn init(&self, account: Address) -> Result<(), Error> {
		{
			let mut state = self.state.write().await;
			*state = RegistryState { loading: true, ..RegistryState::default() };
		}

		let total = self.contract.current_ballot_id_array_like_length(account).await;
		self.state.write().await.loading = false;

		let total = match total {
			Ok(total) => total,
			Err(e) => {
				error!("currentBallotIdArrayLikeLength error: {e:?}");
				return Err(e)
			},
		};

		let max_page_index = match max_page_index(total, self.page_size) {
			Some(max_page_index) => max_page_index,
			None => {
				debug!("Registry holds no ballots");
				return Ok(())
			},
		};

		info!("Registry holds {total} ballots in {} pages", max_page_index + 1);
		self.state.write().await.pagination =
			Pagination { current_page_index: Some(0), max_page_index: Some(max_page_index) };

		self.load_current_page(account).await.map(|_| ())
	}

	/// Advances to the next page and loads it. Returns whether a page was requested.
	pub async fn load_next_page(&self, account: Address) -> Result<bool, Error> {
		{
			let mut state = self.state.write().await;
			if state.pagination.all_paginated() {
				return Ok(false)
			}
			match state.pagination.current_page_index {
				Some(current) => state.pagination.current_page_index = Some(current + 1),
				None => return Ok(false),
			}
		}
		self.load_current_page(account).await
	}

	async fn load_current_page(&self, account: Address) -> Result<bool, Error> {
		let current_page_index = {
			let mut state = self.state.write().await;
			let (current, max) = match (state.pagination.current_page_index, state.pagination.max_page_index) {
				(Some(current), Some(max)) => (current, max),
				_ => return Ok(false),
			};
			if current > max {
				return Ok(false)
			}
			state.loading = true;
			current
		};

		let start_at = current_page_index * self.page_size;
		debug!("paginateBallots startAt={start_at}");
		let page = self.contract.paginate_ballots(account, start_at).await;

		let mut state = self.state.write().await;
		state.loading = false;
		match page {
			Ok(page) => {
				append_unique(&mut state.addresses, page);
				Ok(true)
			},
			Err(e) => {
				error!("paginateBallots error: {e:?}");
				Err(e)
			},
		}
	}

	/// Resolves the address of a `NewBallot` id and puts it in front of the list
	pub async fn handle_new_ballot(&self, account: Address, id: BallotId) -> Result<Address, Error> {
		prepend_new_ballot(self.contract.as_ref(), &self.state, account, id).await
	}

	/// Subscribes to `NewBallot` events for as long as the handle lives
	pub async fn listen(&self, account: Address) -> Result<ListenerHandle, Error> {
		let mut ids = self.contract.subscribe_new_ballots().await?;
		let contract = self.contract.clone();
		let state = self.state.clone();
		info!("Listening for NewBallot events");

		let handle = tokio::spawn(async move {
			while let Some(id) = ids.recv().await {
				if let Err(e) = prepend_new_ballot(contract.as_ref(), &state, account, id).await {
					error!("ballotIdAddressMap error: {e:?}");
				}
			}
			debug!("NewBallot subscription closed");
		});

		Ok(ListenerHandle::new(handle))
	}
}

async fn prepend_new_ballot(
	contract: &dyn BallotsManagerContract,
	state: &RwLock<RegistryState>,
	account: Address,
	id: BallotId,
) -> Result<Address, Error> {
	let address = contract.ballot_id_address_map(account, id).await?;
	state.write().await.addresses.insert(0, address);
	info!("New ballot {id} at {address:?}");
	Ok(address)
}

// a live NewBallot event may already have delivered an address of this page
fn append_unique(addresses: &mut Vec<Address>, page: Vec<Address>) {
	for address in page {
		if !addresses.contains(&address) {
			addresses.push(address);
		}
	}
}
