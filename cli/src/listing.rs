use ballots::{BallotItem, ListenerHandle};
use log::warn;
use primitives::*;
use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
};
use system::ballot::Ballot;
use traits::{ballot::BallotContractFactory, notifier::Notifier};

/// A ballot item ready to load, as if scrolled into view
pub async fn viewed_item(
	address: Address,
	factory: Arc<dyn BallotContractFactory>,
	notifier: Arc<dyn Notifier>,
) -> BallotItem {
	let item = BallotItem::new(address, factory, notifier);
	item.mark_viewed().await;
	item
}

/// Loads every ballot in order. A ballot that fails to load is skipped, the others are still returned.
pub async fn load_ballots(
	addresses: &[Address],
	account: Address,
	factory: Arc<dyn BallotContractFactory>,
	notifier: Arc<dyn Notifier>,
) -> Vec<Ballot> {
	let mut loaded = Vec::with_capacity(addresses.len());
	for address in addresses {
		let item = viewed_item(*address, factory.clone(), notifier.clone()).await;
		if let Err(e) = item.load(Some(account)).await {
			warn!("Skipping ballot {address:?}: {e}");
			continue
		}
		if let Some(ballot) = item.ballot().await {
			loaded.push(ballot);
		}
	}
	loaded
}

struct WatchedBallot {
	item: BallotItem,
	last: Option<Ballot>,
	_listener: Option<ListenerHandle>,
}

/// Ballots followed by `watch`. Each address gets a single load attempt, a failed one is abandoned.
pub struct BallotWatcher {
	account: Address,
	factory: Arc<dyn BallotContractFactory>,
	notifier: Arc<dyn Notifier>,
	watched: HashMap<Address, WatchedBallot>,
	abandoned: HashSet<Address>,
}

impl BallotWatcher {
	pub fn new(
		account: Address,
		factory: Arc<dyn BallotContractFactory>,
		notifier: Arc<dyn Notifier>,
	) -> BallotWatcher {
		BallotWatcher { account, factory, notifier, watched: HashMap::new(), abandoned: HashSet::new() }
	}

	/// Loads and starts listening to addresses not attempted before. Returns the ballots that loaded.
	pub async fn watch_new(&mut self, addresses: &[Address]) -> Vec<Ballot> {
		let mut started = vec![];
		for address in addresses {
			if self.watched.contains_key(address) || self.abandoned.contains(address) {
				continue
			}
			let item = viewed_item(*address, self.factory.clone(), self.notifier.clone()).await;
			if let Err(e) = item.load(Some(self.account)).await {
				warn!("Not watching {address:?}: {e}");
				self.abandoned.insert(*address);
				continue
			}
			let listener = match item.listen().await {
				Ok(listener) => listener,
				Err(e) => {
					warn!("No VoteCast updates for {address:?}: {e}");
					None
				},
			};
			let last = item.ballot().await;
			if let Some(ballot) = &last {
				started.push(ballot.clone());
			}
			self.watched.insert(*address, WatchedBallot { item, last, _listener: listener });
		}
		started
	}

	/// Ballots whose data changed since the previous call
	pub async fn changed(&mut self) -> Vec<Ballot> {
		let mut changed = vec![];
		for ballot in self.watched.values_mut() {
			let current = ballot.item.ballot().await;
			if current != ballot.last {
				if let Some(updated) = &current {
					changed.push(updated.clone());
				}
				ballot.last = current;
			}
		}
		changed
	}

	pub fn watched(&self) -> usize {
		self.watched.len()
	}

	pub fn abandoned(&self) -> usize {
		self.abandoned.len()
	}
}
