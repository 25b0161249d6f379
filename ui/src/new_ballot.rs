use crate::{form::NewBallotForm, ui_state::UiState};
use anyhow::Error;
use log::{debug, error, info, warn};
use primitives::*;
use system::notification::Notification;
use traits::{
	ballots_manager::BallotsManagerContract,
	notifier::Notifier,
	transaction::{CreatedBallot, TxOptions},
};
use util::{convert::format_address, generic::format_timestamp};
use wallet::Web3Manager;

/// Voting period the registry gives a new ballot
pub const NEW_BALLOT_DURATION_SECS: u64 = 7 * 24 * 60 * 60;

/// Submits the new ballot form.
///
/// Returns `None` when the form is invalid or no wallet account is selected;
/// nothing is sent in that case.
pub async fn create_ballot(
	ui: &UiState,
	form: &mut NewBallotForm,
	web3: &Web3Manager,
	contract: &dyn BallotsManagerContract,
	notifier: &dyn Notifier,
) -> Result<Option<CreatedBallot>, Error> {
	if !form.validate() {
		debug!("New ballot form invalid: {:?}", form.errors());
		return Ok(None)
	}

	let (provider, account) = match (web3.provider(), web3.selected_account().await) {
		(Some(provider), Some(account)) => (provider, account),
		_ => {
			warn!("Cannot create a ballot without a connected account");
			return Ok(None)
		},
	};

	ui.set_is_creating_new_ballot(true).await;
	let created: Result<CreatedBallot, Error> = async {
		let gas_price = provider.gas_price().await?;
		contract
			.create_ballot(TxOptions::new(account, gas_price), &form.title.value, &form.description.value)
			.await
	}
	.await;
	ui.set_is_creating_new_ballot(false).await;

	match created {
		Ok(created) => {
			let ballot_address =
				created.ballot_address.as_ref().map(format_address).unwrap_or_else(|| "unknown".to_string());
			info!("Ballot {ballot_address} created in {:?}", created.transaction_hash);
			notifier.notify(Notification::success(
				"Ballot created!",
				format!("Hash: {:?}\nBallot Address: {ballot_address}", created.transaction_hash),
			));
			form.reset();
			ui.close_new_ballot_modal().await;
			Ok(Some(created))
		},
		Err(e) => {
			error!("createBallot failed: {e:?}");
			notifier.notify(Notification::error("Ballot couldn't be created", "Check your inputs and try again"));
			Err(e)
		},
	}
}

/// Closing time preview of a ballot created now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBallotTimeline {
	closes_at: TimeStamp,
}

impl NewBallotTimeline {
	pub fn new(now: TimeStamp) -> NewBallotTimeline {
		NewBallotTimeline { closes_at: now.saturating_add(NEW_BALLOT_DURATION_SECS) }
	}

	pub fn closes_at(&self) -> TimeStamp {
		self.closes_at
	}

	/// The preview follows the clock
	pub fn tick(&mut self) {
		self.closes_at = self.closes_at.saturating_add(1);
	}

	pub fn closes_label(&self) -> Option<(String, String)> {
		format_timestamp(self.closes_at)
	}
}
