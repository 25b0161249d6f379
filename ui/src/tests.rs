#[cfg(test)]
mod tests {
	use crate::{create_ballot, FormFieldKind, NewBallotForm, NewBallotTimeline, UiState, NEW_BALLOT_DURATION_SECS};
	use anyhow::{anyhow, Error};
	use async_trait::async_trait;
	use primitives::*;
	use std::sync::{Arc, Mutex};
	use system::{
		errors::ProviderRpcError,
		notification::{Notification, NotificationLevel},
	};
	use tokio::sync::{broadcast, mpsc};
	use traits::{
		ballots_manager::BallotsManagerContract,
		notifier::Notifier,
		transaction::{CreatedBallot, TxOptions},
		wallet_provider::{ProviderEvent, WalletProvider},
	};
	use wallet::{MemoryPermissionStore, Web3Manager};

	struct FakeProvider {
		events: broadcast::Sender<ProviderEvent>,
	}

	#[async_trait]
	impl WalletProvider for FakeProvider {
		async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError> {
			Ok(vec![account()])
		}

		async fn accounts(&self) -> Result<Vec<Address>, Error> {
			Ok(vec![account()])
		}

		fn default_account(&self) -> Option<Address> {
			None
		}

		async fn gas_price(&self) -> Result<GasPrice, Error> {
			Ok(U256::from(42))
		}

		fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
			self.events.subscribe()
		}
	}

	struct FakeManager {
		fail: bool,
		created: Mutex<Vec<(TxOptions, String, String)>>,
	}

	impl FakeManager {
		fn new(fail: bool) -> FakeManager {
			FakeManager { fail, created: Mutex::new(vec![]) }
		}
	}

	#[async_trait]
	impl BallotsManagerContract for FakeManager {
		async fn create_ballot(
			&self,
			options: TxOptions,
			title: &str,
			description: &str,
		) -> Result<CreatedBallot, Error> {
			if self.fail {
				return Err(anyhow!("execution reverted"))
			}
			self.created.lock().unwrap().push((options, title.to_string(), description.to_string()));
			Ok(CreatedBallot {
				transaction_hash: TransactionHash::from_low_u64_be(1),
				ballot_address: Some(Address::from_low_u64_be(0xba)),
			})
		}

		async fn paginate_ballots(&self, _from: Address, _start_at: u64) -> Result<Vec<Address>, Error> {
			Ok(vec![])
		}

		async fn ballot_id_address_map(&self, _from: Address, _id: BallotId) -> Result<Address, Error> {
			Err(anyhow!("not used"))
		}

		async fn current_ballot_id_array_like_length(&self, _from: Address) -> Result<u64, Error> {
			Ok(0)
		}

		async fn subscribe_new_ballots(&self) -> Result<mpsc::Receiver<BallotId>, Error> {
			Err(anyhow!("not used"))
		}
	}

	#[derive(Default)]
	struct RecordingNotifier {
		notifications: Mutex<Vec<Notification>>,
	}

	impl Notifier for RecordingNotifier {
		fn notify(&self, notification: Notification) {
			self.notifications.lock().unwrap().push(notification);
		}
	}

	fn account() -> Address {
		Address::from([7u8; 20])
	}

	async fn connected_manager() -> Result<Web3Manager, Error> {
		let (events, _) = broadcast::channel(4);
		let manager = Web3Manager::new(
			Some(Arc::new(FakeProvider { events })),
			Arc::new(MemoryPermissionStore::new()),
			Arc::new(RecordingNotifier::default()),
			"https://wallet.example/install",
		);
		manager.connect().await?;
		Ok(manager)
	}

	fn filled_form() -> NewBallotForm {
		let mut form = NewBallotForm::new();
		form.set_value(FormFieldKind::Title, "Taco tuesday");
		form.set_value(FormFieldKind::Description, "Tacos for lunch every tuesday");
		form
	}

	#[test]
	fn test_form_validation_messages() {
		let mut form = NewBallotForm::new();
		assert_eq!(form.error(FormFieldKind::Title), Some("Title is required"));
		assert_eq!(form.error(FormFieldKind::Description), Some("Description is required"));

		form.set_value(FormFieldKind::Title, "t".repeat(50));
		assert_eq!(form.error(FormFieldKind::Title), None);
		form.set_value(FormFieldKind::Title, "t".repeat(51));
		assert_eq!(form.error(FormFieldKind::Title), Some("Title must have up to 50 characters"));

		form.set_value(FormFieldKind::Description, "d".repeat(200));
		assert_eq!(form.error(FormFieldKind::Description), None);
		form.set_value(FormFieldKind::Description, "d".repeat(201));
		assert_eq!(form.error(FormFieldKind::Description), Some("Description must have up to 200 characters"));

		// characters, not bytes
		form.set_value(FormFieldKind::Title, "é".repeat(50));
		assert_eq!(form.error(FormFieldKind::Title), None);
	}

	#[test]
	fn test_invalid_submit_touches_failing_fields() {
		let mut form = NewBallotForm::new();
		form.set_value(FormFieldKind::Title, "Fine title");
		assert!(!form.display_error(FormFieldKind::Description));

		assert!(!form.validate());
		assert!(!form.title.touched);
		assert!(form.description.touched);
		assert!(form.display_error(FormFieldKind::Description));
		assert!(!form.display_success(FormFieldKind::Title));

		form.touch(FormFieldKind::Title);
		assert!(form.display_success(FormFieldKind::Title));

		form.reset();
		assert_eq!(form, NewBallotForm::default());
	}

	#[tokio::test]
	async fn test_modal_stays_open_while_creating() {
		let ui = UiState::new();
		ui.open_new_ballot_modal().await;
		ui.set_is_creating_new_ballot(true).await;
		ui.close_new_ballot_modal().await;
		assert!(ui.is_new_ballot_modal_open().await);

		ui.set_is_creating_new_ballot(false).await;
		ui.close_new_ballot_modal().await;
		assert!(!ui.is_new_ballot_modal_open().await);

		ui.set_new_ballot_modal_open(true).await;
		assert!(ui.is_new_ballot_modal_open().await);
	}

	#[tokio::test]
	async fn test_create_ballot_success_resets_and_closes() -> Result<(), Error> {
		let ui = UiState::new();
		ui.open_new_ballot_modal().await;
		let web3 = connected_manager().await?;
		let contract = FakeManager::new(false);
		let notifier = RecordingNotifier::default();
		let mut form = filled_form();

		let created = create_ballot(&ui, &mut form, &web3, &contract, &notifier).await?;
		assert_eq!(created.and_then(|c| c.ballot_address), Some(Address::from_low_u64_be(0xba)));

		let sent = contract.created.lock().unwrap().clone();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].0, TxOptions::new(account(), U256::from(42)));
		assert_eq!(sent[0].1, "Taco tuesday");

		assert_eq!(form, NewBallotForm::default());
		assert!(!ui.is_new_ballot_modal_open().await);
		assert!(!ui.is_creating_new_ballot().await);

		let notifications = notifier.notifications.lock().unwrap().clone();
		assert_eq!(notifications.len(), 1);
		assert_eq!(notifications[0].title, "Ballot created!");
		assert!(notifications[0].body.contains("0x00000000000000000000000000000000000000ba"));
		Ok(())
	}

	#[tokio::test]
	async fn test_create_ballot_failure_keeps_form() -> Result<(), Error> {
		let ui = UiState::new();
		ui.open_new_ballot_modal().await;
		let web3 = connected_manager().await?;
		let notifier = RecordingNotifier::default();
		let mut form = filled_form();

		assert!(create_ballot(&ui, &mut form, &web3, &FakeManager::new(true), &notifier).await.is_err());
		assert_eq!(form, filled_form());
		assert!(ui.is_new_ballot_modal_open().await);
		assert!(!ui.is_creating_new_ballot().await);
		assert_eq!(
			*notifier.notifications.lock().unwrap(),
			vec![Notification::new(
				"Ballot couldn't be created",
				"Check your inputs and try again",
				NotificationLevel::Error
			)]
		);
		Ok(())
	}

	#[tokio::test]
	async fn test_create_ballot_needs_valid_form_and_account() -> Result<(), Error> {
		let ui = UiState::new();
		let contract = FakeManager::new(false);
		let notifier = RecordingNotifier::default();

		let web3 = connected_manager().await?;
		let mut empty = NewBallotForm::new();
		assert!(create_ballot(&ui, &mut empty, &web3, &contract, &notifier).await?.is_none());
		assert!(empty.title.touched && empty.description.touched);

		let disconnected = Web3Manager::new(
			None,
			Arc::new(MemoryPermissionStore::new()),
			Arc::new(RecordingNotifier::default()),
			"https://wallet.example/install",
		);
		let mut form = filled_form();
		assert!(create_ballot(&ui, &mut form, &disconnected, &contract, &notifier).await?.is_none());

		assert!(contract.created.lock().unwrap().is_empty());
		assert!(notifier.notifications.lock().unwrap().is_empty());
		Ok(())
	}

	#[test]
	fn test_new_ballot_timeline_closes_in_a_week() {
		let mut timeline = NewBallotTimeline::new(1_700_000_000);
		assert_eq!(timeline.closes_at(), 1_700_000_000 + NEW_BALLOT_DURATION_SECS);
		timeline.tick();
		assert_eq!(timeline.closes_at(), 1_700_000_000 + NEW_BALLOT_DURATION_SECS + 1);
		assert!(timeline.closes_label().is_some());
	}
}
