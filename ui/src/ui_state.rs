use log::debug;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Flags {
	new_ballot_modal_open: bool,
	is_creating_new_ballot: bool,
}

/// New ballot modal visibility and the in-flight creation flag
#[derive(Debug, Default)]
pub struct UiState {
	flags: RwLock<Flags>,
}

impl UiState {
	pub fn new() -> UiState {
		UiState::default()
	}

	pub async fn is_new_ballot_modal_open(&self) -> bool {
		self.flags.read().await.new_ballot_modal_open
	}

	pub async fn is_creating_new_ballot(&self) -> bool {
		self.flags.read().await.is_creating_new_ballot
	}

	pub async fn set_is_creating_new_ballot(&self, creating: bool) {
		self.flags.write().await.is_creating_new_ballot = creating;
	}

	pub async fn open_new_ballot_modal(&self) {
		self.flags.write().await.new_ballot_modal_open = true;
	}

	/// Ignored while a ballot is being created
	pub async fn close_new_ballot_modal(&self) {
		let mut flags = self.flags.write().await;
		if flags.is_creating_new_ballot {
			debug!("Ballot creation in progress, keeping the modal open");
			return
		}
		flags.new_ballot_modal_open = false;
	}

	pub async fn set_new_ballot_modal_open(&self, open: bool) {
		self.flags.write().await.new_ballot_modal_open = open;
	}
}
