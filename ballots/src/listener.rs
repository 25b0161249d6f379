use tokio::task::JoinHandle;

/// Background event subscription. Dropping the handle stops it.
pub struct ListenerHandle {
	handle: Option<JoinHandle<()>>,
}

impl ListenerHandle {
	pub fn new(handle: JoinHandle<()>) -> ListenerHandle {
		ListenerHandle { handle: Some(handle) }
	}

	pub fn is_finished(&self) -> bool {
		self.handle.as_ref().map_or(true, |handle| handle.is_finished())
	}

	/// Waits until the subscription ends on its own
	pub async fn join(mut self) {
		if let Some(handle) = self.handle.take() {
			let _ = handle.await;
		}
	}
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.abort();
		}
	}
}
