use system::notification::Notification;

pub trait Notifier: Send + Sync {
	fn notify(&self, notification: Notification);
}
