use log::{error, info, warn};
use system::notification::{Notification, NotificationLevel};
use traits::notifier::Notifier;

/// Surfaces notifications through the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
	fn notify(&self, notification: Notification) {
		let Notification { title, body, level } = notification;
		match level {
			NotificationLevel::Success | NotificationLevel::Info => info!("{title} {body}"),
			NotificationLevel::Warning => warn!("{title} {body}"),
			NotificationLevel::Error => error!("{title} {body}"),
		}
	}
}
