use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
	Success,
	Error,
	Warning,
	Info,
}

/// Transient message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub title: String,
	pub body: String,
	pub level: NotificationLevel,
}

impl Notification {
	pub fn new(title: impl Into<String>, body: impl Into<String>, level: NotificationLevel) -> Notification {
		Notification { title: title.into(), body: body.into(), level }
	}

	pub fn success(title: impl Into<String>, body: impl Into<String>) -> Notification {
		Notification::new(title, body, NotificationLevel::Success)
	}

	pub fn error(title: impl Into<String>, body: impl Into<String>) -> Notification {
		Notification::new(title, body, NotificationLevel::Error)
	}

	pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Notification {
		Notification::new(title, body, NotificationLevel::Warning)
	}
}
