use serde::{Deserialize, Serialize};
use std::fmt;

/// Local storage key of the last wallet permission outcome
pub const LOCAL_STORAGE_PERMISSION_KEY: &str = "food-voter-app-permission";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Web3ConnectionStatus {
	#[default]
	None = 0,
	Connecting = 1,
	Rejected = 2,
	Accepted = 3,
}

impl Web3ConnectionStatus {
	/// Stored as the decimal discriminant
	pub fn as_stored(&self) -> String {
		(*self as u8).to_string()
	}

	pub fn from_stored(value: &str) -> Option<Web3ConnectionStatus> {
		match value.trim().parse::<u8>().ok()? {
			0 => Some(Web3ConnectionStatus::None),
			1 => Some(Web3ConnectionStatus::Connecting),
			2 => Some(Web3ConnectionStatus::Rejected),
			3 => Some(Web3ConnectionStatus::Accepted),
			_ => None,
		}
	}
}

impl fmt::Display for Web3ConnectionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Web3ConnectionStatus::None => write!(f, "none"),
			Web3ConnectionStatus::Connecting => write!(f, "connecting"),
			Web3ConnectionStatus::Rejected => write!(f, "rejected"),
			Web3ConnectionStatus::Accepted => write!(f, "accepted"),
		}
	}
}
