use serde::Serialize;

/// EIP-1193 code returned when the user dismisses the permission prompt
pub const USER_REJECTED_REQUEST: i64 = 4001;
/// EIP-1193 code returned while an earlier `eth_requestAccounts` is still awaiting the user
pub const REQUEST_ALREADY_PENDING: i64 = -32002;

/// Error object of a failed wallet provider request
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("provider rpc error {code}: {message}")]
pub struct ProviderRpcError {
	pub code: i64,
	pub message: String,
}

impl ProviderRpcError {
	pub fn new(code: i64, message: impl Into<String>) -> ProviderRpcError {
		ProviderRpcError { code, message: message.into() }
	}

	pub fn is_user_rejection(&self) -> bool {
		self.code == USER_REJECTED_REQUEST
	}

	pub fn is_request_pending(&self) -> bool {
		self.code == REQUEST_ALREADY_PENDING
	}
}

#[derive(thiserror::Error, Debug, Serialize)]
pub enum ClientError {
	// wallet errors
	#[error("no wallet provider installed, get one at {0}")]
	WalletNotInstalled(String),
	#[error("wallet is not connected")]
	NotConnected,
	#[error("account index {index} is out of range, {available} accounts available")]
	AccountIndexOutOfRange { index: usize, available: usize },
	#[error(transparent)]
	Provider(#[from] ProviderRpcError),
	// invalid errors
	#[error("invalid voting term: {0}")]
	InvalidVotingTerm(u64),
	#[error("invalid address: {0}")]
	InvalidAddress(String),
	// contract errors
	#[error("contract call failed: {0}")]
	ContractCallFailed(String),
	#[error("subscription failed: {0}")]
	SubscriptionFailed(String),
	// config errors
	#[error("config error: {0}")]
	ConfigError(String),
}
