pub use ethereum_types::{H160, H256, U256};

pub type Address = H160;
pub type BallotId = U256;
pub type TransactionHash = H256;
pub type GasPrice = U256;
pub type ChainId = u64;
pub type VoteCount = u64;
/// Unix time in seconds, as reported by the ballot contracts
pub type TimeStamp = u64;
pub type PageIndex = u64;
