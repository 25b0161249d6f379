use primitives::*;

/// Sender and gas price of a state-changing contract call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOptions {
	pub from: Address,
	pub gas_price: GasPrice,
}

impl TxOptions {
	pub fn new(from: Address, gas_price: GasPrice) -> TxOptions {
		TxOptions { from, gas_price }
	}
}

/// Receipt summary of a mined `createBallot` transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedBallot {
	pub transaction_hash: TransactionHash,
	/// Ballot announced by the receipt's `NewBallot` log, when there is one
	pub ballot_address: Option<Address>,
}
