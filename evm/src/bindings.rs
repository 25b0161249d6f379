//! Contract bindings generated from the JSON ABIs in `abi/`

pub mod ballots_manager {
	ethers::contract::abigen!(BallotsManager, "./abi/BallotsManager.json");
}

pub mod ballot {
	ethers::contract::abigen!(Ballot, "./abi/Ballot.json");
}
