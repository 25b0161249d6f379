#[cfg(test)]
mod tests {
	use crate::{
		ballot::{Ballot, BallotData, RawVotingResults, VoteChoice, VotingResults},
		ballot_state::{get_ballot_state, BallotState, VotingTerm},
		config::{Config, DEFAULT_PAGINATION_SIZE, DEFAULT_WALLET_INSTALL_URL},
		connection::Web3ConnectionStatus,
		errors::ProviderRpcError,
	};
	use primitives::*;

	fn raw_data(state: u64, accept: u64, reject: u64) -> BallotData {
		BallotData {
			state: U256::from(state),
			can_vote: true,
			created_at: U256::from(1_700_000_000u64),
			closes_at: U256::from(1_700_604_800u64),
			is_creator: false,
			title: "Pineapple on pizza?".to_string(),
			description: "Should it be allowed at all?".to_string(),
			results: RawVotingResults {
				accept: U256::from(accept),
				reject: U256::from(reject),
				total: U256::from(accept + reject),
			},
		}
	}

	#[test]
	fn test_ballot_state_examples() {
		let results = VotingResults::new(3, 1, 4);
		assert_eq!(get_ballot_state(VotingTerm::Open, &results), BallotState::PreliminaryAccepted);
		assert_eq!(get_ballot_state(VotingTerm::Closed, &results), BallotState::Accepted);

		let empty = VotingResults::default();
		assert_eq!(get_ballot_state(VotingTerm::Open, &empty), BallotState::PreliminaryDraw);
	}

	#[test]
	fn test_ballot_state_follows_term() {
		let tallies = [(0, 0), (1, 0), (0, 1), (5, 5), (10, 2), (2, 10)];
		for (accept, reject) in tallies {
			let results = VotingResults::new(accept, reject, accept + reject);

			assert_eq!(get_ballot_state(VotingTerm::NotStarted, &results), BallotState::NotStarted);

			let open = get_ballot_state(VotingTerm::Open, &results);
			assert_eq!(open.term(), VotingTerm::Open);
			let closed = get_ballot_state(VotingTerm::Closed, &results);
			assert_eq!(closed.term(), VotingTerm::Closed);

			let is_draw = accept == reject;
			assert_eq!(open == BallotState::PreliminaryDraw, is_draw);
			assert_eq!(closed == BallotState::Draw, is_draw);
			assert_eq!(open == BallotState::PreliminaryAccepted, accept > reject);
			assert_eq!(closed == BallotState::Rejected, accept < reject);
		}
	}

	#[test]
	fn test_voting_term_from_contract_value() {
		assert_eq!(VotingTerm::try_from(0u64).unwrap(), VotingTerm::NotStarted);
		assert_eq!(VotingTerm::try_from(2u64).unwrap(), VotingTerm::Closed);
		assert!(VotingTerm::try_from(3u64).is_err());
		assert!(VotingTerm::NotStarted < VotingTerm::Open && VotingTerm::Open < VotingTerm::Closed);
	}

	#[test]
	fn test_ballot_from_raw_data() {
		let address = Address::from([7u8; 20]);
		let ballot = Ballot::new(address, raw_data(1, 0, 2)).unwrap();

		assert_eq!(ballot.address, address);
		assert_eq!(ballot.created_at, 1_700_000_000);
		assert_eq!(ballot.closes_at, 1_700_604_800);
		assert_eq!(ballot.results, VotingResults::new(0, 2, 2));
		assert_eq!(ballot.state, BallotState::PreliminaryRejected);
		assert_eq!(ballot.headline(), "Reject is winning!");

		assert!(Ballot::new(address, raw_data(9, 0, 0)).is_err());
	}

	#[test]
	fn test_vote_cast_rederives_open_state() {
		let mut ballot = Ballot::new(Address::zero(), raw_data(1, 0, 0)).unwrap();
		assert_eq!(ballot.headline(), "Cast the first vote!");

		ballot.apply_vote_cast(VotingResults::new(1, 1, 2));
		assert_eq!(ballot.state, BallotState::PreliminaryDraw);
		assert_eq!(ballot.headline(), "It's a tie!");

		ballot.apply_vote_cast(VotingResults::new(2, 1, 3));
		assert_eq!(ballot.state, BallotState::PreliminaryAccepted);

		ballot.mark_voted();
		assert!(!ballot.can_vote);
	}

	#[test]
	fn test_raw_results_saturate() {
		let raw = RawVotingResults { accept: U256::MAX, reject: U256::from(1u64), total: U256::MAX };
		let results: VotingResults = raw.into();
		assert_eq!(results.accept, u64::MAX);
		assert_eq!(results.reject, 1);
		assert_eq!(results.leading_count(), u64::MAX);
		assert_eq!(VotingResults::default().progress_max(), 100);
	}

	#[test]
	fn test_connection_status_storage() {
		assert_eq!(Web3ConnectionStatus::Accepted.as_stored(), "3");
		assert_eq!(Web3ConnectionStatus::from_stored("2"), Some(Web3ConnectionStatus::Rejected));
		assert_eq!(Web3ConnectionStatus::from_stored("not a number"), None);
		assert_eq!(Web3ConnectionStatus::from_stored("42"), None);
	}

	#[test]
	fn test_provider_error_codes() {
		assert!(ProviderRpcError::new(4001, "User rejected the request.").is_user_rejection());
		assert!(ProviderRpcError::new(-32002, "Request already pending").is_request_pending());
		assert!(!ProviderRpcError::new(-32603, "Internal error").is_user_rejection());
	}

	#[tokio::test]
	async fn test_config_parsing_and_cache() {
		let config = Config::from_toml_str(
			r#"
			provider_rpc = "ws://127.0.0.1:8545"
			ballots_manager_address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
			"#,
		)
		.unwrap();
		assert_eq!(config.pagination_size, DEFAULT_PAGINATION_SIZE);
		assert_eq!(config.wallet_install_url, DEFAULT_WALLET_INSTALL_URL);
		assert_eq!(config.chain_id, None);

		Config::new(config.clone()).await;
		let cached = Config::get_config().await.unwrap();
		assert_eq!(cached.ballots_manager_address, config.ballots_manager_address);

		let zero_pages = Config::from_toml_str(
			r#"
			ballots_manager_address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
			pagination_size = 0
			"#,
		);
		assert!(zero_pages.is_err());
	}

	#[test]
	fn test_vote_choice_parsing() {
		assert_eq!("accept".parse::<VoteChoice>().ok(), Some(VoteChoice::Accept));
		assert_eq!("YES".parse::<VoteChoice>().ok(), Some(VoteChoice::Accept));
		assert_eq!("nay".parse::<VoteChoice>().ok(), Some(VoteChoice::Reject));
		assert!("maybe".parse::<VoteChoice>().is_err());
		assert_eq!(VoteChoice::Reject.to_string(), "reject");
	}
}
