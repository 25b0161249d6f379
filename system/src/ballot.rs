use crate::ballot_state::{get_ballot_state, BallotState, VotingTerm};
use anyhow::{anyhow, Error};
use primitives::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VotingResults {
	pub accept: VoteCount,
	pub reject: VoteCount,
	pub total: VoteCount,
}

impl VotingResults {
	pub fn new(accept: VoteCount, reject: VoteCount, total: VoteCount) -> VotingResults {
		VotingResults { accept, reject, total }
	}

	/// Votes of whichever side is ahead
	pub fn leading_count(&self) -> VoteCount {
		self.accept.max(self.reject)
	}

	pub fn progress_max(&self) -> VoteCount {
		if self.total == 0 {
			100
		} else {
			self.total
		}
	}
}

/// Tally as encoded on chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawVotingResults {
	pub accept: U256,
	pub reject: U256,
	pub total: U256,
}

impl From<RawVotingResults> for VotingResults {
	fn from(raw: RawVotingResults) -> Self {
		VotingResults {
			accept: saturating_u64(raw.accept),
			reject: saturating_u64(raw.reject),
			total: saturating_u64(raw.total),
		}
	}
}

/// Return value of the ballot contract's `getData()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotData {
	pub state: U256,
	pub can_vote: bool,
	pub created_at: U256,
	pub closes_at: U256,
	pub is_creator: bool,
	pub title: String,
	pub description: String,
	pub results: RawVotingResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
	pub address: Address,
	pub title: String,
	pub description: String,
	pub created_at: TimeStamp,
	pub closes_at: TimeStamp,
	pub can_vote: bool,
	pub is_creator: bool,
	pub results: VotingResults,
	pub state: BallotState,
}

impl Ballot {
	pub fn new(address: Address, data: BallotData) -> Result<Ballot, Error> {
		let term = VotingTerm::try_from(saturating_u64(data.state))?;
		let results: VotingResults = data.results.into();

		Ok(Ballot {
			address,
			title: data.title,
			description: data.description,
			created_at: saturating_u64(data.created_at),
			closes_at: saturating_u64(data.closes_at),
			can_vote: data.can_vote,
			is_creator: data.is_creator,
			state: get_ballot_state(term, &results),
			results,
		})
	}

	pub fn term(&self) -> VotingTerm {
		self.state.term()
	}

	/// A `VoteCast` event can only be emitted while the ballot is open
	pub fn apply_vote_cast(&mut self, results: VotingResults) {
		self.results = results;
		self.state = get_ballot_state(VotingTerm::Open, &self.results);
	}

	pub fn mark_voted(&mut self) {
		self.can_vote = false;
	}

	pub fn headline(&self) -> &'static str {
		match self.state {
			BallotState::NotStarted => "Voting has not started yet",
			BallotState::PreliminaryAccepted => "Accept is winning!",
			BallotState::PreliminaryRejected => "Reject is winning!",
			BallotState::PreliminaryDraw if self.results.total == 0 => "Cast the first vote!",
			BallotState::PreliminaryDraw => "It's a tie!",
			BallotState::Accepted => "Accepted!",
			BallotState::Rejected => "Rejected!",
			BallotState::Draw => "It's a draw!",
		}
	}
}

impl fmt::Display for Ballot {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"Ballot {{address: {:?}, title: {}, state: {}, accept: {}, reject: {}, total: {}}}",
			self.address,
			self.title,
			self.state,
			self.results.accept,
			self.results.reject,
			self.results.total
		)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteChoice {
	Accept,
	Reject,
}

impl fmt::Display for VoteChoice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			VoteChoice::Accept => write!(f, "accept"),
			VoteChoice::Reject => write!(f, "reject"),
		}
	}
}

impl FromStr for VoteChoice {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_lowercase().as_str() {
			"accept" | "yay" | "yes" => Ok(VoteChoice::Accept),
			"reject" | "nay" | "no" => Ok(VoteChoice::Reject),
			_ => Err(anyhow!("Invalid vote {value}, expected accept or reject")),
		}
	}
}

pub fn saturating_u64(value: U256) -> u64 {
	if value > U256::from(u64::MAX) {
		u64::MAX
	} else {
		value.as_u64()
	}
}
