use crate::{ballot::VotingResults, errors::ClientError};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Voting lifecycle phase of a ballot, as numbered by the ballot contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VotingTerm {
	NotStarted = 0,
	Open = 1,
	Closed = 2,
}

impl TryFrom<u64> for VotingTerm {
	type Error = ClientError;

	fn try_from(value: u64) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(VotingTerm::NotStarted),
			1 => Ok(VotingTerm::Open),
			2 => Ok(VotingTerm::Closed),
			_ => Err(ClientError::InvalidVotingTerm(value)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallotState {
	NotStarted,
	PreliminaryAccepted,
	PreliminaryRejected,
	PreliminaryDraw,
	Accepted,
	Rejected,
	Draw,
}

impl BallotState {
	pub fn term(&self) -> VotingTerm {
		match self {
			BallotState::NotStarted => VotingTerm::NotStarted,
			BallotState::PreliminaryAccepted |
			BallotState::PreliminaryRejected |
			BallotState::PreliminaryDraw => VotingTerm::Open,
			BallotState::Accepted | BallotState::Rejected | BallotState::Draw => VotingTerm::Closed,
		}
	}
}

impl fmt::Display for BallotState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			BallotState::NotStarted => "not-started",
			BallotState::PreliminaryAccepted => "preliminary-accepted",
			BallotState::PreliminaryRejected => "preliminary-rejected",
			BallotState::PreliminaryDraw => "preliminary-draw",
			BallotState::Accepted => "accepted",
			BallotState::Rejected => "rejected",
			BallotState::Draw => "draw",
		};
		write!(f, "{name}")
	}
}

/// Classifies a ballot from its term and tally. A draw is exactly `accept == reject`.
pub fn get_ballot_state(term: VotingTerm, results: &VotingResults) -> BallotState {
	let ordering = results.accept.cmp(&results.reject);
	match (term, ordering) {
		(VotingTerm::NotStarted, _) => BallotState::NotStarted,
		(VotingTerm::Open, Ordering::Greater) => BallotState::PreliminaryAccepted,
		(VotingTerm::Open, Ordering::Less) => BallotState::PreliminaryRejected,
		(VotingTerm::Open, Ordering::Equal) => BallotState::PreliminaryDraw,
		(VotingTerm::Closed, Ordering::Greater) => BallotState::Accepted,
		(VotingTerm::Closed, Ordering::Less) => BallotState::Rejected,
		(VotingTerm::Closed, Ordering::Equal) => BallotState::Draw,
	}
}
