use primitives::*;
use system::{ballot::Ballot, ballot_state::VotingTerm};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl RemainingTime {
	pub fn from_seconds(total: u64) -> Option<RemainingTime> {
		if total == 0 {
			return None
		}
		Some(RemainingTime {
			days: total / SECONDS_PER_DAY,
			hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
			minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
			seconds: total % SECONDS_PER_MINUTE,
		})
	}
}

/// Creation and closing times of a ballot with a one second countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotTimeline {
	term: VotingTerm,
	created_at: TimeStamp,
	closes_at: TimeStamp,
	remaining: u64,
}

impl BallotTimeline {
	pub fn new(term: VotingTerm, created_at: TimeStamp, closes_at: TimeStamp, now: TimeStamp) -> BallotTimeline {
		BallotTimeline { term, created_at, closes_at, remaining: closes_at.saturating_sub(now) }
	}

	pub fn for_ballot(ballot: &Ballot, now: TimeStamp) -> BallotTimeline {
		BallotTimeline::new(ballot.term(), ballot.created_at, ballot.closes_at, now)
	}

	pub fn term(&self) -> VotingTerm {
		self.term
	}

	/// Counts one second down; only an open ballot counts
	pub fn tick(&mut self) {
		if self.term == VotingTerm::Open {
			self.remaining = self.remaining.saturating_sub(1);
		}
	}

	pub fn remaining_seconds(&self) -> u64 {
		self.remaining
	}

	pub fn remaining_units(&self) -> Option<RemainingTime> {
		if self.term != VotingTerm::Open {
			return None
		}
		RemainingTime::from_seconds(self.remaining)
	}

	pub fn created_label(&self) -> Option<(String, String)> {
		timestamp_label(self.created_at)
	}

	pub fn closes_label(&self) -> Option<(String, String)> {
		timestamp_label(self.closes_at)
	}

	pub fn results_label(&self) -> &'static str {
		if self.term == VotingTerm::Closed {
			"Final results"
		} else {
			"See partial results"
		}
	}
}

fn timestamp_label(ts: TimeStamp) -> Option<(String, String)> {
	if ts == 0 {
		return None
	}
	util::generic::format_timestamp(ts)
}
