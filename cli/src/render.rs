use ballots::{BallotTimeline, RemainingTime};
use primitives::Address;
use system::ballot::{Ballot, VotingResults};
use util::convert::format_address;

/// e.g. "2d 03h 04m 05s"
pub fn remaining_label(remaining: &RemainingTime) -> String {
	format!("{}d {:02}h {:02}m {:02}s", remaining.days, remaining.hours, remaining.minutes, remaining.seconds)
}

pub fn tally_line(results: &VotingResults) -> String {
	let percent = u128::from(results.leading_count()) * 100 / u128::from(results.progress_max());
	format!(
		"accept {} / reject {} / total {} (leading side {percent}%)",
		results.accept, results.reject, results.total
	)
}

pub fn ballot_summary(ballot: &Ballot) -> String {
	format!("{} [{}] {}: {}", format_address(&ballot.address), ballot.state, ballot.title, ballot.headline())
}

pub fn ballot_details(ballot: &Ballot, timeline: &BallotTimeline) -> Vec<String> {
	let mut lines = vec![ballot_summary(ballot), format!("  {}", ballot.description)];
	lines.push(format!("  {}: {}", timeline.results_label(), tally_line(&ballot.results)));

	if let Some((date, time)) = timeline.created_label() {
		lines.push(format!("  Ballot created {date} at {time}"));
	}
	if let Some((date, time)) = timeline.closes_label() {
		lines.push(format!("  Voting closes {date} at {time}"));
	}
	if let Some(remaining) = timeline.remaining_units() {
		lines.push(format!("  Time left {}", remaining_label(&remaining)));
	}
	if ballot.is_creator {
		lines.push("  You created this ballot".to_string());
	}
	if !ballot.can_vote {
		lines.push("  You cannot vote on this ballot".to_string());
	}
	lines
}

pub fn account_line(index: usize, address: &Address, selected: bool) -> String {
	let marker = if selected { "*" } else { " " };
	format!("{marker} [{index}] {}", format_address(address))
}
