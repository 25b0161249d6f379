use clap::{Parser, Subcommand};
use std::path::PathBuf;
use system::{ballot::VoteChoice, config::DEFAULT_CONFIG_FILE};

/// Browse, create and vote on ballots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	#[arg(long, default_value = DEFAULT_CONFIG_FILE)]
	pub config: PathBuf,
	/// Index of the wallet account to use
	#[arg(long)]
	pub account: Option<usize>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List the wallet's accounts
	Accounts,
	/// List ballots, newest first
	List {
		/// Pages to load, at least one; all of them when omitted
		#[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
		pages: Option<u64>,
	},
	/// Show the details of one ballot
	Show {
		address: String,
	},
	/// Create a ballot that stays open for one week
	Create {
		#[arg(long)]
		title: String,
		#[arg(long)]
		description: String,
	},
	/// Cast an accept or reject vote
	Vote {
		address: String,
		choice: VoteChoice,
	},
	/// Follow new ballots and votes until interrupted
	Watch,
}
