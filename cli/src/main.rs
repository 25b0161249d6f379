use anyhow::{anyhow, Error};
use ballots::BallotTimeline;
use clap::Parser;
use cli::{
	app::App,
	args::{Args, Command},
	listing::{load_ballots, BallotWatcher},
	render,
};
use log::info;
use primitives::*;
use std::time::Duration;
use system::{ballot::Ballot, config::Config, errors::ClientError};
use ui::{create_ballot, FormFieldKind, NewBallotForm, NewBallotTimeline, UiState};
use util::{convert::parse_address, generic::now_seconds};

#[tokio::main]
async fn main() -> Result<(), Error> {
	pretty_env_logger::init();
	let args = Args::parse();

	Config::new(Config::load(&args.config)?).await;
	let config = Config::get_config().await?;
	info!("{config}");

	let app = App::build(config).await?;

	match args.command {
		Command::Accounts => {
			app.connect(args.account).await?;
			let state = app.web3.snapshot().await;
			for (index, address) in state.wallet_accounts.iter().enumerate() {
				println!("{}", render::account_line(index, address, state.selected_account == Some(*address)));
			}
		},
		Command::List { pages } => {
			let account = app.connect(args.account).await?;
			let registry = app.registry()?;
			registry.init(account).await?;

			let mut loaded = 1;
			while !registry.all_paginated().await && pages.map_or(true, |pages| loaded < pages) {
				if !registry.load_next_page(account).await? {
					break
				}
				loaded += 1;
			}

			let addresses = registry.addresses().await;
			if addresses.is_empty() {
				println!("No ballots yet");
			}
			for ballot in load_ballots(&addresses, account, app.ballot_factory()?, app.notifier.clone()).await {
				print_ballot(&ballot);
			}
		},
		Command::Show { address } => {
			let account = app.connect(args.account).await?;
			let item = app.ballot_item(parse_address(&address)?).await?;
			item.load(Some(account)).await?;
			let ballot = item.ballot().await.ok_or_else(|| anyhow!("Ballot {address} could not be loaded"))?;
			print_ballot(&ballot);
		},
		Command::Create { title, description } => {
			let mut form = NewBallotForm::new();
			form.set_value(FormFieldKind::Title, title);
			form.set_value(FormFieldKind::Description, description);
			if !form.validate() {
				let errors: Vec<String> =
					form.errors().into_iter().map(|(field, message)| format!("{field}: {message}")).collect();
				return Err(anyhow!("Invalid ballot: {}", errors.join(", ")))
			}

			app.connect(args.account).await?;
			let preview = NewBallotTimeline::new(now_seconds());
			if let Some((date, time)) = preview.closes_label() {
				println!("Voting will close {date} at {time}");
			}

			let ui = UiState::new();
			ui.open_new_ballot_modal().await;
			let manager = app.ballots_manager()?;
			let created = create_ballot(&ui, &mut form, &app.web3, manager.as_ref(), app.notifier.as_ref())
				.await?
				.ok_or_else(|| anyhow!("Ballot was not submitted"))?;
			println!("Transaction {:?}", created.transaction_hash);
			if let Some(ballot_address) = created.ballot_address {
				println!("Ballot {ballot_address:?}");
			}
		},
		Command::Vote { address, choice } => {
			let account = app.connect(args.account).await?;
			let item = app.ballot_item(parse_address(&address)?).await?;
			item.load(Some(account)).await?;
			let ballot = item.ballot().await.ok_or_else(|| anyhow!("Ballot {address} could not be loaded"))?;
			if !ballot.can_vote {
				return Err(anyhow!("Account {account:?} cannot vote on {address} ({})", ballot.state))
			}

			let provider = app.web3.provider().ok_or(ClientError::NotConnected)?;
			if let Some(hash) = item.cast_vote(choice, Some(account), provider.as_ref()).await? {
				println!("Vote {choice} cast in {hash:?}");
			}
		},
		Command::Watch => {
			let account = app.connect(args.account).await?;
			watch(&app, account).await?;
		},
	}

	Ok(())
}

fn print_ballot(ballot: &Ballot) {
	let timeline = BallotTimeline::for_ballot(ballot, now_seconds());
	for line in render::ballot_details(ballot, &timeline) {
		println!("{line}");
	}
}

async fn watch(app: &App, account: Address) -> Result<(), Error> {
	let registry = app.registry()?;
	registry.init(account).await?;
	let _new_ballots = registry.listen(account).await?;

	let mut watcher = BallotWatcher::new(account, app.ballot_factory()?, app.notifier.clone());
	let mut ticker = tokio::time::interval(Duration::from_secs(1));
	let shutdown = tokio::signal::ctrl_c();
	tokio::pin!(shutdown);

	loop {
		tokio::select! {
			_ = &mut shutdown => break,
			_ = ticker.tick() => {
				for ballot in watcher.watch_new(&registry.addresses().await).await {
					println!("{}", render::ballot_summary(&ballot));
				}
				for ballot in watcher.changed().await {
					println!("{}", render::ballot_summary(&ballot));
					println!("  {}", render::tally_line(&ballot.results));
				}
			},
		}
	}

	info!("Stopped watching {} ballots, {} abandoned", watcher.watched(), watcher.abandoned());
	Ok(())
}
