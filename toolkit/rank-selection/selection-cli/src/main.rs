//! Executable crate for selecting pool items without replacement by positional rank.
//!
//! Every rank `r` picks the `r`-th item, counting from 0, among the pool items that were not
//! picked yet. Ranks that don't point to any unused item are skipped.
//!
//! # Usage
//!
//! The tool exposes two commands:
//! - [select]: selects items for the given ranks and pool
//! - [demo]: runs the selection of ranks `0,1,1` from the pool `a,b,c,d`
//!
//! Ranks and pool can be passed as comma separated arguments:
//! ```bash
//! choose select --ranks 0,1,1 --pool a,b,c,d
//! ```
//! or as JSON files, ranks being a list of integers and pool a list of labels, eg.:
//! ```json
//! ["a", "b", { "label": "c" }]
//! ```
//! When neither ranks nor pool are given, the command reads a JSON object from the standard input:
//! ```json
//! { "ranks": [0, 1, 1], "pool": ["a", "b", "c", "d"] }
//! ```
//!
//! Selected items are printed space separated in a single line, or as a JSON array of selection
//! records with `--output json`.
//!
//! [select]: select::Command
//! [demo]: demo::Command
#![deny(missing_docs)]

use clap::*;
use rank_selection::{Rank, SelectionError, SelectionOutcome, Strategy};
use std::fmt::Display;
use std::io;

mod demo;
mod input;
mod output;
mod select;

/// Top level command of the executable
#[derive(clap::Parser, Debug)]
#[command(name = "choose", version, about)]
pub enum TopCommand {
	/// Selects pool items by rank and prints them
	Select(select::Command),
	/// Selects items of the example pool `a,b,c,d` with ranks `0,1,1`
	Demo(demo::Command),
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum SelectionStrategy {
	/// Scans the pool for every rank
	#[default]
	Linear,
	/// Uses an order statistics tree, faster for big pools
	Indexed,
}

impl Display for SelectionStrategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Self::Linear => "linear",
			Self::Indexed => "indexed",
		})
	}
}

impl SelectionStrategy {
	pub fn select_records(
		&self,
		ranks: &[Rank],
		pool: &[String],
	) -> Result<SelectionOutcome<String>, SelectionError> {
		let strategy = match self {
			Self::Linear => Strategy::Linear,
			Self::Indexed => Strategy::Indexed,
		};
		rank_selection::select_records_with(strategy, ranks, pool)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
	/// Selected items separated by spaces
	#[default]
	Text,
	/// JSON array of selection records
	Json,
}

fn main() -> anyhow::Result<()> {
	env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().init();

	let cmd = TopCommand::parse();

	let mut stdout = io::stdout().lock();
	match cmd {
		TopCommand::Select(cmd) => cmd.execute(io::stdin().lock(), &mut stdout),
		TopCommand::Demo(cmd) => cmd.execute(&mut stdout),
	}
}
