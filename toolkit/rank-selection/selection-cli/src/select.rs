use crate::input::*;
use crate::output::write_outcome;
use crate::*;
use anyhow::bail;
use rank_selection::RawRank;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Selects pool items by rank and prints them.
///
/// Every rank picks the item at that position among the pool items not selected yet.
/// Ranks that don't point to any unused item are skipped. Negative ranks are rejected.
///
/// Ranks and pool are taken from arguments or files. When none of them is given,
/// a JSON object with `ranks` and `pool` fields is read from the standard input.
#[derive(clap::Parser, Debug)]
pub struct Command {
	/// Comma separated ranks, eg. `0,1,1`
	#[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "ranks_file")]
	ranks: Option<Vec<RawRank>>,
	/// Comma separated pool items, eg. `a,b,c,d`. Items must not be empty
	#[arg(long, value_delimiter = ',', conflicts_with = "pool_file")]
	pool: Option<Vec<String>>,
	/// File containing JSON list of ranks
	#[arg(long)]
	ranks_file: Option<PathBuf>,
	/// File containing JSON list of pool items, each being a string or an object with `label` field
	#[arg(long)]
	pool_file: Option<PathBuf>,
	/// Selection algorithm
	#[arg(long, default_value = "linear")]
	strategy: SelectionStrategy,
	/// Output format
	#[arg(long, default_value = "text")]
	output: OutputFormat,
}

impl Command {
	/// Executes the command, reading standard input from `stdin` when needed
	pub fn execute(self, stdin: impl Read, output: &mut impl Write) -> anyhow::Result<()> {
		let (raw_ranks, pool) = self.read_input(stdin)?;

		log::debug!("Number of ranks: {}", raw_ranks.len());
		log::debug!("Pool size: {}", pool.len());

		let ranks = rank_selection::validate_ranks(&raw_ranks)?;
		let outcome = self.strategy.select_records(&ranks, &pool)?;

		log::debug!(
			"Selected {} items using {} strategy, skipped ranks at positions {:?}",
			outcome.records.len(),
			self.strategy,
			outcome.skipped
		);

		write_outcome(self.output, &outcome, output)
	}

	fn read_input(&self, stdin: impl Read) -> anyhow::Result<(Vec<RawRank>, Vec<String>)> {
		let ranks = match (&self.ranks, &self.ranks_file) {
			(Some(ranks), _) => Some(ranks.clone()),
			(None, Some(file)) => Some(load_ranks(file)?),
			(None, None) => None,
		};
		let pool = match (&self.pool, &self.pool_file) {
			(Some(pool), _) => Some(pool.clone()),
			(None, Some(file)) => Some(load_pool(file)?),
			(None, None) => None,
		};
		let (ranks, pool) = match (ranks, pool) {
			(Some(ranks), Some(pool)) => (ranks, pool),
			(None, None) => read_selection_input(stdin)?,
			(Some(_), None) => bail!("Pool is missing, use --pool or --pool-file"),
			(None, Some(_)) => bail!("Ranks are missing, use --ranks or --ranks-file"),
		};
		// an empty label would print the same as no selection at all
		if let Some(position) = pool.iter().position(|item| item.is_empty()) {
			bail!("Pool item at position {position} is empty");
		}
		Ok((ranks, pool))
	}
}
