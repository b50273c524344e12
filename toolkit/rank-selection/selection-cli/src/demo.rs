use crate::output::write_outcome;
use crate::*;
use std::io::Write;

const DEMO_RANKS: [Rank; 3] = [0, 1, 1];
const DEMO_POOL: [&str; 4] = ["a", "b", "c", "d"];

/// Selects items with ranks `0,1,1` from the pool `a,b,c,d`.
///
/// Rank 0 picks `a`. Rank 1 then picks the second of the remaining `b,c,d`, which is `c`.
/// The last rank 1 picks the second of `b,d`, so the printed selection is `a c d`.
#[derive(clap::Parser, Debug)]
pub struct Command {
	/// Selection algorithm
	#[arg(long, default_value = "linear")]
	strategy: SelectionStrategy,
	/// Output format
	#[arg(long, default_value = "text")]
	output: OutputFormat,
}

impl Command {
	/// Executes the command
	pub fn execute(self, output: &mut impl Write) -> anyhow::Result<()> {
		let pool = DEMO_POOL.map(String::from);
		log::debug!("Selecting ranks {DEMO_RANKS:?} from pool {pool:?}");
		let outcome = self.strategy.select_records(&DEMO_RANKS, &pool)?;
		write_outcome(self.output, &outcome, output)
	}
}
