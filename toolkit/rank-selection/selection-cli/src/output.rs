use crate::OutputFormat;
use itertools::Itertools;
use rank_selection::{Rank, SelectionOutcome};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct RecordOutput<'a> {
	position: usize,
	rank: Rank,
	pool_index: usize,
	item: &'a str,
}

/// Writes selected items in the requested format, followed by a newline
pub(crate) fn write_outcome(
	format: OutputFormat,
	outcome: &SelectionOutcome<String>,
	output: &mut impl Write,
) -> anyhow::Result<()> {
	match format {
		OutputFormat::Text => {
			writeln!(output, "{}", outcome.records.iter().map(|record| &record.item).join(" "))?
		},
		OutputFormat::Json => {
			let records: Vec<RecordOutput> = (outcome.records.iter())
				.map(|record| RecordOutput {
					position: record.position,
					rank: record.rank,
					pool_index: record.pool_index,
					item: &record.item,
				})
				.collect();
			writeln!(output, "{}", serde_json::to_string(&records)?)?
		},
	}
	Ok(())
}
