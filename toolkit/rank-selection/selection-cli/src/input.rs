use anyhow::Context;
use rank_selection::RawRank;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Pool item as it appears in input JSON, either a bare label or an object with `label` field
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum PoolEntry {
	Label(String),
	Labelled { label: String },
}

impl From<PoolEntry> for String {
	fn from(entry: PoolEntry) -> Self {
		match entry {
			PoolEntry::Label(label) | PoolEntry::Labelled { label } => label,
		}
	}
}

#[derive(Deserialize, Debug)]
struct SelectionInput {
	ranks: Vec<RawRank>,
	pool: Vec<PoolEntry>,
}

pub(crate) fn load_ranks(file: &Path) -> anyhow::Result<Vec<RawRank>> {
	let file_name = file.display();
	let file = std::fs::File::open(file)
		.with_context(|| format!("Ranks file {file_name} can't be opened"))?;
	serde_json::from_reader(file).with_context(|| format!("Ranks file {file_name} is invalid"))
}

pub(crate) fn load_pool(file: &Path) -> anyhow::Result<Vec<String>> {
	let file_name = file.display();
	let file = std::fs::File::open(file)
		.with_context(|| format!("Pool file {file_name} can't be opened"))?;
	let entries: Vec<PoolEntry> = serde_json::from_reader(file)
		.with_context(|| format!("Pool file {file_name} is invalid"))?;
	Ok(entries.into_iter().map(String::from).collect())
}

/// Reads ranks and pool from a single JSON document of form `{"ranks": [...], "pool": [...]}`
pub(crate) fn read_selection_input(reader: impl Read) -> anyhow::Result<(Vec<RawRank>, Vec<String>)> {
	let SelectionInput { ranks, pool } =
		serde_json::from_reader(reader).context("Standard input is not a valid selection input")?;
	Ok((ranks, pool.into_iter().map(String::from).collect()))
}
