use crate::indexed::IndexedResolver;
use crate::linear::LinearResolver;
use crate::*;
use alloc::vec::Vec;

/// Selection of a single pool item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRecord<T> {
	/// Position of the rank in the rank sequence
	pub position: usize,
	/// The rank that was resolved
	pub rank: Rank,
	/// Index of the selected item in the pool
	pub pool_index: usize,
	/// The selected item
	pub item: T,
}

/// Result of a selection run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionOutcome<T> {
	/// Selected items, in the order of ranks that selected them
	pub records: Vec<SelectionRecord<T>>,
	/// Positions of ranks that did not resolve to any unused item
	pub skipped: Vec<usize>,
}

impl<T> SelectionOutcome<T> {
	/// Drops the record details, leaving only selected items
	pub fn into_items(self) -> Vec<T> {
		self.records.into_iter().map(|record| record.item).collect()
	}
}

/// Selects items from `pool` without replacement: every rank `r` picks the `r`-th item among
/// the items not selected before. Ranks that do not point to any unused item are skipped.
///
/// Uses the [Strategy::Linear] algorithm.
pub fn select<T: Clone>(ranks: &[Rank], pool: &[T]) -> Result<Vec<T>, SelectionError> {
	select_with(Strategy::Linear, ranks, pool)
}

/// Same as [select] but lets the caller choose the [Strategy]
pub fn select_with<T: Clone>(
	strategy: Strategy,
	ranks: &[Rank],
	pool: &[T],
) -> Result<Vec<T>, SelectionError> {
	Ok(select_records_with(strategy, ranks, pool)?.into_items())
}

/// Same as [select] but returns a [SelectionRecord] for every selected item and the positions of
/// skipped ranks
pub fn select_records<T: Clone>(
	ranks: &[Rank],
	pool: &[T],
) -> Result<SelectionOutcome<T>, SelectionError> {
	select_records_with(Strategy::Linear, ranks, pool)
}

/// Same as [select_records] but lets the caller choose the [Strategy]
pub fn select_records_with<T: Clone>(
	strategy: Strategy,
	ranks: &[Rank],
	pool: &[T],
) -> Result<SelectionOutcome<T>, SelectionError> {
	match strategy {
		Strategy::Linear => run(LinearResolver::try_new(pool.len())?, ranks, pool),
		Strategy::Indexed => run(IndexedResolver::try_new(pool.len())?, ranks, pool),
	}
}

/// Validates `raw_ranks` with [validate_ranks] and then runs [select]
pub fn select_raw<T: Clone>(raw_ranks: &[RawRank], pool: &[T]) -> Result<Vec<T>, SelectionError> {
	select(&validate_ranks(raw_ranks)?, pool)
}

/// Converts raw ranks to [Rank]s.
///
/// Fails on the first negative value with [SelectionError::InvalidRank]. Values too big for
/// [Rank] are saturated, they could never resolve anyway.
pub fn validate_ranks(raw_ranks: &[RawRank]) -> Result<Vec<Rank>, SelectionError> {
	raw_ranks
		.iter()
		.enumerate()
		.map(|(position, &value)| {
			if value < 0 {
				Err(SelectionError::InvalidRank { position, value })
			} else {
				Ok(Rank::try_from(value).unwrap_or(Rank::MAX))
			}
		})
		.collect()
}

fn run<T: Clone, R: RankResolver>(
	mut resolver: R,
	ranks: &[Rank],
	pool: &[T],
) -> Result<SelectionOutcome<T>, SelectionError> {
	let max_selected = ranks.len().min(pool.len());
	let mut records = Vec::new();
	records
		.try_reserve_exact(max_selected)
		.map_err(|_| SelectionError::ResourceExhausted { requested: max_selected })?;
	let mut skipped = Vec::new();

	for (position, &rank) in ranks.iter().enumerate() {
		match resolver.resolve(rank) {
			Some(pool_index) => records.push(SelectionRecord {
				position,
				rank,
				pool_index,
				item: pool[pool_index].clone(),
			}),
			None => {
				log::debug!(
					"Rank {rank} at position {position} skipped, {} unused items left",
					resolver.remaining()
				);
				skipped.push(position);
			},
		}
	}

	Ok(SelectionOutcome { records, skipped })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::*;
	use quickcheck_macros::quickcheck;

	fn labels(labels: &[&str]) -> Vec<String> {
		labels.iter().map(|l| l.to_string()).collect()
	}

	#[test]
	fn reference_scenario() {
		let selected = select(&[0, 1, 1], &labels(&["a", "b", "c", "d"])).unwrap();
		assert_eq!(selected, labels(&["a", "c", "d"]));
	}

	#[test]
	fn exhausted_pool_skips_remaining_ranks() {
		let selected = select(&[0, 0, 0, 0, 5], &labels(&["x"])).unwrap();
		assert_eq!(selected, labels(&["x"]));
	}

	#[test]
	fn records_describe_every_selection() {
		let outcome = select_records(&[3, 0, 7, 1], &["a", "b", "c", "d"]).unwrap();
		assert_eq!(
			outcome.records,
			vec![
				SelectionRecord { position: 0, rank: 3, pool_index: 3, item: "d" },
				SelectionRecord { position: 1, rank: 0, pool_index: 0, item: "a" },
				SelectionRecord { position: 3, rank: 1, pool_index: 2, item: "c" },
			]
		);
		assert_eq!(outcome.skipped, vec![2]);
	}

	#[test]
	fn too_large_rank_consumes_nothing() {
		let outcome = select_records(&[4, 0], &["a", "b", "c", "d"]).unwrap();
		assert_eq!(outcome.skipped, vec![0]);
		assert_eq!(outcome.into_items(), vec!["a"]);
	}

	#[test]
	fn negative_rank_is_rejected_with_its_position() {
		assert_eq!(
			select_raw(&[0, 2, -1, -5], &["a", "b", "c"]),
			Err(SelectionError::InvalidRank { position: 2, value: -1 })
		);
	}

	#[test]
	fn raw_ranks_are_selected_when_valid() {
		assert_eq!(select_raw(&[1, 0], &["a", "b", "c"]), Ok(vec!["b", "a"]));
	}

	#[test]
	fn huge_raw_rank_is_skipped() {
		assert!(validate_ranks(&[RawRank::MAX]).is_ok());
		assert_eq!(select_raw(&[RawRank::MAX, 0], &["a"]), Ok(vec!["a"]));
	}

	#[test]
	fn allocation_failure_selects_nothing() {
		let pool = [(); usize::MAX];
		for strategy in [Strategy::Linear, Strategy::Indexed] {
			assert_eq!(
				select_with(strategy, &[0], &pool),
				Err(SelectionError::ResourceExhausted { requested: usize::MAX })
			);
		}
		assert_eq!(
			select(&[0, 1], &pool),
			Err(SelectionError::ResourceExhausted { requested: usize::MAX })
		);
	}

	#[test]
	fn indexed_strategy_reference_scenario() {
		let selected = select_with(Strategy::Indexed, &[0, 1, 1], &["a", "b", "c", "d"]).unwrap();
		assert_eq!(selected, vec!["a", "c", "d"]);
	}

	#[quickcheck]
	fn selection_is_deterministic(ranks: TestRanks, pool: TestPool) {
		assert_eq!(select(&ranks.0, &pool.0), select(&ranks.0, &pool.0));
	}

	#[quickcheck]
	fn no_pool_item_is_selected_twice(ranks: TestRanks, pool: TestPool) {
		let outcome = select_records(&ranks.0, &pool.0).unwrap();
		let indices: Vec<usize> = outcome.records.iter().map(|r| r.pool_index).collect();
		assert_unique!(indices);
		assert_subset!(String, outcome.into_items(), pool.0);
	}

	#[quickcheck]
	fn records_follow_rank_order(ranks: TestRanks, pool: TestPool) {
		let outcome = select_records(&ranks.0, &pool.0).unwrap();
		let positions: Vec<usize> = outcome.records.iter().map(|r| r.position).collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
		for record in &outcome.records {
			assert_eq!(record.rank, ranks.0[record.position]);
		}
	}

	#[quickcheck]
	fn every_rank_is_either_selected_or_skipped(ranks: TestRanks, pool: TestPool) {
		let outcome = select_records(&ranks.0, &pool.0).unwrap();
		assert_eq!(outcome.records.len() + outcome.skipped.len(), ranks.0.len());
		assert!(outcome.records.len() <= pool.0.len());
	}

	#[quickcheck]
	fn rank_is_skipped_iff_not_enough_unused_items(ranks: TestRanks, pool: TestPool) {
		let outcome = select_records(&ranks.0, &pool.0).unwrap();
		let mut unused = pool.0.len();
		let mut records = outcome.records.iter().peekable();
		for (position, rank) in ranks.0.iter().enumerate() {
			if *rank < unused {
				let record = records.next().unwrap();
				assert_eq!(record.position, position);
				unused -= 1;
			} else {
				assert!(outcome.skipped.contains(&position));
			}
		}
		assert!(records.peek().is_none());
	}

	#[quickcheck]
	fn empty_pool_selects_nothing(ranks: TestRanks) {
		let pool: Vec<String> = vec![];
		assert_eq!(select(&ranks.0, &pool), Ok(vec![]));
	}

	#[quickcheck]
	fn empty_ranks_select_nothing(pool: TestPool) {
		assert_eq!(select(&[], &pool.0), Ok(vec![]));
	}

	#[quickcheck]
	fn strategies_agree(ranks: TestRanks, pool: TestPool) {
		assert_eq!(
			select_records_with(Strategy::Linear, &ranks.0, &pool.0),
			select_records_with(Strategy::Indexed, &ranks.0, &pool.0)
		);
	}

	#[quickcheck]
	fn rank_zero_selects_pool_in_order(pool: TestPool) {
		let ranks = vec![0; pool.0.len()];
		assert_eq!(select(&ranks, &pool.0), Ok(pool.0));
	}
}
