//! Selection of pool items without replacement by positional rank
//!
//! Given a sequence of ranks and a pool of items, each rank `r` picks the `r`-th pool item
//! (counting from 0) among the items that were not picked yet. The picked item is then removed
//! from further consideration for the rest of the run.
//!
//! A rank that is greater than or equal to the number of still unused items does not resolve to
//! anything. Such rank is skipped: nothing is selected and nothing is consumed. This is not an
//! error. Negative ranks, on the other hand, are rejected by [validate_ranks] before any
//! selection takes place.
//!
//! ```
//! use rank_selection::select;
//!
//! let selected = select(&[0, 1, 1], &["a", "b", "c", "d"]).unwrap();
//! assert_eq!(selected, vec!["a", "c", "d"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Order statistics tree resolving ranks in logarithmic time
pub mod indexed;
/// Usage mask scan resolving ranks in linear time
pub mod linear;
mod select;

pub use select::*;

/// Position of an item among the currently unused pool items, counting from 0
pub type Rank = usize;

/// Rank as received from the outside world, before validation
pub type RawRank = i64;

/// Algorithm used to find the pool item a rank points to.
///
/// Both strategies select exactly the same items for the same input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
	/// Scans the usage mask from the start of the pool for every rank.
	/// `O(ranks * pool)` time.
	#[default]
	Linear,
	/// Keeps counts of unused items in a Fenwick tree.
	/// `O(ranks * log(pool))` time.
	Indexed,
}

/// Errors that abort a whole selection run. No partial result is produced when any of them occurs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum SelectionError {
	/// Memory for tracking used pool items could not be allocated
	#[cfg_attr(
		feature = "std",
		error("Could not allocate selection state for {requested} items")
	)]
	ResourceExhausted {
		/// Number of entries of the state that failed to allocate: pool items for usage tracking,
		/// or selected items for the result
		requested: usize,
	},
	/// Rank is outside of the domain of ranks. It is not the same as a rank that does not resolve,
	/// which is silently skipped.
	#[cfg_attr(
		feature = "std",
		error("Invalid rank {value} at position {position}: ranks must not be negative")
	)]
	InvalidRank {
		/// Position of the rank in the rank sequence
		position: usize,
		/// The rejected value
		value: RawRank,
	},
}

/// Resolves ranks to pool indices, consuming every resolved index.
///
/// Implementations hold the usage state of one selection run only.
pub trait RankResolver {
	/// Finds the pool index of the `rank`-th unused item and marks it used.
	/// Returns `None` without changing any state when there are not enough unused items.
	fn resolve(&mut self, rank: Rank) -> Option<usize>;

	/// Number of pool items that were not selected yet
	fn remaining(&self) -> usize;
}
