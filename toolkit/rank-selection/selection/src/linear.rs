use crate::*;
use alloc::vec::Vec;

/// Set of pool indices that were already selected in a single run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageMask {
	used: Vec<bool>,
	used_count: usize,
}

impl UsageMask {
	/// Creates a mask with no index used, for a pool of `pool_len` items.
	///
	/// Fails with [SelectionError::ResourceExhausted] if the mask can't be allocated.
	pub fn try_new(pool_len: usize) -> Result<Self, SelectionError> {
		let mut used = Vec::new();
		used.try_reserve_exact(pool_len)
			.map_err(|_| SelectionError::ResourceExhausted { requested: pool_len })?;
		used.resize(pool_len, false);
		Ok(Self { used, used_count: 0 })
	}

	/// Whether `index` was selected already. Indices out of the pool bounds are never used.
	pub fn is_used(&self, index: usize) -> bool {
		self.used.get(index).copied().unwrap_or(false)
	}

	/// Marks `index` as used. Returns `false` if it was already used or is out of the pool bounds.
	pub fn mark(&mut self, index: usize) -> bool {
		match self.used.get_mut(index) {
			Some(used) if !*used => {
				*used = true;
				self.used_count += 1;
				true
			},
			_ => false,
		}
	}

	/// Number of pool items the mask tracks
	pub fn pool_len(&self) -> usize {
		self.used.len()
	}

	/// Number of pool items not selected yet
	pub fn unused_count(&self) -> usize {
		self.used.len() - self.used_count
	}
}

/// Resolves every rank by scanning the pool from its first item, counting the unused ones.
pub struct LinearResolver {
	mask: UsageMask,
}

impl LinearResolver {
	/// Creates a resolver for a pool of `pool_len` items, none of them used.
	///
	/// Fails with [SelectionError::ResourceExhausted] if its [UsageMask] can't be allocated.
	pub fn try_new(pool_len: usize) -> Result<Self, SelectionError> {
		Ok(Self { mask: UsageMask::try_new(pool_len)? })
	}

	/// Pool items selected so far
	pub fn mask(&self) -> &UsageMask {
		&self.mask
	}

	fn find_unused(&self, rank: Rank) -> Option<usize> {
		let mut skip_count: usize = 0;
		for (index, used) in self.mask.used.iter().enumerate() {
			if *used {
				continue;
			}
			if skip_count == rank {
				return Some(index);
			}
			skip_count += 1;
		}
		None
	}
}

impl RankResolver for LinearResolver {
	fn resolve(&mut self, rank: Rank) -> Option<usize> {
		// nothing can resolve, don't bother scanning
		if rank >= self.mask.unused_count() {
			return None;
		}
		let index = self.find_unused(rank)?;
		self.mask.mark(index);
		Some(index)
	}

	fn remaining(&self) -> usize {
		self.mask.unused_count()
	}
}
