use crate::*;
use alloc::vec::Vec;

/// Resolves ranks using a Fenwick (binary indexed) tree over the unused flags of pool items.
///
/// Node `i` (1-based) holds the number of unused items in the range `(i - lowbit(i), i]`,
/// where `lowbit(i)` is the lowest set bit of `i`. Finding the `rank`-th unused item is then
/// a descent over the tree and consuming an item is a walk up the tree, both `O(log n)`.
pub struct IndexedResolver {
	tree: Vec<usize>,
	remaining: usize,
	top_step: usize,
}

fn lowbit(i: usize) -> usize {
	i & i.wrapping_neg()
}

impl IndexedResolver {
	/// Creates a tree with all `pool_len` items unused.
	///
	/// Fails with [SelectionError::ResourceExhausted] if the tree can't be allocated.
	pub fn try_new(pool_len: usize) -> Result<Self, SelectionError> {
		let resource_exhausted = || SelectionError::ResourceExhausted { requested: pool_len };
		let nodes = pool_len.checked_add(1).ok_or_else(resource_exhausted)?;
		let mut tree = Vec::new();
		tree.try_reserve_exact(nodes).map_err(|_| resource_exhausted())?;
		// every item is unused, so each node counts exactly the length of its range
		tree.push(0);
		tree.extend((1..=pool_len).map(lowbit));
		let top_step = match pool_len {
			0 => 0,
			n => 1 << (usize::BITS - 1 - n.leading_zeros()),
		};
		Ok(Self { tree, remaining: pool_len, top_step })
	}

	fn pool_len(&self) -> usize {
		self.tree.len() - 1
	}

	/// 0-based index of the `rank`-th unused item. Requires `rank < self.remaining`.
	fn find_unused(&self, rank: Rank) -> usize {
		let mut position = 0;
		let mut to_skip = rank + 1;
		let mut step = self.top_step;
		while step > 0 {
			let next = position + step;
			if next <= self.pool_len() && self.tree[next] < to_skip {
				position = next;
				to_skip -= self.tree[next];
			}
			step >>= 1;
		}
		position
	}

	fn consume(&mut self, index: usize) {
		let mut node = index + 1;
		while node <= self.pool_len() {
			self.tree[node] -= 1;
			node += lowbit(node);
		}
		self.remaining -= 1;
	}
}

impl RankResolver for IndexedResolver {
	fn resolve(&mut self, rank: Rank) -> Option<usize> {
		if rank >= self.remaining {
			return None;
		}
		let index = self.find_unused(rank);
		self.consume(index);
		Some(index)
	}

	fn remaining(&self) -> usize {
		self.remaining
	}
}
