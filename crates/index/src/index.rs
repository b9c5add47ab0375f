// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use rowdex_column::{Columns, KeyColumns};
use tracing::{debug, instrument};

use crate::{
	GroupId, IndexConfig, IndexError, RowEquivalence, RowGroup, ValueEquivalence,
	discovery::{Buckets, discover},
	sort::{GroupLayout, counting_sort},
};

/// Partition of a table's rows into equivalence classes over a set of key columns.
///
/// Built once from a borrowed table and immutable afterwards. The borrow keeps
/// the table from being mutated for as long as the index lives.
#[derive(Debug)]
pub struct RowGroupIndex<'a, O = ValueEquivalence> {
	pub(crate) keys: KeyColumns<'a>,
	pub(crate) oracle: O,
	pub(crate) config: IndexConfig,
	pub(crate) representatives: Vec<usize>,
	pub(crate) groups: Vec<RowGroup>,
	pub(crate) layout: GroupLayout,
	pub(crate) buckets: Option<Buckets>,
}

impl<'a> RowGroupIndex<'a> {
	/// Indexes `table` on the named key columns with [`ValueEquivalence`].
	pub fn build(table: &'a Columns, keys: &[&str], skip_undefined: bool) -> crate::Result<Self> {
		let keys = table.key_columns(keys)?;
		let config = IndexConfig::builder().skip_undefined(skip_undefined).build();
		Self::build_with(keys, ValueEquivalence::default(), config)
	}
}

impl<'a, O: RowEquivalence> RowGroupIndex<'a, O> {
	#[instrument(name = "index::build", level = "trace", skip_all, fields(rows = keys.row_count(), keys = keys.len()))]
	pub fn build_with(keys: KeyColumns<'a>, oracle: O, config: IndexConfig) -> crate::Result<Self> {
		if keys.is_empty() {
			return Err(IndexError::NoKeyColumns.into());
		}

		let mut groups = vec![RowGroup::Excluded; keys.row_count()];
		let slots = discover(&keys, &oracle, &config, &mut groups);
		let layout = counting_sort(&groups, slots.group_count());

		debug!(
			rows = groups.len(),
			groups = slots.group_count(),
			excluded = groups.len() - layout.excluded,
			hashed = slots.buckets.is_some(),
			"row group index built"
		);

		Ok(Self {
			keys,
			oracle,
			config,
			representatives: slots.representatives,
			groups,
			layout,
			buckets: slots.buckets,
		})
	}
}

impl<'a, O> RowGroupIndex<'a, O> {
	/// The indexed table.
	pub fn source(&self) -> &'a Columns {
		self.keys.table()
	}

	pub fn keys(&self) -> &KeyColumns<'a> {
		&self.keys
	}

	pub fn oracle(&self) -> &O {
		&self.oracle
	}

	pub fn config(&self) -> &IndexConfig {
		&self.config
	}

	pub fn row_count(&self) -> usize {
		self.groups.len()
	}

	/// Number of groups, excluded rows not counted.
	pub fn group_count(&self) -> usize {
		self.representatives.len()
	}

	pub fn is_hashed(&self) -> bool {
		self.buckets.is_some()
	}

	/// Group of `row`. Panics if `row` is out of bounds.
	pub fn group_id(&self, row: usize) -> RowGroup {
		self.groups[row]
	}

	/// Group of every row, indexed by row position.
	pub fn row_groups(&self) -> &[RowGroup] {
		&self.groups
	}

	/// Rows of `group` in ascending order. Panics if `group` is not a group of this index.
	pub fn members(&self, group: GroupId) -> &[usize] {
		&self.layout.permutation[self.group_range(group)]
	}

	/// Position range of `group` inside [`permutation`](Self::permutation).
	pub fn group_range(&self, group: GroupId) -> Range<usize> {
		self.layout.starts[group.index()]..self.layout.ends[group.index()]
	}

	/// First row of `group` in row order.
	pub fn representative(&self, group: GroupId) -> usize {
		self.representatives[group.index()]
	}

	pub fn representatives(&self) -> &[usize] {
		&self.representatives
	}

	/// Every row position, ordered so rows of the same group are contiguous.
	pub fn permutation(&self) -> &[usize] {
		&self.layout.permutation
	}

	/// Rows kept out of every group because of an undefined key value.
	pub fn excluded_rows(&self) -> &[usize] {
		&self.layout.permutation[self.layout.excluded..]
	}

	/// Groups with their member rows, in discovery order.
	pub fn groups(&self) -> impl ExactSizeIterator<Item = (GroupId, &[usize])> + '_ {
		(0..self.group_count()).map(move |g| (GroupId(g), self.members(GroupId(g))))
	}
}
