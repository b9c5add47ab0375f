// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::RowGroup;

/// Rows laid out contiguously per group.
///
/// `permutation[starts[g]..ends[g]]` holds the rows of group `g` in ascending
/// row order. Excluded rows occupy `permutation[excluded..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupLayout {
	pub(crate) permutation: Vec<usize>,
	pub(crate) starts: Vec<usize>,
	pub(crate) ends: Vec<usize>,
	pub(crate) excluded: usize,
}

/// Counting sort of row positions by group id.
///
/// Excluded rows go to one extra bucket after the last group, so every row
/// appears in the permutation exactly once.
pub(crate) fn counting_sort(groups: &[RowGroup], group_count: usize) -> GroupLayout {
	let bucket = |group: &RowGroup| match group {
		RowGroup::Group(id) => id.index(),
		RowGroup::Excluded => group_count,
	};

	// 1. Count rows per bucket
	let mut counts = vec![0usize; group_count + 1];
	for group in groups {
		counts[bucket(group)] += 1;
	}

	// 2. Prefix sum into start offsets
	let mut starts = Vec::with_capacity(group_count + 1);
	let mut offset = 0;
	for count in &counts {
		starts.push(offset);
		offset += count;
	}

	// 3. Place every row at its bucket cursor
	let mut cursor = starts.clone();
	let mut permutation = vec![0usize; groups.len()];
	for (row, group) in groups.iter().enumerate() {
		let b = bucket(group);
		permutation[cursor[b]] = row;
		cursor[b] += 1;
	}

	// 4. Cursors now sit one past the last row of their bucket
	let excluded = starts.pop().unwrap_or_default();
	cursor.truncate(group_count);

	GroupLayout {
		permutation,
		starts,
		ends: cursor,
		excluded,
	}
}
