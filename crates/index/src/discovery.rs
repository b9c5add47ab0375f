// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use rowdex_column::KeyColumns;
use tracing::{instrument, trace};

use crate::{GroupId, IndexConfig, IndexError, RowEquivalence, RowGroup};

/// Representative rows per hash bucket, in discovery order.
pub(crate) type Buckets = HashMap<u64, Vec<GroupId>>;

/// Result of slot discovery over a whole table.
#[derive(Debug)]
pub(crate) struct Slots {
	/// `representatives[g]` is the row that established group `g`.
	pub(crate) representatives: Vec<usize>,
	pub(crate) buckets: Option<Buckets>,
}

impl Slots {
	pub(crate) fn group_count(&self) -> usize {
		self.representatives.len()
	}
}

/// Assigns each row of `keys` to an equivalence class and writes the result into `out`.
///
/// Groups are numbered in the order their first row appears. Returns the number of groups.
/// `out` must hold exactly one entry per row.
#[instrument(name = "index::assign_groups", level = "trace", skip_all, fields(rows = keys.row_count()))]
pub fn assign_groups<O: RowEquivalence>(
	keys: &KeyColumns<'_>,
	oracle: &O,
	config: &IndexConfig,
	out: &mut [RowGroup],
) -> crate::Result<usize> {
	if keys.is_empty() {
		return Err(IndexError::NoKeyColumns.into());
	}
	if out.len() != keys.row_count() {
		return Err(IndexError::OutputLengthMismatch {
			expected: keys.row_count(),
			actual: out.len(),
		}
		.into());
	}

	Ok(discover(keys, oracle, config, out).group_count())
}

pub(crate) fn discover<O: RowEquivalence>(
	keys: &KeyColumns<'_>,
	oracle: &O,
	config: &IndexConfig,
	out: &mut [RowGroup],
) -> Slots {
	debug_assert_eq!(out.len(), keys.row_count());

	let hashable = keys.row_count() > 0 && oracle.hash_row(keys, 0).is_some();
	if hashable && config.hashes(keys.row_count()) {
		trace!("hashed slot discovery");
		discover_hashed(keys, oracle, config.skip_undefined, out)
	} else {
		trace!("linear slot discovery");
		discover_linear(keys, oracle, config.skip_undefined, out)
	}
}

fn discover_linear<O: RowEquivalence>(
	keys: &KeyColumns<'_>,
	oracle: &O,
	skip_undefined: bool,
	out: &mut [RowGroup],
) -> Slots {
	let mut representatives: Vec<usize> = Vec::new();

	for row in 0..keys.row_count() {
		if skip_undefined && keys.has_undefined(row) {
			out[row] = RowGroup::Excluded;
			continue;
		}

		let found = representatives.iter().position(|&rep| oracle.equal(keys, rep, keys, row));

		let group = match found {
			Some(group) => GroupId(group),
			None => {
				representatives.push(row);
				GroupId(representatives.len() - 1)
			}
		};
		out[row] = RowGroup::Group(group);
	}

	Slots {
		representatives,
		buckets: None,
	}
}

fn discover_hashed<O: RowEquivalence>(
	keys: &KeyColumns<'_>,
	oracle: &O,
	skip_undefined: bool,
	out: &mut [RowGroup],
) -> Slots {
	let mut representatives: Vec<usize> = Vec::new();
	let mut buckets: Buckets = HashMap::new();

	for row in 0..keys.row_count() {
		if skip_undefined && keys.has_undefined(row) {
			out[row] = RowGroup::Excluded;
			continue;
		}

		// equal rows hash equally, so a row can only match a group in its own bucket
		let hash = oracle.hash_row(keys, row).unwrap_or_default();
		let candidates = buckets.entry(hash).or_default();

		let found = candidates.iter().copied().find(|g| oracle.equal(keys, representatives[g.0], keys, row));

		let group = match found {
			Some(group) => group,
			None => {
				let group = GroupId(representatives.len());
				representatives.push(row);
				candidates.push(group);
				group
			}
		};
		out[row] = RowGroup::Group(group);
	}

	Slots {
		representatives,
		buckets: Some(buckets),
	}
}
