// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_column::{KeyColumns, RowRef};
use tracing::{instrument, trace, warn};

use crate::{IndexError, LookupScan, RowEquivalence, RowGroup, RowGroupIndex};

impl<'a, O: RowEquivalence> RowGroupIndex<'a, O> {
	/// Finds a source row equivalent to row `row` of `query`.
	///
	/// When `query` selects the same key columns of the indexed table instance,
	/// `row` is returned unchanged without comparing anything. A `row` past the
	/// end of `query` matches nothing.
	#[instrument(name = "index::find_row", level = "trace", skip(self, query))]
	pub fn find_row(&self, query: &KeyColumns<'_>, row: usize) -> Option<usize> {
		if row >= query.row_count() {
			warn!(row, rows = query.row_count(), "lookup row is out of range");
			return None;
		}

		if self.keys.is_same(query) {
			trace!("same table");
			return Some(row);
		}

		if query.len() != self.keys.len() {
			warn!(expected = self.keys.len(), actual = query.len(), "lookup key arity does not match index");
			return None;
		}

		if self.config.skip_undefined && query.has_undefined(row) {
			trace!("undefined key value");
			return None;
		}

		match self.config.lookup {
			LookupScan::Representatives => self.scan_representatives(query, row),
			LookupScan::AllRows => self.scan_rows(query, row),
		}
	}

	/// All source rows equivalent to row `row` of `query`; empty when there are none.
	pub fn find_rows(&self, query: &KeyColumns<'_>, row: usize) -> &[usize] {
		match self.find_row(query, row).map(|found| self.groups[found]) {
			Some(RowGroup::Group(group)) => self.members(group),
			Some(RowGroup::Excluded) | None => &[],
		}
	}

	/// Like [`find_rows`](Self::find_rows), but absence is an error.
	pub fn get(&self, probe: RowRef<'_>) -> crate::Result<&[usize]> {
		let query = probe.keys();
		if query.len() != self.keys.len() {
			return Err(IndexError::KeyArityMismatch {
				expected: self.keys.len(),
				actual: query.len(),
			}
			.into());
		}

		let rows = self.find_rows(query, probe.row());
		if rows.is_empty() {
			let key = if probe.row() < query.row_count() {
				probe.values().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
			} else {
				String::new()
			};
			return Err(IndexError::KeyNotFound {
				row: probe.row(),
				key,
			}
			.into());
		}
		Ok(rows)
	}

	fn scan_representatives(&self, query: &KeyColumns<'_>, row: usize) -> Option<usize> {
		if let Some(buckets) = &self.buckets {
			let hash = self.oracle.hash_row(query, row).unwrap_or_default();
			return buckets
				.get(&hash)?
				.iter()
				.map(|group| self.representatives[group.index()])
				.find(|&rep| self.oracle.equal(&self.keys, rep, query, row));
		}

		self.representatives.iter().copied().find(|&rep| self.oracle.equal(&self.keys, rep, query, row))
	}

	fn scan_rows(&self, query: &KeyColumns<'_>, row: usize) -> Option<usize> {
		(0..self.row_count())
			.filter(|&r| !self.groups[r].is_excluded())
			.find(|&r| self.oracle.equal(&self.keys, r, query, row))
	}
}
