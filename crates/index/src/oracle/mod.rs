// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_column::KeyColumns;

mod hash;
mod value;

pub use value::{UndefinedSemantics, ValueEquivalence};

/// Row-tuple equality used to partition rows into groups.
///
/// `equal` compares row `left_row` of `left` with row `right_row` of `right`,
/// column by column over the aligned key tuples. It must be reflexive,
/// symmetric and transitive on the rows it is asked about, otherwise group
/// membership depends on discovery order.
///
/// `hash_row` is optional. When it returns `Some`, rows that are `equal` must
/// hash to the same value; the index then only compares rows within the same
/// hash bucket.
pub trait RowEquivalence {
	fn equal(&self, left: &KeyColumns<'_>, left_row: usize, right: &KeyColumns<'_>, right_row: usize) -> bool;

	fn hash_row(&self, columns: &KeyColumns<'_>, row: usize) -> Option<u64> {
		let _ = (columns, row);
		None
	}
}

/// Adapts a closure into a [`RowEquivalence`] without hashing support.
pub struct EquivalenceFn<F>(pub F);

impl<F> EquivalenceFn<F>
where
	F: Fn(&KeyColumns<'_>, usize, &KeyColumns<'_>, usize) -> bool,
{
	pub fn new(f: F) -> Self {
		Self(f)
	}
}

impl<F> RowEquivalence for EquivalenceFn<F>
where
	F: Fn(&KeyColumns<'_>, usize, &KeyColumns<'_>, usize) -> bool,
{
	fn equal(&self, left: &KeyColumns<'_>, left_row: usize, right: &KeyColumns<'_>, right_row: usize) -> bool {
		(self.0)(left, left_row, right, right_row)
	}
}
