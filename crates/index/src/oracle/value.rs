// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_column::{ColumnData, KeyColumns};
use serde::{Deserialize, Serialize};

use super::{RowEquivalence, hash::RowHasher};

/// Whether two undefined key values match each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedSemantics {
	#[default]
	Equal,
	/// Undefined matches nothing, so every row holding one forms its own group.
	Distinct,
}

/// Typed value equality.
///
/// Integers of any width compare numerically with each other. Floats compare
/// numerically with floats only. Text compares byte-wise. Values of different
/// type families never match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEquivalence {
	pub undefined: UndefinedSemantics,
}

impl ValueEquivalence {
	pub fn new(undefined: UndefinedSemantics) -> Self {
		Self {
			undefined,
		}
	}

	fn cell_equal(&self, left: &ColumnData, l: usize, right: &ColumnData, r: usize) -> bool {
		let (left_defined, right_defined) = (left.is_defined(l), right.is_defined(r));
		if !left_defined || !right_defined {
			return !left_defined && !right_defined && self.undefined == UndefinedSemantics::Equal;
		}

		match (left, right) {
			(ColumnData::Bool(a, _), ColumnData::Bool(b, _)) => a[l] == b[r],
			(ColumnData::Float8(a, _), ColumnData::Float8(b, _)) => a[l] == b[r],
			(ColumnData::Utf8(a, _), ColumnData::Utf8(b, _)) => a[l] == b[r],
			_ => match (integer(left, l), integer(right, r)) {
				(Some(a), Some(b)) => a == b,
				_ => false,
			},
		}
	}
}

pub(super) fn integer(data: &ColumnData, row: usize) -> Option<i64> {
	match data {
		ColumnData::Int2(v, _) => Some(v[row] as i64),
		ColumnData::Int4(v, _) => Some(v[row] as i64),
		ColumnData::Int8(v, _) => Some(v[row]),
		_ => None,
	}
}

impl RowEquivalence for ValueEquivalence {
	fn equal(&self, left: &KeyColumns<'_>, left_row: usize, right: &KeyColumns<'_>, right_row: usize) -> bool {
		left.len() == right.len()
			&& left.iter().zip(right.iter()).all(|(l, r)| self.cell_equal(l, left_row, r, right_row))
	}

	fn hash_row(&self, columns: &KeyColumns<'_>, row: usize) -> Option<u64> {
		let mut hasher = RowHasher::new();
		for column in columns.iter() {
			hasher.write_cell(column, row);
		}
		Some(hasher.finish())
	}
}

#[cfg(test)]
mod tests {
	use rowdex_column::{Column, Columns};

	use super::*;

	fn table() -> Columns {
		Columns::new(vec![
			Column::int4_with_validity("a", [1, 2, 1, 0, 0], [true, true, true, false, false]),
			Column::utf8("b", ["x", "y", "x", "z", "z"]),
		])
		.unwrap()
	}

	#[test]
	fn test_equal_rows() {
		let table = table();
		let keys = KeyColumns::all(&table);
		let oracle = ValueEquivalence::default();

		assert!(oracle.equal(&keys, 0, &keys, 2));
		assert!(!oracle.equal(&keys, 0, &keys, 1));
		assert_eq!(oracle.hash_row(&keys, 0), oracle.hash_row(&keys, 2));
	}

	#[test]
	fn test_undefined_semantics() {
		let table = table();
		let keys = KeyColumns::all(&table);

		assert!(ValueEquivalence::new(UndefinedSemantics::Equal).equal(&keys, 3, &keys, 4));
		assert!(!ValueEquivalence::new(UndefinedSemantics::Distinct).equal(&keys, 3, &keys, 4));
		assert!(!ValueEquivalence::new(UndefinedSemantics::Distinct).equal(&keys, 3, &keys, 3));
	}

	#[test]
	fn test_integer_widths_match() {
		let left = Columns::new(vec![Column::int2("a", [7])]).unwrap();
		let right = Columns::new(vec![Column::int8("a", [7])]).unwrap();
		let (l, r) = (KeyColumns::all(&left), KeyColumns::all(&right));
		let oracle = ValueEquivalence::default();

		assert!(oracle.equal(&l, 0, &r, 0));
		assert_eq!(oracle.hash_row(&l, 0), oracle.hash_row(&r, 0));
	}

	#[test]
	fn test_float_does_not_match_integer() {
		let left = Columns::new(vec![Column::float8("a", [7.0])]).unwrap();
		let right = Columns::new(vec![Column::int8("a", [7])]).unwrap();
		let oracle = ValueEquivalence::default();

		assert!(!oracle.equal(&KeyColumns::all(&left), 0, &KeyColumns::all(&right), 0));
	}

	#[test]
	fn test_negative_zero_matches_zero() {
		let table = Columns::new(vec![Column::float8("a", [0.0, -0.0])]).unwrap();
		let keys = KeyColumns::all(&table);
		let oracle = ValueEquivalence::default();

		assert!(oracle.equal(&keys, 0, &keys, 1));
		assert_eq!(oracle.hash_row(&keys, 0), oracle.hash_row(&keys, 1));
	}

	#[test]
	fn test_arity_mismatch_never_matches() {
		let table = table();
		let all = KeyColumns::all(&table);
		let one = table.key_columns(&["a"]).unwrap();

		assert!(!ValueEquivalence::default().equal(&all, 0, &one, 0));
	}
}
