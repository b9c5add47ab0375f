// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use rowdex_type::Value;

use crate::{Column, ColumnData, ColumnError, KeyColumns};

/// A table: named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		&self.columns[index]
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> crate::Result<Self> {
		if let Some(column) = columns.iter().find(|c| c.data.value_count() != c.data.len()) {
			return Err(ColumnError::ValidityMismatch {
				name: column.name.clone(),
				values: column.data.value_count(),
				validity: column.data.len(),
			}
			.into());
		}

		let n = columns.first().map_or(0, |c| c.data.len());
		if let Some(column) = columns.iter().find(|c| c.data.len() != n) {
			return Err(ColumnError::LengthMismatch {
				name: column.name.clone(),
				expected: n,
				actual: column.data.len(),
			}
			.into());
		}

		Ok(Self {
			columns,
		})
	}

	pub fn single_row<'b>(row: impl IntoIterator<Item = (&'b str, Value)>) -> Columns {
		let columns = row
			.into_iter()
			.map(|(name, value)| Column::new(name, ColumnData::from_values([value])))
			.collect();

		Self {
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data.len())
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn position(&self, name: &str) -> crate::Result<usize> {
		self.columns.iter().position(|c| c.name == name).ok_or_else(|| {
			ColumnError::ColumnNotFound {
				name: name.to_string(),
			}
			.into()
		})
	}

	/// Resolves the named columns into an aligned key tuple over this table.
	pub fn key_columns(&self, names: &[&str]) -> crate::Result<KeyColumns<'_>> {
		let positions = names.iter().map(|name| self.position(name)).collect::<crate::Result<Vec<_>>>()?;
		KeyColumns::new(self, positions)
	}

	/// Resolves the columns at the given positions into an aligned key tuple over this table.
	pub fn key_columns_at(&self, positions: &[usize]) -> crate::Result<KeyColumns<'_>> {
		KeyColumns::new(self, positions.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_uneven_columns() {
		let err = Columns::new(vec![Column::int4("a", [1, 2]), Column::int4("b", [1])]).unwrap_err();
		assert_eq!(err.code(), "COLUMN_003");
	}

	#[test]
	fn test_new_rejects_validity_of_other_length() {
		let err = Columns::new(vec![Column::int4_with_validity("v", [1, 2], [true, true, true])]).unwrap_err();
		assert_eq!(err.code(), "COLUMN_004");
		assert_eq!(err.message, "Column 'v' has 2 values but a validity mask of 3 entries");

		let err = Columns::new(vec![
			Column::int4("a", [1, 2]),
			Column::new("b", ColumnData::Utf8(vec!["x".to_string(), "y".to_string()], vec![true])),
		])
		.unwrap_err();
		assert_eq!(err.code(), "COLUMN_004");
	}

	#[test]
	fn test_row_and_column_count() {
		let columns = Columns::new(vec![Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x", "y", "z"])]).unwrap();
		assert_eq!(columns.row_count(), 3);
		assert_eq!(columns.column_count(), 2);
	}

	#[test]
	fn test_position_not_found() {
		let columns = Columns::new(vec![Column::int4("a", [1])]).unwrap();
		assert_eq!(columns.position("a").unwrap(), 0);
		let err = columns.position("missing").unwrap_err();
		assert_eq!(err.code(), "COLUMN_001");
		assert_eq!(err.message, "Column 'missing' not found");
	}

	#[test]
	fn test_single_row() {
		let columns = Columns::single_row([("id", Value::Int8(7)), ("name", Value::utf8("x"))]);
		assert_eq!(columns.row_count(), 1);
		assert_eq!(columns.column_count(), 2);
		assert_eq!(columns[1].data.get_value(0), Value::utf8("x"));
	}

	#[test]
	fn test_empty_table() {
		let columns = Columns::new(vec![]).unwrap();
		assert_eq!(columns.row_count(), 0);
		assert_eq!(columns.column_count(), 0);
	}
}
