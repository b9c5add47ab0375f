// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, ptr};

use rowdex_type::Value;

use crate::{ColumnData, ColumnError, Columns};

/// An aligned tuple of key columns borrowed from one table.
///
/// Two tuples are compared position by position: the first key column of one
/// tuple against the first key column of the other, and so on.
#[derive(Clone)]
pub struct KeyColumns<'a> {
	table: &'a Columns,
	positions: Vec<usize>,
}

impl<'a> KeyColumns<'a> {
	pub fn new(table: &'a Columns, positions: Vec<usize>) -> crate::Result<Self> {
		if let Some(&position) = positions.iter().find(|&&p| p >= table.column_count()) {
			return Err(ColumnError::ColumnOutOfBounds {
				position,
				column_count: table.column_count(),
			}
			.into());
		}

		Ok(Self {
			table,
			positions,
		})
	}

	/// Key tuple spanning every column of the table, in table order.
	pub fn all(table: &'a Columns) -> Self {
		Self {
			table,
			positions: (0..table.column_count()).collect(),
		}
	}

	pub fn table(&self) -> &'a Columns {
		self.table
	}

	pub fn positions(&self) -> &[usize] {
		&self.positions
	}

	/// Number of key columns.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn row_count(&self) -> usize {
		self.table.row_count()
	}

	pub fn names(&self) -> Vec<&'a str> {
		self.positions.iter().map(|&p| self.table[p].name.as_str()).collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &'a ColumnData> + '_ {
		self.positions.iter().map(|&p| &self.table[p].data)
	}

	pub fn values(&self, row: usize) -> Vec<Value> {
		self.iter().map(|c| c.get_value(row)).collect()
	}

	/// Whether any key column is undefined at `row`.
	pub fn has_undefined(&self, row: usize) -> bool {
		self.iter().any(|c| c.is_undefined(row))
	}

	/// Identity, not content: both tuples select the same columns of the same table instance.
	pub fn is_same(&self, other: &KeyColumns<'_>) -> bool {
		ptr::eq(self.table, other.table) && self.positions == other.positions
	}

	pub fn row(&self, row: usize) -> RowRef<'_> {
		RowRef {
			keys: self,
			row,
		}
	}
}

impl fmt::Debug for KeyColumns<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeyColumns")
			.field("table", &ptr::from_ref(self.table))
			.field("columns", &self.names())
			.finish()
	}
}

/// A single row of a key tuple, used as a lookup probe.
#[derive(Clone, Copy)]
pub struct RowRef<'a> {
	keys: &'a KeyColumns<'a>,
	row: usize,
}

impl<'a> RowRef<'a> {
	pub fn keys(&self) -> &'a KeyColumns<'a> {
		self.keys
	}

	pub fn row(&self) -> usize {
		self.row
	}

	pub fn values(&self) -> Vec<Value> {
		self.keys.values(self.row)
	}
}

impl fmt::Debug for RowRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowRef").field("row", &self.row).field("values", &self.values()).finish()
	}
}
