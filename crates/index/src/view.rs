// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use rowdex_column::Columns;
use rowdex_type::Value;

use crate::{IndexConfig, RowGroupIndex, ValueEquivalence};

/// Key values of one group, taken from its representative row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupByKey(pub Vec<Value>);

/// Groups of a table with their key values and member rows, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByView(pub Vec<(GroupByKey, Vec<usize>)>);

impl Deref for GroupByView {
	type Target = [(GroupByKey, Vec<usize>)];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl GroupByView {
	pub fn new<O>(index: &RowGroupIndex<'_, O>) -> Self {
		let groups = index
			.groups()
			.map(|(group, rows)| {
				let key = index.keys().values(index.representative(group));
				(GroupByKey(key), rows.to_vec())
			})
			.collect();

		Self(groups)
	}

	pub fn get(&self, key: &[Value]) -> Option<&[usize]> {
		self.0.iter().find(|(k, _)| k.0 == key).map(|(_, rows)| rows.as_slice())
	}
}

pub trait GroupBy {
	fn group_by_view(&self, keys: &[&str]) -> crate::Result<GroupByView>;
}

impl GroupBy for Columns {
	fn group_by_view(&self, keys: &[&str]) -> crate::Result<GroupByView> {
		let keys = self.key_columns(keys)?;
		let index = RowGroupIndex::build_with(keys, ValueEquivalence::default(), IndexConfig::default())?;
		Ok(GroupByView::new(&index))
	}
}

#[cfg(test)]
mod tests {
	use rowdex_column::Column;

	use super::*;

	#[test]
	fn test_group_by_view() {
		let table = Columns::new(vec![
			Column::utf8("dept", ["eng", "ops", "eng", "ops", "hr"]),
			Column::int4("salary", [10, 20, 30, 40, 50]),
		])
		.unwrap();

		let view = table.group_by_view(&["dept"]).unwrap();

		assert_eq!(view.len(), 3);
		assert_eq!(view[0].0, GroupByKey(vec![Value::utf8("eng")]));
		assert_eq!(view.get(&[Value::utf8("ops")]), Some(&[1, 3][..]));
		assert_eq!(view.get(&[Value::utf8("hr")]), Some(&[4][..]));
		assert_eq!(view.get(&[Value::utf8("qa")]), None);
	}

	#[test]
	fn test_group_by_view_keeps_undefined_group() {
		let table = Columns::new(vec![Column::int4_with_validity("a", [1, 0, 0], [true, false, false])]).unwrap();

		let view = table.group_by_view(&["a"]).unwrap();

		assert_eq!(view.len(), 2);
		assert_eq!(view.get(&[Value::Undefined]), Some(&[1, 2][..]));
	}

	#[test]
	fn test_group_by_view_unknown_column() {
		let table = Columns::new(vec![Column::int4("a", [1])]).unwrap();
		let err = table.group_by_view(&["nope"]).unwrap_err();
		assert_eq!(err.code(), "COLUMN_001");
	}
}
