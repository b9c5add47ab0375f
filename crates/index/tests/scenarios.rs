// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_index::{
	Column, Columns, Discovery, GroupId, IndexConfig, LookupScan, RowGroup, RowGroupIndex, Value, ValueEquivalence,
};

fn ids(index: &RowGroupIndex<'_>) -> Vec<Option<usize>> {
	index.row_groups().iter().map(|g| g.group().map(|id| id.index())).collect()
}

#[test]
fn test_single_column_groups() {
	let table = Columns::new(vec![Column::int4("v", [10, 20, 10, 30, 20])]).unwrap();
	let index = RowGroupIndex::build(&table, &["v"], false).unwrap();

	assert_eq!(index.group_count(), 3);
	assert_eq!(ids(&index), vec![Some(0), Some(1), Some(0), Some(2), Some(1)]);
	assert_eq!(index.members(GroupId(0)), &[0, 2]);
	assert_eq!(index.members(GroupId(1)), &[1, 4]);
	assert_eq!(index.members(GroupId(2)), &[3]);
	assert_eq!(index.representatives(), &[0, 1, 3]);
	assert!(index.excluded_rows().is_empty());
}

#[test]
fn test_skip_undefined_excludes_rows() {
	let table = Columns::new(vec![Column::int4_with_validity("v", [10, 0, 10, 20], [true, false, true, true])]).unwrap();
	let index = RowGroupIndex::build(&table, &["v"], true).unwrap();

	assert_eq!(index.group_count(), 2);
	assert_eq!(index.members(GroupId(0)), &[0, 2]);
	assert_eq!(index.members(GroupId(1)), &[3]);
	assert_eq!(index.group_id(1), RowGroup::Excluded);
	assert_eq!(index.excluded_rows(), &[1]);

	let mut permutation = index.permutation().to_vec();
	permutation.sort_unstable();
	assert_eq!(permutation, vec![0, 1, 2, 3]);

	for (group, _) in index.groups() {
		assert!(!index.members(group).contains(&1));
	}
}

#[test]
fn test_undefined_grouped_without_skipping() {
	let table = Columns::new(vec![Column::int4_with_validity("v", [10, 0, 10, 0], [true, false, true, false])]).unwrap();
	let index = RowGroupIndex::build(&table, &["v"], false).unwrap();

	assert_eq!(index.group_count(), 2);
	assert_eq!(index.members(GroupId(1)), &[1, 3]);
}

#[test]
fn test_cross_table_lookup() {
	let a = Columns::new(vec![Column::int4("v", [1, 2, 3])]).unwrap();
	let b = Columns::new(vec![Column::int4("v", [2, 5])]).unwrap();
	let index = RowGroupIndex::build(&a, &["v"], false).unwrap();
	let query = b.key_columns(&["v"]).unwrap();

	assert_eq!(index.find_rows(&query, 0), &[1]);
	assert!(index.find_rows(&query, 1).is_empty());
	assert_eq!(index.get(query.row(0)).unwrap(), &[1]);
	assert!(index.get(query.row(1)).is_err());
}

#[test]
fn test_cross_table_lookup_scans_all_rows() {
	let a = Columns::new(vec![Column::utf8("name", ["x", "y", "x", "y"])]).unwrap();
	let b = Columns::new(vec![Column::utf8("other", ["y"])]).unwrap();
	let keys = a.key_columns(&["name"]).unwrap();
	let config = IndexConfig::builder().lookup(LookupScan::AllRows).build();
	let index = RowGroupIndex::build_with(keys, ValueEquivalence::default(), config).unwrap();

	let query = b.key_columns(&["other"]).unwrap();
	assert_eq!(index.find_row(&query, 0), Some(1));
	assert_eq!(index.find_rows(&query, 0), &[1, 3]);
}

#[test]
fn test_identity_is_not_content() {
	let a = Columns::new(vec![Column::int4("v", [1, 1])]).unwrap();
	let copy = a.clone();
	let index = RowGroupIndex::build(&a, &["v"], false).unwrap();

	// same content, other instance: resolves through the scan to the representative
	let query = copy.key_columns(&["v"]).unwrap();
	assert_eq!(index.find_row(&query, 1), Some(0));

	let same = a.key_columns(&["v"]).unwrap();
	assert_eq!(index.find_row(&same, 1), Some(1));
}

#[test]
fn test_multi_column_keys() {
	let table = Columns::new(vec![
		Column::utf8("first", ["ada", "alan", "ada", "ada"]),
		Column::utf8("last", ["lovelace", "turing", "byron", "lovelace"]),
		Column::int8("ignored", [1, 2, 3, 4]),
	])
	.unwrap();

	let index = RowGroupIndex::build(&table, &["first", "last"], false).unwrap();

	assert_eq!(index.group_count(), 3);
	assert_eq!(index.find_rows(index.keys(), 0), &[0, 3]);
	assert_eq!(index.find_rows(index.keys(), 2), &[2]);
}

#[test]
fn test_lookup_by_single_row_of_values() {
	let table = Columns::new(vec![
		Column::int4("id", [1, 2, 2, 3]),
		Column::float8("score", [0.0, 1.5, 1.5, -0.0]),
		Column::bool("active", [true, false, false, true]),
	])
	.unwrap();

	for discovery in [Discovery::Linear, Discovery::Hashed] {
		let config = IndexConfig::builder().discovery(discovery).build();
		let keys = table.key_columns(&["id", "score", "active"]).unwrap();
		let index = RowGroupIndex::build_with(keys, ValueEquivalence::default(), config).unwrap();

		let lookup = Columns::single_row([
			("active", Value::bool(false)),
			("id", Value::int8(2)),
			("score", Value::float8(1.5)),
		]);
		let query = lookup.key_columns(&["id", "score", "active"]).unwrap();
		assert_eq!(index.get(query.row(0)).unwrap(), &[1, 2]);

		let lookup = Columns::single_row([
			("id", Value::int2(3i16)),
			("score", Value::float8(0.0)),
			("active", Value::bool(true)),
		]);
		let query = lookup.key_columns(&["id", "score", "active"]).unwrap();
		assert_eq!(index.find_rows(&query, 0), &[3]);

		let lookup = Columns::single_row([
			("id", Value::int4(1)),
			("score", Value::float8(f64::NAN)),
			("active", Value::bool(true)),
		]);
		let query = lookup.key_columns(&["id", "score", "active"]).unwrap();
		assert!(index.find_rows(&query, 0).is_empty());
	}
}

#[test]
fn test_all_undefined_key_column() {
	let table = Columns::new(vec![Column::undefined("missing", 3), Column::int4("v", [1, 2, 1])]).unwrap();

	let index = RowGroupIndex::build(&table, &["missing"], false).unwrap();
	assert_eq!(index.group_count(), 1);
	assert_eq!(index.members(GroupId(0)), &[0, 1, 2]);

	let index = RowGroupIndex::build(&table, &["missing", "v"], true).unwrap();
	assert_eq!(index.group_count(), 0);
	assert_eq!(index.excluded_rows(), &[0, 1, 2]);
	assert_eq!(index.groups().len(), 0);
}
