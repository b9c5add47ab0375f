// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::ColumnData;

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn bool(name: &str, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, ColumnData::bool(values))
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, ColumnData::float8(values))
	}

	pub fn int2(name: &str, values: impl IntoIterator<Item = i16>) -> Self {
		Self::new(name, ColumnData::int2(values))
	}

	pub fn int4(name: &str, values: impl IntoIterator<Item = i32>) -> Self {
		Self::new(name, ColumnData::int4(values))
	}

	pub fn int4_with_validity(
		name: &str,
		values: impl IntoIterator<Item = i32>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::int4_with_validity(values, validity))
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn utf8<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
		Self::new(name, ColumnData::utf8(values.into_iter().map(|s| s.to_string())))
	}

	pub fn utf8_with_validity<'a>(
		name: &str,
		values: impl IntoIterator<Item = &'a str>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::utf8_with_validity(values.into_iter().map(|s| s.to_string()), validity))
	}

	pub fn undefined(name: &str, len: usize) -> Self {
		Self::new(name, ColumnData::undefined(len))
	}
}
