// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_type::{OrderedF64, Type, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	// value, is_valid
	Bool(Vec<bool>, Vec<bool>),
	Float8(Vec<f64>, Vec<bool>),
	Int2(Vec<i16>, Vec<bool>),
	Int4(Vec<i32>, Vec<bool>),
	Int8(Vec<i64>, Vec<bool>),
	Utf8(Vec<String>, Vec<bool>),

	// special case: all undefined
	Undefined(usize),
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		let values: Vec<bool> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Bool(values, valid)
	}

	pub fn bool_with_validity(
		values: impl IntoIterator<Item = bool>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Bool(values.into_iter().collect(), validity.into_iter().collect())
	}

	/// NaN has no ordered representation and is stored as undefined.
	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		let values: Vec<f64> = values.into_iter().collect();
		let valid = values.iter().map(|v| !v.is_nan()).collect();
		ColumnData::Float8(values, valid)
	}

	pub fn float8_with_validity(
		values: impl IntoIterator<Item = f64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		let values: Vec<f64> = values.into_iter().collect();
		let valid = values.iter().zip(validity).map(|(v, valid)| valid && !v.is_nan()).collect();
		ColumnData::Float8(values, valid)
	}

	pub fn int2(values: impl IntoIterator<Item = i16>) -> Self {
		let values: Vec<i16> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Int2(values, valid)
	}

	pub fn int2_with_validity(
		values: impl IntoIterator<Item = i16>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Int2(values.into_iter().collect(), validity.into_iter().collect())
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		let values: Vec<i32> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Int4(values, valid)
	}

	pub fn int4_with_validity(
		values: impl IntoIterator<Item = i32>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Int4(values.into_iter().collect(), validity.into_iter().collect())
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		let values: Vec<i64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Int8(values, valid)
	}

	pub fn int8_with_validity(
		values: impl IntoIterator<Item = i64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Int8(values.into_iter().collect(), validity.into_iter().collect())
	}

	pub fn utf8(values: impl IntoIterator<Item = String>) -> Self {
		let values: Vec<String> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		ColumnData::Utf8(values, valid)
	}

	pub fn utf8_with_validity(
		values: impl IntoIterator<Item = String>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Utf8(values.into_iter().collect(), validity.into_iter().collect())
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(len)
	}

	/// Builds a column from a sequence of values whose first defined entry decides the type.
	pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
		let values: Vec<Value> = values.into_iter().collect();
		let ty = values.iter().map(Value::get_type).find(|t| *t != Type::Undefined).unwrap_or(Type::Undefined);

		let mut result = match ty {
			Type::Undefined => return ColumnData::Undefined(values.len()),
			Type::Boolean => ColumnData::Bool(Vec::new(), Vec::new()),
			Type::Float8 => ColumnData::Float8(Vec::new(), Vec::new()),
			Type::Int2 => ColumnData::Int2(Vec::new(), Vec::new()),
			Type::Int4 => ColumnData::Int4(Vec::new(), Vec::new()),
			Type::Int8 => ColumnData::Int8(Vec::new(), Vec::new()),
			Type::Utf8 => ColumnData::Utf8(Vec::new(), Vec::new()),
		};

		for value in values {
			result.push(value);
		}
		result
	}
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(..) => Type::Boolean,
			ColumnData::Float8(..) => Type::Float8,
			ColumnData::Int2(..) => Type::Int2,
			ColumnData::Int4(..) => Type::Int4,
			ColumnData::Int8(..) => Type::Int8,
			ColumnData::Utf8(..) => Type::Utf8,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(v, b) => {
				if b[index] {
					Value::Boolean(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Float8(v, b) => {
				if b[index] {
					OrderedF64::try_from(v[index]).map(Value::Float8).unwrap_or(Value::Undefined)
				} else {
					Value::Undefined
				}
			}
			ColumnData::Int2(v, b) => {
				if b[index] {
					Value::Int2(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Int4(v, b) => {
				if b[index] {
					Value::Int4(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Int8(v, b) => {
				if b[index] {
					Value::Int8(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Utf8(v, b) => {
				if b[index] {
					Value::Utf8(v[index].clone())
				} else {
					Value::Undefined
				}
			}
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	/// Appends a value; a value of a different type than the column is stored as undefined.
	pub fn push(&mut self, value: Value) {
		match (self, value) {
			(ColumnData::Bool(v, b), Value::Boolean(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Float8(v, b), Value::Float8(f)) => {
				v.push(f.value());
				b.push(true);
			}
			(ColumnData::Int2(v, b), Value::Int2(i)) => {
				v.push(i);
				b.push(true);
			}
			(ColumnData::Int4(v, b), Value::Int4(i)) => {
				v.push(i);
				b.push(true);
			}
			(ColumnData::Int8(v, b), Value::Int8(i)) => {
				v.push(i);
				b.push(true);
			}
			(ColumnData::Utf8(v, b), Value::Utf8(s)) => {
				v.push(s);
				b.push(true);
			}
			(ColumnData::Bool(v, b), _) => {
				v.push(false);
				b.push(false);
			}
			(ColumnData::Float8(v, b), _) => {
				v.push(0.0);
				b.push(false);
			}
			(ColumnData::Int2(v, b), _) => {
				v.push(0);
				b.push(false);
			}
			(ColumnData::Int4(v, b), _) => {
				v.push(0);
				b.push(false);
			}
			(ColumnData::Int8(v, b), _) => {
				v.push(0);
				b.push(false);
			}
			(ColumnData::Utf8(v, b), _) => {
				v.push(String::new());
				b.push(false);
			}
			(ColumnData::Undefined(n), _) => *n += 1,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(_, b)
			| ColumnData::Float8(_, b)
			| ColumnData::Int2(_, b)
			| ColumnData::Int4(_, b)
			| ColumnData::Int8(_, b)
			| ColumnData::Utf8(_, b) => b.len(),
			ColumnData::Undefined(n) => *n,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of stored values, which for a well-formed column equals [`len`](Self::len).
	pub fn value_count(&self) -> usize {
		match self {
			ColumnData::Bool(v, _) => v.len(),
			ColumnData::Float8(v, _) => v.len(),
			ColumnData::Int2(v, _) => v.len(),
			ColumnData::Int4(v, _) => v.len(),
			ColumnData::Int8(v, _) => v.len(),
			ColumnData::Utf8(v, _) => v.len(),
			ColumnData::Undefined(n) => *n,
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		!self.is_undefined(index)
	}

	pub fn is_undefined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(_, b)
			| ColumnData::Float8(_, b)
			| ColumnData::Int2(_, b)
			| ColumnData::Int4(_, b)
			| ColumnData::Int8(_, b)
			| ColumnData::Utf8(_, b) => !b[index],
			ColumnData::Undefined(_) => true,
		}
	}
}
