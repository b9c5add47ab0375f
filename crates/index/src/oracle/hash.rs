// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_column::ColumnData;
use rowdex_type::Type;
use xxhash_rust::xxh3::xxh3_64;

use super::value::integer;

// Every integer width shares one tag so equal integers hash equally.
const INTEGER_TAG: u8 = 0x10;

/// Encodes the key cells of one row into a tagged byte string and hashes it with XXH3.
pub(super) struct RowHasher {
	buf: Vec<u8>,
}

impl RowHasher {
	pub(super) fn new() -> Self {
		Self {
			buf: Vec::with_capacity(64),
		}
	}

	pub(super) fn write_cell(&mut self, data: &ColumnData, row: usize) {
		if data.is_undefined(row) {
			self.buf.push(Type::Undefined.to_u8());
			return;
		}

		match data {
			ColumnData::Bool(v, _) => {
				self.buf.push(Type::Boolean.to_u8());
				self.buf.push(v[row] as u8);
			}
			ColumnData::Float8(v, _) => {
				let value = if v[row] == 0.0 {
					0.0f64
				} else {
					v[row]
				};
				self.buf.push(Type::Float8.to_u8());
				self.buf.extend_from_slice(&value.to_bits().to_le_bytes());
			}
			ColumnData::Utf8(v, _) => {
				let bytes = v[row].as_bytes();
				self.buf.push(Type::Utf8.to_u8());
				self.buf.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
				self.buf.extend_from_slice(bytes);
			}
			ColumnData::Int2(..) | ColumnData::Int4(..) | ColumnData::Int8(..) => {
				let value = integer(data, row).unwrap_or_default();
				self.buf.push(INTEGER_TAG);
				self.buf.extend_from_slice(&value.to_le_bytes());
			}
			ColumnData::Undefined(_) => self.buf.push(Type::Undefined.to_u8()),
		}
	}

	pub(super) fn finish(&self) -> u64 {
		xxh3_64(&self.buf)
	}
}
