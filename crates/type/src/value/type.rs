// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Float8,
	Int2,
	Int4,
	Int8,
	Utf8,
}

impl Type {
	/// Stable one-byte tag, used when values are encoded for hashing.
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Undefined => 0x00,
			Type::Boolean => 0x01,
			Type::Float8 => 0x02,
			Type::Int2 => 0x03,
			Type::Int4 => 0x04,
			Type::Int8 => 0x05,
			Type::Utf8 => 0x06,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Boolean => f.write_str("BOOL"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Utf8 => f.write_str("UTF8"),
		}
	}
}
