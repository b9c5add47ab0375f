// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use column::Column;
pub use columns::Columns;
pub use data::ColumnData;
pub use error::ColumnError;
pub use key::{KeyColumns, RowRef};
pub use rowdex_type::{Error, Value};

mod column;
mod columns;
mod data;
mod error;
mod key;

pub type Result<T> = std::result::Result<T, Error>;
