// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-equivalence index.
//!
//! Partitions the rows of a [`Columns`] table into groups of rows that are
//! equal on a set of key columns. Construction runs in two passes: slot
//! discovery assigns every row a group in first-discovery order, then a
//! counting sort lays the rows out contiguously per group. The resulting
//! [`RowGroupIndex`] is immutable and answers membership and cross-table
//! lookups without comparing rows again.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use config::{Discovery, IndexConfig, IndexConfigBuilder, LookupScan};
pub use discovery::assign_groups;
pub use error::IndexError;
pub use group::{GroupId, RowGroup};
pub use index::RowGroupIndex;
pub use oracle::{EquivalenceFn, RowEquivalence, UndefinedSemantics, ValueEquivalence};
pub use rowdex_column::{Column, ColumnData, Columns, KeyColumns, RowRef};
pub use rowdex_type::{Error, Value};
pub use view::{GroupBy, GroupByKey, GroupByView};

mod config;
mod discovery;
mod error;
mod group;
mod index;
mod lookup;
mod oracle;
mod sort;
mod view;

pub type Result<T> = std::result::Result<T, Error>;
