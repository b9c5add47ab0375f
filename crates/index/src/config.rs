// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// How slot discovery finds the group of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discovery {
	/// Compare against every known representative, in discovery order.
	Linear,
	/// Compare only against representatives sharing the row's content hash.
	/// Falls back to `Linear` when the oracle cannot hash.
	Hashed,
	/// `Hashed` once the table reaches `hash_threshold` rows, `Linear` below.
	#[default]
	Auto,
}

/// Which source rows a cross-table lookup compares the probe against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupScan {
	/// One representative per group.
	#[default]
	Representatives,
	/// Every non-excluded source row, in row order.
	AllRows,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
	/// Rows with an undefined key value are kept out of every group.
	pub skip_undefined: bool,
	pub discovery: Discovery,
	pub hash_threshold: usize,
	pub lookup: LookupScan,
}

impl IndexConfig {
	pub const DEFAULT_HASH_THRESHOLD: usize = 1024;

	pub fn builder() -> IndexConfigBuilder {
		IndexConfigBuilder::new()
	}

	pub(crate) fn hashes(&self, row_count: usize) -> bool {
		match self.discovery {
			Discovery::Linear => false,
			Discovery::Hashed => true,
			Discovery::Auto => row_count >= self.hash_threshold,
		}
	}
}

impl Default for IndexConfig {
	fn default() -> Self {
		Self {
			skip_undefined: false,
			discovery: Discovery::Auto,
			hash_threshold: Self::DEFAULT_HASH_THRESHOLD,
			lookup: LookupScan::Representatives,
		}
	}
}

/// Builder for [`IndexConfig`]
#[derive(Debug, Default)]
pub struct IndexConfigBuilder {
	config: IndexConfig,
}

impl IndexConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn skip_undefined(mut self, skip: bool) -> Self {
		self.config.skip_undefined = skip;
		self
	}

	pub fn discovery(mut self, discovery: Discovery) -> Self {
		self.config.discovery = discovery;
		self
	}

	/// Row count from which `Discovery::Auto` switches to hashing
	pub fn hash_threshold(mut self, rows: usize) -> Self {
		self.config.hash_threshold = rows;
		self
	}

	pub fn lookup(mut self, lookup: LookupScan) -> Self {
		self.config.lookup = lookup;
		self
	}

	pub fn build(self) -> IndexConfig {
		self.config
	}
}
