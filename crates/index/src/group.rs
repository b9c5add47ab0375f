// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of an equivalence class, 0-based in first-discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl GroupId {
	pub fn index(&self) -> usize {
		self.0
	}
}

impl Display for GroupId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<usize> for GroupId {
	fn from(value: usize) -> Self {
		GroupId(value)
	}
}

/// Group membership of a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowGroup {
	Group(GroupId),
	/// Row holds an undefined key value and undefined rows were skipped.
	#[default]
	Excluded,
}

impl RowGroup {
	pub fn group(&self) -> Option<GroupId> {
		match self {
			RowGroup::Group(id) => Some(*id),
			RowGroup::Excluded => None,
		}
	}

	pub fn is_excluded(&self) -> bool {
		matches!(self, RowGroup::Excluded)
	}
}

impl From<GroupId> for RowGroup {
	fn from(id: GroupId) -> Self {
		RowGroup::Group(id)
	}
}
