// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_type::{Diagnostic, Error, IntoDiagnostic, error};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
	#[error("Column '{name}' not found")]
	ColumnNotFound {
		name: String,
	},

	#[error("Column position {position} is out of bounds for a table with {column_count} columns")]
	ColumnOutOfBounds {
		position: usize,
		column_count: usize,
	},

	#[error("Column '{name}' has {actual} rows, expected {expected}")]
	LengthMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("Column '{name}' has {values} values but a validity mask of {validity} entries")]
	ValidityMismatch {
		name: String,
		values: usize,
		validity: usize,
	},
}

impl IntoDiagnostic for ColumnError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ColumnError::ColumnNotFound {
				..
			} => Diagnostic {
				code: "COLUMN_001".to_string(),
				message,
				label: Some("this column does not exist in the table".to_string()),
				help: Some("check for typos or ensure the column is part of the table".to_string()),
				notes: vec![],
			},
			ColumnError::ColumnOutOfBounds {
				..
			} => Diagnostic {
				code: "COLUMN_002".to_string(),
				message,
				label: None,
				help: Some("column positions are 0-based".to_string()),
				notes: vec![],
			},
			ColumnError::LengthMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_003".to_string(),
				message,
				label: None,
				help: Some("every column of a table must hold the same number of rows".to_string()),
				notes: vec![],
			},
			ColumnError::ValidityMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_004".to_string(),
				message,
				label: None,
				help: Some("pass exactly one validity flag per value".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<ColumnError> for Error {
	fn from(err: ColumnError) -> Self {
		error!(err)
	}
}
