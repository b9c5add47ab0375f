// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowdex_type::{Diagnostic, Error, IntoDiagnostic, error};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
	#[error("Row group index requires at least one key column")]
	NoKeyColumns,

	#[error("Output buffer holds {actual} entries, expected one per row ({expected})")]
	OutputLengthMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("Lookup key has {actual} columns, index is keyed on {expected}")]
	KeyArityMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("Key not found: row {row} ({key})")]
	KeyNotFound {
		row: usize,
		key: String,
	},
}

impl IntoDiagnostic for IndexError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			IndexError::NoKeyColumns => Diagnostic {
				code: "INDEX_001".to_string(),
				message,
				label: None,
				help: Some("select one or more grouping columns".to_string()),
				notes: vec![],
			},
			IndexError::OutputLengthMismatch {
				..
			} => Diagnostic {
				code: "INDEX_002".to_string(),
				message,
				label: None,
				help: Some("allocate the output buffer with the row count of the table".to_string()),
				notes: vec![],
			},
			IndexError::KeyArityMismatch {
				..
			} => Diagnostic {
				code: "INDEX_003".to_string(),
				message,
				label: Some("key columns are compared position by position".to_string()),
				help: Some("probe with as many key columns as the index was built on".to_string()),
				notes: vec![],
			},
			IndexError::KeyNotFound {
				..
			} => Diagnostic {
				code: "INDEX_004".to_string(),
				message,
				label: Some("no equivalent row in the indexed table".to_string()),
				help: None,
				notes: vec!["use find_rows for a lookup that tolerates absence".to_string()],
			},
		}
	}
}

impl From<IndexError> for Error {
	fn from(err: IndexError) -> Self {
		error!(err)
	}
}
