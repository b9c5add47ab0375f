// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

mod diagnostic;

pub use diagnostic::Diagnostic;

/// Conversion of a crate-local error enum into the shared [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error::from($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}
