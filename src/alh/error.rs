// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: althash
// File: error.rs
// Author: althash maintainers

//! Error taxonomy shared by the backend, the dual-handle digest and the
//! name-based facade.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorKind {
	/// Not on the allow-list, or not compiled into the backend.
	UnsupportedAlgorithm,
	/// The backend could not open a digest context.
	Initialization,
	/// An instance hit an internal fault and is poisoned.
	InvalidState,
}

#[derive(Debug)]
pub struct HashError {
	kind: HashErrorKind,
	message: Cow<'static, str>,
}

impl HashError {
	pub fn new(
		kind: HashErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
		Self::new(HashErrorKind::UnsupportedAlgorithm, message)
	}

	pub fn initialization(
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(HashErrorKind::Initialization, message)
	}

	pub fn invalid_state(
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(HashErrorKind::InvalidState, message)
	}

	pub fn kind(&self) -> HashErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for HashError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for HashError {}
